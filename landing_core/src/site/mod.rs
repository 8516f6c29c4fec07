//! Marketing-site catalog: brand copy, navigation, and per-project pages.
//!
//! Both brands run on the same template; they differ only in the data loaded
//! into [`SiteConfig`].

mod presets;

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Section slug that hosts the standalone demo form.
pub const REQUEST_DEMO_SECTION: &str = "request-demo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub logo: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    /// Id of the on-page section the item scrolls to.
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCopy {
    pub heading: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub name: String,
    pub client: String,
    #[serde(default)]
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: Brand,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub contact: ContactCopy,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

/// Everything the per-project layout needs to render one page.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPage<'a> {
    pub project: &'a Project,
    pub section: Option<String>,
    pub side_nav: Vec<NavLink>,
    pub show_demo_form: bool,
}

impl SiteConfig {
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "gyansopan" => Some(Self::gyansopan()),
            "chainworks" => Some(Self::chainworks()),
            _ => None,
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let site: SiteConfig = toml::from_str(raw)?;
        site.validate()?;
        Ok(site)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Slugs must be unique and usable in a URL path segment, and every nav
    /// anchor must name a section on the page.
    pub fn validate(&self) -> Result<()> {
        for item in &self.nav {
            if !self.sections.iter().any(|s| s.id == item.anchor) {
                return Err(AppError::Config(format!(
                    "Nav item '{}' points at unknown section '{}'",
                    item.label, item.anchor
                )));
            }
        }


        for (i, project) in self.projects.iter().enumerate() {
            if project.slug.is_empty() || project.slug.contains('/') {
                return Err(AppError::Config(format!(
                    "Invalid project slug '{}'",
                    project.slug
                )));
            }
            if self.projects[..i].iter().any(|p| p.slug == project.slug) {
                return Err(AppError::Config(format!(
                    "Duplicate project slug '{}'",
                    project.slug
                )));
            }
        }
        Ok(())
    }

    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }
}

impl Project {
    pub fn section_href(&self, section: &str) -> String {
        format!("/projects/{}/{}", self.slug, section)
    }

    pub fn has_section(&self, section: &str) -> bool {
        section == REQUEST_DEMO_SECTION || self.sections.iter().any(|s| s == section)
    }

    pub fn side_nav(&self, current: Option<&str>) -> Vec<NavLink> {
        self.sections
            .iter()
            .map(|section| NavLink {
                href: self.section_href(section),
                label: capitalize(section),
                active: current == Some(section.as_str()),
            })
            .collect()
    }

    /// Resolves a page of this project. `None` when the section is unknown.
    pub fn page(&self, section: Option<&str>) -> Option<ProjectPage<'_>> {
        if let Some(section) = section {
            if !self.has_section(section) {
                return None;
            }
        }

        Some(ProjectPage {
            project: self,
            section: section.map(str::to_string),
            side_nav: self.side_nav(section),
            show_demo_form: section != Some(REQUEST_DEMO_SECTION),
        })
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
