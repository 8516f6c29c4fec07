use super::{Brand, ContactCopy, NavItem, Project, Section, SiteConfig};

fn nav(items: &[(&str, &str)]) -> Vec<NavItem> {
    items
        .iter()
        .map(|(label, anchor)| NavItem {
            label: label.to_string(),
            anchor: anchor.to_string(),
        })
        .collect()
}

fn sections(items: &[(&str, &str)]) -> Vec<Section> {
    items
        .iter()
        .map(|(id, title)| Section {
            id: id.to_string(),
            title: title.to_string(),
        })
        .collect()
}

fn project(slug: &str, name: &str, client: &str, sections: &[&str]) -> Project {
    Project {
        slug: slug.to_string(),
        name: name.to_string(),
        client: client.to_string(),
        sections: sections.iter().map(|s| s.to_string()).collect(),
    }
}

impl SiteConfig {
    pub fn gyansopan() -> Self {
        Self {
            brand: Brand {
                name: "GyanSopan".to_string(),
                logo: "GYANSOPAN".to_string(),
                tagline: "Step up your preparation for JEE, Olympiads and scholarships".to_string(),
            },
            nav: nav(&[
                ("Use?", "about-us"),
                ("About Us", "tools-approach"),
                ("Features", "why-choose-us"),
                ("Pricing", "pricing"),
                ("Jee", "jee"),
                ("Olympiad", "olympiad"),
                ("Scholarship", "scholarship"),
                ("Contact", "team"),
            ]),
            sections: sections(&[
                ("hero", "Welcome"),
                ("about-us", "How To Use"),
                ("tools-approach", "About Us"),
                ("why-choose-us", "Why Choose Us"),
                ("projects", "Programs"),
                ("pricing", "Pricing"),
                ("jee", "JEE"),
                ("olympiad", "Olympiad"),
                ("scholarship", "Scholarship"),
                ("team", "Contact"),
            ]),
            contact: ContactCopy {
                heading: "Contact Us".to_string(),
                blurb: "Questions about a course or a batch? Drop us a message and a mentor will get back to you.".to_string(),
            },
            projects: vec![
                project(
                    "jee-foundation",
                    "JEE Foundation Program",
                    "GyanSopan Learning",
                    &["overview", "curriculum", "mentors", "results"],
                ),
                project(
                    "olympiad-prep",
                    "Olympiad Prep Platform",
                    "GyanSopan Learning",
                    &["overview", "curriculum", "results"],
                ),
            ],
        }
    }

    pub fn chainworks() -> Self {
        Self {
            brand: Brand {
                name: "Chainworks".to_string(),
                logo: "CHAINWORKS".to_string(),
                tagline: "Blockchain consulting from whiteboard to mainnet".to_string(),
            },
            nav: nav(&[
                ("About", "about-us"),
                ("Approach", "tools-approach"),
                ("Features", "why-choose-us"),
                ("Projects", "projects"),
                ("Pricing", "pricing"),
                ("Careers", "careers"),
                ("Contact", "contact-us"),
            ]),
            sections: sections(&[
                ("hero", "Welcome"),
                ("about-us", "About Us"),
                ("tools-approach", "Tools & Approach"),
                ("why-choose-us", "Why Choose Us"),
                ("projects", "Projects"),
                ("pricing", "Pricing"),
                ("careers", "Careers"),
                ("contact-us", "Contact Us"),
            ]),
            contact: ContactCopy {
                heading: "Contact Us".to_string(),
                blurb: "Let's connect! Reach out to start a project, collaborate, or just say hello.".to_string(),
            },
            projects: vec![
                project(
                    "supply-chain-dapp",
                    "Supply Chain DApp",
                    "Global Freight Co.",
                    &["overview", "features", "architecture", "results"],
                ),
                project(
                    "defi-lending-protocol",
                    "DeFi Lending Protocol",
                    "Northwind Finance",
                    &["overview", "architecture", "audit"],
                ),
                project(
                    "nft-ticketing",
                    "NFT Ticketing",
                    "Stagepass",
                    &["overview", "features"],
                ),
            ],
        }
    }
}
