//! HTTP handlers

pub mod health;
pub mod request_demo;
pub mod routes;
pub mod site;
