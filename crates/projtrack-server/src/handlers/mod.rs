//! HTTP request handlers

pub mod analytics;
pub mod health;
pub mod projects;
