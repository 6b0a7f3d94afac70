//! Read-only REST API serving one person's CV as JSON or XML

pub mod cli;
pub mod config;
pub mod core;
pub mod types;
pub mod web;

pub use web::{build_rocket, start_web_server};
