// src/cli.rs
use crate::config::AppConfig;
use crate::core::{xml, CvQueryService, CvStore, Resource, ResponseFormat};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "cv-portfolio-api")]
#[command(about = "Read-only REST API serving a professional profile")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// YAML config file with `local` and `production` sections
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// CV dataset to serve instead of the bundled one
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[arg(long, global = true)]
    pub address: Option<String>,

    #[arg(long, global = true)]
    pub port: Option<u16>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Validate the dataset and print collection counts
    Check,
    /// Print the shaped payload of one resource
    Show {
        #[arg(value_enum)]
        resource: Resource,
        #[arg(long, value_enum, default_value_t = ResponseFormat::Json)]
        format: ResponseFormat,
    },
}

impl Cli {
    /// Command-line flags have the last word over file and environment
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(address) = &self.address {
            config.address = address.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(data) = &self.data {
            config.data_path = Some(data.clone());
        }
    }
}

pub fn load_store(config: &AppConfig) -> Result<CvStore> {
    match &config.data_path {
        Some(path) => CvStore::load(path),
        None => {
            info!("Using bundled CV dataset");
            CvStore::bundled()
        }
    }
}

pub fn check_report(cv: &CvQueryService) -> String {
    format!(
        "Dataset OK: {} ({})\n  experiences: {}\n  education: {}\n  skills: {}\n  projects: {}\n  contacts: {}",
        cv.profile().name,
        cv.profile().title,
        cv.experiences().len(),
        cv.education().len(),
        cv.skills().len(),
        cv.projects().len(),
        cv.contacts().len()
    )
}

pub fn show(cv: &CvQueryService, resource: Resource, format: ResponseFormat) -> Result<String> {
    let payload = resource.payload(cv)?;
    match format {
        ResponseFormat::Json => Ok(serde_json::to_string_pretty(&payload.data)?),
        ResponseFormat::Xml => Ok(xml::to_xml(&payload.data, "data")),
    }
}
