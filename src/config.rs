// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_LOG_FILTER: &str = "cv_portfolio=info,rocket=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Unknown log format: {}. Use pretty or json", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: String,
    pub address: String,
    pub port: u16,
    /// None serves the dataset compiled into the binary
    pub data_path: Option<PathBuf>,
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Config file the environment section was read from, if any
    pub source: Option<PathBuf>,
}

/// One environment section of the config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentSection {
    pub address: Option<String>,
    pub port: Option<u16>,
    pub data_path: Option<PathBuf>,
    pub log_filter: Option<String>,
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentSection,
    #[serde(default)]
    production: EnvironmentSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            address: "0.0.0.0".to_string(),
            port: 8000,
            data_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Pretty,
            source: None,
        }
    }
}

impl AppConfig {
    /// Defaults, then the config file section for the current environment,
    /// then environment variables.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();
        let mut config = Self {
            environment: environment.clone(),
            ..Self::default()
        };

        let (path, required) = match config_path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if path.exists() {
            let section = Self::load_section(&path, &environment)?;
            config.apply_section(section)?;
            config.source = Some(path);
        } else if required {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("CV_API_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_section(path: &Path, environment: &str) -> Result<EnvironmentSection> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let section = Self::parse_section(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(section)
    }

    fn parse_section(content: &str, environment: &str) -> Result<EnvironmentSection> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }

    pub fn apply_section(&mut self, section: EnvironmentSection) -> Result<()> {
        if let Some(address) = section.address {
            self.address = address;
        }
        if let Some(port) = section.port {
            self.port = port;
        }
        if let Some(path) = section.data_path {
            self.data_path = Some(resolve_path(&path)?);
        }
        if let Some(filter) = section.log_filter {
            self.log_filter = filter;
        }
        if let Some(format) = section.log_format {
            self.log_format = format;
        }
        Ok(())
    }

    /// Apply overrides from a variable lookup (the process environment in `load`)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup("CV_API_ADDRESS") {
            self.address = address;
        }
        if let Some(port) = lookup("CV_API_PORT").or_else(|| lookup("ROCKET_PORT")) {
            self.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("Port must be a valid port number, got '{}'", port))?;
        }
        if let Some(path) = lookup("CV_DATA_PATH") {
            self.data_path = Some(resolve_path(Path::new(&path))?);
        }
        if let Some(filter) = lookup("CV_API_LOG") {
            self.log_filter = filter;
        }
        if let Some(format) = lookup("CV_API_LOG_FORMAT") {
            self.log_format = format.parse()?;
        }
        Ok(())
    }
}

fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(current_dir.join(path))
    }
}
