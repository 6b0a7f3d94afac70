// src/core/store.rs
//! Immutable in-memory CV dataset, validated once when built

use crate::types::cv_data::CvDataset;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;
use url::Url;

const BUNDLED_DATASET: &str = include_str!("../../data/cv.yaml");

#[derive(Debug)]
pub struct CvStore {
    dataset: CvDataset,
}

impl CvStore {
    /// Validate a dataset and wrap it. Nothing can change it afterwards.
    pub fn new(dataset: CvDataset) -> Result<Self> {
        validate(&dataset)?;
        Ok(Self { dataset })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let dataset: CvDataset =
            serde_yaml::from_str(content).context("Failed to parse CV dataset")?;
        Self::new(dataset)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read CV dataset: {}", path.display()))?;
        let store = Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid CV dataset: {}", path.display()))?;
        info!("Loaded CV dataset from {}", path.display());
        Ok(store)
    }

    /// The dataset compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_yaml_str(BUNDLED_DATASET).context("Invalid bundled CV dataset")
    }

    pub fn dataset(&self) -> &CvDataset {
        &self.dataset
    }
}

fn validate(dataset: &CvDataset) -> Result<()> {
    let mut ids = HashSet::new();
    for exp in &dataset.experiences {
        check_unique(&mut ids, "experience", &exp.id)?;
        check_period("experience", &exp.id, exp.current, exp.end_date)?;
    }

    ids.clear();
    for edu in &dataset.education {
        check_unique(&mut ids, "education", &edu.id)?;
        check_period("education", &edu.id, edu.current, edu.end_date)?;
    }

    ids.clear();
    for project in &dataset.projects {
        check_unique(&mut ids, "project", &project.id)?;
        check_period("project", &project.id, project.current, project.end_date)?;
        if let Some(url) = &project.url {
            check_url("project", &project.id, "url", url)?;
        }
        if let Some(url) = &project.github_url {
            check_url("project", &project.id, "github_url", url)?;
        }
    }

    Ok(())
}

fn check_unique<'a>(seen: &mut HashSet<&'a str>, kind: &str, id: &'a str) -> Result<()> {
    if !seen.insert(id) {
        anyhow::bail!("Duplicate {} id: {}", kind, id);
    }
    Ok(())
}

fn check_period(kind: &str, id: &str, current: bool, end_date: Option<NaiveDate>) -> Result<()> {
    if let (true, Some(end)) = (current, end_date) {
        anyhow::bail!("Current {} '{}' must not have an end date (found {})", kind, id, end);
    }
    Ok(())
}

fn check_url(kind: &str, id: &str, field: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| anyhow::anyhow!("Invalid {} for {} '{}': {}", field, kind, id, e))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!(
            "Invalid {} for {} '{}': unsupported scheme '{}'",
            field,
            kind,
            id,
            url.scheme()
        );
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => anyhow::bail!("Invalid {} for {} '{}': missing host", field, kind, id),
    }
}
