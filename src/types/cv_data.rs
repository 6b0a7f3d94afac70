// src/types/cv_data.rs
//! Typed CV records served by the API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Advanced and expert skills are the ones highlighted in the summary
    pub fn is_top(self) -> bool {
        matches!(self, SkillLevel::Advanced | SkillLevel::Expert)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
    Linkedin,
    Github,
    Website,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub location: String,
    pub years_experience: u32,
    #[serde(default)]
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub title: String,
    pub location: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>, // None while current
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub location: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub credits: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub years_experience: u32,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub method: ContactMethod,
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub primary: bool,
}

/// The whole CV as read from a dataset document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvDataset {
    pub profile: Profile,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contacts: Vec<ContactInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_use_lowercase_names() {
        assert_eq!(
            serde_json::to_value(SkillLevel::Expert).unwrap(),
            serde_json::json!("expert")
        );
        assert_eq!(
            serde_json::to_value(ContactMethod::Linkedin).unwrap(),
            serde_json::json!("linkedin")
        );
        assert!(serde_yaml::from_str::<SkillLevel>("guru").is_err());
    }

    #[test]
    fn test_top_levels() {
        assert!(SkillLevel::Expert.is_top());
        assert!(SkillLevel::Advanced.is_top());
        assert!(!SkillLevel::Intermediate.is_top());
        assert!(!SkillLevel::Beginner.is_top());
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let project = Project {
            id: "p".to_string(),
            name: "Demo".to_string(),
            description: String::new(),
            technologies: vec![],
            start_date: NaiveDate::from_ymd_opt(2023, 8, 1).unwrap(),
            end_date: None,
            current: true,
            url: None,
            github_url: None,
            highlights: vec![],
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["start_date"], "2023-08-01");
        assert!(value["end_date"].is_null());
    }
}
