// src/core/resource.rs
//! The CV resources exposed under `/api/v1`, with their messages and error codes

use crate::core::query::CvQueryService;
use crate::core::shaper;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Resource {
    Profile,
    Experience,
    Education,
    Skills,
    Projects,
    Contact,
    Summary,
}

/// A shaped payload ready for the response envelope
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub message: String,
    pub data: Value,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Profile,
        Resource::Experience,
        Resource::Education,
        Resource::Skills,
        Resource::Projects,
        Resource::Contact,
        Resource::Summary,
    ];

    /// Route path relative to `/api/v1`
    pub fn path(self) -> &'static str {
        match self {
            Resource::Profile => "/me",
            Resource::Experience => "/experience",
            Resource::Education => "/education",
            Resource::Skills => "/skills",
            Resource::Projects => "/projects",
            Resource::Contact => "/contact",
            Resource::Summary => "/summary",
        }
    }

    pub fn error_code(self) -> &'static str {
        match self {
            Resource::Profile => "PROFILE_FETCH_ERROR",
            Resource::Experience => "EXPERIENCE_FETCH_ERROR",
            Resource::Education => "EDUCATION_FETCH_ERROR",
            Resource::Skills => "SKILLS_FETCH_ERROR",
            Resource::Projects => "PROJECTS_FETCH_ERROR",
            Resource::Contact => "CONTACT_FETCH_ERROR",
            Resource::Summary => "SUMMARY_FETCH_ERROR",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Resource::Profile => "profile",
            Resource::Experience => "experience",
            Resource::Education => "education",
            Resource::Skills => "skills",
            Resource::Projects => "projects",
            Resource::Contact => "contact info",
            Resource::Summary => "summary",
        }
    }

    pub fn failure_message(self, cause: &anyhow::Error) -> String {
        format!("Failed to retrieve {}: {:#}", self.label(), cause)
    }

    /// Shape this resource from the query service and encode it generically
    pub fn payload(self, cv: &CvQueryService) -> Result<Payload> {
        match self {
            Resource::Profile => encode(
                "Profile retrieved successfully".to_string(),
                cv.profile(),
            ),
            Resource::Experience => {
                let experiences = cv.experiences();
                encode(
                    format!("Retrieved {} work experience entries", experiences.len()),
                    experiences,
                )
            }
            Resource::Education => {
                let education = cv.education();
                encode(
                    format!("Retrieved {} education entries", education.len()),
                    education,
                )
            }
            Resource::Skills => {
                let skills = shaper::shape_skills(cv.skills());
                encode(
                    format!(
                        "Retrieved {} skills across {} categories",
                        skills.total_skills,
                        skills.categories.len()
                    ),
                    &skills,
                )
            }
            Resource::Projects => {
                let projects = shaper::shape_projects(cv.projects());
                encode(
                    format!(
                        "Retrieved {} projects ({} current, {} past)",
                        projects.total_projects,
                        projects.current_projects.len(),
                        projects.past_projects.len()
                    ),
                    &projects,
                )
            }
            Resource::Contact => {
                let contacts = shaper::shape_contacts(cv.contacts());
                encode(
                    format!("Retrieved {} contact methods", contacts.all_contacts.len()),
                    &contacts,
                )
            }
            Resource::Summary => encode(
                "CV summary retrieved successfully".to_string(),
                &shaper::summarize(cv),
            ),
        }
    }
}

fn encode<T: Serialize + ?Sized>(message: String, data: &T) -> Result<Payload> {
    let data = serde_json::to_value(data).context("payload is not encodable")?;
    Ok(Payload { message, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::CvStore;

    fn bundled() -> CvQueryService {
        CvQueryService::from(CvStore::bundled().unwrap())
    }

    #[test]
    fn test_every_resource_builds_from_bundled_data() {
        let cv = bundled();
        for resource in Resource::ALL {
            let payload = resource.payload(&cv).unwrap();
            assert!(!payload.message.is_empty());
            assert!(!payload.data.is_null(), "{:?}", resource);
        }
    }

    #[test]
    fn test_payload_is_deterministic() {
        let cv = bundled();
        for resource in Resource::ALL {
            assert_eq!(resource.payload(&cv).unwrap(), resource.payload(&cv).unwrap());
        }
    }

    #[test]
    fn test_messages() {
        let cv = bundled();
        let skills = Resource::Skills.payload(&cv).unwrap();
        let total = cv.skills().len();
        let categories = skills.data["categories"].as_array().unwrap().len();
        assert_eq!(
            skills.message,
            format!("Retrieved {} skills across {} categories", total, categories)
        );
        assert_eq!(
            Resource::Profile.payload(&cv).unwrap().message,
            "Profile retrieved successfully"
        );
    }

    #[test]
    fn test_failure_message_embeds_cause() {
        let cause = anyhow::anyhow!("boom");
        assert_eq!(
            Resource::Contact.failure_message(&cause),
            "Failed to retrieve contact info: boom"
        );
        assert_eq!(Resource::Skills.error_code(), "SKILLS_FETCH_ERROR");
    }
}
