// src/types/response.rs
//! Payload shapes returned in the `data` field of each endpoint

use crate::types::cv_data::{ContactInfo, Experience, Profile, Project, Skill};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Skills grouped under their category key, in first-seen order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SkillGroups<'a> {
    groups: Vec<(String, Vec<&'a Skill>)>,
}

impl<'a> SkillGroups<'a> {
    pub fn push(&mut self, key: String, skill: &'a Skill) {
        match self.groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, skills)) => skills.push(skill),
            None => self.groups.push((key, vec![skill])),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[&'a Skill]> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a Skill])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl Serialize for SkillGroups<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, skills) in &self.groups {
            map.serialize_entry(key, skills)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct SkillsOverview<'a> {
    pub all_skills: &'a [Skill],
    pub skills_by_category: SkillGroups<'a>,
    pub categories: Vec<String>,
    pub total_skills: usize,
}

#[derive(Debug, Serialize)]
pub struct ProjectsOverview<'a> {
    pub current_projects: Vec<&'a Project>,
    pub past_projects: Vec<&'a Project>,
    pub total_projects: usize,
}

#[derive(Debug, Serialize)]
pub struct ContactsOverview<'a> {
    pub all_contacts: &'a [ContactInfo],
    pub primary_contacts: Vec<&'a ContactInfo>,
    pub secondary_contacts: Vec<&'a ContactInfo>,
}

#[derive(Debug, Serialize)]
pub struct CvSummary<'a> {
    pub profile: &'a Profile,
    pub recent_experience: &'a [Experience],
    pub top_skills: Vec<&'a Skill>,
    pub recent_projects: &'a [Project],
    pub primary_contact: Vec<&'a ContactInfo>,
    pub stats: SummaryStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total_experience_entries: usize,
    pub total_skills: usize,
    pub total_projects: usize,
    pub years_experience: u32,
}
