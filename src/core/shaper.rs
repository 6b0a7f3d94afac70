// src/core/shaper.rs
//! Turns stored records into the aggregate shape each endpoint returns.
//! Everything here is a pure function of input order.

use crate::core::query::CvQueryService;
use crate::types::cv_data::{ContactInfo, Experience, Profile, Project, Skill};
use crate::types::response::{
    ContactsOverview, CvSummary, ProjectsOverview, SkillGroups, SkillsOverview, SummaryStats,
};

pub const SUMMARY_EXPERIENCE_LIMIT: usize = 2;
pub const SUMMARY_SKILL_LIMIT: usize = 8;
pub const SUMMARY_PROJECT_LIMIT: usize = 3;

/// "Cloud & DevOps" -> "cloud_and_devops"
pub fn category_key(category: &str) -> String {
    category.to_lowercase().replace(' ', "_").replace('&', "and")
}

pub fn shape_skills(skills: &[Skill]) -> SkillsOverview<'_> {
    let mut groups = SkillGroups::default();
    for skill in skills {
        groups.push(category_key(&skill.category), skill);
    }

    SkillsOverview {
        all_skills: skills,
        categories: groups.keys().map(str::to_string).collect(),
        skills_by_category: groups,
        total_skills: skills.len(),
    }
}

pub fn shape_projects(projects: &[Project]) -> ProjectsOverview<'_> {
    let (current_projects, past_projects): (Vec<_>, Vec<_>) =
        projects.iter().partition(|p| p.current);

    ProjectsOverview {
        current_projects,
        past_projects,
        total_projects: projects.len(),
    }
}

pub fn shape_contacts(contacts: &[ContactInfo]) -> ContactsOverview<'_> {
    let (primary_contacts, secondary_contacts): (Vec<_>, Vec<_>) =
        contacts.iter().partition(|c| c.primary);

    ContactsOverview {
        all_contacts: contacts,
        primary_contacts,
        secondary_contacts,
    }
}

pub fn shape_summary<'a>(
    profile: &'a Profile,
    experiences: &'a [Experience],
    skills: &'a [Skill],
    projects: &'a [Project],
    contacts: &'a [ContactInfo],
) -> CvSummary<'a> {
    CvSummary {
        profile,
        recent_experience: head(experiences, SUMMARY_EXPERIENCE_LIMIT),
        top_skills: skills
            .iter()
            .filter(|s| s.level.is_top())
            .take(SUMMARY_SKILL_LIMIT)
            .collect(),
        recent_projects: head(projects, SUMMARY_PROJECT_LIMIT),
        primary_contact: contacts.iter().filter(|c| c.primary).collect(),
        stats: SummaryStats {
            total_experience_entries: experiences.len(),
            total_skills: skills.len(),
            total_projects: projects.len(),
            years_experience: profile.years_experience,
        },
    }
}

/// Summary over everything the query service holds
pub fn summarize(cv: &CvQueryService) -> CvSummary<'_> {
    shape_summary(
        cv.profile(),
        cv.experiences(),
        cv.skills(),
        cv.projects(),
        cv.contacts(),
    )
}

fn head<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cv_data::{ContactMethod, SkillLevel};
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn skill(name: &str, level: SkillLevel, category: &str) -> Skill {
        Skill {
            name: name.to_string(),
            level,
            years_experience: 1,
            category: category.to_string(),
        }
    }

    fn project(id: &str, current: bool) -> Project {
        Project {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            technologies: vec![],
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            current,
            url: None,
            github_url: None,
            highlights: vec![],
        }
    }

    fn contact(method: ContactMethod, primary: bool) -> ContactInfo {
        ContactInfo {
            method,
            value: format!("{:?}", method),
            label: format!("{:?}", method),
            primary,
        }
    }

    fn experience(id: &str) -> Experience {
        Experience {
            id: id.to_string(),
            company: "Acme".to_string(),
            title: "Dev".to_string(),
            location: "Remote".to_string(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: None,
            current: false,
            description: String::new(),
            achievements: vec![],
            technologies: vec![],
        }
    }

    fn profile() -> Profile {
        Profile {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            summary: String::new(),
            location: "London".to_string(),
            years_experience: 7,
            specialties: vec![],
        }
    }

    #[test]
    fn test_category_key() {
        assert_eq!(category_key("Cloud & DevOps"), "cloud_and_devops");
        assert_eq!(category_key("Programming Languages"), "programming_languages");
        assert_eq!(category_key("Tools"), "tools");
        assert_eq!(category_key(""), "");
    }

    #[test]
    fn test_skills_grouped_in_first_seen_order() {
        let skills = vec![
            skill("Git", SkillLevel::Advanced, "Tools"),
            skill("AWS", SkillLevel::Beginner, "Cloud & DevOps"),
            skill("Postman", SkillLevel::Intermediate, "Tools"),
        ];
        let shaped = shape_skills(&skills);

        assert_eq!(shaped.categories, vec!["tools", "cloud_and_devops"]);
        assert_eq!(shaped.total_skills, 3);
        let tools: Vec<_> = shaped
            .skills_by_category
            .get("tools")
            .unwrap()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(tools, vec!["Git", "Postman"]);
    }

    #[test]
    fn test_every_skill_in_exactly_one_group() {
        let skills = vec![
            skill("Docker", SkillLevel::Intermediate, "Cloud & DevOps"),
            skill("Docker", SkillLevel::Intermediate, "Tools"),
            skill("Docker", SkillLevel::Intermediate, "Tools"),
            skill("Rust", SkillLevel::Expert, "Programming Languages"),
        ];
        let shaped = shape_skills(&skills);

        let grouped: usize = shaped.skills_by_category.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(grouped, shaped.total_skills);
        assert_eq!(shaped.all_skills.len(), shaped.total_skills);
        for (key, members) in shaped.skills_by_category.iter() {
            assert!(members.iter().all(|s| category_key(&s.category) == key));
        }
    }

    #[test]
    fn test_skills_grouping_serializes_as_ordered_map() {
        let skills = vec![
            skill("Vercel", SkillLevel::Advanced, "Cloud & DevOps"),
            skill("Git", SkillLevel::Advanced, "Tools"),
        ];
        let value = serde_json::to_value(shape_skills(&skills)).unwrap();
        let keys: Vec<_> = value["skills_by_category"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["cloud_and_devops", "tools"]);
        assert_eq!(value["skills_by_category"]["tools"][0]["name"], "Git");
    }

    #[test]
    fn test_empty_skills() {
        let shaped = shape_skills(&[]);
        assert!(shaped.categories.is_empty());
        assert!(shaped.skills_by_category.is_empty());
        assert_eq!(shaped.total_skills, 0);
    }

    #[test]
    fn test_projects_partition_is_stable_and_complete() {
        let projects = vec![
            project("a", true),
            project("b", false),
            project("c", true),
            project("d", false),
        ];
        let shaped = shape_projects(&projects);

        let current: Vec<_> = shaped.current_projects.iter().map(|p| p.id.as_str()).collect();
        let past: Vec<_> = shaped.past_projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(current, vec!["a", "c"]);
        assert_eq!(past, vec!["b", "d"]);
        assert_eq!(shaped.total_projects, current.len() + past.len());

        let all: HashSet<_> = current.iter().chain(past.iter()).collect();
        assert_eq!(all.len(), projects.len());
    }

    #[test]
    fn test_contacts_partition() {
        let contacts = vec![
            contact(ContactMethod::Email, true),
            contact(ContactMethod::Linkedin, false),
            contact(ContactMethod::Phone, true),
        ];
        let shaped = shape_contacts(&contacts);

        assert_eq!(shaped.all_contacts.len(), 3);
        assert_eq!(shaped.primary_contacts.len(), 2);
        assert_eq!(shaped.primary_contacts[1].method, ContactMethod::Phone);
        assert_eq!(shaped.secondary_contacts.len(), 1);
        assert_eq!(shaped.secondary_contacts[0].method, ContactMethod::Linkedin);
    }

    #[test]
    fn test_summary_truncates_and_filters() {
        let profile = profile();
        let experiences: Vec<_> = ["e1", "e2", "e3"].iter().map(|id| experience(id)).collect();
        let mut skills: Vec<_> = (0..12)
            .map(|i| skill(&format!("s{}", i), SkillLevel::Expert, "Languages"))
            .collect();
        skills.insert(0, skill("weak", SkillLevel::Beginner, "Languages"));
        skills.insert(3, skill("mid", SkillLevel::Intermediate, "Languages"));
        let projects: Vec<_> = (0..5).map(|i| project(&format!("p{}", i), i % 2 == 0)).collect();
        let contacts = vec![
            contact(ContactMethod::Email, true),
            contact(ContactMethod::Github, false),
        ];

        let summary = shape_summary(&profile, &experiences, &skills, &projects, &contacts);

        assert_eq!(summary.recent_experience.len(), 2);
        assert_eq!(summary.recent_experience[0].id, "e1");
        assert_eq!(summary.top_skills.len(), 8);
        assert!(summary.top_skills.iter().all(|s| s.level.is_top()));
        assert_eq!(summary.top_skills[0].name, "s0");
        assert_eq!(summary.recent_projects.len(), 3);
        assert_eq!(summary.primary_contact.len(), 1);
        assert_eq!(
            summary.stats,
            SummaryStats {
                total_experience_entries: 3,
                total_skills: 14,
                total_projects: 5,
                years_experience: 7,
            }
        );
    }

    #[test]
    fn test_summary_of_empty_collections() {
        let profile = profile();
        let summary = shape_summary(&profile, &[], &[], &[], &[]);
        assert!(summary.recent_experience.is_empty());
        assert!(summary.top_skills.is_empty());
        assert!(summary.recent_projects.is_empty());
        assert!(summary.primary_contact.is_empty());
        assert_eq!(summary.stats.total_skills, 0);
    }
}
