// src/core/query.rs
use crate::core::store::CvStore;
use crate::types::cv_data::{ContactInfo, Education, Experience, Profile, Project, Skill};
use std::sync::Arc;

/// Read accessors over the shared store, one per resource.
#[derive(Debug, Clone)]
pub struct CvQueryService {
    store: Arc<CvStore>,
}

impl CvQueryService {
    pub fn new(store: Arc<CvStore>) -> Self {
        Self { store }
    }

    pub fn profile(&self) -> &Profile {
        &self.store.dataset().profile
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.store.dataset().experiences
    }

    pub fn education(&self) -> &[Education] {
        &self.store.dataset().education
    }

    pub fn skills(&self) -> &[Skill] {
        &self.store.dataset().skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.store.dataset().projects
    }

    pub fn contacts(&self) -> &[ContactInfo] {
        &self.store.dataset().contacts
    }
}

impl From<CvStore> for CvQueryService {
    fn from(store: CvStore) -> Self {
        Self::new(Arc::new(store))
    }
}
