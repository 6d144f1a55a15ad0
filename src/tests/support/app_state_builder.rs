use std::sync::Arc;

use crate::modules::education::application::domain::EducationRecord;
use crate::modules::experience::application::domain::ExperienceRecord;
use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::resource::adapter::outgoing::InMemoryStore;
use crate::modules::resource::application::domain::Resource;
use crate::modules::resource::application::ports::incoming::ManageResource;
use crate::modules::resource::application::ports::outgoing::ResourceStore;
use crate::modules::skill::application::domain::SkillRecord;
use crate::{service, AppState};

/// Every resource starts on its own empty in-memory store; individual
/// stores can be swapped for stubs.
pub struct TestAppStateBuilder {
    education: Arc<dyn ManageResource<EducationRecord>>,
    experience: Arc<dyn ManageResource<ExperienceRecord>>,
    skills: Arc<dyn ManageResource<SkillRecord>>,
    projects: Arc<dyn ManageResource<ProjectRecord>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            education: service(InMemoryStore::new()),
            experience: service(InMemoryStore::new()),
            skills: service(InMemoryStore::new()),
            projects: service(InMemoryStore::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_education_store(
        mut self,
        store: impl ResourceStore<EducationRecord> + 'static,
    ) -> Self {
        self.education = service(store);
        self
    }

    pub fn with_experience_store(
        mut self,
        store: impl ResourceStore<ExperienceRecord> + 'static,
    ) -> Self {
        self.experience = service(store);
        self
    }

    pub fn with_skill_store(mut self, store: impl ResourceStore<SkillRecord> + 'static) -> Self {
        self.skills = service(store);
        self
    }

    pub fn with_project_store(
        mut self,
        store: impl ResourceStore<ProjectRecord> + 'static,
    ) -> Self {
        self.projects = service(store);
        self
    }

    /// Swaps every store for one built by `make`.
    pub fn with_all_stores<F>(self, make: F) -> Self
    where
        F: StoreFactory,
    {
        self.with_education_store(make.store::<EducationRecord>())
            .with_experience_store(make.store::<ExperienceRecord>())
            .with_skill_store(make.store::<SkillRecord>())
            .with_project_store(make.store::<ProjectRecord>())
    }

    pub fn build(self) -> AppState {
        AppState {
            education: self.education,
            experience: self.experience,
            skills: self.skills,
            projects: self.projects,
        }
    }
}

pub trait StoreFactory {
    type Store<R: Resource>: ResourceStore<R> + 'static;

    fn store<R: Resource>(&self) -> Self::Store<R>;
}
