use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::resource::application::{
    domain::{Resource, Stored},
    ports::{
        incoming::{ManageResource, ResourceError},
        outgoing::ResourceStore,
    },
};

/// The CRUD use cases for one resource kind, over any store.
#[derive(Debug, Clone)]
pub struct ResourceService<R, S>
where
    R: Resource,
    S: ResourceStore<R>,
{
    store: S,
    _resource: PhantomData<fn() -> R>,
}

impl<R, S> ResourceService<R, S>
where
    R: Resource,
    S: ResourceStore<R>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R, S> ManageResource<R> for ResourceService<R, S>
where
    R: Resource,
    S: ResourceStore<R>,
{
    async fn list(&self) -> Result<Vec<Stored<R>>, ResourceError> {
        Ok(self.store.find(R::CONFIG.default_sort).await?)
    }

    async fn get(&self, id: Uuid) -> Result<Stored<R>, ResourceError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(ResourceError::NotFound)
    }

    async fn create(&self, payload: R::Payload) -> Result<Stored<R>, ResourceError> {
        let record = R::validate(payload).map_err(ResourceError::ValidationFailed)?;

        let stored = self.store.insert(record).await?;
        info!(resource = R::CONFIG.label, id = %stored.id, "Record created");

        Ok(stored)
    }

    async fn update(&self, id: Uuid, payload: R::Payload) -> Result<Stored<R>, ResourceError> {
        let record = match R::validate(payload) {
            Ok(record) => record,
            Err(messages) => {
                // An unknown id is reported before a bad payload.
                if self.store.find_by_id(id).await?.is_none() {
                    return Err(ResourceError::NotFound);
                }
                return Err(ResourceError::ValidationFailed(messages));
            }
        };

        let stored = self
            .store
            .find_by_id_and_update(id, record)
            .await?
            .ok_or(ResourceError::NotFound)?;
        info!(resource = R::CONFIG.label, id = %id, "Record updated");

        Ok(stored)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResourceError> {
        if !self.store.find_by_id_and_delete(id).await? {
            return Err(ResourceError::NotFound);
        }
        info!(resource = R::CONFIG.label, id = %id, "Record deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::{mock, predicate::*};

    use crate::modules::resource::application::{domain::SortSpec, ports::outgoing::StoreError};
    use crate::modules::skill::application::domain::{
        Proficiency, SkillCategory, SkillPayload, SkillRecord,
    };

    // ──────────────────────────────────────────────────────────
    // Mock Store
    // ──────────────────────────────────────────────────────────

    mock! {
        pub SkillStore {}

        #[async_trait]
        impl ResourceStore<SkillRecord> for SkillStore {
            async fn find(&self, sort: Option<SortSpec>) -> Result<Vec<Stored<SkillRecord>>, StoreError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<Stored<SkillRecord>>, StoreError>;
            async fn insert(&self, record: SkillRecord) -> Result<Stored<SkillRecord>, StoreError>;
            async fn find_by_id_and_update(
                &self,
                id: Uuid,
                record: SkillRecord,
            ) -> Result<Option<Stored<SkillRecord>>, StoreError>;
            async fn find_by_id_and_delete(&self, id: Uuid) -> Result<bool, StoreError>;
        }
    }

    // ──────────────────────────────────────────────────────────
    // Helpers
    // ──────────────────────────────────────────────────────────

    fn payload(name: &str) -> SkillPayload {
        SkillPayload {
            name: Some(name.to_string()),
            proficiency: Some("Expert".to_string()),
            category: Some("Backend".to_string()),
        }
    }

    fn stored(id: Uuid, record: SkillRecord) -> Stored<SkillRecord> {
        let now = Utc::now();
        Stored {
            id,
            record,
            created_at: now,
            updated_at: now,
        }
    }

    fn go_skill() -> SkillRecord {
        SkillRecord {
            name: "Go".to_string(),
            proficiency: Proficiency::Expert,
            category: SkillCategory::Backend,
        }
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn list_uses_the_configured_sort() {
        let mut store = MockSkillStore::new();
        store
            .expect_find()
            .with(eq(SkillRecord::CONFIG.default_sort))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ResourceService::new(store);
        let result = service.list().await;

        assert_eq!(result, Ok(vec![]));
    }

    #[tokio::test]
    async fn get_missing_record_is_not_found() {
        let mut store = MockSkillStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));

        let service = ResourceService::new(store);

        assert_eq!(
            service.get(Uuid::new_v4()).await,
            Err(ResourceError::NotFound)
        );
    }

    #[tokio::test]
    async fn create_inserts_validated_record() {
        let id = Uuid::new_v4();
        let mut store = MockSkillStore::new();
        store
            .expect_insert()
            .withf(|record| *record == go_skill())
            .times(1)
            .returning(move |record| Ok(stored(id, record)));

        let service = ResourceService::new(store);
        let created = service.create(payload("Go")).await.unwrap();

        assert_eq!(created.id, id);
        assert_eq!(created.record, go_skill());
    }

    #[tokio::test]
    async fn create_with_invalid_payload_never_reaches_the_store() {
        let mut store = MockSkillStore::new();
        store.expect_insert().never();

        let service = ResourceService::new(store);
        let result = service
            .create(SkillPayload {
                name: None,
                proficiency: Some("Guru".to_string()),
                category: None,
            })
            .await;

        match result {
            Err(ResourceError::ValidationFailed(messages)) => assert_eq!(messages.len(), 3),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_conflict_is_reported() {
        let mut store = MockSkillStore::new();
        store
            .expect_insert()
            .returning(|_| Err(StoreError::UniquenessConflict));

        let service = ResourceService::new(store);

        assert_eq!(
            service.create(payload("Go")).await,
            Err(ResourceError::Conflict)
        );
    }

    #[tokio::test]
    async fn create_store_failure_is_a_repository_error() {
        let mut store = MockSkillStore::new();
        store
            .expect_insert()
            .returning(|_| Err(StoreError::DatabaseError("connection reset".into())));

        let service = ResourceService::new(store);

        assert!(matches!(
            service.create(payload("Go")).await,
            Err(ResourceError::RepositoryError(_))
        ));
    }

    #[tokio::test]
    async fn update_is_a_single_store_call() {
        let id = Uuid::new_v4();
        let mut store = MockSkillStore::new();
        store.expect_find_by_id().never();
        store
            .expect_find_by_id_and_update()
            .with(eq(id), always())
            .times(1)
            .returning(|id, record| Ok(Some(stored(id, record))));

        let service = ResourceService::new(store);
        let updated = service.update(id, payload("Go")).await.unwrap();

        assert_eq!(updated.id, id);
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let mut store = MockSkillStore::new();
        store
            .expect_find_by_id_and_update()
            .returning(|_, _| Ok(None));

        let service = ResourceService::new(store);

        assert_eq!(
            service.update(Uuid::new_v4(), payload("Go")).await,
            Err(ResourceError::NotFound)
        );
    }

    #[tokio::test]
    async fn update_unknown_id_wins_over_invalid_payload() {
        let mut store = MockSkillStore::new();
        store.expect_find_by_id().times(1).returning(|_| Ok(None));
        store.expect_find_by_id_and_update().never();

        let service = ResourceService::new(store);
        let result = service
            .update(Uuid::new_v4(), SkillPayload::default())
            .await;

        assert_eq!(result, Err(ResourceError::NotFound));
    }

    #[tokio::test]
    async fn update_invalid_payload_on_existing_record_is_rejected() {
        let id = Uuid::new_v4();
        let mut store = MockSkillStore::new();
        store
            .expect_find_by_id()
            .returning(move |id| Ok(Some(stored(id, go_skill()))));
        store.expect_find_by_id_and_update().never();

        let service = ResourceService::new(store);
        let result = service.update(id, SkillPayload::default()).await;

        assert!(matches!(result, Err(ResourceError::ValidationFailed(_))));
    }

    #[tokio::test]
    async fn update_rename_conflict_is_reported() {
        let mut store = MockSkillStore::new();
        store
            .expect_find_by_id_and_update()
            .returning(|_, _| Err(StoreError::UniquenessConflict));

        let service = ResourceService::new(store);

        assert_eq!(
            service.update(Uuid::new_v4(), payload("Go")).await,
            Err(ResourceError::Conflict)
        );
    }

    #[tokio::test]
    async fn delete_reports_missing_record() {
        let mut store = MockSkillStore::new();
        store
            .expect_find_by_id_and_delete()
            .times(1)
            .returning(|_| Ok(false));

        let service = ResourceService::new(store);

        assert_eq!(
            service.delete(Uuid::new_v4()).await,
            Err(ResourceError::NotFound)
        );
    }

    #[tokio::test]
    async fn delete_existing_record_succeeds() {
        let mut store = MockSkillStore::new();
        store.expect_find_by_id_and_delete().returning(|_| Ok(true));

        let service = ResourceService::new(store);

        assert_eq!(service.delete(Uuid::new_v4()).await, Ok(()));
    }
}
