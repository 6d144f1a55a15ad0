use std::marker::PhantomData;

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::resource::application::{
    domain::{Resource, SortSpec, Stored},
    ports::outgoing::{ResourceStore, StoreError},
};
use crate::tests::support::app_state_builder::StoreFactory;

// ============================================================
// Failing Store
// ============================================================

/// Answers every call with a database error carrying internal detail that
/// must never reach a client.
pub struct FailingStore<R> {
    _resource: PhantomData<fn() -> R>,
}

pub const FAILING_STORE_DETAIL: &str = "connection to 10.0.0.5:5432 refused";

impl<R> FailingStore<R> {
    pub fn new() -> Self {
        Self {
            _resource: PhantomData,
        }
    }

    fn fail<T>() -> Result<T, StoreError> {
        Err(StoreError::DatabaseError(FAILING_STORE_DETAIL.to_string()))
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for FailingStore<R> {
    async fn find(&self, _sort: Option<SortSpec>) -> Result<Vec<Stored<R>>, StoreError> {
        Self::fail()
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Stored<R>>, StoreError> {
        Self::fail()
    }

    async fn insert(&self, _record: R) -> Result<Stored<R>, StoreError> {
        Self::fail()
    }

    async fn find_by_id_and_update(
        &self,
        _id: Uuid,
        _record: R,
    ) -> Result<Option<Stored<R>>, StoreError> {
        Self::fail()
    }

    async fn find_by_id_and_delete(&self, _id: Uuid) -> Result<bool, StoreError> {
        Self::fail()
    }
}

pub struct Failing;

impl StoreFactory for Failing {
    type Store<R: Resource> = FailingStore<R>;

    fn store<R: Resource>(&self) -> FailingStore<R> {
        FailingStore::new()
    }
}
