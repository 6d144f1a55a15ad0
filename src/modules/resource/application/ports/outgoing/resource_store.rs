use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::resource::application::domain::{Resource, SortSpec, Stored};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store refused the document against its own schema rules.
    #[error("Validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    /// A unique field collided with another document.
    #[error("Uniqueness constraint violated")]
    UniquenessConflict,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// One collection per resource kind.
///
/// Update and delete are single atomic calls: `Ok(None)` / `Ok(false)` means
/// no document had that id, there is no separate existence check.
#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    async fn find(&self, sort: Option<SortSpec>) -> Result<Vec<Stored<R>>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Stored<R>>, StoreError>;

    async fn insert(&self, record: R) -> Result<Stored<R>, StoreError>;

    /// Replaces every field of the document; returns the post-update state.
    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        record: R,
    ) -> Result<Option<Stored<R>>, StoreError>;

    /// Returns whether a document was removed.
    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
