use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::resource::application::{
    domain::{Resource, Stored},
    ports::outgoing::StoreError,
};

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    #[error("Record not found")]
    NotFound,

    #[error("Validation failed: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    #[error("Unique field already taken")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<StoreError> for ResourceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ValidationFailed(messages) => ResourceError::ValidationFailed(messages),
            StoreError::UniquenessConflict => ResourceError::Conflict,
            StoreError::DatabaseError(msg) => ResourceError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ManageResource<R: Resource>: Send + Sync {
    async fn list(&self) -> Result<Vec<Stored<R>>, ResourceError>;

    async fn get(&self, id: Uuid) -> Result<Stored<R>, ResourceError>;

    async fn create(&self, payload: R::Payload) -> Result<Stored<R>, ResourceError>;

    /// Full replacement: fields missing from `payload` do not survive.
    async fn update(&self, id: Uuid, payload: R::Payload) -> Result<Stored<R>, ResourceError>;

    async fn delete(&self, id: Uuid) -> Result<(), ResourceError>;
}
