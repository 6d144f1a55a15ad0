// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::api::ApiError;

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// A single message, or one message per failing field on validation errors
    #[schema(example = "Skill not found")]
    pub error: ApiError,
}

/// Body of a successful delete: `data` is always an empty object
#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Object, example = json!({}))]
    pub data: serde_json::Map<String, serde_json::Value>,
}
