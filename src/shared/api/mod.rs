mod json_config;
mod response;

pub use json_config::{custom_json_config, JsonObject, NOT_AN_OBJECT_MESSAGE};
pub use response::{ApiError, ApiResponse, SERVER_ERROR_MESSAGE};
