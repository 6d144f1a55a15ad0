// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::error::JsonPayloadError;
use actix_web::web::JsonConfig;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const NOT_AN_OBJECT_MESSAGE: &str = "Request body must be a JSON object";

pub fn custom_json_config(limit: usize) -> JsonConfig {
    JsonConfig::default().limit(limit).error_handler(|err, _req| {
        let message = body_error_message(&err);
        tracing::debug!(error = %err, "Rejected request body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_failed(vec![message]),
        )
        .into()
    })
}

/// Request body that must be a JSON object before it is read as `T`.
///
/// serde accepts a JSON array as a positional struct, so `["Go", "Expert"]`
/// would otherwise pass as a payload.
#[derive(Debug)]
pub struct JsonObject<T>(pub T);

impl<T> JsonObject<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for JsonObject<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(D::Error::custom(NOT_AN_OBJECT_MESSAGE));
        }

        T::deserialize(value).map(JsonObject).map_err(D::Error::custom)
    }
}

fn body_error_message(err: &JsonPayloadError) -> String {
    match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_string()
        }
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) if e.is_data() => without_position(&e.to_string()),
        JsonPayloadError::Deserialize(_) => "Request body is not valid JSON".to_string(),
        _ => "Invalid request body".to_string(),
    }
}

// serde_json appends " at line L column C"
fn without_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}
