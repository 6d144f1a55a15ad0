// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned for every failure the client cannot act on.
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// Uniform envelope returned by every resource endpoint.
///
/// Success: `{ success: true, data, count? }`
/// Failure: `{ success: false, error }`
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

/// Either a single message or one message per failing field.
#[derive(Serialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum ApiError {
    Message(String),
    Messages(Vec<String>),
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            count: None,
            data: Some(data),
            error: None,
        })
    }

    pub fn created(data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            count: None,
            data: Some(data),
            error: None,
        })
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    pub fn list(items: Vec<T>) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, error: ApiError) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            count: None,
            data: None,
            error: Some(error),
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, ApiError::Message(message.to_string()))
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(
            StatusCode::BAD_REQUEST,
            ApiError::Message(message.to_string()),
        )
    }

    pub fn validation_failed(messages: Vec<String>) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, ApiError::Messages(messages))
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Message(SERVER_ERROR_MESSAGE.to_string()),
        )
    }
}
