use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tracing::{debug, error};
use uuid::Uuid;

use crate::{
    modules::resource::application::{
        domain::Resource,
        ports::incoming::{ManageResource, ResourceError},
    },
    shared::api::{ApiResponse, JsonObject},
};

//
// ──────────────────────────────────────────────────────────
// Mounting
// ──────────────────────────────────────────────────────────
//

/// Registers the five CRUD routes of `R` under `R::CONFIG.path`.
pub fn mount<R: Resource>(cfg: &mut web::ServiceConfig, service: Arc<dyn ManageResource<R>>) {
    cfg.service(
        web::scope(R::CONFIG.path)
            .app_data(web::Data::from(service))
            .route("", web::get().to(list_handler::<R>))
            .route("", web::post().to(create_handler::<R>))
            .route("/{id}", web::get().to(get_handler::<R>))
            .route("/{id}", web::put().to(update_handler::<R>))
            .route("/{id}", web::delete().to(delete_handler::<R>)),
    );
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

async fn list_handler<R: Resource>(service: web::Data<dyn ManageResource<R>>) -> HttpResponse {
    match service.list().await {
        Ok(records) => ApiResponse::list(records),
        Err(err) => map_resource_error::<R>(err, Operation::Read),
    }
}

async fn get_handler<R: Resource>(
    service: web::Data<dyn ManageResource<R>>,
    path: web::Path<String>,
) -> HttpResponse {
    let Some(id) = parse_id::<R>(&path) else {
        return ApiResponse::not_found(R::CONFIG.not_found);
    };

    match service.get(id).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_resource_error::<R>(err, Operation::Read),
    }
}

async fn create_handler<R: Resource>(
    service: web::Data<dyn ManageResource<R>>,
    payload: web::Json<JsonObject<R::Payload>>,
) -> HttpResponse {
    match service.create(payload.into_inner().into_inner()).await {
        Ok(record) => ApiResponse::created(record),
        Err(err) => map_resource_error::<R>(err, Operation::Create),
    }
}

async fn update_handler<R: Resource>(
    service: web::Data<dyn ManageResource<R>>,
    path: web::Path<String>,
    payload: web::Json<JsonObject<R::Payload>>,
) -> HttpResponse {
    let Some(id) = parse_id::<R>(&path) else {
        return ApiResponse::not_found(R::CONFIG.not_found);
    };

    match service.update(id, payload.into_inner().into_inner()).await {
        Ok(record) => ApiResponse::success(record),
        Err(err) => map_resource_error::<R>(err, Operation::Update),
    }
}

async fn delete_handler<R: Resource>(
    service: web::Data<dyn ManageResource<R>>,
    path: web::Path<String>,
) -> HttpResponse {
    let Some(id) = parse_id::<R>(&path) else {
        return ApiResponse::not_found(R::CONFIG.not_found);
    };

    match service.delete(id).await {
        Ok(()) => ApiResponse::success(serde_json::Map::new()),
        Err(err) => map_resource_error::<R>(err, Operation::Delete),
    }
}

/// Ids are UUIDs; anything else cannot name a record.
fn parse_id<R: Resource>(raw: &str) -> Option<Uuid> {
    match Uuid::parse_str(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            debug!(resource = R::CONFIG.label, id = raw, "Malformed record id");
            None
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

fn map_resource_error<R: Resource>(err: ResourceError, operation: Operation) -> HttpResponse {
    match err {
        ResourceError::NotFound => ApiResponse::not_found(R::CONFIG.not_found),
        ResourceError::ValidationFailed(messages) => ApiResponse::validation_failed(messages),
        ResourceError::Conflict => {
            let message = match (R::CONFIG.unique, operation) {
                (Some(unique), Operation::Update) => unique.on_update,
                (Some(unique), _) => unique.on_create,
                (None, _) => "Duplicate value",
            };
            ApiResponse::bad_request(message)
        }
        ResourceError::RepositoryError(cause) => {
            error!(
                resource = R::CONFIG.label,
                operation = ?operation,
                error = %cause,
                "Store operation failed"
            );
            ApiResponse::internal_error()
        }
    }
}
