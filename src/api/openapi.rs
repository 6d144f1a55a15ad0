use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::path::{
    HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn, PathItemBuilder,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::response::{Response, ResponseBuilder};
use utoipa::openapi::schema::{AllOfBuilder, Array, KnownFormat, ObjectBuilder, SchemaFormat, Type};
use utoipa::openapi::{ContentBuilder, Ref, RefOr, Required, Schema};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::api::schemas::{DeletedResponse, ErrorResponse};
use crate::modules::education::application::domain::{EducationPayload, EducationRecord};
use crate::modules::experience::application::domain::{ExperiencePayload, ExperienceRecord};
use crate::modules::project::application::domain::{ProjectPayload, ProjectRecord};
use crate::modules::resource::application::domain::Resource;
use crate::modules::skill::application::domain::{
    Proficiency, SkillCategory, SkillPayload, SkillRecord,
};
use crate::shared::api::ApiError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "CRUD API behind a personal portfolio site"
    ),
    components(
        schemas(
            // Envelope
            ErrorResponse,
            DeletedResponse,
            ApiError,

            // Records and payloads
            EducationRecord,
            EducationPayload,
            ExperienceRecord,
            ExperiencePayload,
            SkillRecord,
            SkillPayload,
            Proficiency,
            SkillCategory,
            ProjectRecord,
            ProjectPayload
        )
    ),
    modifiers(&ResourcePaths),
    tags(
        (name = "education", description = "Education history"),
        (name = "experience", description = "Work experience"),
        (name = "skill", description = "Skills, unique by name"),
        (name = "project", description = "Portfolio projects"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

//
// ──────────────────────────────────────────────────────────
// CRUD paths
// ──────────────────────────────────────────────────────────
//

/// Adds the five CRUD operations of every resource. The handlers are
/// generic, so the paths are built here rather than from `#[utoipa::path]`.
struct ResourcePaths;

impl Modify for ResourcePaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        add_resource::<EducationRecord>(openapi);
        add_resource::<ExperienceRecord>(openapi);
        add_resource::<SkillRecord>(openapi);
        add_resource::<ProjectRecord>(openapi);
    }
}

fn add_resource<R>(openapi: &mut utoipa::openapi::OpenApi)
where
    R: Resource + ToSchema,
    R::Payload: ToSchema,
{
    let config = R::CONFIG;
    let record = R::name();
    let payload = <R::Payload as ToSchema>::name();

    let list = operation(config.label, format!("list_{}", config.label), "List records")
        .response(
            "200",
            RefOr::T(json_response("All records", list_envelope(&record))),
        )
        .response("500", RefOr::T(error_response("Server Error")))
        .build();

    let create = operation(config.label, format!("create_{}", config.label), "Create a record")
        .request_body(Some(json_body(&payload)))
        .response(
            "201",
            RefOr::T(json_response("Created record", single_envelope(&record))),
        )
        .response(
            "400",
            RefOr::T(error_response("Validation failed or duplicate value")),
        )
        .response("500", RefOr::T(error_response("Server Error")))
        .build();

    let get = operation(config.label, format!("get_{}", config.label), "Fetch one record")
        .parameter(id_parameter())
        .response(
            "200",
            RefOr::T(json_response("The record", single_envelope(&record))),
        )
        .response("404", RefOr::T(error_response(config.not_found)))
        .response("500", RefOr::T(error_response("Server Error")))
        .build();

    let update = operation(
        config.label,
        format!("update_{}", config.label),
        "Replace a record",
    )
    .parameter(id_parameter())
    .request_body(Some(json_body(&payload)))
    .response(
        "200",
        RefOr::T(json_response("Updated record", single_envelope(&record))),
    )
    .response(
        "400",
        RefOr::T(error_response("Validation failed or duplicate value")),
    )
    .response("404", RefOr::T(error_response(config.not_found)))
    .response("500", RefOr::T(error_response("Server Error")))
    .build();

    let delete = operation(config.label, format!("delete_{}", config.label), "Delete a record")
        .parameter(id_parameter())
        .response(
            "200",
            RefOr::T(json_response(
                "Record deleted",
                Ref::from_schema_name("DeletedResponse").into(),
            )),
        )
        .response("404", RefOr::T(error_response(config.not_found)))
        .response("500", RefOr::T(error_response("Server Error")))
        .build();

    let paths = &mut openapi.paths.paths;
    paths.insert(
        config.path.to_string(),
        PathItemBuilder::new()
            .operation(HttpMethod::Get, list)
            .operation(HttpMethod::Post, create)
            .build(),
    );
    paths.insert(
        format!("{}/{{id}}", config.path),
        PathItemBuilder::new()
            .operation(HttpMethod::Get, get)
            .operation(HttpMethod::Put, update)
            .operation(HttpMethod::Delete, delete)
            .build(),
    );
}

// ────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────

fn operation(tag: &str, operation_id: String, summary: &str) -> OperationBuilder {
    OperationBuilder::new()
        .tags(Some(vec![tag.to_string()]))
        .operation_id(Some(operation_id))
        .summary(Some(summary))
}

fn id_parameter() -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Record id; anything that is not a UUID is answered with 404"))
        .schema(Some(uuid_schema()))
        .build()
}

fn json_body(schema_name: &str) -> utoipa::openapi::request_body::RequestBody {
    RequestBodyBuilder::new()
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name(schema_name)))
                .build(),
        )
        .required(Some(Required::True))
        .build()
}

fn json_response(description: &str, schema: RefOr<Schema>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            "application/json",
            ContentBuilder::new().schema(Some(schema)).build(),
        )
        .build()
}

fn error_response(description: &str) -> Response {
    json_response(description, Ref::from_schema_name("ErrorResponse").into())
}

fn uuid_schema() -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new()
            .schema_type(Type::String)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::Uuid)))
            .build(),
    ))
}

fn timestamp_schema() -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new()
            .schema_type(Type::String)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::DateTime)))
            .build(),
    ))
}

/// The record schema plus the store-assigned `_id`, `createdAt` and `updatedAt`.
fn stored(record: &str) -> RefOr<Schema> {
    let metadata = ObjectBuilder::new()
        .property("_id", uuid_schema())
        .required("_id")
        .property("createdAt", timestamp_schema())
        .required("createdAt")
        .property("updatedAt", timestamp_schema())
        .required("updatedAt")
        .build();

    RefOr::T(Schema::AllOf(
        AllOfBuilder::new()
            .item(Ref::from_schema_name(record))
            .item(RefOr::T(Schema::Object(metadata)))
            .build(),
    ))
}

fn success_flag() -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new().schema_type(Type::Boolean).build(),
    ))
}

fn single_envelope(record: &str) -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new()
            .property("success", success_flag())
            .required("success")
            .property("data", stored(record))
            .required("data")
            .build(),
    ))
}

fn list_envelope(record: &str) -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new()
            .property("success", success_flag())
            .required("success")
            .property(
                "count",
                RefOr::T(Schema::Object(
                    ObjectBuilder::new().schema_type(Type::Integer).build(),
                )),
            )
            .required("count")
            .property("data", RefOr::T(Schema::Array(Array::new(stored(record)))))
            .required("data")
            .build(),
    ))
}
