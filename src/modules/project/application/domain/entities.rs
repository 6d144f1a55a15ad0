use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::resource::application::domain::{
    text_list, FieldErrors, Resource, ResourceConfig,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    /// Never empty; duplicates collapsed, first-seen order kept.
    #[schema(example = json!(["Rust", "PostgreSQL"]))]
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

impl Resource for ProjectRecord {
    type Payload = ProjectPayload;

    const CONFIG: ResourceConfig = ResourceConfig {
        label: "project",
        path: "/api/projects",
        not_found: "Project not found",
        default_sort: None,
        unique: None,
    };

    fn validate(payload: ProjectPayload) -> Result<Self, Vec<String>> {
        let mut errors = FieldErrors::default();

        let title = errors.required_text(payload.title, "Please add a project title");
        let description = errors.required_text(payload.description, "Please add a description");

        let technologies = text_list(payload.technologies);
        if technologies.is_empty() {
            errors.push("Please add at least one technology");
        }

        let record = ProjectRecord {
            title,
            description,
            technologies,
            image_url: errors.optional_url(payload.image_url, "Please add a valid image URL"),
            github_url: errors.optional_url(payload.github_url, "Please add a valid GitHub URL"),
            live_url: errors.optional_url(payload.live_url, "Please add a valid live URL"),
        };

        errors.finish(Some(record))
    }
}
