use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::resource::application::domain::{
    text_list, FieldErrors, Resource, ResourceConfig, SortSpec,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EducationRecord {
    #[schema(example = "BSc Computer Science")]
    pub degree: String,
    pub school: String,
    /// Free-form span such as `2019 - 2023`; listings sort on it as text.
    #[schema(example = "2019 - 2023")]
    pub years: String,
    pub location: String,
    pub about: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EducationPayload {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub years: Option<String>,
    pub location: Option<String>,
    pub about: Option<String>,
    pub highlights: Option<Vec<String>>,
}

impl Resource for EducationRecord {
    type Payload = EducationPayload;

    const CONFIG: ResourceConfig = ResourceConfig {
        label: "education",
        path: "/api/education",
        not_found: "Education record not found",
        default_sort: Some(SortSpec::descending("years", "years")),
        unique: None,
    };

    fn validate(payload: EducationPayload) -> Result<Self, Vec<String>> {
        let mut errors = FieldErrors::default();

        let record = EducationRecord {
            degree: errors.required_text(payload.degree, "Please add a degree"),
            school: errors.required_text(payload.school, "Please add a school name"),
            years: errors.required_text(payload.years, "Please add years of study"),
            location: errors.required_text(payload.location, "Please add a location"),
            about: errors.required_text(
                payload.about,
                "Please add information about your education",
            ),
            highlights: text_list(payload.highlights),
        };

        errors.finish(Some(record))
    }
}
