use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::resource::application::domain::{
    optional_text, text_list, FieldErrors, Resource, ResourceConfig, SortSpec,
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub company: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub start_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub current: bool,
}

/// Dates arrive as text and are parsed during validation so that a bad
/// date shows up next to the other field messages.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePayload {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    #[schema(example = "2022-03-01")]
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
}

impl Resource for ExperienceRecord {
    type Payload = ExperiencePayload;

    const CONFIG: ResourceConfig = ResourceConfig {
        label: "experience",
        path: "/api/experience",
        not_found: "Experience record not found",
        default_sort: Some(SortSpec::descending("startDate", "start_date")),
        unique: None,
    };

    fn validate(payload: ExperiencePayload) -> Result<Self, Vec<String>> {
        let mut errors = FieldErrors::default();

        let company = errors.required_text(payload.company, "Please add a company name");
        let position = errors.required_text(payload.position, "Please add a position");
        let description = errors.required_text(payload.description, "Please add a job description");

        let start_date = match optional_text(payload.start_date) {
            Some(raw) => errors.required_date(Some(raw), "Please add a valid start date"),
            None => {
                errors.push("Please add a start date");
                None
            }
        };
        let end_date = errors.optional_date(payload.end_date, "Please add a valid end date");

        let record = start_date.map(|start_date| ExperienceRecord {
            company,
            position,
            location: optional_text(payload.location),
            description,
            responsibilities: text_list(payload.responsibilities),
            start_date,
            end_date,
            current: payload.current.unwrap_or(false),
        });

        errors.finish(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn full_payload() -> ExperiencePayload {
        ExperiencePayload {
            company: Some("Acme".to_string()),
            position: Some("Backend Engineer".to_string()),
            location: Some("Remote".to_string()),
            description: Some("APIs".to_string()),
            responsibilities: Some(vec!["On-call".to_string()]),
            start_date: Some("2022-03-01".to_string()),
            end_date: Some("2023-06-30T00:00:00Z".to_string()),
            current: None,
        }
    }

    #[test]
    fn valid_payload_parses_dates() {
        let record = ExperienceRecord::validate(full_payload()).unwrap();

        assert_eq!(
            record.start_date,
            Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(record.end_date.map(|d| d.month()), Some(6));
        assert!(!record.current);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let record = ExperienceRecord::validate(ExperiencePayload {
            company: Some("Acme".to_string()),
            position: Some("Engineer".to_string()),
            description: Some("APIs".to_string()),
            start_date: Some("2024-01-01".to_string()),
            current: Some(true),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(record.location, None);
        assert_eq!(record.end_date, None);
        assert!(record.responsibilities.is_empty());
        assert!(record.current);
    }

    #[test]
    fn missing_and_malformed_dates_have_distinct_messages() {
        let mut payload = full_payload();
        payload.start_date = None;
        payload.end_date = Some("soon".to_string());
        let errors = ExperienceRecord::validate(payload).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Please add a start date".to_string(),
                "Please add a valid end date".to_string(),
            ]
        );

        let mut payload = full_payload();
        payload.start_date = Some("March 2022".to_string());
        let errors = ExperienceRecord::validate(payload).unwrap_err();
        assert_eq!(errors, vec!["Please add a valid start date".to_string()]);
    }

    #[test]
    fn empty_payload_reports_required_fields() {
        let errors = ExperienceRecord::validate(ExperiencePayload::default()).unwrap_err();

        assert_eq!(
            errors,
            vec![
                "Please add a company name".to_string(),
                "Please add a position".to_string(),
                "Please add a job description".to_string(),
                "Please add a start date".to_string(),
            ]
        );
    }

    #[test]
    fn serialises_camel_case_and_omits_absent_optionals() {
        let mut payload = full_payload();
        payload.location = None;
        payload.end_date = None;
        let record = ExperienceRecord::validate(payload).unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert!(value["startDate"].is_string());
        assert!(value.get("endDate").is_none());
        assert!(value.get("location").is_none());
        assert_eq!(value["current"], false);
    }
}
