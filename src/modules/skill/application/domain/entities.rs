use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::resource::application::domain::{
    FieldErrors, Resource, ResourceConfig, SortSpec, UniqueConstraint,
};

//
// ──────────────────────────────────────────────────────────
// Enumerations
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        }
    }
}

impl FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Proficiency::Beginner),
            "Intermediate" => Ok(Proficiency::Intermediate),
            "Advanced" => Ok(Proficiency::Advanced),
            "Expert" => Ok(Proficiency::Expert),
            other => Err(format!("unknown proficiency `{}`", other)),
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Mobile,
    Other,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Mobile => "Mobile",
            SkillCategory::Other => "Other",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Frontend" => Ok(SkillCategory::Frontend),
            "Backend" => Ok(SkillCategory::Backend),
            "Database" => Ok(SkillCategory::Database),
            "DevOps" => Ok(SkillCategory::DevOps),
            "Mobile" => Ok(SkillCategory::Mobile),
            "Other" => Ok(SkillCategory::Other),
            other => Err(format!("unknown category `{}`", other)),
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Record & Payload
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SkillRecord {
    /// Unique across all skills.
    #[schema(example = "Rust")]
    pub name: String,
    pub proficiency: Proficiency,
    pub category: SkillCategory,
}

/// Inbound body for create and update. Every field is optional at the
/// wire level so that missing fields become validation messages.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SkillPayload {
    pub name: Option<String>,
    pub proficiency: Option<String>,
    pub category: Option<String>,
}

impl Resource for SkillRecord {
    type Payload = SkillPayload;

    const CONFIG: ResourceConfig = ResourceConfig {
        label: "skill",
        path: "/api/skills",
        not_found: "Skill not found",
        default_sort: Some(SortSpec::ascending("category", "category")),
        unique: Some(UniqueConstraint {
            field: "name",
            on_create: "Skill already exists",
            on_update: "Skill name must be unique",
        }),
    };

    fn validate(payload: SkillPayload) -> Result<Self, Vec<String>> {
        let mut errors = FieldErrors::default();

        let name = errors.required_text(payload.name, "Please add a skill name");
        let proficiency = errors.required_enum::<Proficiency>(
            payload.proficiency,
            "proficiency",
            "Please specify proficiency level",
        );
        let category =
            errors.required_enum::<SkillCategory>(payload.category, "category", "Please add a category");

        let record = match (proficiency, category) {
            (Some(proficiency), Some(category)) => Some(SkillRecord {
                name,
                proficiency,
                category,
            }),
            _ => None,
        };

        errors.finish(record)
    }

    fn unique_value(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, proficiency: &str, category: &str) -> SkillPayload {
        SkillPayload {
            name: Some(name.to_string()),
            proficiency: Some(proficiency.to_string()),
            category: Some(category.to_string()),
        }
    }

    #[test]
    fn valid_payload_becomes_record() {
        let record = SkillRecord::validate(payload(" Docker ", "Intermediate", "DevOps")).unwrap();

        assert_eq!(
            record,
            SkillRecord {
                name: "Docker".to_string(),
                proficiency: Proficiency::Intermediate,
                category: SkillCategory::DevOps,
            }
        );
        assert_eq!(record.unique_value(), Some("Docker"));
    }

    #[test]
    fn empty_payload_reports_every_required_field() {
        let errors = SkillRecord::validate(SkillPayload::default()).unwrap_err();

        assert_eq!(
            errors,
            vec![
                "Please add a skill name".to_string(),
                "Please specify proficiency level".to_string(),
                "Please add a category".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_enum_values_are_rejected() {
        let errors = SkillRecord::validate(payload("Go", "Guru", "Cloud")).unwrap_err();

        assert_eq!(
            errors,
            vec![
                "`Guru` is not a valid proficiency".to_string(),
                "`Cloud` is not a valid category".to_string(),
            ]
        );
    }

    #[test]
    fn enum_spelling_is_exact() {
        assert!("expert".parse::<Proficiency>().is_err());
        assert!("Devops".parse::<SkillCategory>().is_err());
        assert_eq!("Mobile".parse::<SkillCategory>(), Ok(SkillCategory::Mobile));
    }

    #[test]
    fn serialises_with_wire_spelling() {
        let record = SkillRecord {
            name: "Kubernetes".to_string(),
            proficiency: Proficiency::Beginner,
            category: SkillCategory::DevOps,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Kubernetes",
                "proficiency": "Beginner",
                "category": "DevOps"
            })
        );
    }

    #[test]
    fn config_sorts_by_category_and_guards_name() {
        let config = SkillRecord::CONFIG;
        assert_eq!(config.default_sort, Some(SortSpec::ascending("category", "category")));
        assert_eq!(config.unique.map(|u| u.field), Some("name"));
    }
}
