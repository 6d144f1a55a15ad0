use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Sorting
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Listing order for a resource.
/// `field` is the JSON name of the record field, `column` the storage column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: &'static str,
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn ascending(field: &'static str, column: &'static str) -> Self {
        Self {
            field,
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub const fn descending(field: &'static str, column: &'static str) -> Self {
        Self {
            field,
            column,
            direction: SortDirection::Descending,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Per-resource configuration
// ──────────────────────────────────────────────────────────
//

/// A field whose value must be unique across the collection, with the
/// message reported when a create or an update collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueConstraint {
    pub field: &'static str,
    pub on_create: &'static str,
    pub on_update: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Short name used in logs and API docs, e.g. `skill`.
    pub label: &'static str,
    /// Mount point of the CRUD routes, e.g. `/api/skills`.
    pub path: &'static str,
    pub not_found: &'static str,
    pub default_sort: Option<SortSpec>,
    pub unique: Option<UniqueConstraint>,
}

/// A record kind served through the generic CRUD contract.
///
/// Implementors describe themselves through [`Resource::CONFIG`] and turn an
/// inbound payload into a validated record with [`Resource::validate`]. The
/// same validation runs on create and on update.
pub trait Resource: Clone + std::fmt::Debug + Serialize + Send + Sync + 'static {
    type Payload: DeserializeOwned + Send + 'static;

    const CONFIG: ResourceConfig;

    /// Returns one message per failing field.
    fn validate(payload: Self::Payload) -> Result<Self, Vec<String>>;

    /// Value of the field named by `CONFIG.unique`, if any.
    fn unique_value(&self) -> Option<&str> {
        None
    }
}

/// A record as persisted: the validated fields plus store-assigned metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stored<R> {
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[serde(flatten)]
    pub record: R,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}
