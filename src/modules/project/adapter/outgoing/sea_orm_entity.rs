use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::resource::adapter::outgoing::sea_orm_support::from_json;
use crate::modules::resource::application::{domain::Stored, ports::outgoing::StoreError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // JSONB array, GIN indexed
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub live_url: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_stored(&self) -> Result<Stored<ProjectRecord>, StoreError> {
        Ok(Stored {
            id: self.id,
            record: ProjectRecord {
                title: self.title.clone(),
                description: self.description.clone(),
                technologies: from_json(&self.technologies)?,
                image_url: self.image_url.clone(),
                github_url: self.github_url.clone(),
                live_url: self.live_url.clone(),
            },
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
