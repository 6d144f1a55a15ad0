use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::modules::education::application::domain::EducationRecord;
use crate::modules::resource::adapter::outgoing::sea_orm_support::from_json;
use crate::modules::resource::application::{domain::Stored, ports::outgoing::StoreError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "education")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub degree: String,

    #[sea_orm(column_type = "Text")]
    pub school: String,

    #[sea_orm(column_type = "Text")]
    pub years: String,

    #[sea_orm(column_type = "Text")]
    pub location: String,

    #[sea_orm(column_type = "Text")]
    pub about: String,

    // JSONB array of strings
    #[sea_orm(column_type = "JsonBinary")]
    pub highlights: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_stored(&self) -> Result<Stored<EducationRecord>, StoreError> {
        Ok(Stored {
            id: self.id,
            record: EducationRecord {
                degree: self.degree.clone(),
                school: self.school.clone(),
                years: self.years.clone(),
                location: self.location.clone(),
                about: self.about.clone(),
                highlights: from_json(&self.highlights)?,
            },
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
