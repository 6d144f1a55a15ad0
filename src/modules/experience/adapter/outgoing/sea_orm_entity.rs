use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::modules::experience::application::domain::ExperienceRecord;
use crate::modules::resource::adapter::outgoing::sea_orm_support::from_json;
use crate::modules::resource::application::{domain::Stored, ports::outgoing::StoreError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub company: String,

    #[sea_orm(column_type = "Text")]
    pub position: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub responsibilities: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub start_date: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub end_date: Option<DateTimeWithTimeZone>,

    pub current: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_stored(&self) -> Result<Stored<ExperienceRecord>, StoreError> {
        Ok(Stored {
            id: self.id,
            record: ExperienceRecord {
                company: self.company.clone(),
                position: self.position.clone(),
                location: self.location.clone(),
                description: self.description.clone(),
                responsibilities: from_json(&self.responsibilities)?,
                start_date: self.start_date.with_timezone(&Utc),
                end_date: self.end_date.map(|d| d.with_timezone(&Utc)),
                current: self.current,
            },
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
