use chrono::Utc;
use sea_orm::entity::prelude::*;

use crate::modules::resource::application::{domain::Stored, ports::outgoing::StoreError};
use crate::modules::skill::application::domain::{Proficiency, SkillCategory, SkillRecord};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", unique)]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub proficiency: String,

    #[sea_orm(column_type = "Text")]
    pub category: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_stored(&self) -> Result<Stored<SkillRecord>, StoreError> {
        let proficiency: Proficiency = self
            .proficiency
            .parse()
            .map_err(StoreError::DatabaseError)?;
        let category: SkillCategory = self.category.parse().map_err(StoreError::DatabaseError)?;

        Ok(Stored {
            id: self.id,
            record: SkillRecord {
                name: self.name.clone(),
                proficiency,
                category,
            },
            created_at: self.created_at.with_timezone(&Utc),
            updated_at: self.updated_at.with_timezone(&Utc),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
