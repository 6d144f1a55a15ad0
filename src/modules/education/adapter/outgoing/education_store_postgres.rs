use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::education::application::domain::EducationRecord;
use crate::modules::resource::adapter::outgoing::sea_orm_support::{
    apply_sort, map_db_err, to_json,
};
use crate::modules::resource::application::{
    domain::{SortSpec, Stored},
    ports::outgoing::{ResourceStore, StoreError},
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct EducationStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceStore<EducationRecord> for EducationStorePostgres {
    async fn find(
        &self,
        sort: Option<SortSpec>,
    ) -> Result<Vec<Stored<EducationRecord>>, StoreError> {
        let models = apply_sort(Entity::find(), sort)?
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.iter().map(|model| model.to_stored()).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Stored<EducationRecord>>, StoreError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_stored())
            .transpose()
    }

    async fn insert(&self, record: EducationRecord) -> Result<Stored<EducationRecord>, StoreError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            degree: Set(record.degree),
            school: Set(record.school),
            years: Set(record.years),
            location: Set(record.location),
            about: Set(record.about),
            highlights: Set(to_json(&record.highlights)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        active
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?
            .to_stored()
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        record: EducationRecord,
    ) -> Result<Option<Stored<EducationRecord>>, StoreError> {
        let changes = ActiveModel {
            degree: Set(record.degree),
            school: Set(record.school),
            years: Set(record.years),
            location: Set(record.location),
            about: Set(record.about),
            highlights: Set(to_json(&record.highlights)?),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated.first().map(|m| m.to_stored()).transpose()
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}
