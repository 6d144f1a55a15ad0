use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::experience::application::domain::ExperienceRecord;
use crate::modules::resource::adapter::outgoing::sea_orm_support::{
    apply_sort, map_db_err, to_json,
};
use crate::modules::resource::application::{
    domain::{SortSpec, Stored},
    ports::outgoing::{ResourceStore, StoreError},
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct ExperienceStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceStore<ExperienceRecord> for ExperienceStorePostgres {
    async fn find(
        &self,
        sort: Option<SortSpec>,
    ) -> Result<Vec<Stored<ExperienceRecord>>, StoreError> {
        let models = apply_sort(Entity::find(), sort)?
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.iter().map(|model| model.to_stored()).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Stored<ExperienceRecord>>, StoreError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_stored())
            .transpose()
    }

    async fn insert(
        &self,
        record: ExperienceRecord,
    ) -> Result<Stored<ExperienceRecord>, StoreError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(record.company),
            position: Set(record.position),
            location: Set(record.location),
            description: Set(record.description),
            responsibilities: Set(to_json(&record.responsibilities)?),
            start_date: Set(record.start_date.fixed_offset()),
            end_date: Set(record.end_date.map(|d| d.fixed_offset())),
            current: Set(record.current),
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
        record: ExperienceRecord,
    ) -> Result<Option<Stored<ExperienceRecord>>, StoreError> {
        // Optional columns are written even when empty: update replaces the record.
        let changes = ActiveModel {
            company: Set(record.company),
            position: Set(record.position),
            location: Set(record.location),
            description: Set(record.description),
            responsibilities: Set(to_json(&record.responsibilities)?),
            start_date: Set(record.start_date.fixed_offset()),
            end_date: Set(record.end_date.map(|d| d.fixed_offset())),
            current: Set(record.current),
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
