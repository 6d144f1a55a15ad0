use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::resource::adapter::outgoing::sea_orm_support::{apply_sort, map_db_err};
use crate::modules::resource::application::{
    domain::{SortSpec, Stored},
    ports::outgoing::{ResourceStore, StoreError},
};
use crate::modules::skill::application::domain::SkillRecord;

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct SkillStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceStore<SkillRecord> for SkillStorePostgres {
    async fn find(&self, sort: Option<SortSpec>) -> Result<Vec<Stored<SkillRecord>>, StoreError> {
        let models = apply_sort(Entity::find(), sort)?
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.iter().map(|model| model.to_stored()).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Stored<SkillRecord>>, StoreError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model.map(|m| m.to_stored()).transpose()
    }

    async fn insert(&self, record: SkillRecord) -> Result<Stored<SkillRecord>, StoreError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(record.name),
            proficiency: Set(record.proficiency.as_str().to_string()),
            category: Set(record.category.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;

        inserted.to_stored()
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        record: SkillRecord,
    ) -> Result<Option<Stored<SkillRecord>>, StoreError> {
        let changes = ActiveModel {
            name: Set(record.name),
            proficiency: Set(record.proficiency.as_str().to_string()),
            category: Set(record.category.as_str().to_string()),
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
