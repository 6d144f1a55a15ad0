use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::resource::adapter::outgoing::sea_orm_support::{
    apply_sort, map_db_err, to_json,
};
use crate::modules::resource::application::{
    domain::{SortSpec, Stored},
    ports::outgoing::{ResourceStore, StoreError},
};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct ProjectStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Without an explicit sort, projects are listed in insertion order.
    fn list_query(sort: Option<SortSpec>) -> Result<Select<Entity>, StoreError> {
        match sort {
            Some(_) => apply_sort(Entity::find(), sort),
            None => Ok(Entity::find().order_by_asc(Column::CreatedAt)),
        }
    }
}

#[async_trait]
impl ResourceStore<ProjectRecord> for ProjectStorePostgres {
    async fn find(&self, sort: Option<SortSpec>) -> Result<Vec<Stored<ProjectRecord>>, StoreError> {
        let models = Self::list_query(sort)?
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        models.iter().map(|model| model.to_stored()).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Stored<ProjectRecord>>, StoreError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_stored())
            .transpose()
    }

    async fn insert(&self, record: ProjectRecord) -> Result<Stored<ProjectRecord>, StoreError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(record.title),
            description: Set(record.description),
            technologies: Set(to_json(&record.technologies)?),
            image_url: Set(record.image_url),
            github_url: Set(record.github_url),
            live_url: Set(record.live_url),
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
        record: ProjectRecord,
    ) -> Result<Option<Stored<ProjectRecord>>, StoreError> {
        let changes = ActiveModel {
            title: Set(record.title),
            description: Set(record.description),
            technologies: Set(to_json(&record.technologies)?),
            image_url: Set(record.image_url),
            github_url: Set(record.github_url),
            live_url: Set(record.live_url),
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

// ============================================================================
// Tests
// ============================================================================
