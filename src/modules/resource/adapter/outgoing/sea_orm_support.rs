// Helpers shared by the PostgreSQL stores of every resource.

use std::str::FromStr;

use sea_orm::{DbErr, EntityTrait, QueryOrder, Select, SqlErr};

use crate::modules::resource::application::{
    domain::{SortDirection, SortSpec},
    ports::outgoing::StoreError,
};

pub fn apply_sort<E>(query: Select<E>, sort: Option<SortSpec>) -> Result<Select<E>, StoreError>
where
    E: EntityTrait,
{
    let Some(sort) = sort else {
        return Ok(query);
    };

    let column = E::Column::from_str(sort.column).map_err(|_| {
        StoreError::DatabaseError(format!("Unknown sort column `{}`", sort.column))
    })?;

    Ok(match sort.direction {
        SortDirection::Ascending => query.order_by_asc(column),
        SortDirection::Descending => query.order_by_desc(column),
    })
}

pub fn map_db_err(e: DbErr) -> StoreError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return StoreError::UniquenessConflict;
    }

    let msg = e.to_string().to_lowercase();

    if msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
    {
        StoreError::UniquenessConflict
    } else if msg.contains("23514") || msg.contains("check constraint") {
        StoreError::ValidationFailed(vec![
            "A field value was rejected by the store".to_string()
        ])
    } else {
        StoreError::DatabaseError(e.to_string())
    }
}

pub fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(data).map_err(|e| StoreError::DatabaseError(e.to_string()))
}

pub fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, StoreError> {
    serde_json::from_value(json.clone()).map_err(|e| StoreError::DatabaseError(e.to_string()))
}
