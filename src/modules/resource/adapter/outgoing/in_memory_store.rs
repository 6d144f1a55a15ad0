use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::resource::application::{
    domain::{Resource, SortDirection, SortSpec, Stored},
    ports::outgoing::{ResourceStore, StoreError},
};

/// Process-local collection. Every mutation runs under the write lock, so the
/// uniqueness check and update-if-exists are atomic.
#[derive(Debug)]
pub struct InMemoryStore<R> {
    documents: RwLock<Vec<Stored<R>>>,
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }
}

impl<R: Resource> InMemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }
}

fn collides<R: Resource>(documents: &[Stored<R>], record: &R, except: Option<Uuid>) -> bool {
    let Some(key) = record.unique_value() else {
        return false;
    };
    documents
        .iter()
        .filter(|doc| Some(doc.id) != except)
        .any(|doc| doc.record.unique_value() == Some(key))
}

fn sort_value<R: Resource>(doc: &Stored<R>, field: &str) -> Value {
    serde_json::to_value(&doc.record)
        .ok()
        .and_then(|value| value.get(field).cloned())
        .unwrap_or(Value::Null)
}

/// Absent values sort first, like a document store does with missing fields.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for InMemoryStore<R> {
    async fn find(&self, sort: Option<SortSpec>) -> Result<Vec<Stored<R>>, StoreError> {
        let documents = self.documents.read().await.clone();

        let Some(sort) = sort else {
            return Ok(documents);
        };

        let mut keyed: Vec<(Value, Stored<R>)> = documents
            .into_iter()
            .map(|doc| (sort_value(&doc, sort.field), doc))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| match sort.direction {
            SortDirection::Ascending => compare_values(a, b),
            SortDirection::Descending => compare_values(b, a),
        });

        Ok(keyed.into_iter().map(|(_, doc)| doc).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Stored<R>>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| doc.id == id).cloned())
    }

    async fn insert(&self, record: R) -> Result<Stored<R>, StoreError> {
        let mut documents = self.documents.write().await;

        if collides(&documents, &record, None) {
            return Err(StoreError::UniquenessConflict);
        }

        let now = Utc::now();
        let stored = Stored {
            id: Uuid::new_v4(),
            record,
            created_at: now,
            updated_at: now,
        };
        documents.push(stored.clone());

        Ok(stored)
    }

    async fn find_by_id_and_update(
        &self,
        id: Uuid,
        record: R,
    ) -> Result<Option<Stored<R>>, StoreError> {
        let mut documents = self.documents.write().await;

        let Some(position) = documents.iter().position(|doc| doc.id == id) else {
            return Ok(None);
        };

        if collides(&documents, &record, Some(id)) {
            return Err(StoreError::UniquenessConflict);
        }

        let doc = &mut documents[position];
        doc.record = record;
        doc.updated_at = Utc::now();

        Ok(Some(doc.clone()))
    }

    async fn find_by_id_and_delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut documents = self.documents.write().await;

        match documents.iter().position(|doc| doc.id == id) {
            Some(position) => {
                documents.remove(position);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
