//! In-memory store backend.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::core::RecordStore;
use crate::error::{StoreError, StoreResult};
use crate::record::StoredRecord;

/// A process-local [`RecordStore`] backed by a hash map.
///
/// Interior locking lets a single instance be shared (behind `Arc`) between
/// an application fixture and the test body. Lock scope is one operation;
/// there are no cross-operation transactions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<(String, String), Value>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records across all kinds.
    pub fn len(&self) -> usize {
        self.records.read().expect("store lock poisoned").len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_err() -> StoreError {
        StoreError::Backend("store lock poisoned".to_string())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, kind: &str, body: Value) -> StoreResult<StoredRecord> {
        let mut body = body;
        let explicit = body.get("id").and_then(Value::as_str).map(str::to_string);
        let id = match explicit {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4().to_string();
                if let Some(fields) = body.as_object_mut() {
                    fields.insert("id".to_string(), Value::String(id.clone()));
                }
                id
            }
        };

        let mut records = self.records.write().map_err(|_| Self::lock_err())?;
        let key = (kind.to_string(), id.clone());
        if records.contains_key(&key) {
            return Err(StoreError::already_exists(kind, &id));
        }
        records.insert(key, body.clone());
        Ok(StoredRecord::new(kind, id, body))
    }

    async fn find_by_id(&self, kind: &str, id: &str) -> StoreResult<StoredRecord> {
        let records = self.records.read().map_err(|_| Self::lock_err())?;
        records
            .get(&(kind.to_string(), id.to_string()))
            .map(|body| StoredRecord::new(kind, id, body.clone()))
            .ok_or_else(|| StoreError::not_found(kind, id))
    }

    async fn update(&self, kind: &str, id: &str, body: Value) -> StoreResult<StoredRecord> {
        let mut body = body;
        if let Some(fields) = body.as_object_mut() {
            fields.insert("id".to_string(), Value::String(id.to_string()));
        }

        let mut records = self.records.write().map_err(|_| Self::lock_err())?;
        let key = (kind.to_string(), id.to_string());
        match records.get_mut(&key) {
            Some(stored) => {
                *stored = body.clone();
                Ok(StoredRecord::new(kind, id, body))
            }
            None => Err(StoreError::not_found(kind, id)),
        }
    }

    async fn delete(&self, kind: &str, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| Self::lock_err())?;
        records
            .remove(&(kind.to_string(), id.to_string()))
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(kind, id))
    }

    async fn list(&self, kind: &str) -> StoreResult<Vec<StoredRecord>> {
        let records = self.records.read().map_err(|_| Self::lock_err())?;
        let mut found: Vec<StoredRecord> = records
            .iter()
            .filter(|((k, _), _)| k.as_str() == kind)
            .map(|((k, id), body)| StoredRecord::new(k.clone(), id.clone(), body.clone()))
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(found)
    }
}
