//! The store trait every backend implements.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreResult;
use crate::record::StoredRecord;

/// Interface to a record store.
///
/// Implementations must be safe to share between the application under test
/// and the test body, so the same store instance can be seeded directly and
/// observed through the API.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a new record.
    ///
    /// If the body carries a string `"id"` field, that id is used (and must
    /// be free); otherwise the store assigns one. The returned record's body
    /// always contains the effective id.
    ///
    /// # Errors
    ///
    /// * `StoreError::AlreadyExists` - a record with the requested id exists
    async fn create(&self, kind: &str, body: Value) -> StoreResult<StoredRecord>;

    /// Fetches the record with the given kind and id.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no such record
    async fn find_by_id(&self, kind: &str, id: &str) -> StoreResult<StoredRecord>;

    /// Replaces the body of an existing record.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no such record
    async fn update(&self, kind: &str, id: &str, body: Value) -> StoreResult<StoredRecord>;

    /// Removes the record with the given kind and id.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no such record
    async fn delete(&self, kind: &str, id: &str) -> StoreResult<()>;

    /// Lists all records of a kind, ordered by id.
    async fn list(&self, kind: &str) -> StoreResult<Vec<StoredRecord>>;
}
