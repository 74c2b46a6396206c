//! Re-fetch persisted records to verify durable state.
//!
//! After mutating through the API, the in-memory record a test holds is
//! stale by construction. These helpers fetch fresh copies by `(kind, id)`
//! so assertions run against what the store actually persisted.

use apitest_store::{RecordStore, StoreResult, StoredRecord};

/// Re-fetches the record sharing `record`'s identity from the store.
///
/// Returns a fresh copy; the input is untouched.
///
/// # Errors
///
/// * `StoreError::NotFound` - the identity no longer exists. That is a
///   test-data bug; it propagates rather than being recovered.
pub async fn reload_record<S>(store: &S, record: &StoredRecord) -> StoreResult<StoredRecord>
where
    S: RecordStore + ?Sized,
{
    store.find_by_id(&record.kind, &record.id).await
}

/// Element-wise [`reload_record`], preserving order.
///
/// The first missing record aborts the whole reload.
pub async fn reload_records<S>(
    store: &S,
    records: &[StoredRecord],
) -> StoreResult<Vec<StoredRecord>>
where
    S: RecordStore + ?Sized,
{
    let mut fresh = Vec::with_capacity(records.len());
    for record in records {
        fresh.push(reload_record(store, record).await?);
    }
    Ok(fresh)
}
