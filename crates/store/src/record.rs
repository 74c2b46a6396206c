//! The stored record value type.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persisted record as returned by a [`RecordStore`](crate::RecordStore).
///
/// Records are addressed by a `(kind, id)` pair, where `kind` is the
/// collection name (e.g. `"widgets"`) and `id` is unique within the kind.
/// The body is arbitrary JSON; the store itself attaches no schema to it.
///
/// Each store operation returns a fresh copy. Mutating a returned record
/// never touches the store - that is the point: reload helpers compare a
/// locally mutated copy against what the store actually holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// The collection this record belongs to.
    pub kind: String,
    /// The record's unique id within its kind.
    pub id: String,
    /// The record content as JSON.
    pub body: Value,
}

impl StoredRecord {
    /// Creates a record value from its parts.
    pub fn new(kind: impl Into<String>, id: impl Into<String>, body: Value) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            body,
        }
    }

    /// Returns the `(kind, id)` pair addressing this record.
    pub fn key(&self) -> (&str, &str) {
        (&self.kind, &self.id)
    }
}

/// Renders as `kind/id body-json`, which is what the unordered collection
/// assertion in the harness compares.
impl fmt::Display for StoredRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.kind, self.id, self.body)
    }
}
