//! # apitest-store - Record Store Seam for Test Harnesses
//!
//! This crate defines the persistence interface the `apitest` reload helpers
//! run against, together with an in-memory backend suitable for test
//! fixtures.
//!
//! The interface is deliberately small: a record is a JSON body filed under a
//! `(kind, id)` pair, and the store can create, fetch, update, delete, and
//! list them. Anything that can answer `find_by_id` can back the reload
//! helpers - a real database adapter, a stub, or the bundled [`MemoryStore`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use apitest_store::{MemoryStore, RecordStore};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), apitest_store::StoreError> {
//!     let store = MemoryStore::new();
//!
//!     let widget = store.create("widgets", json!({"name": "sprocket"})).await?;
//!     let again = store.find_by_id("widgets", &widget.id).await?;
//!     assert_eq!(widget.body["name"], again.body["name"]);
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod memory;
pub mod record;

pub use crate::core::RecordStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use record::StoredRecord;
