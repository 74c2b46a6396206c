//! Shared fixtures for the integration tests.

// Each test binary compiles this module; not every binary uses every helper.
#![allow(dead_code)]

pub mod app;

use std::sync::Arc;

use apitest::store::{MemoryStore, RecordStore, StoredRecord};
use apitest::{Harness, Identity, LocalClient};
use serde_json::json;

/// Installs a subscriber so `debug`-flagged calls are visible under
/// `RUST_LOG=apitest=debug`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The standard test identity.
pub fn alice() -> Identity {
    Identity::named("alice")
}

/// A harness over the widgets app, sharing `store` with the test body.
pub fn widgets_harness(store: &Arc<MemoryStore>) -> Harness<LocalClient> {
    Harness::new(LocalClient::new(app::widgets_app(Arc::clone(store))))
}

/// A harness over the deletion-forbidding widgets app.
pub fn locked_widgets_harness(store: &Arc<MemoryStore>) -> Harness<LocalClient> {
    Harness::new(LocalClient::new(app::locked_widgets_app(Arc::clone(store))))
}

/// Seeds one widget directly into the store.
pub async fn seed_widget(store: &MemoryStore, name: &str) -> StoredRecord {
    store
        .create("widgets", json!({"name": name}))
        .await
        .expect("failed to seed widget")
}
