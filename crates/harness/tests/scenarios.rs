//! The inheritable suite scenarios against concrete widget suites.

mod common;

use std::sync::Arc;

use apitest::store::{MemoryStore, RecordStore};
use apitest::{ApiSuite, Expect, Harness, LocalClient};
use async_trait::async_trait;
use axum::http::StatusCode;

use common::{alice, locked_widgets_harness, seed_widget, widgets_harness};

/// Suite over the app that forbids deletion.
struct LockedWidgetSuite {
    harness: Harness<LocalClient>,
}

#[async_trait]
impl ApiSuite for LockedWidgetSuite {
    type Client = LocalClient;

    fn base_path(&self) -> &str {
        "/api/widgets/"
    }

    fn harness(&mut self) -> &mut Harness<LocalClient> {
        &mut self.harness
    }

    async fn check_cannot_delete(&mut self) {
        let path = self.item_path("w-1");
        self.harness()
            .delete(&path, &alice(), Expect::status(StatusCode::FORBIDDEN))
            .await;
    }
}

/// Suite over the permissive app: deletion is explicitly allowed.
struct OpenWidgetSuite {
    harness: Harness<LocalClient>,
}

#[async_trait]
impl ApiSuite for OpenWidgetSuite {
    type Client = LocalClient;

    fn base_path(&self) -> &str {
        "/api/widgets/"
    }

    fn harness(&mut self) -> &mut Harness<LocalClient> {
        &mut self.harness
    }

    async fn check_cannot_delete(&mut self) {
        // this API permits deletion; state it explicitly
        let path = self.item_path("w-1");
        self.harness()
            .delete(&path, &alice(), Expect::default())
            .await;
    }
}

#[tokio::test]
async fn login_required_on_the_widgets_collection() {
    let store = Arc::new(MemoryStore::new());
    let mut suite = LockedWidgetSuite {
        harness: locked_widgets_harness(&store),
    };
    suite.check_login_required().await;
}

#[tokio::test]
async fn locked_suite_confirms_deletes_are_forbidden() {
    let store = Arc::new(MemoryStore::new());
    seed_widget(&store, "keep-me").await;
    let mut suite = LockedWidgetSuite {
        harness: locked_widgets_harness(&store),
    };

    suite.check_cannot_delete().await;
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn open_suite_states_its_delete_policy() {
    let store = Arc::new(MemoryStore::new());
    store
        .create("widgets", serde_json::json!({"id": "w-1", "name": "sprocket"}))
        .await
        .expect("failed to seed widget");
    let mut suite = OpenWidgetSuite {
        harness: widgets_harness(&store),
    };

    suite.check_cannot_delete().await;
    assert!(store.is_empty());
}

#[tokio::test]
async fn item_path_builds_on_base_path() {
    let store = Arc::new(MemoryStore::new());
    let suite = LockedWidgetSuite {
        harness: locked_widgets_harness(&store),
    };
    assert_eq!(suite.item_path("w-9"), "/api/widgets/w-9/");
}
