//! # apitest - Assertion-Shortcut Harness for HTTP API Tests
//!
//! This crate cuts the boilerplate out of REST API tests: each shortcut
//! method is one login, one HTTP call, and one status-code assertion, with
//! the response handed back for further inspection.
//!
//! ## What's here
//!
//! - [`Harness`] - the shortcut methods (`get`/`post`/`put`/`options`/
//!   `delete`), each asserting a per-verb default status unless told
//!   otherwise via [`Expect`].
//! - [`TestClient`] - the client seam. Implement it over your framework's
//!   test client, or use [`LocalClient`] for in-process axum apps.
//! - [`ApiSuite`] - inheritable scenarios: `check_login_required` comes for
//!   free, `check_cannot_delete` must be written by every suite (it has no
//!   default body, so forgetting it is a compile error).
//! - [`reload`] - re-fetch persisted records by identity to verify a
//!   mutation actually reached the store.
//! - [`assertions`] - status checks and the order-ignoring multiset
//!   comparison [`assertions::assert_same_items`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use apitest::{Expect, Harness, Identity, LocalClient};
//! use serde_json::json;
//!
//! #[tokio::test]
//! async fn widgets_can_be_created() {
//!     let mut harness = Harness::new(LocalClient::new(widgets_app()));
//!     let alice = Identity::named("alice");
//!
//!     let response = harness
//!         .post("/api/widgets/", &json!({"name": "x"}), &alice, Expect::default())
//!         .await;
//!
//!     assert_eq!(response.json()["name"], "x");
//! }
//! ```
//!
//! ## Defaults
//!
//! GET expects 200, POST 201, PUT 200, OPTIONS 200, DELETE 204. See
//! [`VerbDefaults`] to change them per harness, or [`Expect::status`] per
//! call.
//!
//! Every shortcut performs exactly one HTTP call and exactly one assertion.
//! There are no retries and no state between calls beyond the client's
//! session, which `force_login` mutates in place - so one client per test,
//! never shared across concurrent tests.

pub mod assertions;
pub mod client;
pub mod expect;
pub mod harness;
pub mod identity;
pub mod reload;
pub mod suite;

pub use crate::client::{ApiResponse, LocalClient, TestClient};
pub use crate::expect::{Expect, VerbDefaults};
pub use crate::harness::Harness;
pub use crate::identity::Identity;
pub use crate::suite::ApiSuite;

// The store seam, re-exported so suites depend on one crate.
pub use apitest_store as store;
