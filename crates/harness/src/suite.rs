//! Inheritable test scenarios for REST-style resource suites.

use async_trait::async_trait;
use http::StatusCode;

use crate::client::TestClient;
use crate::expect::Expect;
use crate::harness::Harness;

/// A concrete suite of API tests for one resource collection.
///
/// Implementors supply the collection's `base_path` and a harness, and get
/// the standard scenarios in return. Deletion policy is deliberately not
/// defaulted: `check_cannot_delete` has no default body, so a suite that
/// forgets to state whether deletion is allowed fails to compile instead of
/// silently passing.
///
/// ```compile_fail
/// use apitest::{ApiSuite, Harness, LocalClient};
/// use async_trait::async_trait;
///
/// struct WidgetSuite {
///     harness: Harness<LocalClient>,
/// }
///
/// // Missing `check_cannot_delete`: this impl does not compile.
/// #[async_trait]
/// impl ApiSuite for WidgetSuite {
///     type Client = LocalClient;
///
///     fn base_path(&self) -> &str {
///         "/api/widgets/"
///     }
///
///     fn harness(&mut self) -> &mut Harness<LocalClient> {
///         &mut self.harness
///     }
/// }
/// ```
#[async_trait]
pub trait ApiSuite: Send {
    /// The client type the suite's harness wraps.
    type Client: TestClient;

    /// The resource collection path, e.g. `"/api/widgets/"`.
    ///
    /// Must end with a slash; [`ApiSuite::item_path`] appends to it.
    fn base_path(&self) -> &str;

    /// The harness the scenarios run through.
    fn harness(&mut self) -> &mut Harness<Self::Client>;

    /// The collection path as an owned string.
    fn collection_path(&self) -> String {
        self.base_path().to_string()
    }

    /// The path of a single item, `{base_path}{id}/`.
    fn item_path(&self, id: &str) -> String {
        format!("{}{}/", self.base_path(), id)
    }

    /// Standard scenario: an unauthenticated GET on the collection is
    /// forbidden.
    async fn check_login_required(&mut self) {
        let path = self.collection_path();
        self.harness()
            .get(&path, None, Expect::status(StatusCode::FORBIDDEN))
            .await;
    }

    /// Standard scenario: state the suite's deletion policy.
    ///
    /// No default body. Assert that deletion is disallowed, or explicitly
    /// exercise a permitted delete - either way the author has to decide.
    async fn check_cannot_delete(&mut self);
}
