//! Login-and-assert shortcuts.
//!
//! Every shortcut performs exactly one HTTP call and exactly one status-code
//! assertion: optional login, the call, an optional diagnostic dump, the
//! assertion, and the response back to the caller. No retries, no state
//! between calls beyond the client's own session.

use http::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiResponse, TestClient};
use crate::expect::{Expect, VerbDefaults};
use crate::identity::Identity;

/// Assertion-shortcut harness over a [`TestClient`].
///
/// # Example
///
/// ```rust,ignore
/// use apitest::{Expect, Harness, Identity, LocalClient};
///
/// #[tokio::test]
/// async fn create_widget() {
///     let mut harness = Harness::new(LocalClient::new(app()));
///     let alice = Identity::named("alice");
///
///     // login + POST + assert 201, in one call
///     let response = harness
///         .post("/api/widgets/", &serde_json::json!({"name": "x"}), &alice, Expect::default())
///         .await;
///     assert_eq!(response.json()["name"], "x");
/// }
/// ```
pub struct Harness<C: TestClient> {
    client: C,
    defaults: VerbDefaults,
    transcript: Vec<String>,
}

impl<C: TestClient> Harness<C> {
    /// Creates a harness with the standard per-verb defaults.
    pub fn new(client: C) -> Self {
        Self::with_defaults(client, VerbDefaults::default())
    }

    /// Creates a harness with custom per-verb defaults.
    pub fn with_defaults(client: C, defaults: VerbDefaults) -> Self {
        Self {
            client,
            defaults,
            transcript: Vec::new(),
        }
    }

    /// Direct access to the underlying client.
    pub fn client(&mut self) -> &mut C {
        &mut self.client
    }

    /// Consumes the harness, returning the client.
    pub fn into_client(self) -> C {
        self.client
    }

    /// The diagnostic lines emitted so far by `debug`-flagged calls.
    ///
    /// Two lines per dump: one status line, one body line.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Shortcut for optional login + GET + status assertion.
    ///
    /// `identity = None` issues the request unauthenticated and never
    /// touches the login operation.
    pub async fn get(
        &mut self,
        path: &str,
        identity: Option<&Identity>,
        expect: Expect,
    ) -> ApiResponse {
        if let Some(identity) = identity {
            self.client.force_login(identity);
        }
        let response = self.client.get(path).await;
        let expected = expect.status.unwrap_or(self.defaults.get);
        self.finish("GET", path, response, expected, expect.debug)
    }

    /// Shortcut for login + POST + status assertion.
    pub async fn post(
        &mut self,
        path: &str,
        body: &Value,
        identity: &Identity,
        expect: Expect,
    ) -> ApiResponse {
        self.client.force_login(identity);
        let response = self.client.post(path, body).await;
        let expected = expect.status.unwrap_or(self.defaults.post);
        self.finish("POST", path, response, expected, expect.debug)
    }

    /// Shortcut for login + PUT + status assertion.
    pub async fn put(
        &mut self,
        path: &str,
        body: &Value,
        identity: &Identity,
        expect: Expect,
    ) -> ApiResponse {
        self.client.force_login(identity);
        let response = self.client.put(path, body).await;
        let expected = expect.status.unwrap_or(self.defaults.put);
        self.finish("PUT", path, response, expected, expect.debug)
    }

    /// Shortcut for login + OPTIONS + status assertion.
    pub async fn options(
        &mut self,
        path: &str,
        identity: &Identity,
        expect: Expect,
    ) -> ApiResponse {
        self.client.force_login(identity);
        let response = self.client.options(path).await;
        let expected = expect.status.unwrap_or(self.defaults.options);
        self.finish("OPTIONS", path, response, expected, expect.debug)
    }

    /// Shortcut for login + DELETE + status assertion.
    ///
    /// Returns nothing; a delete's body is not worth inspecting.
    /// Authentication happens solely through the login step.
    pub async fn delete(&mut self, path: &str, identity: &Identity, expect: Expect) {
        self.client.force_login(identity);
        let response = self.client.delete(path).await;
        let expected = expect.status.unwrap_or(self.defaults.delete);
        self.finish("DELETE", path, response, expected, expect.debug);
    }

    /// Dump-then-assert tail shared by every shortcut.
    fn finish(
        &mut self,
        verb: &str,
        path: &str,
        response: ApiResponse,
        expected: StatusCode,
        dump: bool,
    ) -> ApiResponse {
        if dump {
            self.dump(verb, path, &response);
        }
        let actual = response.status();
        assert_eq!(
            actual, expected,
            "{verb} {path}: expected status {expected}, got {actual}"
        );
        response
    }

    /// Emits one status line and one body line, to `tracing` and to the
    /// in-harness transcript.
    fn dump(&mut self, verb: &str, path: &str, response: &ApiResponse) {
        let status_line = format!("{verb} {path} -> {}", response.status());
        let body_line = match response.decode::<Value>() {
            Ok(body) => format!("body: {body}"),
            Err(_) => format!("body (raw): {}", response.text()),
        };
        debug!(target: "apitest", "{status_line}");
        debug!(target: "apitest", "{body_line}");
        self.transcript.push(status_line);
        self.transcript.push(body_line);
    }
}
