//! The HTTP client seam.
//!
//! [`TestClient`] is the capability the harness composes over: five verbs
//! plus session management. Any host test framework's client can implement
//! it by delegation; [`LocalClient`] is the bundled implementation for axum
//! applications, backed by [`axum_test::TestServer`].

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use http::header::AUTHORIZATION;
use http::{HeaderValue, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::identity::Identity;

/// An owned snapshot of an HTTP response.
///
/// Created by the client per call and returned to the caller; the harness
/// inspects only the status code and, when dumping diagnostics, the decoded
/// body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    /// Creates a response snapshot from a status and body text.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// The response status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON, panicking on malformed bodies.
    ///
    /// Test-facing counterpart of [`ApiResponse::decode`]; a body that fails
    /// to parse is a failed test, not a condition to handle.
    pub fn json(&self) -> Value {
        self.decode()
            .unwrap_or_else(|err| panic!("response body is not valid JSON: {err}\n{}", self.body))
    }

    /// Decodes the body into a typed value.
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

/// Interface to an HTTP test client.
///
/// One call per method, blocking until the response arrives. The only state
/// a client carries between calls is its session; `force_login` replaces it
/// and `logout` clears it.
#[async_trait]
pub trait TestClient: Send {
    /// Establishes an authenticated session for `identity`.
    ///
    /// Mutates the client's session state; subsequent requests are issued as
    /// `identity` until the next `force_login` or `logout`.
    fn force_login(&mut self, identity: &Identity);

    /// Clears the session.
    fn logout(&mut self);

    /// Issues a GET request.
    async fn get(&self, path: &str) -> ApiResponse;

    /// Issues a POST request with a JSON body.
    async fn post(&self, path: &str, body: &Value) -> ApiResponse;

    /// Issues a PUT request with a JSON body.
    async fn put(&self, path: &str, body: &Value) -> ApiResponse;

    /// Issues an OPTIONS request.
    async fn options(&self, path: &str) -> ApiResponse;

    /// Issues a DELETE request.
    ///
    /// Authentication happens through the session alone; the transport call
    /// takes no identity.
    async fn delete(&self, path: &str) -> ApiResponse;
}

/// A [`TestClient`] for in-process axum applications.
///
/// Session state is an `Authorization` header applied to every request
/// while logged in.
pub struct LocalClient {
    server: TestServer,
    session: Option<HeaderValue>,
}

impl LocalClient {
    /// Creates a client for the given router, panicking if the test server
    /// cannot be built.
    pub fn new(app: Router) -> Self {
        Self::try_new(app).expect("failed to build test server")
    }

    /// Fallible counterpart of [`LocalClient::new`].
    pub fn try_new(app: Router) -> anyhow::Result<Self> {
        let server = TestServer::new(app)?;
        Ok(Self::from_server(server))
    }

    /// Wraps an already-configured test server.
    pub fn from_server(server: TestServer) -> Self {
        Self {
            server,
            session: None,
        }
    }

    /// Returns the identity header currently applied, if any.
    pub fn session(&self) -> Option<&HeaderValue> {
        self.session.as_ref()
    }

    fn authorized(&self, request: axum_test::TestRequest) -> axum_test::TestRequest {
        match &self.session {
            Some(header) => request.add_header(AUTHORIZATION, header.clone()),
            None => request,
        }
    }

    async fn send(&self, request: axum_test::TestRequest) -> ApiResponse {
        let response = self.authorized(request).await;
        ApiResponse::new(response.status_code(), response.text())
    }
}

#[async_trait]
impl TestClient for LocalClient {
    fn force_login(&mut self, identity: &Identity) {
        let header = HeaderValue::from_str(&identity.bearer())
            .unwrap_or_else(|_| panic!("identity {} has a malformed token", identity.name()));
        self.session = Some(header);
    }

    fn logout(&mut self) {
        self.session = None;
    }

    async fn get(&self, path: &str) -> ApiResponse {
        self.send(self.server.get(path)).await
    }

    async fn post(&self, path: &str, body: &Value) -> ApiResponse {
        self.send(self.server.post(path).json(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> ApiResponse {
        self.send(self.server.put(path).json(body)).await
    }

    async fn options(&self, path: &str) -> ApiResponse {
        self.send(self.server.method(Method::OPTIONS, path)).await
    }

    async fn delete(&self, path: &str) -> ApiResponse {
        self.send(self.server.delete(path)).await
    }
}
