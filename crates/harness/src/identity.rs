//! The principal a request is authenticated as.

use std::fmt;

/// An identity the harness can log a client in as.
///
/// The harness never inspects an identity beyond handing it to
/// [`TestClient::force_login`](crate::client::TestClient::force_login); it is
/// borrowed for the duration of one call and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    token: String,
}

impl Identity {
    /// Creates an identity with an explicit bearer token.
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }

    /// Creates an identity whose token is derived from its name.
    ///
    /// Convenient for fixtures where the application under test accepts any
    /// well-formed token.
    pub fn named(name: &str) -> Self {
        Self::new(name, format!("token-{name}"))
    }

    /// The identity's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The token rendered as an `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
