//! Per-call expectations and per-verb status defaults.

use http::StatusCode;

/// Default expected status codes, by verb.
///
/// | Verb | Default |
/// |---------|---------|
/// | GET | 200 OK |
/// | POST | 201 Created |
/// | PUT | 200 OK |
/// | OPTIONS | 200 OK |
/// | DELETE | 204 No Content |
///
/// A harness carries one of these; suites whose API deviates (e.g. a POST
/// endpoint that answers 200) can install their own instead of overriding
/// every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbDefaults {
    /// Expected status for GET calls.
    pub get: StatusCode,
    /// Expected status for POST calls.
    pub post: StatusCode,
    /// Expected status for PUT calls.
    pub put: StatusCode,
    /// Expected status for OPTIONS calls.
    pub options: StatusCode,
    /// Expected status for DELETE calls.
    pub delete: StatusCode,
}

impl Default for VerbDefaults {
    fn default() -> Self {
        Self {
            get: StatusCode::OK,
            post: StatusCode::CREATED,
            put: StatusCode::OK,
            options: StatusCode::OK,
            delete: StatusCode::NO_CONTENT,
        }
    }
}

/// What a single shortcut call should expect and emit.
///
/// `Expect::default()` means "the verb's default status, no diagnostics".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expect {
    /// Expected status code; `None` falls back to the verb default.
    pub status: Option<StatusCode>,
    /// When set, dump the response status and decoded body to the
    /// diagnostic sink. Never affects the assertion outcome.
    pub debug: bool,
}

impl Expect {
    /// Expects the given status instead of the verb default.
    pub fn status(status: StatusCode) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Turns on the diagnostic dump for this call.
    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }
}
