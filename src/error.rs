use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsrfError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Handler error: {0}")]
    Handler(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Why a validation attempt failed.
///
/// Surfaced internally for logging and tests; the middleware collapses
/// every variant into one generic user-facing message. Display texts
/// never contain a token value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("CSRF token not found in cookie")]
    CookieTokenNotFound,

    #[error("CSRF token not found in request")]
    RequestTokenNotFound,

    #[error("CSRF token mismatch")]
    Mismatch,
}

pub type Result<T> = std::result::Result<T, CsrfError>;
