use crate::{
    config::CsrfConfig, cookie::CookieCodec, error::ValidationFailure,
    extract::RequestTokenExtractor, http::HttpRequest,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Outcome of comparing the cookie token against the request token.
///
/// The `Invalid` category describes the failure for logging and tests;
/// it never carries a token value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(String),
    Invalid(ValidationFailure),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }
}

/// Compares the double-submitted tokens under timing-safe rules
#[derive(Debug, Clone)]
pub struct Validator {
    codec: CookieCodec,
    extractor: RequestTokenExtractor,
}

impl Validator {
    pub fn new(config: Arc<CsrfConfig>) -> Self {
        Self {
            codec: CookieCodec::new(config.clone()),
            extractor: RequestTokenExtractor::new(config),
        }
    }

    /// Validate a request's tokens.
    ///
    /// Lengths are compared first as an explicit length-only
    /// short-circuit; equal-length buffers then go through a
    /// constant-time comparison, so execution time never depends on
    /// where the tokens first differ.
    pub async fn validate(&self, request: &HttpRequest) -> ValidationResult {
        let Some(cookie_token) = self.codec.read(request) else {
            return ValidationResult::Invalid(ValidationFailure::CookieTokenNotFound);
        };

        let Some(request_token) = self.extractor.extract(request).await else {
            return ValidationResult::Invalid(ValidationFailure::RequestTokenNotFound);
        };

        if cookie_token.len() != request_token.len() {
            return ValidationResult::Invalid(ValidationFailure::Mismatch);
        }

        if bool::from(cookie_token.as_bytes().ct_eq(request_token.as_bytes())) {
            ValidationResult::Valid(cookie_token)
        } else {
            ValidationResult::Invalid(ValidationFailure::Mismatch)
        }
    }
}
