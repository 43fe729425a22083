use crate::{
    config::CsrfConfig, cookie::CookieCodec, error::Result, http::{HttpRequest, HttpResponse},
    token::CsrfToken, validate::{ValidationResult, Validator},
};
use async_trait::async_trait;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, warn};

/// Type alias for the next handler in the middleware chain
pub type Next = Box<
    dyn FnOnce(HttpRequest) -> Pin<Box<dyn Future<Output = Result<HttpResponse>> + Send>> + Send,
>;

/// Type alias for handler functions
pub type HandlerFn = Arc<
    dyn Fn(HttpRequest) -> Pin<Box<dyn Future<Output = Result<HttpResponse>> + Send>>
        + Send
        + Sync,
>;

/// Middleware trait for processing requests before they reach the handler
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, request: HttpRequest, next: Next) -> Result<HttpResponse>;
}

/// Stable error code in the rejection body
const REJECTION_ERROR: &str = "CSRF validation failed";

/// Generic hint returned to the client. Deliberately does not say
/// which token was missing or wrong.
const REJECTION_HINT: &str =
    "The request could not be verified as same-origin. Reload the page and try again.";

#[derive(Serialize)]
struct RejectionBody {
    error: &'static str,
    message: &'static str,
}

/// CSRF protection gate and middleware
#[derive(Clone)]
pub struct CsrfProtection {
    config: Arc<CsrfConfig>,
    validator: Validator,
}

impl CsrfProtection {
    pub fn new(config: CsrfConfig) -> Self {
        let config = Arc::new(config);
        Self {
            validator: Validator::new(config.clone()),
            config,
        }
    }

    /// Whether a method is state-changing and requires a valid token.
    /// Case-insensitive; anything outside the safe-method list counts.
    pub fn requires_protection(&self, method: &str) -> bool {
        !self.config.is_safe_method(method)
    }

    /// Generate a fresh token with the configured byte length
    pub fn generate_token(&self) -> CsrfToken {
        CsrfToken::generate(self.config.token_byte_len)
    }

    /// Cookie codec sharing this gate's configuration, for issuance
    pub fn codec(&self) -> CookieCodec {
        CookieCodec::new(self.config.clone())
    }

    /// Wrap a handler so that state-changing requests are validated
    /// before it runs. The handler never sees the token; safe methods
    /// and valid requests pass through untouched.
    pub fn wrap(&self, handler: HandlerFn) -> HandlerFn {
        let gate = self.clone();
        Arc::new(move |request: HttpRequest| {
            let gate = gate.clone();
            let handler = handler.clone();
            Box::pin(async move {
                let next: Next = Box::new(move |request| handler(request));
                gate.handle(request, next).await
            })
        })
    }

    fn rejection(&self) -> Result<HttpResponse> {
        HttpResponse::forbidden().with_json(&RejectionBody {
            error: REJECTION_ERROR,
            message: REJECTION_HINT,
        })
    }
}

#[async_trait]
impl Middleware for CsrfProtection {
    async fn handle(&self, request: HttpRequest, next: Next) -> Result<HttpResponse> {
        if !self.requires_protection(&request.method) {
            return next(request).await;
        }

        match self.validator.validate(&request).await {
            ValidationResult::Valid(_) => {
                debug!(method = %request.method, path = %request.path, "CSRF validation passed");
                next(request).await
            }
            ValidationResult::Invalid(failure) => {
                warn!(
                    method = %request.method,
                    path = %request.path,
                    %failure,
                    "rejecting request that failed CSRF validation"
                );
                self.rejection()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_handler() -> (HandlerFn, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let handler: HandlerFn = Arc::new(move |_request| {
            seen.fetch_add(1, Ordering::SeqCst);
            Box::pin(async { Ok(HttpResponse::ok()) })
        });
        (handler, calls)
    }

    #[test]
    fn test_requires_protection_case_insensitive() {
        let csrf = CsrfProtection::new(CsrfConfig::new());

        for method in ["post", "POST", "PoSt", "PUT", "patch", "DELETE"] {
            assert!(csrf.requires_protection(method), "{method}");
        }
        for method in ["get", "GET", "HEAD", "OPTIONS", "head", "options"] {
            assert!(!csrf.requires_protection(method), "{method}");
        }
    }

    #[tokio::test]
    async fn test_safe_method_passes_through() {
        let csrf = CsrfProtection::new(CsrfConfig::new());
        let (handler, calls) = counting_handler();
        let protected = csrf.wrap(handler);

        // No cookie, no header: GET is exempt
        let response = protected(HttpRequest::new("GET", "/page")).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_valid_post_invokes_handler() {
        let csrf = CsrfProtection::new(CsrfConfig::new());
        let (handler, calls) = counting_handler();
        let protected = csrf.wrap(handler);

        let token = csrf.generate_token();
        let request = HttpRequest::new("POST", "/submit")
            .with_header("Cookie", format!("csrf_token={token}"))
            .with_header("x-csrf-token", token.value());

        let response = protected(request).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_mismatch_short_circuits_with_403() {
        let csrf = CsrfProtection::new(CsrfConfig::new());
        let (handler, calls) = counting_handler();
        let protected = csrf.wrap(handler);

        let request = HttpRequest::new("POST", "/submit")
            .with_header("Cookie", "csrf_token=aaaa")
            .with_header("x-csrf-token", "bbbb");

        let response = protected(request).await.unwrap();
        assert_eq!(response.status, 403);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
        assert_eq!(body["error"], "CSRF validation failed");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_tokens_rejected_with_generic_message() {
        let csrf = CsrfProtection::new(CsrfConfig::new());
        let (handler, _) = counting_handler();
        let protected = csrf.wrap(handler);

        // Missing cookie and missing header produce the same body
        let no_cookie = HttpRequest::new("POST", "/").with_header("x-csrf-token", "abc");
        let no_header = HttpRequest::new("POST", "/").with_header("Cookie", "csrf_token=abc");

        let first = protected(no_cookie).await.unwrap();
        let second = protected(no_header).await.unwrap();

        assert_eq!(first.status, 403);
        assert_eq!(second.status, 403);
        assert_eq!(first.body, second.body);
    }

    #[tokio::test]
    async fn test_handle_as_chain_middleware() {
        let csrf = CsrfProtection::new(CsrfConfig::new());
        let next: Next = Box::new(|_request| Box::pin(async { Ok(HttpResponse::ok()) }));

        let response = csrf
            .handle(HttpRequest::new("OPTIONS", "/"), next)
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }
}
