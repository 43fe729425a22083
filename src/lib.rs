//! # CSRF Shield
//!
//! Stateless Cross-Site Request Forgery (CSRF) protection using the
//! double-submit cookie pattern.
//!
//! ## Features
//!
//! - ✅ **Double-Submit Cookie** - No server-side token store
//! - ✅ **Secure Tokens** - CSPRNG-generated, hex-encoded
//! - ✅ **Multi-Source Extraction** - Header, JSON body, or form body
//! - ✅ **Constant-Time Validation** - No timing side-channels
//! - ✅ **Configurable** - Cookie names, headers, attributes
//! - ✅ **Middleware Integration** - Wrap any async handler
//!
//! ## Quick Start
//!
//! ```rust
//! use csrf_shield::{CsrfConfig, CsrfProtection, SameSite};
//!
//! // Create configuration with defaults (SameSite=Lax, Path=/)
//! let config = CsrfConfig::new();
//!
//! // Or customized for a production deployment
//! let config = CsrfConfig::new()
//!     .with_production(true)
//!     .with_same_site(SameSite::Strict)
//!     .with_cookie_max_age(3600);
//!
//! let csrf = CsrfProtection::new(config);
//! ```
//!
//! ## Token Generation
//!
//! ```rust
//! use csrf_shield::{CsrfProtection, CsrfConfig, DEFAULT_TOKEN_BYTE_LEN};
//!
//! let csrf = CsrfProtection::new(CsrfConfig::new());
//! let token = csrf.generate_token();
//!
//! // Lowercase hex, two characters per random byte
//! assert_eq!(token.value().len(), 2 * DEFAULT_TOKEN_BYTE_LEN);
//! assert!(token.value().chars().all(|c| c.is_ascii_hexdigit()));
//! ```
//!
//! ## Protecting a Handler
//!
//! ```rust
//! use std::sync::Arc;
//! use csrf_shield::{CsrfConfig, CsrfProtection, HandlerFn, HttpResponse};
//!
//! # tokio_test::block_on(async {
//! let csrf = CsrfProtection::new(CsrfConfig::new());
//!
//! let handler: HandlerFn = Arc::new(|_req| Box::pin(async { Ok(HttpResponse::ok()) }));
//! let protected = csrf.wrap(handler);
//!
//! // Safe methods pass through untouched
//! let response = protected(csrf_shield::HttpRequest::new("GET", "/")).await.unwrap();
//! assert_eq!(response.status, 200);
//! # });
//! ```
//!
//! ## Issuing Tokens
//!
//! The cookie is set when a fresh page or session is served, independently
//! of validation:
//!
//! ```rust
//! use csrf_shield::{CsrfConfig, CsrfProtection, HttpResponse};
//!
//! let csrf = CsrfProtection::new(CsrfConfig::new());
//! let token = csrf.generate_token();
//!
//! let response = csrf.codec().set(HttpResponse::ok(), &token);
//! assert!(response.headers.contains_key("Set-Cookie"));
//! ```

pub mod client;
pub mod config;
pub mod cookie;
pub mod error;
pub mod extract;
pub mod http;
pub mod middleware;
pub mod token;
pub mod validate;

pub use client::build_headers;
pub use config::{CsrfConfig, SameSite};
pub use cookie::CookieCodec;
pub use error::{CsrfError, Result, ValidationFailure};
pub use extract::RequestTokenExtractor;
pub use http::{HttpRequest, HttpResponse};
pub use middleware::{CsrfProtection, HandlerFn, Middleware, Next};
pub use token::CsrfToken;
pub use validate::{ValidationResult, Validator};

/// Name of the cookie carrying the server-issued token.
pub const CSRF_COOKIE_NAME: &str = "csrf_token";

/// Name of the request header echoing the token back.
pub const CSRF_HEADER_NAME: &str = "x-csrf-token";

/// Name of the JSON/form body field echoing the token back.
pub const CSRF_FIELD_NAME: &str = "csrf_token";

/// Default number of random bytes per token (hex string is twice this).
pub const DEFAULT_TOKEN_BYTE_LEN: usize = 32;
