use crate::{config::CsrfConfig, http::{HttpRequest, HttpResponse}, token::CsrfToken};
use std::sync::Arc;

/// Sets, clears, and reads the CSRF cookie
#[derive(Debug, Clone)]
pub struct CookieCodec {
    config: Arc<CsrfConfig>,
}

impl CookieCodec {
    pub fn new(config: Arc<CsrfConfig>) -> Self {
        Self { config }
    }

    /// Write the CSRF cookie onto an outgoing response.
    ///
    /// HttpOnly is always emitted; Secure follows the configuration's
    /// effective flag. Returns the response to support chaining.
    pub fn set(&self, mut response: HttpResponse, token: &CsrfToken) -> HttpResponse {
        let mut cookie = format!(
            "{}={}; Path={}; Max-Age={}",
            self.config.cookie_name, token, self.config.cookie_path, self.config.cookie_max_age
        );

        cookie.push_str("; HttpOnly");

        if self.config.effective_secure() {
            cookie.push_str("; Secure");
        }

        cookie.push_str(&format!(
            "; SameSite={}",
            self.config.cookie_same_site.as_str()
        ));

        response
            .headers
            .insert("Set-Cookie".to_string(), cookie);
        response
    }

    /// Remove the cookie: empty value, immediate expiry
    pub fn clear(&self, mut response: HttpResponse) -> HttpResponse {
        let cookie = format!(
            "{}=; Path={}; Max-Age=0; HttpOnly",
            self.config.cookie_name, self.config.cookie_path
        );
        response
            .headers
            .insert("Set-Cookie".to_string(), cookie);
        response
    }

    /// Parse the named cookie out of the incoming request.
    ///
    /// Returns `None` when the cookie is missing or its value is empty.
    pub fn read(&self, request: &HttpRequest) -> Option<String> {
        let raw = request.header("cookie")?;
        raw.split(';').map(str::trim).find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name == self.config.cookie_name && !value.is_empty()).then(|| value.to_string())
        })
    }
}
