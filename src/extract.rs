use crate::{config::CsrfConfig, http::HttpRequest};
use std::sync::Arc;
use tracing::warn;

/// Pulls the caller-supplied token out of a request.
///
/// Sources, first match wins: the dedicated header, then a JSON body
/// field, then a URL-encoded form field. Malformed bodies degrade to
/// "no token found" rather than erroring.
#[derive(Debug, Clone)]
pub struct RequestTokenExtractor {
    config: Arc<CsrfConfig>,
}

impl RequestTokenExtractor {
    pub fn new(config: Arc<CsrfConfig>) -> Self {
        Self { config }
    }

    /// Extract the token, or `None` if no source carries one.
    ///
    /// An empty string found in the header or body still counts as
    /// found; judging its validity is the validator's job.
    pub async fn extract(&self, request: &HttpRequest) -> Option<String> {
        if let Some(value) = request.header(&self.config.header_name) {
            return Some(value.to_string());
        }

        let content_type = request.content_type().unwrap_or("");

        if content_type.starts_with("application/json") {
            return match serde_json::from_slice::<serde_json::Value>(&request.body) {
                Ok(json) => json
                    .get(&self.config.field_name)
                    .and_then(|value| value.as_str())
                    .map(str::to_string),
                Err(error) => {
                    warn!(%error, "failed to parse JSON body while extracting CSRF token");
                    None
                }
            };
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            return match serde_urlencoded::from_bytes::<Vec<(String, String)>>(&request.body) {
                Ok(pairs) => pairs
                    .into_iter()
                    .find(|(name, _)| *name == self.config.field_name)
                    .map(|(_, value)| value),
                Err(error) => {
                    warn!(%error, "failed to parse form body while extracting CSRF token");
                    None
                }
            };
        }

        None
    }
}
