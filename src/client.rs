use crate::config::CsrfConfig;
use std::collections::HashMap;

/// Build outgoing request headers carrying the CSRF token.
///
/// Pure: clones `existing` (or starts empty) and sets the configured
/// CSRF header to `token`, replacing any prior spelling of that header.
/// Last write wins for the CSRF header; everything else is untouched.
pub fn build_headers(
    config: &CsrfConfig,
    token: &str,
    existing: Option<&HashMap<String, String>>,
) -> HashMap<String, String> {
    let mut headers = existing.cloned().unwrap_or_default();
    headers.retain(|name, _| !name.eq_ignore_ascii_case(&config.header_name));
    headers.insert(config.header_name.clone(), token.to_string());
    headers
}
