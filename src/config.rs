use crate::{CSRF_COOKIE_NAME, CSRF_FIELD_NAME, CSRF_HEADER_NAME, DEFAULT_TOKEN_BYTE_LEN};

/// CSRF protection configuration
#[derive(Debug, Clone)]
pub struct CsrfConfig {
    /// Number of random bytes per generated token
    pub token_byte_len: usize,

    /// Cookie name for the CSRF token
    pub cookie_name: String,

    /// Header name for the CSRF token
    pub header_name: String,

    /// JSON/form body field name for the CSRF token
    pub field_name: String,

    /// Cookie path
    pub cookie_path: String,

    /// Cookie max-age in seconds
    pub cookie_max_age: i64,

    /// Cookie SameSite policy
    pub cookie_same_site: SameSite,

    /// Whether the process runs in a production-like environment
    pub production: bool,

    /// Explicit override for the cookie Secure flag
    pub cookie_secure: Option<bool>,

    /// Safe HTTP methods (not checked for CSRF)
    pub safe_methods: Vec<String>,
}

/// Cookie SameSite attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

impl CsrfConfig {
    /// Create a configuration with default names and attributes
    pub fn new() -> Self {
        Self {
            token_byte_len: DEFAULT_TOKEN_BYTE_LEN,
            cookie_name: CSRF_COOKIE_NAME.to_string(),
            header_name: CSRF_HEADER_NAME.to_string(),
            field_name: CSRF_FIELD_NAME.to_string(),
            cookie_path: "/".to_string(),
            cookie_max_age: 86_400, // 1 day
            cookie_same_site: SameSite::Lax,
            production: false,
            cookie_secure: None,
            safe_methods: vec![
                "GET".to_string(),
                "HEAD".to_string(),
                "OPTIONS".to_string(),
            ],
        }
    }

    /// Set token length in random bytes
    pub fn with_token_byte_len(mut self, len: usize) -> Self {
        self.token_byte_len = len;
        self
    }

    /// Set cookie name
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    /// Set header name
    pub fn with_header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = name.into();
        self
    }

    /// Set body field name
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }

    /// Set cookie path
    pub fn with_cookie_path(mut self, path: impl Into<String>) -> Self {
        self.cookie_path = path.into();
        self
    }

    /// Set cookie max-age in seconds
    pub fn with_cookie_max_age(mut self, seconds: i64) -> Self {
        self.cookie_max_age = seconds;
        self
    }

    /// Set cookie SameSite policy
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.cookie_same_site = same_site;
        self
    }

    /// Mark the runtime environment as production-like
    pub fn with_production(mut self, production: bool) -> Self {
        self.production = production;
        self
    }

    /// Override the cookie Secure flag regardless of environment
    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = Some(secure);
        self
    }

    /// Replace the safe-method list
    pub fn with_safe_methods(mut self, methods: Vec<String>) -> Self {
        self.safe_methods = methods;
        self
    }

    /// Effective cookie Secure flag: explicit override, else the
    /// production environment flag
    pub fn effective_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(self.production)
    }

    /// Case-insensitive membership test against the safe-method list
    pub fn is_safe_method(&self, method: &str) -> bool {
        self.safe_methods
            .iter()
            .any(|safe| safe.eq_ignore_ascii_case(method))
    }
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CsrfConfig::new();
        assert_eq!(config.cookie_name, "csrf_token");
        assert_eq!(config.header_name, "x-csrf-token");
        assert_eq!(config.field_name, "csrf_token");
        assert_eq!(config.cookie_path, "/");
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert!(config.cookie_max_age > 0);
        assert!(!config.production);
    }

    #[test]
    fn test_config_builder() {
        let config = CsrfConfig::new()
            .with_token_byte_len(16)
            .with_cookie_name("_csrf")
            .with_header_name("X-CSRF-TOKEN")
            .with_cookie_max_age(3600)
            .with_same_site(SameSite::Strict);

        assert_eq!(config.token_byte_len, 16);
        assert_eq!(config.cookie_name, "_csrf");
        assert_eq!(config.header_name, "X-CSRF-TOKEN");
        assert_eq!(config.cookie_max_age, 3600);
        assert_eq!(config.cookie_same_site, SameSite::Strict);
    }

    #[test]
    fn test_effective_secure() {
        // Secure follows the environment flag by default
        assert!(!CsrfConfig::new().effective_secure());
        assert!(CsrfConfig::new().with_production(true).effective_secure());

        // An explicit override wins in both environments
        assert!(CsrfConfig::new().with_cookie_secure(true).effective_secure());
        assert!(
            !CsrfConfig::new()
                .with_production(true)
                .with_cookie_secure(false)
                .effective_secure()
        );
    }

    #[test]
    fn test_safe_methods_case_insensitive() {
        let config = CsrfConfig::new();
        assert!(config.is_safe_method("GET"));
        assert!(config.is_safe_method("get"));
        assert!(config.is_safe_method("options"));
        assert!(!config.is_safe_method("post"));
    }

    #[test]
    fn test_same_site_enum() {
        assert_eq!(SameSite::Strict.as_str(), "Strict");
        assert_eq!(SameSite::Lax.as_str(), "Lax");
        assert_eq!(SameSite::None.as_str(), "None");
    }
}
