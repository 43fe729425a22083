use rand::RngCore;
use std::fmt;

/// Opaque CSRF token: lowercase hex over securely random bytes.
///
/// Carries no payload and is not signed; the double-submit pattern
/// derives its security entirely from the token being unguessable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    value: String,
}

impl CsrfToken {
    /// Generate a token from `byte_len` securely random bytes.
    ///
    /// The hex string is exactly `2 * byte_len` characters. A failure of
    /// the system entropy source aborts inside `rand` rather than
    /// producing a weak token.
    pub fn generate(byte_len: usize) -> Self {
        let mut bytes = vec![0u8; byte_len];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self {
            value: hex::encode(bytes),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

impl From<String> for CsrfToken {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl fmt::Display for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
