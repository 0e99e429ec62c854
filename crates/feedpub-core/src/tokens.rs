//! Session token type.

use std::fmt;

/// An access token for authenticated XRPC requests.
///
/// Opaque; the value only ever leaves this type to build an
/// `Authorization: Bearer` header. Debug output is redacted.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a token string returned by createSession.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}
