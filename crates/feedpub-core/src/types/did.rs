//! Decentralized Identifier (DID) type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// A validated Decentralized Identifier (DID).
///
/// Accounts are usually `did:plc:`; feed generator services are addressed
/// with `did:web:` anchored to the host serving the feed.
///
/// # Example
///
/// ```
/// use feedpub_core::Did;
///
/// let did = Did::new("did:plc:z72i7hdynmk6r22z27h6tvur").unwrap();
/// assert_eq!(did.method(), "plc");
///
/// let service = Did::web("feeds.example.com").unwrap();
/// assert_eq!(service.as_str(), "did:web:feeds.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Did(String);

impl Did {
    /// Create a new DID from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid DID format.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Build a `did:web` identifier for a bare hostname.
    ///
    /// # Errors
    ///
    /// Returns an error if the hostname is empty or contains characters
    /// that cannot appear in a `did:web` identifier.
    pub fn web(hostname: &str) -> Result<Self, Error> {
        if hostname.is_empty()
            || hostname
                .chars()
                .any(|c| c.is_whitespace() || c == '/' || c == '?' || c == '#')
        {
            return Err(InvalidInputError::Did {
                value: format!("did:web:{}", hostname),
                reason: "hostname must be non-empty and contain no path, query or whitespace"
                    .to_string(),
            }
            .into());
        }
        Self::new(format!("did:web:{}", hostname))
    }

    /// Returns the DID method (e.g., "plc" for "did:plc:...").
    pub fn method(&self) -> &str {
        self.0
            .strip_prefix("did:")
            .and_then(|s| s.split(':').next())
            .unwrap_or("")
    }

    /// Returns the method-specific identifier.
    pub fn identifier(&self) -> &str {
        self.0
            .strip_prefix("did:")
            .and_then(|s| s.split_once(':'))
            .map(|(_, id)| id)
            .unwrap_or("")
    }

    /// Returns the full DID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        // did:<method>:<method-specific-id>
        let Some(rest) = s.strip_prefix("did:") else {
            return Err(InvalidInputError::Did {
                value: s.to_string(),
                reason: "must start with 'did:'".to_string(),
            }
            .into());
        };

        let Some((method, identifier)) = rest.split_once(':') else {
            return Err(InvalidInputError::Did {
                value: s.to_string(),
                reason: "must have format 'did:<method>:<identifier>'".to_string(),
            }
            .into());
        };

        if method.is_empty() || !method.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(InvalidInputError::Did {
                value: s.to_string(),
                reason: "method must be non-empty lowercase letters".to_string(),
            }
            .into());
        }

        if identifier.is_empty() {
            return Err(InvalidInputError::Did {
                value: s.to_string(),
                reason: "identifier must be non-empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Did {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Did> for String {
    fn from(did: Did) -> Self {
        did.0
    }
}
