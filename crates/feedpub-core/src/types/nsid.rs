//! Namespaced Identifier (NSID) type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// A validated AT Protocol Namespaced Identifier (NSID).
///
/// NSIDs use reverse-DNS notation to identify lexicon types and collections.
///
/// # Example
///
/// ```
/// use feedpub_core::Nsid;
///
/// let nsid = Nsid::new("app.bsky.feed.generator").unwrap();
/// assert_eq!(nsid.as_str(), "app.bsky.feed.generator");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nsid(String);

impl Nsid {
    /// Create a new NSID from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid NSID format.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Wrap a compile-time constant NSID without re-validating it.
    pub(crate) fn from_static(s: &'static str) -> Self {
        debug_assert!(Self::validate(s).is_ok(), "invalid static NSID {s}");
        Self(s.to_string())
    }

    /// Returns the full NSID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        // <authority>.<name>, at least 3 segments in total

        if s.is_empty() {
            return Err(InvalidInputError::Nsid {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.len() > 317 {
            return Err(InvalidInputError::Nsid {
                value: s.to_string(),
                reason: "exceeds maximum length of 317 characters".to_string(),
            }
            .into());
        }

        let segments: Vec<&str> = s.split('.').collect();

        if segments.len() < 3 {
            return Err(InvalidInputError::Nsid {
                value: s.to_string(),
                reason: "must have at least 3 segments (e.g., 'app.bsky.feed')".to_string(),
            }
            .into());
        }

        for (i, segment) in segments.iter().enumerate() {
            let Some(first_char) = segment.chars().next() else {
                return Err(InvalidInputError::Nsid {
                    value: s.to_string(),
                    reason: format!("segment {} is empty", i + 1),
                }
                .into());
            };

            if !first_char.is_ascii_alphabetic() {
                return Err(InvalidInputError::Nsid {
                    value: s.to_string(),
                    reason: format!("segment '{}' must start with a letter", segment),
                }
                .into());
            }

            if let Some(c) = segment
                .chars()
                .find(|c| !c.is_ascii_alphanumeric() && *c != '-')
            {
                return Err(InvalidInputError::Nsid {
                    value: s.to_string(),
                    reason: format!("segment '{}' contains invalid character '{}'", segment, c),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl fmt::Display for Nsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Nsid {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Nsid> for String {
    fn from(nsid: Nsid) -> Self {
        nsid.0
    }
}
