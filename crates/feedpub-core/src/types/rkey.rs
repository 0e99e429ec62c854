//! Record Key (rkey) type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Maximum length of a record key.
pub const MAX_RKEY_LEN: usize = 512;

/// A validated AT Protocol Record Key (rkey).
///
/// Record keys identify individual records within a collection: 1 to 512
/// characters from `A-Z a-z 0-9 _ ~ . : -`, never `.` or `..`.
///
/// # Example
///
/// ```
/// use feedpub_core::Rkey;
///
/// let rkey = Rkey::new("3jui7kd54zh2y").unwrap();
/// assert_eq!(rkey.as_str(), "3jui7kd54zh2y");
/// assert!(Rkey::new("my:feed").is_ok());
/// assert!(Rkey::new("..").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rkey(String);

impl Rkey {
    /// Create a new rkey from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid rkey format.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the rkey string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `c` may appear in a record key.
    pub fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '~' | '.' | ':' | '-')
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::Rkey {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        if s.len() > MAX_RKEY_LEN {
            return Err(InvalidInputError::Rkey {
                value: s.to_string(),
                reason: format!("exceeds maximum length of {} characters", MAX_RKEY_LEN),
            }
            .into());
        }

        if let Some(c) = s.chars().find(|c| !Self::is_valid_char(*c)) {
            return Err(InvalidInputError::Rkey {
                value: s.to_string(),
                reason: format!("contains invalid character '{}'", c),
            }
            .into());
        }

        if s == "." || s == ".." {
            return Err(InvalidInputError::Rkey {
                value: s.to_string(),
                reason: "cannot be '.' or '..'".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for Rkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Rkey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Rkey> for String {
    fn from(rkey: Rkey) -> Self {
        rkey.0
    }
}
