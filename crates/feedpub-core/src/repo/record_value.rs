//! Validated record value type for AT Protocol records.
//!
//! [`RecordValue`] guarantees the value is a valid record payload: a JSON
//! object with a string `$type` field.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, InvalidInputError};

/// A validated AT Protocol record value.
///
/// The invariants (JSON object, string `$type`) are enforced at construction
/// and deserialization time.
///
/// # Example
///
/// ```
/// use feedpub_core::RecordValue;
/// use serde_json::json;
///
/// let value = RecordValue::with_type("app.bsky.feed.generator", json!({
///     "displayName": "My Feed"
/// })).unwrap();
///
/// assert_eq!(value.record_type(), "app.bsky.feed.generator");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue(Value);

impl RecordValue {
    /// Create a new `RecordValue` from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an object or lacks a string `$type`.
    pub fn new(value: Value) -> Result<Self, Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }

    /// Create a new `RecordValue`, setting (or overriding) its `$type`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not a JSON object.
    pub fn with_type(record_type: &str, mut value: Value) -> Result<Self, Error> {
        let Some(obj) = value.as_object_mut() else {
            return Err(not_an_object());
        };
        obj.insert("$type".to_string(), Value::String(record_type.to_string()));

        Self::new(value)
    }

    /// Get the `$type` field value.
    pub fn record_type(&self) -> &str {
        self.0["$type"].as_str().unwrap_or_default()
    }

    /// Get a reference to the inner JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Get a field from the record value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn validate(value: &Value) -> Result<(), Error> {
        let obj = value.as_object().ok_or_else(not_an_object)?;

        match obj.get("$type") {
            Some(Value::String(_)) => Ok(()),
            Some(_) => Err(InvalidInputError::RecordValue {
                reason: "$type field must be a string".to_string(),
            }
            .into()),
            None => Err(InvalidInputError::RecordValue {
                reason: "record value must contain a $type field".to_string(),
            }
            .into()),
        }
    }
}

fn not_an_object() -> Error {
    InvalidInputError::RecordValue {
        reason: "record value must be a JSON object".to_string(),
    }
    .into()
}

impl Serialize for RecordValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecordValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        RecordValue::new(value).map_err(serde::de::Error::custom)
    }
}
