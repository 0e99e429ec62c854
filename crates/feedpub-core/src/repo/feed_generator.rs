//! The `app.bsky.feed.generator` record.

use serde::Serialize;

use super::{BlobRef, RecordValue};
use crate::error::{Error, InvalidInputError};
use crate::types::{Did, Nsid};

/// Collection NSID (and record `$type`) of feed generator declarations.
pub const FEED_GENERATOR: &str = "app.bsky.feed.generator";

/// Record declaring a feed generator service and its display metadata.
///
/// # Example
///
/// ```
/// use feedpub_core::{Did, FeedGenerator};
///
/// let record = FeedGenerator {
///     did: Did::web("feeds.example.com").unwrap(),
///     display_name: "My Feed".to_string(),
///     description: "Posts about Rust".to_string(),
///     avatar: None,
///     created_at: "2024-01-01T00:00:00.000Z".to_string(),
/// };
///
/// let value = record.to_record_value().unwrap();
/// assert_eq!(value.record_type(), "app.bsky.feed.generator");
/// assert!(value.get("avatar").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedGenerator {
    /// `did:web` of the service that answers getFeedSkeleton.
    pub did: Did,
    pub display_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<BlobRef>,
    /// ISO-8601 timestamp.
    pub created_at: String,
}

impl FeedGenerator {
    /// Returns the collection feed generator records live in.
    pub fn collection() -> Nsid {
        Nsid::from_static(FEED_GENERATOR)
    }

    /// Convert into a typed record payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be represented as JSON.
    pub fn to_record_value(&self) -> Result<RecordValue, Error> {
        let value = serde_json::to_value(self).map_err(|e| InvalidInputError::RecordValue {
            reason: e.to_string(),
        })?;
        RecordValue::with_type(FEED_GENERATOR, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(avatar: Option<BlobRef>) -> FeedGenerator {
        FeedGenerator {
            did: Did::web("feeds.example.com").unwrap(),
            display_name: "Rust Posts".to_string(),
            description: "Everything about Rust".to_string(),
            avatar,
            created_at: "2024-05-01T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn record_value_without_avatar() {
        let value = record(None).to_record_value().unwrap();
        assert_eq!(
            value.as_value(),
            &json!({
                "$type": "app.bsky.feed.generator",
                "did": "did:web:feeds.example.com",
                "displayName": "Rust Posts",
                "description": "Everything about Rust",
                "createdAt": "2024-05-01T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn record_value_with_avatar() {
        let blob = BlobRef::new("bafkreiavatar", "image/png", 2048);
        let value = record(Some(blob)).to_record_value().unwrap();
        assert_eq!(
            value.get("avatar").unwrap(),
            &json!({
                "$type": "blob",
                "ref": {"$link": "bafkreiavatar"},
                "mimeType": "image/png",
                "size": 2048
            })
        );
    }

    #[test]
    fn collection_is_feed_generator() {
        assert_eq!(FeedGenerator::collection().as_str(), FEED_GENERATOR);
    }
}
