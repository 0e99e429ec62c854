//! Blob reference type.

use serde::{Deserialize, Deserializer, Serialize};

/// A reference to an uploaded blob, as embedded in records.
///
/// Serialized form:
/// `{"$type": "blob", "ref": {"$link": "<cid>"}, "mimeType": "image/png", "size": 1234}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "$type", rename = "blob", rename_all = "camelCase")]
pub struct BlobRef {
    #[serde(rename = "ref")]
    link: CidLink,
    mime_type: String,
    size: u64,
}

/// A CID wrapped in the `$link` object used by the JSON data model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CidLink {
    #[serde(rename = "$link")]
    pub link: String,
}

impl BlobRef {
    /// Create a blob reference from its parts.
    pub fn new(cid: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            link: CidLink { link: cid.into() },
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Returns the blob CID.
    pub fn cid(&self) -> &str {
        &self.link.link
    }

    /// Returns the MIME type the blob was uploaded with.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the blob size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Wire form with the `$type` tag kept as data so it can be checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBlob {
    #[serde(rename = "$type")]
    kind: String,
    #[serde(rename = "ref")]
    link: CidLink,
    mime_type: String,
    size: u64,
}

impl<'de> Deserialize<'de> for BlobRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawBlob::deserialize(deserializer)?;
        if raw.kind != "blob" {
            return Err(serde::de::Error::custom(format!(
                "expected $type \"blob\", found \"{}\"",
                raw.kind
            )));
        }
        Ok(Self {
            link: raw.link,
            mime_type: raw.mime_type,
            size: raw.size,
        })
    }
}
