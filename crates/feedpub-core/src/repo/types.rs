//! Repository operation types.

use crate::types::AtUri;

use super::RecordValue;

/// A record fetched from a repository.
#[derive(Debug, Clone)]
pub struct Record {
    /// The AT URI of this record.
    pub uri: AtUri,

    /// The CID (content identifier) of this record.
    pub cid: String,

    /// The record value; always an object carrying `$type`.
    pub value: RecordValue,
}
