//! Authenticated session trait.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

use crate::Result;
use crate::repo::{BlobRef, Record, RecordValue};
use crate::types::{AtUri, Did, Nsid, PdsUrl};

/// An authenticated session for repository operations.
///
/// Every record operation targets the session's own repository.
#[async_trait]
pub trait Session: Send + Sync {
    /// Returns the DID associated with this session.
    fn did(&self) -> &Did;

    /// Returns the PDS URL associated with this session.
    fn pds(&self) -> &PdsUrl;

    /// Current time as an ISO-8601 UTC timestamp with millisecond precision,
    /// the format records use for `createdAt`.
    fn current_time(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Upload raw bytes as a blob and return the reference to embed in a record.
    async fn upload_blob(&self, data: Vec<u8>, mime_type: &str) -> Result<BlobRef>;

    /// Get a single record by its AT URI.
    async fn get_record(&self, uri: &AtUri) -> Result<Record>;

    /// Create a new record in a collection; the PDS assigns the rkey.
    async fn create_record(&self, collection: &Nsid, value: &RecordValue) -> Result<AtUri>;

    /// Write a record at the given AT URI, replacing any existing value.
    async fn put_record(&self, uri: &AtUri, value: &RecordValue) -> Result<AtUri>;

    /// Delete a record by its AT URI.
    async fn delete_record(&self, uri: &AtUri) -> Result<()>;
}
