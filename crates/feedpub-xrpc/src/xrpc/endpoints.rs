//! XRPC endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

use feedpub_core::BlobRef;

// ============================================================================
// Endpoint Names
// ============================================================================

/// com.atproto.server.createSession
pub const CREATE_SESSION: &str = "com.atproto.server.createSession";

/// com.atproto.repo.uploadBlob
pub const UPLOAD_BLOB: &str = "com.atproto.repo.uploadBlob";

/// com.atproto.repo.getRecord
pub const GET_RECORD: &str = "com.atproto.repo.getRecord";

/// com.atproto.repo.createRecord
pub const CREATE_RECORD: &str = "com.atproto.repo.createRecord";

/// com.atproto.repo.putRecord
pub const PUT_RECORD: &str = "com.atproto.repo.putRecord";

/// com.atproto.repo.deleteRecord
pub const DELETE_RECORD: &str = "com.atproto.repo.deleteRecord";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for createSession.
#[derive(Serialize)]
pub struct CreateSessionRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

// Hand-written so the password never reaches trace output.
impl std::fmt::Debug for CreateSessionRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateSessionRequest")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response from createSession.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub did: String,
    pub handle: String,
    pub access_jwt: String,
}

/// Response from uploadBlob.
#[derive(Debug, Deserialize)]
pub struct UploadBlobResponse {
    pub blob: BlobRef,
}

/// Query parameters for getRecord.
#[derive(Debug, Serialize)]
pub struct GetRecordQuery<'a> {
    pub repo: &'a str,
    pub collection: &'a str,
    pub rkey: &'a str,
}

/// Response from getRecord.
#[derive(Debug, Deserialize)]
pub struct GetRecordResponse {
    pub uri: String,
    #[serde(default)]
    pub cid: Option<String>,
    pub value: serde_json::Value,
}

/// Request body for createRecord.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest<'a> {
    pub repo: &'a str,
    pub collection: &'a str,
    pub record: &'a serde_json::Value,
}

/// Request body for putRecord.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutRecordRequest<'a> {
    pub repo: &'a str,
    pub collection: &'a str,
    pub rkey: &'a str,
    pub record: &'a serde_json::Value,
}

/// Response from createRecord and putRecord.
#[derive(Debug, Deserialize)]
pub struct WriteRecordResponse {
    pub uri: String,
    pub cid: String,
}

/// Request body for deleteRecord.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecordRequest<'a> {
    pub repo: &'a str,
    pub collection: &'a str,
    pub rkey: &'a str,
}

/// XRPC error response format.
#[derive(Debug, Deserialize)]
pub struct XrpcErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}
