//! XRPC-backed PDS implementation.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use feedpub_core::error::{AuthError, Error};
use feedpub_core::repo::{BlobRef, Record, RecordValue};
use feedpub_core::traits::Pds;
use feedpub_core::types::{AtUri, Did, Nsid, PdsUrl};
use feedpub_core::{AccessToken, Credentials, Result};

use crate::session::XrpcSession;
use crate::xrpc::client::XrpcClient;
use crate::xrpc::endpoints::*;

/// A network-backed PDS implementation using XRPC.
#[derive(Debug, Clone)]
pub struct XrpcPds {
    pds: PdsUrl,
    client: XrpcClient,
}

impl XrpcPds {
    /// Create a new XRPC PDS for the given PDS URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(pds: PdsUrl) -> Result<Self> {
        let client = XrpcClient::new(pds.clone())?;
        Ok(Self { pds, client })
    }

    #[instrument(skip(self, data, token), fields(size = data.len()))]
    pub(crate) async fn upload_blob(
        &self,
        data: Vec<u8>,
        mime_type: &str,
        token: &str,
    ) -> Result<BlobRef> {
        debug!("Uploading blob via XRPC");

        let response: UploadBlobResponse = self
            .client
            .procedure_authed_bytes(UPLOAD_BLOB, data, mime_type, token)
            .await?;

        debug!(cid = response.blob.cid(), "Blob uploaded");
        Ok(response.blob)
    }

    #[instrument(skip(self, token))]
    pub(crate) async fn get_record(&self, uri: &AtUri, token: &str) -> Result<Record> {
        debug!(uri = %uri, "Getting record via XRPC");

        let query = GetRecordQuery {
            repo: uri.repo().as_str(),
            collection: uri.collection().as_str(),
            rkey: uri.rkey().as_str(),
        };

        let response: GetRecordResponse =
            self.client.query_authed(GET_RECORD, &query, token).await?;

        Ok(Record {
            uri: AtUri::new(&response.uri)?,
            cid: response.cid.unwrap_or_default(),
            value: RecordValue::new(response.value)?,
        })
    }

    #[instrument(skip(self, value, token))]
    pub(crate) async fn create_record(
        &self,
        repo: &Did,
        collection: &Nsid,
        value: &RecordValue,
        token: &str,
    ) -> Result<AtUri> {
        debug!(repo = %repo, collection = %collection, "Creating record via XRPC");

        let request = CreateRecordRequest {
            repo: repo.as_str(),
            collection: collection.as_str(),
            record: value.as_value(),
        };

        let response: WriteRecordResponse = self
            .client
            .procedure_authed(CREATE_RECORD, &request, token)
            .await?;

        debug!(cid = %response.cid, "Record created");
        AtUri::new(&response.uri)
    }

    #[instrument(skip(self, value, token))]
    pub(crate) async fn put_record(
        &self,
        uri: &AtUri,
        value: &RecordValue,
        token: &str,
    ) -> Result<AtUri> {
        debug!(uri = %uri, "Putting record via XRPC");

        let request = PutRecordRequest {
            repo: uri.repo().as_str(),
            collection: uri.collection().as_str(),
            rkey: uri.rkey().as_str(),
            record: value.as_value(),
        };

        let response: WriteRecordResponse = self
            .client
            .procedure_authed(PUT_RECORD, &request, token)
            .await?;

        debug!(cid = %response.cid, "Record replaced");
        AtUri::new(&response.uri)
    }

    #[instrument(skip(self, token))]
    pub(crate) async fn delete_record(&self, uri: &AtUri, token: &str) -> Result<()> {
        debug!(uri = %uri, "Deleting record via XRPC");

        let request = DeleteRecordRequest {
            repo: uri.repo().as_str(),
            collection: uri.collection().as_str(),
            rkey: uri.rkey().as_str(),
        };

        self.client
            .procedure_authed_no_response(DELETE_RECORD, &request, token)
            .await
    }
}

#[async_trait]
impl Pds for XrpcPds {
    type Session = XrpcSession;

    fn url(&self) -> &PdsUrl {
        &self.pds
    }

    #[instrument(skip(self, credentials), fields(identifier = credentials.identifier()))]
    async fn login(&self, credentials: Credentials) -> Result<Self::Session> {
        let request = CreateSessionRequest {
            identifier: credentials.identifier(),
            password: credentials.password(),
        };

        let response: CreateSessionResponse = self
            .client
            .procedure(CREATE_SESSION, &request)
            .await
            .map_err(|err| match err {
                Error::Protocol(protocol) if protocol.is_auth_error() => {
                    AuthError::InvalidCredentials(protocol.to_string()).into()
                }
                other => other,
            })?;

        let did = Did::new(&response.did)?;
        info!(did = %did, handle = %response.handle, "Session created");

        Ok(XrpcSession::new(
            self.clone(),
            did,
            AccessToken::new(response.access_jwt),
        ))
    }
}
