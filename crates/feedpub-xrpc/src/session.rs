//! XRPC-backed session implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use feedpub_core::repo::{BlobRef, Record, RecordValue};
use feedpub_core::traits::{Pds as _, Session};
use feedpub_core::types::{AtUri, Did, Nsid, PdsUrl};
use feedpub_core::{AccessToken, Result};

use crate::pds::XrpcPds;

/// Session for an XRPC-backed PDS.
#[derive(Clone)]
pub struct XrpcSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    did: Did,
    pds_impl: XrpcPds,
    access_token: AccessToken,
}

impl XrpcSession {
    pub(crate) fn new(pds_impl: XrpcPds, did: Did, access_token: AccessToken) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                did,
                pds_impl,
                access_token,
            }),
        }
    }

    fn token(&self) -> &str {
        self.inner.access_token.as_str()
    }
}

#[async_trait]
impl Session for XrpcSession {
    fn did(&self) -> &Did {
        &self.inner.did
    }

    fn pds(&self) -> &PdsUrl {
        self.inner.pds_impl.url()
    }

    #[instrument(skip(self, data), fields(did = %self.inner.did, size = data.len()))]
    async fn upload_blob(&self, data: Vec<u8>, mime_type: &str) -> Result<BlobRef> {
        debug!("Uploading blob");
        self.inner
            .pds_impl
            .upload_blob(data, mime_type, self.token())
            .await
    }

    #[instrument(skip(self), fields(did = %self.inner.did, %uri))]
    async fn get_record(&self, uri: &AtUri) -> Result<Record> {
        debug!("Getting record");
        self.inner.pds_impl.get_record(uri, self.token()).await
    }

    #[instrument(skip(self, value), fields(did = %self.inner.did, %collection))]
    async fn create_record(&self, collection: &Nsid, value: &RecordValue) -> Result<AtUri> {
        debug!("Creating record");
        self.inner
            .pds_impl
            .create_record(&self.inner.did, collection, value, self.token())
            .await
    }

    #[instrument(skip(self, value), fields(did = %self.inner.did, %uri))]
    async fn put_record(&self, uri: &AtUri, value: &RecordValue) -> Result<AtUri> {
        debug!("Putting record");
        self.inner
            .pds_impl
            .put_record(uri, value, self.token())
            .await
    }

    #[instrument(skip(self), fields(did = %self.inner.did, %uri))]
    async fn delete_record(&self, uri: &AtUri) -> Result<()> {
        debug!("Deleting record");
        self.inner.pds_impl.delete_record(uri, self.token()).await
    }
}

impl std::fmt::Debug for XrpcSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XrpcSession")
            .field("did", &self.inner.did)
            .field("pds", &self.pds())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
