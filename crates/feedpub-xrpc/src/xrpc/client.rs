//! XRPC HTTP client implementation.

use reqwest::header::CONTENT_TYPE;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use feedpub_core::error::{Error, ProtocolError, TransportError};
use feedpub_core::types::PdsUrl;

use super::endpoints::XrpcErrorResponse;

/// HTTP client for XRPC requests.
#[derive(Debug, Clone)]
pub struct XrpcClient {
    client: reqwest::Client,
    pds: PdsUrl,
}

impl XrpcClient {
    /// Create a new XRPC client for the given PDS.
    pub fn new(pds: PdsUrl) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("feedpub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, pds })
    }

    /// Returns the PDS URL this client is configured for.
    pub fn pds(&self) -> &PdsUrl {
        &self.pds
    }

    /// Make an authenticated XRPC query (GET request).
    #[instrument(skip(self, token), fields(pds = %self.pds))]
    pub async fn query_authed<Q, R>(
        &self,
        method: &str,
        params: &Q,
        token: &str,
    ) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.pds.xrpc_url(method);
        debug!(method, "XRPC authenticated query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        handle_response(response).await
    }

    /// Make an unauthenticated XRPC procedure (POST request).
    #[instrument(skip(self), fields(pds = %self.pds))]
    pub async fn procedure<B, R>(&self, method: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.pds.xrpc_url(method);
        debug!(method, %url, "XRPC procedure");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        handle_response(response).await
    }

    /// Make an authenticated XRPC procedure (POST request).
    #[instrument(skip(self, token), fields(pds = %self.pds))]
    pub async fn procedure_authed<B, R>(
        &self,
        method: &str,
        body: &B,
        token: &str,
    ) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.pds.xrpc_url(method);
        debug!(method, "XRPC authenticated procedure");

        let response = self
            .client
            .post(&url)
            .json(body)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        handle_response(response).await
    }

    /// Make an authenticated XRPC procedure whose response body is ignored.
    #[instrument(skip(self, token), fields(pds = %self.pds))]
    pub async fn procedure_authed_no_response<B>(
        &self,
        method: &str,
        body: &B,
        token: &str,
    ) -> Result<(), Error>
    where
        B: Serialize + std::fmt::Debug,
    {
        let url = self.pds.xrpc_url(method);
        debug!(method, "XRPC authenticated procedure (no response)");

        let response = self
            .client
            .post(&url)
            .json(body)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "XRPC response");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Protocol(parse_error_response(response).await))
        }
    }

    /// Make an authenticated XRPC procedure with a raw binary body.
    ///
    /// Used for uploadBlob, which takes the blob bytes as the request body
    /// and its MIME type as `Content-Type`.
    #[instrument(skip(self, data, token), fields(pds = %self.pds, size = data.len()))]
    pub async fn procedure_authed_bytes<R>(
        &self,
        method: &str,
        data: Vec<u8>,
        content_type: &str,
        token: &str,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.pds.xrpc_url(method);
        debug!(method, content_type, "XRPC authenticated procedure (binary)");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, content_type)
            .bearer_auth(token)
            .body(data)
            .send()
            .await
            .map_err(transport_error)?;

        handle_response(response).await
    }
}

/// Map a reqwest failure onto the transport error taxonomy.
fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// Handle an XRPC response, parsing the body or error.
async fn handle_response<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, Error> {
    let status = response.status();
    trace!(status = %status, "XRPC response");

    if status.is_success() {
        response.json::<R>().await.map_err(transport_error)
    } else {
        Err(Error::Protocol(parse_error_response(response).await))
    }
}

/// Parse an XRPC error response, tolerating non-JSON bodies.
async fn parse_error_response(response: reqwest::Response) -> ProtocolError {
    let status = response.status().as_u16();

    match response.json::<XrpcErrorResponse>().await {
        Ok(body) => ProtocolError::new(status, body.error, body.message),
        Err(_) => ProtocolError::new(status, None, None),
    }
}
