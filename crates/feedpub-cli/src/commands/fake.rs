//! In-memory PDS for exercising the commands without a network.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use feedpub_core::error::{AuthError, ProtocolError};
use feedpub_core::{
    AtUri, BlobRef, Credentials, Did, Error, Nsid, Pds, PdsUrl, Record, RecordValue, Result,
    Rkey, Session,
};

pub const NOW: &str = "2024-05-01T12:00:00.000Z";
pub const REPO: &str = "did:plc:testuser";
pub const ASSIGNED_RKEY: &str = "3newrecord22a";

/// A remote call observed by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(String),
    UploadBlob { mime_type: String, len: usize },
    GetRecord(String),
    CreateRecord(serde_json::Value),
    PutRecord(String, serde_json::Value),
    DeleteRecord(String),
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    rkeys: BTreeSet<String>,
    reject_login: bool,
    reject_upload: bool,
}

#[derive(Clone)]
pub struct FakePds {
    url: PdsUrl,
    state: Arc<Mutex<State>>,
}

impl FakePds {
    pub fn new() -> Self {
        Self {
            url: PdsUrl::new("https://pds.test").unwrap(),
            state: Arc::default(),
        }
    }

    /// Seed an existing feed generator record.
    pub fn with_record(self, rkey: &str) -> Self {
        self.state.lock().unwrap().rkeys.insert(rkey.to_string());
        self
    }

    pub fn rejecting_login(self) -> Self {
        self.state.lock().unwrap().reject_login = true;
        self
    }

    pub fn rejecting_upload(self) -> Self {
        self.state.lock().unwrap().reject_upload = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn has_record(&self, rkey: &str) -> bool {
        self.state.lock().unwrap().rkeys.contains(rkey)
    }
}

#[async_trait]
impl Pds for FakePds {
    type Session = FakeSession;

    fn url(&self) -> &PdsUrl {
        &self.url
    }

    async fn login(&self, credentials: Credentials) -> Result<FakeSession> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(Call::Login(credentials.identifier().to_string()));
        if state.reject_login {
            return Err(AuthError::InvalidCredentials("Invalid identifier or password".into()).into());
        }

        Ok(FakeSession {
            did: Did::new(REPO).unwrap(),
            url: self.url.clone(),
            state: self.state.clone(),
        })
    }
}

pub struct FakeSession {
    did: Did,
    url: PdsUrl,
    state: Arc<Mutex<State>>,
}

fn not_found() -> Error {
    ProtocolError::new(
        400,
        Some("RecordNotFound".to_string()),
        Some("Could not locate record".to_string()),
    )
    .into()
}

#[async_trait]
impl Session for FakeSession {
    fn did(&self) -> &Did {
        &self.did
    }

    fn pds(&self) -> &PdsUrl {
        &self.url
    }

    fn current_time(&self) -> String {
        NOW.to_string()
    }

    async fn upload_blob(&self, data: Vec<u8>, mime_type: &str) -> Result<BlobRef> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::UploadBlob {
            mime_type: mime_type.to_string(),
            len: data.len(),
        });
        if state.reject_upload {
            return Err(ProtocolError::new(
                400,
                Some("BlobTooLarge".to_string()),
                Some("blob exceeds limit".to_string()),
            )
            .into());
        }
        Ok(BlobRef::new("bafkreiavatar", mime_type, data.len() as u64))
    }

    async fn get_record(&self, uri: &AtUri) -> Result<Record> {
        let mut state = self.state.lock().unwrap();
        let rkey = uri.rkey().as_str().to_string();
        state.calls.push(Call::GetRecord(rkey.clone()));
        if !state.rkeys.contains(&rkey) {
            return Err(not_found());
        }
        Ok(Record {
            uri: uri.clone(),
            cid: "bafyreiexisting".to_string(),
            value: RecordValue::with_type(uri.collection().as_str(), json!({})).unwrap(),
        })
    }

    async fn create_record(&self, collection: &Nsid, value: &RecordValue) -> Result<AtUri> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateRecord(value.as_value().clone()));
        state.rkeys.insert(ASSIGNED_RKEY.to_string());
        Ok(AtUri::from_parts(
            self.did.clone(),
            collection.clone(),
            Rkey::new(ASSIGNED_RKEY).unwrap(),
        ))
    }

    async fn put_record(&self, uri: &AtUri, value: &RecordValue) -> Result<AtUri> {
        let mut state = self.state.lock().unwrap();
        let rkey = uri.rkey().as_str().to_string();
        state
            .calls
            .push(Call::PutRecord(rkey.clone(), value.as_value().clone()));
        state.rkeys.insert(rkey);
        Ok(uri.clone())
    }

    async fn delete_record(&self, uri: &AtUri) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let rkey = uri.rkey().as_str().to_string();
        state.calls.push(Call::DeleteRecord(rkey.clone()));
        state.rkeys.remove(&rkey);
        Ok(())
    }
}
