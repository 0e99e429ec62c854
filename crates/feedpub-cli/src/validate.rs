//! Argument validation.
//!
//! Turns parsed [`Cli`] arguments into a typed [`Mode`] before any network
//! call is made. Empty option values are treated as absent.

use std::path::PathBuf;

use feedpub_core::{Credentials, Did, Rkey};

use crate::cli::Cli;
use crate::error::ValidationError;

/// What this invocation will do.
#[derive(Debug)]
pub enum Mode {
    Publish(PublishRequest),
    Delete(DeleteRequest),
}

/// A validated create-or-update request.
#[derive(Debug)]
pub struct PublishRequest {
    pub credentials: Credentials,
    pub display_name: String,
    pub description: String,
    /// `did:web` derived from the server hostname.
    pub service_did: Did,
    /// Existing record to replace; `None` creates a new record.
    pub rkey: Option<Rkey>,
    pub image: Option<PathBuf>,
}

/// A validated delete request.
#[derive(Debug)]
pub struct DeleteRequest {
    pub credentials: Credentials,
    pub rkey: Rkey,
}

/// Validate arguments and decide the mode.
pub fn validate(cli: &Cli) -> Result<Mode, ValidationError> {
    if !cli.user.contains('.') {
        return Err(ValidationError::InvalidHandle);
    }

    if cli.password.trim().is_empty() {
        return Err(ValidationError::EmptyPassword);
    }

    let credentials = Credentials::new(&cli.user, &cli.password);
    let rkey = non_empty(&cli.rkey);

    if cli.delete {
        let rkey = rkey.ok_or(ValidationError::DeleteWithoutRkey)?;
        return Ok(Mode::Delete(DeleteRequest {
            credentials,
            rkey: delete_rkey(rkey)?,
        }));
    }

    let (Some(name), Some(description), Some(server)) = (
        non_empty(&cli.name),
        non_empty(&cli.description),
        non_empty(&cli.server),
    ) else {
        return Err(ValidationError::MissingPublishFields);
    };

    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }

    let service_did = service_did(server)?;

    let rkey = rkey.map(update_rkey).transpose()?;

    Ok(Mode::Publish(PublishRequest {
        credentials,
        display_name: name.to_string(),
        description: description.to_string(),
        service_did,
        rkey,
        image: cli.image.clone().filter(|path| !path.as_os_str().is_empty()),
    }))
}

/// Strip a leading `https://` or `http://` and any trailing slashes.
pub fn strip_protocol(server: &str) -> &str {
    server
        .strip_prefix("https://")
        .or_else(|| server.strip_prefix("http://"))
        .unwrap_or(server)
        .trim_end_matches('/')
}

/// Derive the feed service `did:web` from a `--server` value.
fn service_did(server: &str) -> Result<Did, ValidationError> {
    let invalid = || ValidationError::InvalidServer(server.to_string());

    let hostname = strip_protocol(server);
    if !hostname.contains('.') {
        return Err(invalid());
    }

    // Paths, whitespace and `?`/`#` cannot appear in a did:web host, so they
    // are rejected here rather than published as a broken service DID.
    Did::web(hostname).map_err(|_| invalid())
}

/// Delete accepts the full record-key charset.
fn delete_rkey(rkey: &str) -> Result<Rkey, ValidationError> {
    if rkey == "." || rkey == ".." {
        return Err(ValidationError::ReservedRkey);
    }

    Rkey::new(rkey).map_err(|_| ValidationError::InvalidDeleteRkey(rkey.to_string()))
}

/// Update only accepts alphanumeric keys, e.g. server-assigned TIDs.
fn update_rkey(rkey: &str) -> Result<Rkey, ValidationError> {
    let invalid = || ValidationError::InvalidUpdateRkey(rkey.to_string());

    if !rkey.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(invalid());
    }

    // Over-long keys fail here with exit 2 instead of at the PDS.
    Rkey::new(rkey).map_err(|_| invalid())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
