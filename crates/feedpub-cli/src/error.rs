//! Error types reported to the user.
//!
//! Every variant renders as the full `Error...` line printed to stderr;
//! `tips()` supplies the follow-up lines.

use std::path::PathBuf;

use thiserror::Error;

use feedpub_core::{Error as PdsError, Rkey};

/// Exit status for argument validation failures.
pub const EXIT_USAGE: u8 = 2;

/// Exit status for runtime and remote-call failures.
pub const EXIT_FAILURE: u8 = 1;

/// Rejected command-line input. No network call has been made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Error: Invalid user handle. Must be in format \"you.bsky.social\"")]
    InvalidHandle,

    #[error("Error: Password cannot be empty")]
    EmptyPassword,

    #[error("Error: --delete requires --rkey")]
    DeleteWithoutRkey,

    #[error("Error: Invalid rkey format: \"{0}\"")]
    InvalidDeleteRkey(String),

    #[error("Error: rkey cannot be \".\" or \"..\"")]
    ReservedRkey,

    #[error("Error: publish requires --name, --description, and --server")]
    MissingPublishFields,

    #[error("Error: Feed name cannot be empty")]
    EmptyName,

    #[error("Error: Feed description cannot be empty")]
    EmptyDescription,

    #[error("Error: Invalid server hostname: \"{0}\"")]
    InvalidServer(String),

    #[error("Error: Invalid rkey format: \"{0}\"")]
    InvalidUpdateRkey(String),
}

impl ValidationError {
    /// Corrective hints printed after the error line.
    pub fn tips(&self) -> Vec<String> {
        let tips: &[&str] = match self {
            ValidationError::DeleteWithoutRkey => &[
                "Tip: Get rkey from Feed URI: at://did:plc:.../app.bsky.feed.generator/RKEY",
            ],
            ValidationError::InvalidDeleteRkey(_) => &[
                "Tip: rkey can contain: a-z A-Z 0-9 _ ~ . : -",
                "Examples: 3m3fxwkhzu42c, filtered-timeline, my:feed",
            ],
            ValidationError::InvalidServer(_) => {
                &["Tip: Use format \"feeds.example.com\" (protocol is optional)"]
            }
            ValidationError::InvalidUpdateRkey(_) => {
                &["Tip: rkey should be alphanumeric (e.g., 3m3fxwkhzu42c)"]
            }
            _ => &[],
        };
        tips.iter().map(|tip| tip.to_string()).collect()
    }
}

/// A failed publish or delete operation.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Error: could not set up PDS client: {0}")]
    Client(#[source] PdsError),

    #[error("Error publishing feed: {0}")]
    Publish(#[source] PdsError),

    #[error("Error deleting feed record: {0}")]
    Delete(#[source] PdsError),

    #[error("Error: Image file not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    #[error("Error uploading image: could not read {}: {source}", path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error uploading image: {0}")]
    ImageUpload(#[source] PdsError),

    #[error("Error: Feed record \"{rkey}\" not found. Cannot update non-existent record.")]
    UpdateTargetMissing {
        rkey: Rkey,
        #[source]
        source: PdsError,
    },

    #[error("Error: Feed record \"{rkey}\" not found")]
    DeleteTargetMissing {
        rkey: Rkey,
        #[source]
        source: PdsError,
    },
}

impl CommandError {
    /// Corrective hints or details printed after the error line.
    pub fn tips(&self) -> Vec<String> {
        match self {
            CommandError::UpdateTargetMissing { .. } => {
                vec!["Tip: Remove --rkey to create a new feed instead.".to_string()]
            }
            CommandError::DeleteTargetMissing { source, .. } => {
                vec![format!("Details: {}", source)]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedpub_core::error::ProtocolError;

    fn not_found() -> PdsError {
        ProtocolError::new(
            400,
            Some("RecordNotFound".to_string()),
            Some("Could not locate record".to_string()),
        )
        .into()
    }

    #[test]
    fn delete_target_missing_message_and_details() {
        let err = CommandError::DeleteTargetMissing {
            rkey: Rkey::new("abc123").unwrap(),
            source: not_found(),
        };

        assert_eq!(err.to_string(), "Error: Feed record \"abc123\" not found");
        let tips = err.tips();
        assert_eq!(tips.len(), 1);
        assert!(tips[0].starts_with("Details: "));
        assert!(tips[0].contains("RecordNotFound"));
    }

    #[test]
    fn update_target_missing_suggests_create() {
        let err = CommandError::UpdateTargetMissing {
            rkey: Rkey::new("abc123").unwrap(),
            source: not_found(),
        };

        assert_eq!(
            err.to_string(),
            "Error: Feed record \"abc123\" not found. Cannot update non-existent record."
        );
        assert_eq!(
            err.tips(),
            vec!["Tip: Remove --rkey to create a new feed instead."]
        );
    }

    #[test]
    fn image_not_found_names_path() {
        let err = CommandError::ImageNotFound {
            path: PathBuf::from("missing.png"),
        };
        assert_eq!(err.to_string(), "Error: Image file not found: missing.png");
        assert!(err.tips().is_empty());
    }

    #[test]
    fn invalid_delete_rkey_lists_charset() {
        let err = ValidationError::InvalidDeleteRkey("bad/key".to_string());
        assert_eq!(err.to_string(), "Error: Invalid rkey format: \"bad/key\"");
        assert_eq!(err.tips().len(), 2);
    }
}
