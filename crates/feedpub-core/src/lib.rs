//! feedpub-core - Core types and traits for feed generator publishing.
//!
//! Everything here is transport-agnostic: validated identifiers, record
//! payloads, and the [`Pds`] / [`Session`] traits that a backend implements.

pub mod credentials;
pub mod error;
pub mod repo;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use repo::{BlobRef, FeedGenerator, Record, RecordValue};
pub use tokens::AccessToken;
pub use traits::{Pds, Session};
pub use types::{AtUri, Did, Nsid, PdsUrl, Rkey};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
