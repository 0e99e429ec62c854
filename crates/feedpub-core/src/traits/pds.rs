//! PDS trait.

use async_trait::async_trait;

use crate::types::PdsUrl;
use crate::{Credentials, Result};

use super::Session;

/// A PDS implementation.
#[async_trait]
pub trait Pds: Send + Sync {
    /// Session type for this PDS.
    type Session: Session;

    /// Returns the PDS URL for this instance.
    fn url(&self) -> &PdsUrl;

    /// Authenticate with the PDS and create a new session.
    async fn login(&self, credentials: Credentials) -> Result<Self::Session>;
}
