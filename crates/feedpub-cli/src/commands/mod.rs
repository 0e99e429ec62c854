//! Publish and delete operations.
//!
//! Both are generic over [`Pds`] so they run unchanged against the XRPC
//! backend and the in-memory fake used by the unit tests.

mod delete;
mod image;
mod publish;

#[cfg(test)]
mod fake;

use feedpub_core::Pds;

use crate::error::CommandError;
use crate::validate::Mode;

/// Run the operation selected by validation and print its result.
pub async fn run<P: Pds>(pds: &P, mode: Mode) -> Result<(), CommandError> {
    match mode {
        Mode::Publish(request) => publish::run(pds, request).await,
        Mode::Delete(request) => delete::run(pds, request).await,
    }
}
