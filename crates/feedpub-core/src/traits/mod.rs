//! Core traits for PDS and session behavior.

mod pds;
mod session;

pub use pds::Pds;
pub use session::Session;
