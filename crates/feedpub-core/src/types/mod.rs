//! Core AT Protocol types.
//!
//! These types enforce protocol invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod at_uri;
mod did;
mod nsid;
mod pds_url;
mod rkey;

pub use at_uri::AtUri;
pub use did::Did;
pub use nsid::Nsid;
pub use pds_url::PdsUrl;
pub use rkey::Rkey;
