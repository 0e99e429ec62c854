//! feedpub-xrpc - XRPC-backed PDS implementation.

mod pds;
mod session;
mod xrpc;

pub use pds::XrpcPds;
pub use session::XrpcSession;
