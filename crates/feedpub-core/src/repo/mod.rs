//! Repository records and payload types.
//!
//! The operations on these types are methods on [`Session`](crate::Session).

mod blob;
mod feed_generator;
mod record_value;
mod types;

pub use blob::{BlobRef, CidLink};
pub use feed_generator::{FEED_GENERATOR, FeedGenerator};
pub use record_value::RecordValue;
pub use types::Record;
