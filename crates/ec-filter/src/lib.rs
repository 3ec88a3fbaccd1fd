//! Pipeline filter that compacts each event, metadata included.

pub mod event;
pub mod filter;

pub use event::{Event, METADATA_KEY};
pub use filter::{CompactEventFilter, Concurrency};
