pub mod config;
pub mod error;
pub mod types;

pub use config::{parse_flag, CompactConfig};
pub use error::{EcError, Result};
pub use types::{Record, ValueKind};
