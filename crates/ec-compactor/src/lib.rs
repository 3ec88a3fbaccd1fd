//! Event Compactor — recursive removal of empty and placeholder values.
//!
//! A record is walked depth-first. Keys holding `null`, blank or sentinel
//! strings (`"-"`, `"(null)"`, `"NULL"`, ...), and optionally zeroes are
//! dropped. Nested records and sequences that end up empty are dropped with
//! them. Key order is preserved and the input is never modified.

pub mod compactor;
pub mod predicates;

pub use compactor::{CompactionResult, Compactor};
pub use ec_core::{CompactConfig, Record};
