//! Emptiness predicates for scalar values.

use serde_json::Number;

/// Strings that stand in for "no data". Kept exactly as upstream producers emit them.
pub const SENTINELS: &[&str] = &[
    "-", "?", "(empty)", "(none)", "(null)", "NULL", "unset", "Nul",
];

/// Strings treated as zero when zero-discarding is on.
pub const ZERO_TEXTS: &[&str] = &["0", "0x0"];

pub fn is_sentinel(s: &str) -> bool {
    SENTINELS.contains(&s)
}

pub fn is_zero_text(s: &str) -> bool {
    ZERO_TEXTS.contains(&s)
}

/// True for any numeric zero, including `0.0` and `-0.0`.
pub fn is_zero(n: &Number) -> bool {
    n.as_f64() == Some(0.0)
}

/// Whether a string carries data worth keeping.
pub fn is_meaningful_text(s: &str, discard_zeroes: bool) -> bool {
    !s.is_empty() && !is_sentinel(s) && !(discard_zeroes && is_zero_text(s))
}

pub fn is_meaningful_number(n: &Number, discard_zeroes: bool) -> bool {
    !(discard_zeroes && is_zero(n))
}
