//! Compaction configuration and loose flag parsing for host parameters.

use crate::error::{EcError, Result};
use crate::types::Record;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Parameter name hosts use for the zero-discard flag.
pub const DISCARD_ZEROES_PARAM: &str = "discard_zeroes";

/// Lowercased string forms that switch a flag on.
const TRUTHY: &[&str] = &["1", "true", "t", "on", "enabled"];

/// Interpret a loosely-typed configuration value as a boolean flag.
///
/// The value's string form is lowercased and compared against the truthy
/// spellings. Strings are taken verbatim, `null` reads as the empty string,
/// and every other value uses its JSON text (`true`, `1`, `1.0`, ...).
pub fn parse_flag(value: &Value) -> bool {
    let text = match value {
        Value::String(s) => s.to_lowercase(),
        Value::Null => String::new(),
        other => other.to_string().to_lowercase(),
    };
    TRUTHY.contains(&text.as_str())
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_flag(&value))
}

/// Settings fixed once when a compactor is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactConfig {
    /// Treat `0`, `0.0`, `"0"` and `"0x0"` as empty.
    #[serde(rename = "discard_zeroes", default, deserialize_with = "deserialize_flag")]
    pub discard_zero_values: bool,
}

impl CompactConfig {
    pub fn new(discard_zero_values: bool) -> Self {
        Self { discard_zero_values }
    }

    /// Build from a host parameter map. A missing `discard_zeroes` is false.
    pub fn from_params(params: &Record) -> Self {
        let discard_zero_values = params
            .get(DISCARD_ZEROES_PARAM)
            .map(parse_flag)
            .unwrap_or(false);
        tracing::debug!(discard_zero_values, "resolved compaction config");
        Self { discard_zero_values }
    }

    /// Parse a JSON configuration document.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| EcError::InvalidConfig(e.to_string()))
    }
}
