//! Compactor — walks a record and keeps only meaningful entries.

use crate::predicates;
use ec_core::{CompactConfig, EcError, Record, Result, ValueKind};
use serde_json::{Number, Value};

/// Compaction result with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CompactionResult {
    pub record: Record,
    /// Top-level keys before compaction.
    pub original_keys: usize,
    /// Top-level keys after compaction.
    pub compacted_keys: usize,
    /// Keys inspected at any depth.
    pub keys_visited: usize,
    /// Keys dropped at any depth.
    pub keys_removed: usize,
    /// Sequence elements inspected.
    pub elements_visited: usize,
    /// Sequence elements dropped.
    pub elements_removed: usize,
    pub discard_zero_values: bool,
}

impl CompactionResult {
    /// Keys and sequence elements inspected.
    pub fn entries_visited(&self) -> usize {
        self.keys_visited + self.elements_visited
    }

    /// Keys and sequence elements dropped.
    pub fn entries_removed(&self) -> usize {
        self.keys_removed + self.elements_removed
    }

    /// Share of visited entries that were dropped, in percent.
    pub fn reduction_pct(&self) -> f64 {
        let visited = self.entries_visited();
        if visited == 0 {
            return 0.0;
        }
        self.entries_removed() as f64 / visited as f64 * 100.0
    }

    pub fn is_unchanged(&self) -> bool {
        self.keys_removed == 0 && self.elements_removed == 0
    }
}

#[derive(Debug, Default)]
struct Tally {
    visited: usize,
    removed: usize,
    elements_visited: usize,
    elements_removed: usize,
}

/// Removes null, blank, sentinel and (optionally) zero values from records.
///
/// Holds only its configuration, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compactor {
    config: CompactConfig,
}

impl Compactor {
    pub fn new(config: CompactConfig) -> Self {
        Self { config }
    }

    pub fn discarding_zeroes() -> Self {
        Self::new(CompactConfig::new(true))
    }

    pub fn config(&self) -> CompactConfig {
        self.config
    }

    pub fn discard_zero_values(&self) -> bool {
        self.config.discard_zero_values
    }

    pub fn is_meaningful_text(&self, s: &str) -> bool {
        predicates::is_meaningful_text(s, self.config.discard_zero_values)
    }

    pub fn is_meaningful_number(&self, n: &Number) -> bool {
        predicates::is_meaningful_number(n, self.config.discard_zero_values)
    }

    /// Compact a record, returning a new one with the empty entries removed.
    pub fn compact(&self, record: &Record) -> Record {
        self.compact_with_stats(record).record
    }

    /// Apply the per-value rule to a single value. `None` means drop it.
    pub fn compact_value(&self, value: &Value) -> Option<Value> {
        self.compact_entry(value, &mut Tally::default())
    }

    /// Compact a record and report what was removed.
    pub fn compact_with_stats(&self, record: &Record) -> CompactionResult {
        let mut tally = Tally::default();
        let compacted = self.compact_record(record, &mut tally);

        tracing::trace!(
            visited = tally.visited,
            removed = tally.removed,
            elements_visited = tally.elements_visited,
            elements_removed = tally.elements_removed,
            "compacted record"
        );

        CompactionResult {
            original_keys: record.len(),
            compacted_keys: compacted.len(),
            record: compacted,
            keys_visited: tally.visited,
            keys_removed: tally.removed,
            elements_visited: tally.elements_visited,
            elements_removed: tally.elements_removed,
            discard_zero_values: self.config.discard_zero_values,
        }
    }

    /// Parse a JSON object document, compact it and serialize it back.
    pub fn compact_json(&self, text: &str) -> Result<String> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(serde_json::to_string(&self.compact(&map))?),
            other => Err(EcError::NotARecord {
                kind: ValueKind::of(&other).name().into(),
            }),
        }
    }

    fn compact_record(&self, record: &Record, tally: &mut Tally) -> Record {
        let mut result = Record::new();
        for (key, value) in record {
            tally.visited += 1;
            match self.compact_entry(value, tally) {
                Some(kept) => {
                    result.insert(key.clone(), kept);
                }
                None => tally.removed += 1,
            }
        }
        result
    }

    fn compact_entry(&self, value: &Value, tally: &mut Tally) -> Option<Value> {
        match ValueKind::of(value) {
            ValueKind::Nested(sub) => {
                let compacted = self.compact_record(sub, tally);
                (!compacted.is_empty()).then_some(Value::Object(compacted))
            }
            ValueKind::Text(s) => self.is_meaningful_text(s).then(|| value.clone()),
            ValueKind::Number(n) => self.is_meaningful_number(n).then(|| value.clone()),
            ValueKind::Sequence(items) => {
                let kept: Vec<Value> = items
                    .iter()
                    .filter(|item| self.keeps_element(item))
                    .cloned()
                    .collect();
                tally.elements_visited += items.len();
                tally.elements_removed += items.len() - kept.len();
                (!kept.is_empty()).then_some(Value::Array(kept))
            }
            ValueKind::Null => None,
            ValueKind::Other(_) => Some(value.clone()),
        }
    }

    // Elements are only screened for null and text; anything else stays as-is.
    fn keeps_element(&self, item: &Value) -> bool {
        match ValueKind::of(item) {
            ValueKind::Null => false,
            ValueKind::Text(s) => self.is_meaningful_text(s),
            _ => true,
        }
    }
}
