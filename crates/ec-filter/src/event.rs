//! Pipeline event: a body record plus host metadata.

use ec_core::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reserved key under which metadata travels when an event is flattened.
pub const METADATA_KEY: &str = "@metadata";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub fields: Record,
    #[serde(default, skip_serializing_if = "Record::is_empty")]
    pub metadata: Record,
}

impl Event {
    pub fn new(fields: Record) -> Self {
        Self { fields, metadata: Record::new() }
    }

    pub fn with_metadata(mut self, metadata: Record) -> Self {
        self.metadata = metadata;
        self
    }

    /// Split a flattened record back into body and metadata.
    ///
    /// A non-object `@metadata` entry is left in the body as an ordinary field.
    pub fn from_record(record: Record) -> Self {
        let mut fields = Record::new();
        let mut metadata = Record::new();
        for (key, value) in record {
            match value {
                Value::Object(meta) if key == METADATA_KEY => metadata = meta,
                other => {
                    fields.insert(key, other);
                }
            }
        }
        Self { fields, metadata }
    }

    /// Flatten into one record, metadata under `@metadata` when present.
    ///
    /// Non-empty metadata replaces a body field of the same name.
    pub fn to_record_with_metadata(&self) -> Record {
        let mut record = self.fields.clone();
        if !self.metadata.is_empty() {
            record.insert(METADATA_KEY.to_string(), Value::Object(self.metadata.clone()));
        }
        record
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Record> for Event {
    fn from(record: Record) -> Self {
        Self::from_record(record)
    }
}
