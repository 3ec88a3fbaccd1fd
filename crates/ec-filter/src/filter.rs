//! Compact-event filter as registered with a pipeline host.

use crate::event::Event;
use ec_compactor::Compactor;
use ec_core::{CompactConfig, Record};

/// How a host may schedule a filter instance across workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    /// One instance serves all workers.
    Shared,
    /// Each worker needs its own instance.
    Single,
}

/// Drops empty values from every event passing through.
#[derive(Debug, Clone, Default)]
pub struct CompactEventFilter {
    compactor: Compactor,
}

impl CompactEventFilter {
    pub fn new(config: CompactConfig) -> Self {
        Self { compactor: Compactor::new(config) }
    }

    /// Build from host parameters. Reads `discard_zeroes` in any loose form.
    pub fn register(params: &Record) -> Self {
        let config = CompactConfig::from_params(params);
        tracing::debug!(discard_zeroes = config.discard_zero_values, "registered compact filter");
        Self::new(config)
    }

    pub fn concurrency() -> Concurrency {
        Concurrency::Shared
    }

    pub fn compactor(&self) -> &Compactor {
        &self.compactor
    }

    /// Compact one event, metadata included. Always yields exactly one event.
    ///
    /// Body and metadata are compacted separately, so a body field named
    /// `@metadata` never collides with the event's metadata.
    pub fn filter(&self, event: Event) -> Vec<Event> {
        let fields = self.compactor.compact_with_stats(&event.fields);
        let metadata = self.compactor.compact_with_stats(&event.metadata);
        tracing::debug!(
            entries_removed = fields.entries_removed() + metadata.entries_removed(),
            remaining = fields.compacted_keys,
            metadata_remaining = metadata.compacted_keys,
            "filtered event"
        );
        vec![Event {
            fields: fields.record,
            metadata: metadata.record,
        }]
    }
}
