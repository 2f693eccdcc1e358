//! The accumulator seam between the gatherer and the host runtime.
//!
//! The gatherer pushes one call per probed path into a [`Sink`]; what happens
//! to the observation afterwards (buffering, tagging conventions beyond the
//! `file` tag, transport) is the host's business. [`MemorySink`] is a simple
//! in-memory implementation used by this crate's tests and available to
//! embedders that want to inspect a batch directly.

use crate::models::{FieldMap, TagMap};

/// Receiver for gathered observations.
///
/// One call per probed path. The gatherer consumes no return value; sink
/// failures are owned by the implementation.
pub trait Sink {
    fn add_fields(&mut self, measurement: &str, fields: FieldMap, tags: TagMap);
}

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub measurement: String,
    pub fields: FieldMap,
    pub tags: TagMap,
}

/// An in-memory sink that records every call in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    metrics: Vec<Metric>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded observations
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// All recorded observations, oldest first
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Find the first recorded observation carrying the given tag value
    pub fn find_by_tag(&self, key: &str, value: &str) -> Option<&Metric> {
        self.metrics
            .iter()
            .find(|m| m.tags.get(key).map(String::as_str) == Some(value))
    }
}

impl Sink for MemorySink {
    fn add_fields(&mut self, measurement: &str, fields: FieldMap, tags: TagMap) {
        self.metrics.push(Metric {
            measurement: measurement.to_string(),
            fields,
            tags,
        });
    }
}
