use std::collections::VecDeque;

use serde::Serialize;

use crate::pipeline::types::{CorpusRecord, InputTensor, MemoryTelemetry, round2};

/// One encoded working-memory entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngramRecord {
    pub timestamp: f64,
    pub content: String,
    pub dissonance_at_encoding: f64,
}

/// Bounded FIFO working-memory buffer. Created once per session, receives
/// exactly one append per pipeline run, never explicitly cleared.
#[derive(Debug, Clone)]
pub struct ShortTermMemory {
    records: VecDeque<EngramRecord>,
    capacity: usize,
}

impl ShortTermMemory {
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Encodes the run into the buffer and reports coherence/saturation.
    /// Oldest entries are evicted once the buffer exceeds capacity.
    pub fn bind(
        &mut self,
        tensor: &InputTensor,
        retrieved: &[CorpusRecord],
        dissonance_total: f64,
    ) -> MemoryTelemetry {
        self.records.push_back(EngramRecord {
            timestamp: tensor.chronos.unix_epoch,
            content: tensor.content.clone(),
            dissonance_at_encoding: dissonance_total,
        });
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }

        let coherence = if retrieved.is_empty() {
            (1.0 - dissonance_total).max(0.1)
        } else {
            0.95
        };

        MemoryTelemetry {
            saturation: round2(self.records.len() as f64 / self.capacity as f64),
            coherence: round2(coherence),
            consolidation_required: dissonance_total > 0.7,
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &EngramRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ShortTermMemory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
