//! Priority-ordered writer collection with stable tie-breaking

use super::writer::Writer;
use std::cmp::Reverse;

/// Priority assigned when the caller does not specify one
///
/// Every default-priority writer shares this constant, so they keep insertion
/// order relative to each other.
pub const DEFAULT_PRIORITY: i32 = 1;

struct Entry {
    priority: i32,
    seq: u64,
    writer: Box<dyn Writer>,
}

/// Ordered collection of `(priority, writer)` pairs
///
/// Iteration is by descending priority; entries with equal priority keep
/// their relative insertion order. A max-priority ordering alone does not
/// guarantee stable ties, so each entry carries a monotonically increasing
/// sequence number used as the secondary sort key.
#[derive(Default)]
pub struct WriterQueue {
    entries: Vec<Entry>,
    next_seq: u64,
}

fn sort_key(priority: i32, seq: u64) -> (Reverse<i32>, u64) {
    (Reverse(priority), seq)
}

impl WriterQueue {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Insert a writer at the given priority, after any existing writer of
    /// equal or higher priority
    pub fn add(&mut self, writer: Box<dyn Writer>, priority: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let index = self
            .entries
            .partition_point(|entry| sort_key(entry.priority, entry.seq) <= sort_key(priority, seq));
        self.entries.insert(
            index,
            Entry {
                priority,
                seq,
                writer,
            },
        );
    }

    /// Writers in dispatch order, most urgent first
    pub fn iter(&self) -> impl Iterator<Item = &dyn Writer> {
        self.entries.iter().map(|entry| entry.writer.as_ref())
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Writer>> {
        self.entries.iter_mut().map(|entry| &mut entry.writer)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Writer names in dispatch order, mainly for diagnostics and tests
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.writer.name().to_string())
            .collect()
    }

    /// Priorities in dispatch order
    pub fn priorities(&self) -> Vec<i32> {
        self.entries.iter().map(|entry| entry.priority).collect()
    }
}
