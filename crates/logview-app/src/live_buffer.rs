//! Bounded retention of live stream entries.

use logview_core::{LogEntry, RingBuffer};

/// Maximum number of live entries kept in memory.
pub const LIVE_BUFFER_CAPACITY: usize = 1000;

/// Append-only sequence of rendered live entries, oldest evicted first.
#[derive(Debug, Clone)]
pub struct LiveLogBuffer {
    entries: RingBuffer<LogEntry>,
    /// Entries appended since creation. Survives `clear()` so observers can
    /// tell how many entries are new since they last looked.
    total_appended: u64,
}

impl Default for LiveLogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LiveLogBuffer {
    pub fn new() -> Self {
        Self::with_capacity(LIVE_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RingBuffer::new(capacity),
            total_appended: 0,
        }
    }

    /// Append an entry, returning the evicted oldest entry when at capacity.
    pub fn append(&mut self, entry: LogEntry) -> Option<LogEntry> {
        self.total_appended += 1;
        self.entries.push(entry)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn total_appended(&self) -> u64 {
        self.total_appended
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> + DoubleEndedIterator + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    /// The newest `n` entries still retained, oldest first.
    pub fn newest(&self, n: usize) -> Vec<LogEntry> {
        let skip = self.len().saturating_sub(n);
        self.iter().skip(skip).cloned().collect()
    }
}
