//! Fixed-capacity FIFO buffer.

use std::collections::VecDeque;

/// A fixed-capacity circular buffer that evicts the oldest entries when full.
///
/// Backed by a `VecDeque`, so both push and eviction are O(1) amortized.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Create a new ring buffer with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a value, evicting the oldest if at capacity.
    ///
    /// Returns the evicted value, if any. With a capacity of zero the pushed
    /// value itself is handed back.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }
        let evicted = if self.buf.len() >= self.capacity {
            self.buf.pop_front()
        } else {
            None
        };
        self.buf.push_back(value);
        evicted
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Maximum capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over items from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + DoubleEndedIterator + ExactSizeIterator {
        self.buf.iter()
    }

    /// Item at `index`, counting from the oldest.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Get the most recently pushed item.
    pub fn latest(&self) -> Option<&T> {
        self.buf.back()
    }

    /// Get the oldest item.
    pub fn oldest(&self) -> Option<&T> {
        self.buf.front()
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_basic() {
        let mut buf = RingBuffer::new(3);
        buf.push(1);
        buf.push(2);
        buf.push(3);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.latest(), Some(&3));
        assert_eq!(buf.oldest(), Some(&1));
    }

    #[test]
    fn test_ring_buffer_overflow_evicts_oldest() {
        let mut buf = RingBuffer::new(3);
        assert_eq!(buf.push(1), None);
        assert_eq!(buf.push(2), None);
        assert_eq!(buf.push(3), None);
        assert_eq!(buf.push(4), Some(1));
        assert_eq!(buf.len(), 3);
        let items: Vec<_> = buf.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 4]);
    }

    #[test]
    fn test_ring_buffer_never_exceeds_capacity() {
        let mut buf = RingBuffer::new(5);
        for i in 0..1_000 {
            buf.push(i);
            assert!(buf.len() <= 5);
        }
        assert_eq!(buf.oldest(), Some(&995));
        assert_eq!(buf.latest(), Some(&999));
    }

    #[test]
    fn test_ring_buffer_zero_capacity_stores_nothing() {
        let mut buf = RingBuffer::new(0);
        assert_eq!(buf.push(7), Some(7));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_ring_buffer_get_counts_from_oldest() {
        let mut buf = RingBuffer::new(2);
        buf.push('a');
        buf.push('b');
        buf.push('c');
        assert_eq!(buf.get(0), Some(&'b'));
        assert_eq!(buf.get(1), Some(&'c'));
        assert_eq!(buf.get(2), None);
    }

    #[test]
    fn test_ring_buffer_clear() {
        let mut buf = RingBuffer::new(3);
        buf.push(1);
        buf.push(2);
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 3);
    }
}
