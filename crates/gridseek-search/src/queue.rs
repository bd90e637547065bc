//! Stable min-priority queue.
//!
//! Items are stored in a min-heap keyed by `(priority, insertion_order)`.
//! Lower priorities are popped first; ties are broken by insertion order
//! (FIFO), which keeps expansion order reproducible for equal-cost nodes.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    priority: f64,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap stores `Reverse` to pop the smallest.
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue with FIFO tie-breaking.
#[derive(Debug)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `item` with the given priority.
    pub fn put(&mut self, item: T, priority: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            item,
        }));
    }

    /// Remove the item with the lowest priority (ties broken FIFO).
    pub fn get(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.item)
    }

    /// Remove the lowest item, also returning its priority.
    pub fn get_with_priority(&mut self) -> Option<(T, f64)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued items, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
