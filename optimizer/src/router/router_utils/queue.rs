//! Min-priority queue used by the router engine.
//!
//! The queue never updates entries in place. When an item gets a better
//! priority it is pushed again, and the caller skips the outdated entry
//! once it comes out. Entries of equal priority come out in the order
//! they were pushed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

/// A queued item and the priority it was pushed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry<T> {
    /// The queued item.
    pub item: T,
    priority: OrderedFloat<f64>,
    sequence: u64,
}

impl<T> QueueEntry<T> {
    /// The priority the item had when it was pushed.
    pub fn priority(&self) -> f64 {
        self.priority.into_inner()
    }
}

// Reversed so that `BinaryHeap`, a max-heap, pops the lowest priority
// first, and the earliest push among equal priorities.
impl<T: Eq> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T: Eq> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue with first-in-first-out ordering among equal
/// priorities. `f64::INFINITY` is a valid priority.
#[derive(Debug)]
pub struct RoutingQueue<T> {
    heap: BinaryHeap<QueueEntry<T>>,
    next_sequence: u64,
}

impl<T: Eq> RoutingQueue<T> {
    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        RoutingQueue {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Adds `item` with the given priority.
    pub fn push(&mut self, item: T, priority: f64) {
        self.heap.push(QueueEntry {
            item,
            priority: OrderedFloat(priority),
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    /// Removes and returns the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<QueueEntry<T>> {
        self.heap.pop()
    }

    /// Number of queued entries, outdated ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
