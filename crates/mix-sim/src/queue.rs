use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use mix_core::errors::{ErrorInfo, MixError};

use crate::event::Event;

/// Heap entry pairing an event with its insertion sequence number.
///
/// Entries are ordered by:
/// 1. Time (earlier first, `f64::total_cmp`)
/// 2. Sequence number (FIFO among equal times)
#[derive(Debug, Clone, Copy)]
struct QueuedEvent {
    event: Event,
    sequence: u64,
}

impl Ord for QueuedEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.event
            .time()
            .total_cmp(&other.event.time())
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for QueuedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueuedEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedEvent {}

/// Min-priority queue of activation events.
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<QueuedEvent>>,
    next_sequence: u64,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an event in `O(log m)`.
    pub fn schedule(&mut self, event: Event) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(QueuedEvent { event, sequence }));
    }

    /// Removes and returns the earliest event.
    pub fn pop_earliest(&mut self) -> Result<Event, MixError> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.event)
            .ok_or_else(|| {
                MixError::EmptyQueue(
                    ErrorInfo::new("empty-queue", "no event left to pop")
                        .with_context("scheduled_total", self.next_sequence),
                )
            })
    }

    /// Time of the earliest event without removing it.
    pub fn peek_time(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(entry)| entry.event.time())
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of events ever scheduled on this queue.
    pub fn scheduled_total(&self) -> u64 {
        self.next_sequence
    }
}
