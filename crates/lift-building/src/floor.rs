//! Per-level waiting queue.

use std::collections::VecDeque;

use lift_core::{FloorId, PassengerId};

/// A building level and the passengers waiting on it, in arrival order.
///
/// Passengers enter only through arrival injection and leave only when an
/// elevator boards them.  Order is strictly FIFO; the queue is never sorted
/// by destination.
#[derive(Debug, Clone)]
pub struct Floor {
    number:  FloorId,
    waiting: VecDeque<PassengerId>,
}

impl Floor {
    pub fn new(number: FloorId) -> Self {
        Self {
            number,
            waiting: VecDeque::new(),
        }
    }

    #[inline]
    pub fn number(&self) -> FloorId {
        self.number
    }

    /// Append `passenger` to the tail of the queue.
    pub fn add_passenger(&mut self, passenger: PassengerId) {
        self.waiting.push_back(passenger);
    }

    #[inline]
    pub fn has_waiting_passengers(&self) -> bool {
        !self.waiting.is_empty()
    }

    /// Dequeue the passenger at the head, or `None` if nobody is waiting.
    pub fn next_passenger(&mut self) -> Option<PassengerId> {
        self.waiting.pop_front()
    }

    #[inline]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }
}
