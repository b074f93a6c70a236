//! # Bounded Queue
//!
//! A fixed-capacity FIFO buffer with an append-only history of everything
//! that has been dequeued.
//!
//! A full queue and an empty queue are ordinary outcomes. `enqueue` hands a
//! rejected payload back inside [`QueueFull`], and `dequeue` returns `None`.

use crate::error::QueueFull;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// A payload stamped with the time it was accepted into the queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<M> {
    pub payload: M,
    pub enqueued_at: DateTime<Local>,
}

impl<M> Envelope<M> {
    pub fn new(payload: M) -> Self {
        Self {
            payload,
            enqueued_at: Local::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoundedQueue<M> {
    pending: VecDeque<Envelope<M>>,
    history: Vec<Envelope<M>>,
    capacity: usize,
}

impl<M> BoundedQueue<M> {
    /// Creates an empty queue that holds at most `capacity` messages.
    ///
    /// A capacity of zero is allowed and rejects every message. The capacity
    /// is a bound only; nothing is allocated for it up front.
    pub fn new(capacity: usize) -> Self {
        Self {
            pending: VecDeque::new(),
            history: Vec::new(),
            capacity,
        }
    }

    /// Stamps `payload` with the current time and appends it at the tail.
    pub fn enqueue(&mut self, payload: M) -> Result<(), QueueFull<M>> {
        if self.is_full() {
            warn!(depth = self.len(), capacity = self.capacity, "Queue full, message rejected");
            return Err(QueueFull {
                payload,
                capacity: self.capacity,
            });
        }
        self.pending.push_back(Envelope::new(payload));
        debug!(depth = self.len(), capacity = self.capacity, "Enqueued");
        Ok(())
    }

    /// Removes the head message, records it in history and returns it.
    pub fn dequeue(&mut self) -> Option<&Envelope<M>> {
        let head = self.pending.pop_front()?;
        self.history.push(head);
        debug!(depth = self.len(), processed = self.history.len(), "Dequeued");
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pending.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Messages still waiting, head first.
    pub fn pending(&self) -> impl Iterator<Item = &Envelope<M>> + '_ {
        self.pending.iter()
    }

    /// Every dequeued message, in dequeue order.
    pub fn history(&self) -> &[Envelope<M>] {
        &self.history
    }
}
