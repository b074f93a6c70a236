//! # Framework Errors
//!
//! Common error types shared by the store, the queue actor and its clients.
//! Expected outcomes (a full queue, an empty queue, an unknown id on lookup)
//! are *not* represented here; they travel as ordinary return values.

use std::fmt::{self, Debug, Display};

/// Errors that can occur within the relay framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Id space exhausted after {0}")]
    IdSpaceExhausted(u32),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Returned by [`BoundedQueue::enqueue`](crate::BoundedQueue::enqueue) when the
/// queue is at capacity. The rejected payload is handed back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueFull<M> {
    pub payload: M,
    pub capacity: usize,
}

impl<M> QueueFull<M> {
    pub fn into_payload(self) -> M {
        self.payload
    }
}

impl<M> Display for QueueFull<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue full ({} messages)", self.capacity)
    }
}

impl<M: Debug> std::error::Error for QueueFull<M> {}
