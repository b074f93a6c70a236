//! # Queue Messages
//!
//! The request types exchanged between a `QueueClient` and its `QueueActor`.

use crate::error::FrameworkError;
use crate::handler::MessageHandler;
use crate::queue::Envelope;
use serde::Serialize;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A read-only closure run against the handler inside the actor task.
pub type Probe<H> = Box<dyn FnOnce(&H) + Send>;

/// Point-in-time counters of a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueStatus {
    /// Messages waiting to be processed.
    pub depth: usize,
    pub capacity: usize,
    /// Messages processed so far (history length).
    pub processed: usize,
}

impl QueueStatus {
    pub fn is_full(&self) -> bool {
        self.depth >= self.capacity
    }
}

/// Internal message type sent to the actor to request operations.
///
/// - **Submit**: enqueue a payload; replies `false` when the queue is full.
/// - **DrainOne**: dequeue the head and hand it to the handler; replies
///   `None` when the queue is empty.
/// - **Status** / **History**: read-only queries.
/// - **Inspect**: run a [`Probe`] against the handler's state. The probe
///   carries its own reply channel.
pub enum QueueRequest<H: MessageHandler> {
    Submit {
        message: H::Message,
        respond_to: Response<bool>,
    },
    DrainOne {
        respond_to: Response<Option<H::Reply>>,
    },
    Status {
        respond_to: Response<QueueStatus>,
    },
    History {
        respond_to: Response<Vec<Envelope<H::Message>>>,
    },
    Inspect {
        probe: Probe<H>,
    },
}

impl<H: MessageHandler> std::fmt::Debug for QueueRequest<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Submit { message, .. } => {
                f.debug_struct("Submit").field("message", message).finish()
            }
            Self::DrainOne { .. } => f.write_str("DrainOne"),
            Self::Status { .. } => f.write_str("Status"),
            Self::History { .. } => f.write_str("History"),
            Self::Inspect { .. } => f.write_str("Inspect"),
        }
    }
}
