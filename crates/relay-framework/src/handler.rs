//! # MessageHandler Trait
//!
//! The consumer side of a [`QueueActor`](crate::QueueActor). A handler is
//! given one dequeued envelope at a time and turns it into a reply. It owns
//! whatever state the messages mutate, so it needs no locking: the actor
//! calls it sequentially from a single task.

use crate::queue::Envelope;
use std::fmt::Debug;

/// Trait implemented by anything that consumes queued messages.
///
/// `handle` is infallible by signature. Handlers that can fail internally
/// fold the failure into their `Reply` so the caller always receives
/// something displayable.
pub trait MessageHandler: Send + 'static {
    /// The payload carried through the queue.
    type Message: Clone + Debug + Send + Sync + 'static;

    /// What processing one message produces.
    type Reply: Debug + Send + 'static;

    fn handle(&mut self, envelope: &Envelope<Self::Message>) -> Self::Reply;
}
