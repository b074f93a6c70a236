//! # Relay Framework
//!
//! Domain-free building blocks for a message relay: a bounded queue with
//! history, a keyed record store, and a single-writer actor that drives a
//! handler over the queue.
//!
//! ## Layers
//!
//! 1. **Record Layer** ([`Entity`], [`ResourceStore`]) - keyed records with
//!    store-owned, monotonic id allocation.
//! 2. **Queue Layer** ([`BoundedQueue`], [`Envelope`]) - fixed-capacity FIFO
//!    whose dequeued messages move to an append-only history.
//! 3. **Runtime Layer** ([`MessageHandler`], [`QueueActor`]) - one task owns
//!    the queue and the handler and serves requests sequentially.
//! 4. **Interface Layer** ([`QueueClient`], [`ActorClient`]) - cloneable,
//!    type-safe async access to the actor.
//!
//! The record and queue layers are plain synchronous types. All concurrency
//! lives in the runtime layer, and even there exactly one task touches the
//! state, so nothing is locked.
//!
//! ## Expected outcomes are values
//!
//! A full queue, an empty queue and an unknown id are ordinary results
//! (`Err(QueueFull)`, `Ok(false)`, `None`). [`FrameworkError`] is reserved
//! for a vanished actor, a rejected record or an exhausted id space.
//!
//! ## Testing
//!
//! See [`mock`] for `MockClient`, which answers client requests from scripted
//! expectations without running an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod handler;
pub mod message;
pub mod mock;
pub mod queue;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::QueueActor;
pub use client::QueueClient;
pub use client_trait::ActorClient;
pub use entity::Entity;
pub use error::{FrameworkError, QueueFull};
pub use handler::MessageHandler;
pub use message::{Probe, QueueRequest, QueueStatus, Response};
pub use queue::{BoundedQueue, Envelope};
pub use store::ResourceStore;
