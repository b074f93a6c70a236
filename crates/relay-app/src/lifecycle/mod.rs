//! # System Lifecycle
//!
//! Starts and stops the relay.
//!
//! ## The RelaySystem Pattern
//!
//! [`RelaySystem::new`] validates a [`RelayConfig`], seeds an
//! [`OrderStore`](crate::order_store::OrderStore), wraps it in a
//! [`CommandProcessor`](crate::processor::CommandProcessor) and spawns the
//! [`QueueActor`](relay_framework::QueueActor) that owns both. Callers talk to
//! it through the [`RelayClient`](crate::clients::RelayClient) it hands out.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - [`RelaySystem::shutdown`] joins the actor task
//!
//! Clones of the client keep the actor alive, so every clone must be
//! dropped before `shutdown` can return.
//!
//! Tracing is initialized separately with
//! [`setup_tracing`](relay_framework::tracing::setup_tracing), once per binary.

pub mod config;
pub mod relay_system;

pub use config::*;
pub use relay_system::*;
