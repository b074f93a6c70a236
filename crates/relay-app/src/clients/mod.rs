//! Type-safe wrappers that hide the request/response plumbing of the
//! framework's [`QueueClient`](relay_framework::QueueClient).

pub mod relay_client;

pub use relay_client::*;
