//! # Entity Trait
//!
//! The `Entity` trait defines the contract every record kept in a
//! [`ResourceStore`](crate::ResourceStore) must implement. It specifies the
//! associated types for ids, creation and update payloads and errors, and
//! the two hooks (`from_create_params`, `on_update`) through which the
//! record builds and mutates itself.
//!
//! # Architecture Note
//! The store logic (id allocation, keyed lookup, not-found handling, logging)
//! is written *once* against this trait. A record type only describes how it
//! is built and how an update payload changes it.
//!
//! Associated types keep payloads apart: an `Order` store accepts only
//! `Order::Create`, and the compiler rejects anything else.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be managed by a `ResourceStore`.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    /// Must be convertible from u32 for automatic id generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The error type for this record.
    ///
    /// One error enum per record type rather than one per operation; the
    /// union is small and callers match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from its freshly allocated id and payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update payload in place.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
