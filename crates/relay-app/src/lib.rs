//! # Order Relay
//!
//! A food-delivery message relay. Role-tagged messages from customers,
//! restaurants and delivery partners pass through a bounded queue into a
//! command processor that owns the order store.
//!
//! This library exposes the application modules for the `relay` binary and
//! for integration testing.

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod processor;
pub mod shell;
