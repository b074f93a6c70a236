//! Error types for the order store.

use relay_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// An unknown order id is *not* an error: lookups return `None` and updates
/// return `Ok(None)`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The restaurant is not in the catalog.
    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(String),

    /// An order must contain at least one item.
    #[error("Order items cannot be empty")]
    EmptyItems,

    /// The order counter cannot advance any further.
    #[error("No order numbers left after {0}")]
    IdSpaceExhausted(u32),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Any other failure reported by the underlying store.
    #[error("Order store error: {0}")]
    StoreError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::IdSpaceExhausted(last) => OrderError::IdSpaceExhausted(last),
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::StoreError(other.to_string()),
            },
            other => OrderError::StoreError(other.to_string()),
        }
    }
}
