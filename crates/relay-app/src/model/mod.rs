//! Pure data structures. [`Order`] implements the
//! [`Entity`](relay_framework::Entity) trait; restaurants and delivery
//! partners are static catalog records.

pub mod message;
pub mod order;
pub mod partner;
pub mod restaurant;

pub use message::*;
pub use order::*;
pub use partner::*;
pub use restaurant::*;
