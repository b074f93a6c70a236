//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`Entity`] trait implementation that lets
//! [`Order`] live in a [`ResourceStore`](relay_framework::ResourceStore).

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use relay_framework::Entity;

impl Entity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Error = OrderError;

    /// Builds a Received / Pending order stamped with the current time.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        Ok(Self::new(id, params.restaurant, params.items))
    }

    /// Overwrites one status field. Transitions are not checked: any
    /// status may replace any other.
    fn on_update(&mut self, update: OrderUpdate) -> Result<(), Self::Error> {
        match update {
            OrderUpdate::Status(status) => self.status = status,
            OrderUpdate::Delivery(delivery) => self.delivery_status = delivery,
        }
        Ok(())
    }
}
