//! # Order Store
//!
//! The in-memory database of the relay: a restaurant catalog, the delivery
//! partners and the order table.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](relay_framework::Entity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`seed`] - demo catalog and sample orders
//!
//! ## Ids
//!
//! Order ids come from a counter owned by the store, starting at the number
//! given to [`OrderStore::seeded`]. Every operation that takes an order id
//! takes it as text and normalizes it first: `ORDER#1000`, `order#1000`
//! and `1000` all name the same order. Text that is not an order id at all
//! is treated like an unknown id.
//!
//! ```rust
//! use relay_app::order_store::OrderStore;
//! use relay_app::model::PrepStatus;
//!
//! let mut store = OrderStore::seeded(1000).unwrap();
//! let id = store.create_order("Domino's", vec!["Pizza".into()]).unwrap();
//! assert_eq!(id.to_string(), "ORDER#1003");
//!
//! let updated = store.update_order_status("1003", PrepStatus::Prepared).unwrap();
//! assert_eq!(updated, Some(id));
//! assert_eq!(store.update_order_status("ORDER#9999", PrepStatus::Prepared).unwrap(), None);
//! assert_eq!(store.get_order_details("order#1003").unwrap().status, PrepStatus::Prepared);
//! ```

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;

use crate::model::{
    DeliveryPartner, DeliveryStatus, Order, OrderCreate, OrderId, OrderUpdate, PartnerId,
    PrepStatus, Restaurant,
};
use relay_framework::{FrameworkError, ResourceStore};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

pub struct OrderStore {
    orders: ResourceStore<Order>,
    restaurants: BTreeMap<String, Restaurant>,
    partners: BTreeMap<PartnerId, DeliveryPartner>,
}

impl OrderStore {
    /// Creates a store holding the catalog but no orders.
    pub fn empty(first_order_number: u32) -> Self {
        Self {
            orders: ResourceStore::starting_at(first_order_number),
            restaurants: seed::restaurants()
                .into_iter()
                .map(|r| (r.name.clone(), r))
                .collect(),
            partners: seed::partners()
                .into_iter()
                .map(|p| (p.id.clone(), p))
                .collect(),
        }
    }

    /// Creates a store with the catalog and the three sample orders, which
    /// take the first three order numbers.
    pub fn seeded(first_order_number: u32) -> Result<Self, OrderError> {
        let mut store = Self::empty(first_order_number);
        for (restaurant, items, status) in seed::SAMPLE_ORDERS {
            let items = items.iter().map(|item| item.to_string()).collect();
            let id = store.create_order(restaurant, items)?;
            store.orders.update(&id, OrderUpdate::Status(status))?;
            if status == PrepStatus::Delivered {
                store
                    .orders
                    .update(&id, OrderUpdate::Delivery(DeliveryStatus::Delivered))?;
            }
        }
        info!(orders = store.orders.len(), "Order store seeded");
        Ok(store)
    }

    /// Places a new order. Returns its id.
    pub fn create_order(
        &mut self,
        restaurant: &str,
        items: Vec<String>,
    ) -> Result<OrderId, OrderError> {
        if !self.restaurants.contains_key(restaurant) {
            warn!(restaurant, "Order for unknown restaurant");
            return Err(OrderError::UnknownRestaurant(restaurant.to_string()));
        }
        let id = self.orders.create(OrderCreate {
            restaurant: restaurant.to_string(),
            items,
        })?;
        Ok(id)
    }

    /// Overwrites the preparation status and returns the normalized id.
    /// `Ok(None)` if the id is unknown.
    pub fn update_order_status(
        &mut self,
        id: &str,
        status: PrepStatus,
    ) -> Result<Option<OrderId>, OrderError> {
        self.apply(id, OrderUpdate::Status(status))
    }

    /// Overwrites the delivery status and returns the normalized id.
    /// `Ok(None)` if the id is unknown.
    pub fn update_delivery_status(
        &mut self,
        id: &str,
        status: DeliveryStatus,
    ) -> Result<Option<OrderId>, OrderError> {
        self.apply(id, OrderUpdate::Delivery(status))
    }

    fn apply(&mut self, id: &str, update: OrderUpdate) -> Result<Option<OrderId>, OrderError> {
        let Ok(order_id) = id.parse::<OrderId>() else {
            debug!(id, "Not an order id");
            return Ok(None);
        };
        match self.orders.update(&order_id, update) {
            Ok(_) => Ok(Some(order_id)),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Looks an order up by its textual id, normalized first.
    pub fn get_order_details(&self, id: &str) -> Option<&Order> {
        let order_id = id.parse::<OrderId>().ok()?;
        self.order(order_id)
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Orders in issuance order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// The id the next successful `create_order` will return.
    pub fn next_order_id(&self) -> OrderId {
        self.orders.peek_next_id()
    }

    pub fn restaurant(&self, name: &str) -> Option<&Restaurant> {
        self.restaurants.get(name)
    }

    /// Catalog sorted by name.
    pub fn restaurants(&self) -> impl Iterator<Item = &Restaurant> + '_ {
        self.restaurants.values()
    }

    pub fn partner(&self, id: &PartnerId) -> Option<&DeliveryPartner> {
        self.partners.get(id)
    }

    /// Partners sorted by id.
    pub fn partners(&self) -> impl Iterator<Item = &DeliveryPartner> + '_ {
        self.partners.values()
    }
}
