//! # Resource Store
//!
//! A synchronous, single-owner container for [`Entity`] records.
//!
//! The store owns its id counter as a field. There is no process-wide
//! generator: two stores never share ids, and a store built with
//! [`ResourceStore::starting_at`] issues ids from that number upward.

use crate::entity::Entity;
use crate::error::FrameworkError;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Keyed record container with monotonic id allocation.
///
/// ## Operations
///
/// * **Create**:
///     1. Takes the current value of the counter and advances it.
///     2. Converts the `u32` to `T::Id`.
///     3. Calls `T::from_create_params` to build the record.
///     4. Inserts the record and returns its id.
///
/// * **Get**: keyed lookup, `None` when absent.
///
/// * **Update**:
///     1. Looks up the record (mutable access).
///     2. Calls `on_update` with the payload.
///     3. Returns the updated record.
///
/// Records are never removed, so [`ResourceStore::iter`] yields them in
/// issuance order.
pub struct ResourceStore<T: Entity> {
    records: HashMap<T::Id, T>,
    issued: Vec<T::Id>,
    next_id: u32,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    /// Creates an empty store issuing ids from 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates an empty store whose first issued id is `first_id`.
    pub fn starting_at(first_id: u32) -> Self {
        Self {
            records: HashMap::new(),
            issued: Vec::new(),
            next_id: first_id,
        }
    }

    fn entity_type() -> &'static str {
        // "Order" instead of "relay_app::model::order::Order"
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    /// The id the next successful `create` will return.
    pub fn peek_next_id(&self) -> T::Id {
        T::Id::from(self.next_id)
    }

    pub fn create(&mut self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, ?params, "Create");

        let raw = self.next_id;
        let following = raw
            .checked_add(1)
            .ok_or(FrameworkError::IdSpaceExhausted(raw))?;
        let id = T::Id::from(raw);

        let item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;

        // The counter only advances once the record is accepted.
        self.next_id = following;
        self.records.insert(id.clone(), item);
        self.issued.push(id.clone());
        info!(entity_type, %id, size = self.records.len(), "Created");
        Ok(id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        let item = self.records.get(id);
        debug!(entity_type = Self::entity_type(), %id, found = item.is_some(), "Get");
        item
    }

    pub fn update(&mut self, id: &T::Id, update: T::Update) -> Result<&T, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?update, "Update");
        let Some(item) = self.records.get_mut(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }
        info!(entity_type, %id, "Updated");
        Ok(&*item)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in issuance order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.issued.iter().filter_map(|id| self.records.get(id))
    }
}
