//! # Inventory Repository
//!
//! Sellable room counts keyed by `(room_type, date)`.
//!
//! Two write paths:
//! - `set_available` adjusts the count on a key that already exists and
//!   reports `NotFound` otherwise
//! - `upsert_inventory` inserts or replaces both counts

use chrono::NaiveDate;
use innkeep_core::{DateRangeFilter, InventoryAvailability};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::{key_label, PropertyStore};

impl PropertyStore {
    pub fn list_inventory(&self, filter: &DateRangeFilter) -> Vec<InventoryAvailability> {
        self.inventory
            .iter()
            .filter(|entry| filter.matches(&entry.room_type, entry.date))
            .cloned()
            .collect()
    }

    pub fn get_inventory(&self, room_type: &str, date: NaiveDate) -> StoreResult<InventoryAvailability> {
        self.inventory
            .iter()
            .find(|entry| entry.matches_key(room_type, date))
            .cloned()
            .ok_or_else(|| StoreError::not_found("Inventory", key_label(room_type, date)))
    }

    /// Sets the available count on an existing key. `available` may not
    /// exceed the key's total.
    pub fn set_available(
        &mut self,
        room_type: &str,
        date: NaiveDate,
        available: u32,
    ) -> StoreResult<InventoryAvailability> {
        let slot = self
            .inventory
            .iter_mut()
            .find(|entry| entry.matches_key(room_type, date))
            .ok_or_else(|| StoreError::not_found("Inventory", key_label(room_type, date)))?;

        let mut entry = slot.clone();
        entry.available = available;
        entry.validate().map_err(|err| {
            warn!(room_type = %room_type, %date, available, error = %err, "Inventory update rejected");
            err
        })?;

        debug!(room_type = %room_type, %date, available, "Setting availability");
        *slot = entry.clone();
        Ok(entry)
    }

    /// Inserts or replaces the available and total counts for a key.
    pub fn upsert_inventory(&mut self, entry: InventoryAvailability) -> StoreResult<InventoryAvailability> {
        entry.validate()?;

        debug!(
            room_type = %entry.room_type,
            date = %entry.date,
            available = entry.available,
            total = entry.total,
            "Upserting inventory"
        );
        match self
            .inventory
            .iter_mut()
            .find(|existing| existing.matches_key(&entry.room_type, entry.date))
        {
            Some(existing) => *existing = entry.clone(),
            None => self.inventory.push(entry.clone()),
        }
        Ok(entry)
    }
}
