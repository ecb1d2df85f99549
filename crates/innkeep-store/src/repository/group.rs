//! # Group Repository
//!
//! Group blocks and their reservation links. A link is kept on both sides:
//! the group's `reservation_ids` and the reservation's `group_id`.

use innkeep_core::{GroupBlock, GroupUpdate, NewGroup};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::store::{generate_id, PropertyStore};

impl PropertyStore {
    pub fn list_groups(&self) -> Vec<GroupBlock> {
        self.groups.list(|_| true)
    }

    pub fn get_group(&self, id: &str) -> StoreResult<GroupBlock> {
        self.groups.get(id)
    }

    pub fn create_group(&mut self, new: NewGroup) -> StoreResult<GroupBlock> {
        let group = new.into_group(generate_id());
        group.validate()?;

        debug!(id = %group.id, name = %group.name, rooms = group.total_rooms, "Creating group");
        self.groups.insert(group.clone())?;
        Ok(group)
    }

    pub fn update_group(&mut self, id: &str, patch: GroupUpdate) -> StoreResult<GroupBlock> {
        let mut group = self.groups.get(id)?;
        patch.apply_to(&mut group);
        group.validate()?;

        debug!(id = %id, "Updating group");
        self.groups.replace(group.clone())?;
        Ok(group)
    }

    /// Links a reservation into a group. Linking twice is a no-op.
    ///
    /// A reservation belongs to at most one group; linking it elsewhere
    /// removes it from its previous group in the same commit. Closed
    /// reservations can't be linked.
    pub fn link_reservation(&mut self, group_id: &str, reservation_id: &str) -> StoreResult<GroupBlock> {
        let mut group = self.groups.get(group_id)?;
        let mut res = self.reservations.get(reservation_id)?;
        res.ensure_open().map_err(|err| {
            warn!(group_id = %group_id, reservation_id = %reservation_id, error = %err, "Group link rejected");
            err
        })?;

        let previous = match res.group_id.as_deref() {
            Some(old) if old != group_id => {
                let mut old_group = self.groups.get(old)?;
                old_group.reservation_ids.retain(|id| id != reservation_id);
                Some(old_group)
            }
            _ => None,
        };

        let added = group.link_reservation(reservation_id);
        res.group_id = Some(group_id.to_string());
        group.validate()?;

        debug!(group_id = %group_id, reservation_id = %reservation_id, added, "Linking reservation");
        self.groups.replace(group.clone())?;
        self.reservations.replace(res)?;
        if let Some(old_group) = previous {
            self.groups.replace(old_group)?;
        }
        Ok(group)
    }
}
