//! # Room Repository
//!
//! Room listing, creation, renumbering and housekeeping status changes.
//! Guests enter and leave rooms only through [`crate::front_desk`].

use innkeep_core::{NewRoom, Room, RoomFilter, RoomStatus, RoomUpdate};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::{generate_id, PropertyStore};

impl PropertyStore {
    pub fn list_rooms(&self, filter: &RoomFilter) -> Vec<Room> {
        self.rooms.list(|room| filter.matches(room))
    }

    pub fn get_room(&self, id: &str) -> StoreResult<Room> {
        self.rooms.get(id)
    }

    /// Looks a room up by its door number.
    pub fn room_by_number(&self, room_number: &str) -> StoreResult<Room> {
        self.rooms
            .iter()
            .find(|room| room.room_number == room_number)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Room", room_number))
    }

    /// Adds a clean, empty room.
    pub fn create_room(&mut self, new: NewRoom) -> StoreResult<Room> {
        self.ensure_room_number_free(&new.room_number, None)?;

        let room = Room::vacant(generate_id(), new.room_number, new.room_type, new.floor);
        room.validate()?;

        debug!(id = %room.id, room_number = %room.room_number, "Creating room");
        self.rooms.insert(room.clone())?;
        Ok(room)
    }

    /// Patches a room's number, type or floor.
    ///
    /// Renumbering a room that holds a guest carries the new number over to
    /// the linked reservation.
    pub fn update_room(&mut self, id: &str, patch: RoomUpdate) -> StoreResult<Room> {
        let mut room = self.rooms.get(id)?;
        patch.apply_to(&mut room);
        room.validate()?;
        self.ensure_room_number_free(&room.room_number, Some(id))?;

        let linked = match room.linked_reservation_id() {
            Some(res_id) => {
                let mut res = self.reservations.get(res_id)?;
                res.room_number = Some(room.room_number.clone());
                Some(res)
            }
            None => None,
        };

        debug!(id = %id, room_number = %room.room_number, "Updating room");
        self.rooms.replace(room.clone())?;
        if let Some(res) = linked {
            self.reservations.replace(res)?;
        }
        Ok(room)
    }

    /// Housekeeping status change (clean, dirty, out of order, due out).
    ///
    /// ## Allowed
    /// ```text
    /// dirty ──► available      available ──► maintenance
    /// dirty ──► maintenance    maintenance ──► available
    /// occupied ──► departing   departing ──► occupied
    /// ```
    /// Guests are added and removed by check-in, check-out, cancel and
    /// room assignment, never here.
    pub fn set_room_status(&mut self, id: &str, status: RoomStatus) -> StoreResult<Room> {
        let mut room = self.rooms.get(id)?;
        let from = room.status;

        room.set_housekeeping_status(status).map_err(|err| {
            warn!(id = %id, %from, to = %status, error = %err, "Room status change rejected");
            err
        })?;

        debug!(id = %id, %from, to = %status, "Room status changed");
        self.rooms.replace(room.clone())?;
        Ok(room)
    }

    fn ensure_room_number_free(&self, room_number: &str, except_id: Option<&str>) -> StoreResult<()> {
        let taken = self
            .rooms
            .iter()
            .any(|r| r.room_number == room_number && Some(r.id.as_str()) != except_id);
        if taken {
            return Err(StoreError::duplicate("Room number", room_number));
        }
        Ok(())
    }
}
