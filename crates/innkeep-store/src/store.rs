//! # Property Store
//!
//! The single owner of every hotel collection.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Every write                                     │
//! │                                                                         │
//! │  1. look up   ── unknown id ──────────────────────► NotFound            │
//! │       │                                                                 │
//! │  2. clone the entities involved                                        │
//! │       │                                                                 │
//! │  3. mutate + validate the clones ── rule broken ──► Core / Validation  │
//! │       │                                                                 │
//! │  4. commit all clones                                                  │
//! │                                                                         │
//! │  Steps 1-3 never touch the collections, so a rejected write leaves     │
//! │  the store exactly as it was.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The per-collection operations live in [`crate::repository`] and the
//! cross-entity front-office transitions in [`crate::front_desk`], both as
//! `impl PropertyStore` blocks.

use std::collections::HashSet;

use innkeep_core::{
    ChargeRecord, Channel, GroupBlock, GuestProfile, InventoryAvailability, LogEntry, Money,
    PaymentRecord, Promotion, RatePrice, Reservation, ReservationStatus, Review, Room, RoomStatus,
};
use innkeep_core::validation::validate_positive_amount;
use tracing::{debug, info};
use uuid::Uuid;

use crate::collection::{Collection, Entity};
use crate::error::{StoreError, StoreResult};
use crate::seed::Seed;

#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    pub(crate) rooms: Collection<Room>,
    pub(crate) reservations: Collection<Reservation>,
    pub(crate) groups: Collection<GroupBlock>,
    pub(crate) logs: Collection<LogEntry>,
    pub(crate) rates: Vec<RatePrice>,
    pub(crate) inventory: Vec<InventoryAvailability>,
    pub(crate) channels: Collection<Channel>,
    pub(crate) promotions: Collection<Promotion>,
    pub(crate) payments: Collection<PaymentRecord>,
    pub(crate) charges: Collection<ChargeRecord>,
    pub(crate) guests: Collection<GuestProfile>,
    pub(crate) reviews: Collection<Review>,
}

impl PropertyStore {
    /// An empty store.
    pub fn new() -> Self {
        PropertyStore::default()
    }

    /// Builds a store from a seed.
    ///
    /// ## Checks
    /// - Every entity passes its own `validate()`
    /// - Ids are unique per collection, rate/inventory keys unique
    /// - Room numbers are unique
    /// - References resolve: room occupancy, group links, payments, charges
    /// - Room and reservation agree: one room per reservation, matching
    ///   room number, and a status pairing the front desk could produce
    /// - Group membership is mirrored on both sides
    /// - Every checked-in reservation has a room holding it
    /// - Payment and charge records never exceed what the reservation shows
    pub fn from_seed(seed: Seed) -> StoreResult<Self> {
        let mut store = PropertyStore::new();

        for room in seed.rooms {
            room.validate()?;
            if store.rooms.iter().any(|r| r.room_number == room.room_number) {
                return Err(StoreError::duplicate("Room number", room.room_number));
            }
            store.rooms.insert(room)?;
        }
        for res in seed.reservations {
            res.validate()?;
            store.reservations.insert(res)?;
        }
        for group in seed.groups {
            group.validate()?;
            store.groups.insert(group)?;
        }
        for entry in seed.logs {
            entry.validate()?;
            store.logs.insert(entry)?;
        }
        for channel in seed.channels {
            channel.validate()?;
            store.channels.insert(channel)?;
        }
        for promo in seed.promotions {
            promo.validate()?;
            store.promotions.insert(promo)?;
        }
        for payment in seed.payments {
            validate_positive_amount("amount", payment.amount)?;
            store.payments.insert(payment)?;
        }
        for charge in seed.charges {
            charge.validate()?;
            store.charges.insert(charge)?;
        }
        for guest in seed.guests {
            guest.validate()?;
            store.guests.insert(guest)?;
        }
        for review in seed.reviews {
            review.validate()?;
            store.reviews.insert(review)?;
        }

        {
            let mut keys = HashSet::new();
            for rate in &seed.rates {
                rate.validate()?;
                if !keys.insert((rate.room_type.as_str(), rate.date)) {
                    return Err(StoreError::duplicate("Rate", key_label(&rate.room_type, rate.date)));
                }
            }
        }
        store.rates = seed.rates;

        {
            let mut keys = HashSet::new();
            for entry in &seed.inventory {
                entry.validate()?;
                if !keys.insert((entry.room_type.as_str(), entry.date)) {
                    return Err(StoreError::duplicate(
                        "Inventory",
                        key_label(&entry.room_type, entry.date),
                    ));
                }
            }
        }
        store.inventory = seed.inventory;

        store.check_references()?;

        info!(
            rooms = store.rooms.len(),
            reservations = store.reservations.len(),
            groups = store.groups.len(),
            rates = store.rates.len(),
            "Property store seeded"
        );

        Ok(store)
    }

    fn check_references(&self) -> StoreResult<()> {
        let mut held = HashSet::new();
        for room in self.rooms.iter() {
            let Some(res_id) = room.linked_reservation_id() else {
                continue;
            };
            let Some(res) = self.reservations.find(res_id) else {
                return Err(dangling(room, "reservation", res_id));
            };
            if !held.insert(res_id) {
                return Err(StoreError::Seed(format!(
                    "Reservation {res_id} is held by more than one room"
                )));
            }
            if res.room_number.as_deref() != Some(room.room_number.as_str()) {
                return Err(StoreError::Seed(format!(
                    "Room {} holds reservation {} booked into room {}",
                    room.room_number,
                    res_id,
                    res.room_number.as_deref().unwrap_or("none")
                )));
            }
            let expected = match room.status {
                RoomStatus::Arriving => ReservationStatus::Confirmed,
                _ => ReservationStatus::CheckedIn,
            };
            if res.status != expected {
                return Err(StoreError::Seed(format!(
                    "Room {} is {} but reservation {} is {}",
                    room.room_number, room.status, res_id, res.status
                )));
            }
        }

        for res in self.reservations.iter() {
            if let Some(group_id) = &res.group_id {
                let Some(group) = self.groups.find(group_id) else {
                    return Err(dangling(res, "group", group_id));
                };
                if !group.reservation_ids.contains(&res.id) {
                    return Err(StoreError::Seed(format!(
                        "Reservation {} names group {} but the group does not list it",
                        res.id, group_id
                    )));
                }
            }
            if res.status == ReservationStatus::CheckedIn && self.room_held_by(&res.id).is_none() {
                return Err(StoreError::Seed(format!(
                    "Reservation {} is checked in but no room holds it",
                    res.id
                )));
            }
        }

        for group in self.groups.iter() {
            for res_id in &group.reservation_ids {
                let Some(res) = self.reservations.find(res_id) else {
                    return Err(dangling(group, "reservation", res_id));
                };
                if res.group_id.as_deref() != Some(group.id.as_str()) {
                    return Err(StoreError::Seed(format!(
                        "Group {} lists reservation {} which does not name it",
                        group.id, res_id
                    )));
                }
            }
        }

        for payment in self.payments.iter() {
            if !self.reservations.contains(&payment.reservation_id) {
                return Err(dangling(payment, "reservation", &payment.reservation_id));
            }
        }
        for charge in self.charges.iter() {
            if !self.reservations.contains(&charge.reservation_id) {
                return Err(dangling(charge, "reservation", &charge.reservation_id));
            }
        }

        for res in self.reservations.iter() {
            let paid: Money = self
                .payments
                .iter()
                .filter(|p| p.reservation_id == res.id)
                .map(|p| p.amount)
                .sum();
            if paid > res.paid_amount {
                return Err(StoreError::Seed(format!(
                    "Payments for reservation {} total {} but it shows {} paid",
                    res.id, paid, res.paid_amount
                )));
            }
            let posted: Money = self
                .charges
                .iter()
                .filter(|c| c.reservation_id == res.id)
                .map(|c| c.amount)
                .sum();
            if posted > res.incidentals {
                return Err(StoreError::Seed(format!(
                    "Charges for reservation {} total {} but it shows {} in incidentals",
                    res.id, posted, res.incidentals
                )));
            }
        }

        Ok(())
    }

    /// The room whose occupancy points at this reservation, if any.
    pub(crate) fn room_held_by(&self, reservation_id: &str) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|room| room.linked_reservation_id() == Some(reservation_id))
    }

    /// Everything the store holds, in seed form.
    pub fn export(&self) -> Seed {
        Seed {
            rooms: self.rooms.list(|_| true),
            reservations: self.reservations.list(|_| true),
            groups: self.groups.list(|_| true),
            logs: self.logs.list(|_| true),
            rates: self.rates.clone(),
            inventory: self.inventory.clone(),
            channels: self.channels.list(|_| true),
            promotions: self.promotions.list(|_| true),
            payments: self.payments.list(|_| true),
            charges: self.charges.list(|_| true),
            guests: self.guests.list(|_| true),
            reviews: self.reviews.list(|_| true),
        }
    }
}

/// Helper to generate a new entity ID.
pub fn generate_id() -> String {
    let id = Uuid::new_v4().to_string();
    debug!(id = %id, "Generated id");
    id
}

pub(crate) fn key_label(room_type: &str, date: chrono::NaiveDate) -> String {
    format!("{room_type}@{date}")
}

fn dangling<T: Entity>(from: &T, what: &str, id: &str) -> StoreError {
    StoreError::Seed(format!("{} {} links unknown {} {}", T::KIND, from.id(), what, id))
}

// =============================================================================
// Unit Tests
// =============================================================================
