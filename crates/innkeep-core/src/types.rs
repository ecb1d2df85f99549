//! # Domain Types
//!
//! The hotel entities held by the property store.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Room       │   │   Reservation   │   │   GroupBlock    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  room_number    │◄──│  room_number?   │   │  reservation_ids│──┐    │
//! │  │  status         │   │  status         │◄──│                 │  │    │
//! │  │  occupancy? ────┼──►│  id             │   │  id ◄───────────┼──┘    │
//! │  └─────────────────┘   │  group_id? ─────┼──►│                 │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Keyed aggregates (no id):                                             │
//! │    RatePrice              (room_type, date) → price                    │
//! │    InventoryAvailability  (room_type, date) → available / total        │
//! │                                                                         │
//! │  Stand-alone: LogEntry, Channel (promotions live in pricing.rs)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All cross-entity references are weak: they are ids looked up through the
//! store, never owned pointers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::status::{ChannelStatus, ReservationStatus, RoomStatus};
use crate::validation::{
    validate_amount, validate_count_within, validate_notes, validate_party_size,
    validate_payment_split, validate_positive_amount, validate_required, validate_stay_dates,
    validate_unique_ids,
};

// =============================================================================
// Occupancy
// =============================================================================

/// Guest occupancy carried by a room while it is arriving, occupied or
/// departing. The four fields are present together or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Occupancy {
    pub guest_name: String,
    pub reservation_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Occupancy {
    /// Builds the occupancy a reservation places on its room.
    pub fn for_reservation(reservation: &Reservation) -> Self {
        Occupancy {
            guest_name: reservation.guest_name.clone(),
            reservation_id: reservation.id.clone(),
            check_in: reservation.check_in,
            check_out: reservation.check_out,
        }
    }

    fn validate(&self) -> CoreResult<()> {
        validate_required("occupancy.guestName", &self.guest_name)?;
        validate_required("occupancy.reservationId", &self.reservation_id)?;
        validate_stay_dates(self.check_in, self.check_out)?;
        Ok(())
    }
}

// =============================================================================
// Room
// =============================================================================

/// A physical room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,

    /// Door number shown to staff ("101").
    pub room_number: String,

    /// Sellable category ("Deluxe", "Standard", "Suite").
    pub room_type: String,

    pub floor: i32,

    pub status: RoomStatus,

    /// Present iff `status.requires_occupancy()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<Occupancy>,
}

impl Room {
    /// Creates a clean, empty room.
    pub fn vacant(
        id: impl Into<String>,
        room_number: impl Into<String>,
        room_type: impl Into<String>,
        floor: i32,
    ) -> Self {
        Room {
            id: id.into(),
            room_number: room_number.into(),
            room_type: room_type.into(),
            floor,
            status: RoomStatus::Available,
            occupancy: None,
        }
    }

    /// The reservation this room is linked to, if any.
    pub fn linked_reservation_id(&self) -> Option<&str> {
        self.occupancy.as_ref().map(|o| o.reservation_id.as_str())
    }

    /// Checks field presence and the status/occupancy invariant.
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("roomNumber", &self.room_number)?;
        validate_required("roomType", &self.room_type)?;

        if self.status.requires_occupancy() != self.occupancy.is_some() {
            return Err(CoreError::OccupancyInconsistent {
                room_number: self.room_number.clone(),
                status: self.status,
                has_occupancy: self.occupancy.is_some(),
            });
        }

        if let Some(occupancy) = &self.occupancy {
            occupancy.validate()?;
        }

        Ok(())
    }

    fn move_to(&mut self, next: RoomStatus) -> CoreResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidRoomTransition {
                room_number: self.room_number.clone(),
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    fn ensure_held_by(&self, reservation_id: &str) -> CoreResult<()> {
        if self.linked_reservation_id() != Some(reservation_id) {
            return Err(CoreError::OccupancyMismatch {
                room_number: self.room_number.clone(),
                reservation_id: reservation_id.to_string(),
                held_by: self.linked_reservation_id().map(str::to_string),
            });
        }
        Ok(())
    }

    /// Pre-assigns a clean room to an upcoming stay (available → arriving).
    pub fn hold_for(&mut self, occupancy: Occupancy) -> CoreResult<()> {
        if self.status != RoomStatus::Available {
            return Err(CoreError::RoomUnavailable {
                room_number: self.room_number.clone(),
                status: self.status,
            });
        }
        self.move_to(RoomStatus::Arriving)?;
        self.occupancy = Some(occupancy);
        Ok(())
    }

    /// Puts a guest in the room.
    ///
    /// Accepted from `available`, or from `arriving` when the room is held
    /// for the same reservation.
    pub fn occupy(&mut self, occupancy: Occupancy) -> CoreResult<()> {
        match self.status {
            RoomStatus::Available => {}
            RoomStatus::Arriving => self.ensure_held_by(&occupancy.reservation_id)?,
            status => {
                return Err(CoreError::RoomUnavailable {
                    room_number: self.room_number.clone(),
                    status,
                })
            }
        }
        self.move_to(RoomStatus::Occupied)?;
        self.occupancy = Some(occupancy);
        Ok(())
    }

    /// Guest has left: occupied/departing → dirty, occupancy cleared.
    pub fn vacate(&mut self, reservation_id: &str) -> CoreResult<()> {
        self.ensure_held_by(reservation_id)?;
        self.move_to(RoomStatus::Dirty)?;
        self.occupancy = None;
        Ok(())
    }

    /// Drops a pre-assignment: arriving → available, occupancy cleared.
    pub fn release(&mut self, reservation_id: &str) -> CoreResult<()> {
        self.ensure_held_by(reservation_id)?;
        self.move_to(RoomStatus::Available)?;
        self.occupancy = None;
        Ok(())
    }

    /// Housekeeping status change (clean, dirty, maintenance, departing).
    ///
    /// Never adds or removes a guest: a move between an occupancy status
    /// and a vacant one has to go through check-in, check-out or release.
    /// Setting the current status again is a no-op.
    pub fn set_housekeeping_status(&mut self, next: RoomStatus) -> CoreResult<()> {
        if next == self.status {
            return Ok(());
        }
        if next.requires_occupancy() != self.status.requires_occupancy() {
            return Err(CoreError::OccupancyRequired {
                room_number: self.room_number.clone(),
                status: next,
            });
        }
        self.move_to(next)
    }

    /// Keeps the room's copy of the stay dates in line with its reservation.
    pub fn sync_stay(&mut self, reservation: &Reservation) {
        if let Some(occupancy) = self.occupancy.as_mut() {
            if occupancy.reservation_id == reservation.id {
                occupancy.guest_name = reservation.guest_name.clone();
                occupancy.check_in = reservation.check_in;
                occupancy.check_out = reservation.check_out;
            }
        }
    }
}

// =============================================================================
// Booking Source
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BookingSource {
    #[serde(rename = "direct")]
    Direct,
    #[serde(rename = "booking.com")]
    BookingCom,
    #[serde(rename = "agoda")]
    Agoda,
    #[serde(rename = "airbnb")]
    Airbnb,
    #[serde(rename = "expedia")]
    Expedia,
    #[serde(rename = "website")]
    Website,
    #[serde(rename = "phone")]
    Phone,
}

impl Default for BookingSource {
    fn default() -> Self {
        BookingSource::Direct
    }
}

// =============================================================================
// Reservation
// =============================================================================

/// A guest booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,

    /// Display number ("RES001"). Not required to be unique.
    pub confirmation_number: String,

    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,

    /// Room type the guest booked.
    pub room_type: String,

    /// Set when a room is assigned or the guest checks in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,

    pub check_in: NaiveDate,
    pub check_out: NaiveDate,

    pub number_of_guests: u32,
    pub source: BookingSource,
    pub status: ReservationStatus,

    /// Room charge for the whole stay.
    pub total_amount: Money,
    pub paid_amount: Money,

    /// Extras posted to the folio (F&B, spa, laundry...). Moves only
    /// through `post_charge`.
    #[serde(default)]
    pub incidentals: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Reservation {
    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Room charge plus posted extras.
    pub fn total_charges(&self) -> Money {
        self.total_amount + self.incidentals
    }

    /// Amount still owed (room + extras - paid).
    pub fn balance(&self) -> Money {
        self.total_charges() - self.paid_amount
    }

    /// True when nothing is owed.
    pub fn is_settled(&self) -> bool {
        !self.balance().is_positive()
    }

    pub fn validate(&self) -> CoreResult<()> {
        validate_required("confirmationNumber", &self.confirmation_number)?;
        validate_required("guestName", &self.guest_name)?;
        validate_required("roomType", &self.room_type)?;
        validate_stay_dates(self.check_in, self.check_out)?;
        validate_party_size(self.number_of_guests)?;
        validate_amount("totalAmount", self.total_amount)?;
        validate_amount("incidentals", self.incidentals)?;
        validate_amount("paidAmount", self.paid_amount)?;
        if self.paid_amount > self.total_charges() {
            return Err(ValidationError::ExceedsLimit {
                field: "paidAmount".to_string(),
                value: self.paid_amount.minor(),
                limit_field: "totalCharges".to_string(),
                limit: self.total_charges().minor(),
            }
            .into());
        }
        validate_notes(self.notes.as_deref())?;
        Ok(())
    }

    /// Rejects edits to a reservation in a terminal status.
    pub fn ensure_open(&self) -> CoreResult<()> {
        if self.status.is_terminal() {
            return Err(CoreError::ReservationClosed {
                reservation_id: self.id.clone(),
                status: self.status,
            });
        }
        Ok(())
    }

    fn ensure_status(&self, expected: ReservationStatus) -> CoreResult<()> {
        if self.status != expected {
            return Err(CoreError::ReservationStatusMismatch {
                reservation_id: self.id.clone(),
                expected,
                actual: self.status,
            });
        }
        Ok(())
    }

    fn move_to(&mut self, next: ReservationStatus) -> CoreResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidReservationTransition {
                reservation_id: self.id.clone(),
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Records a room picked ahead of arrival. Only confirmed bookings
    /// take a pre-assignment.
    pub fn assign_room(&mut self, room_number: &str) -> CoreResult<()> {
        self.ensure_status(ReservationStatus::Confirmed)?;
        self.room_number = Some(room_number.to_string());
        Ok(())
    }

    /// Drops a pre-assigned room number.
    pub fn unassign_room(&mut self) -> CoreResult<()> {
        self.ensure_status(ReservationStatus::Confirmed)?;
        self.room_number = None;
        Ok(())
    }

    /// confirmed → checked-in, with the room the guest was given.
    pub fn check_in(&mut self, room_number: &str) -> CoreResult<()> {
        self.move_to(ReservationStatus::CheckedIn)?;
        self.room_number = Some(room_number.to_string());
        Ok(())
    }

    /// checked-in → checked-out. Refused while a balance is owed.
    pub fn check_out(&mut self) -> CoreResult<()> {
        if !self.status.can_transition_to(ReservationStatus::CheckedOut) {
            return self.move_to(ReservationStatus::CheckedOut);
        }
        if !self.is_settled() {
            return Err(CoreError::OutstandingBalance {
                reservation_id: self.id.clone(),
                balance: self.balance(),
            });
        }
        self.move_to(ReservationStatus::CheckedOut)
    }

    /// confirmed → cancelled. The pre-assigned room number is dropped.
    pub fn cancel(&mut self) -> CoreResult<()> {
        self.move_to(ReservationStatus::Cancelled)?;
        self.room_number = None;
        Ok(())
    }

    /// confirmed → no-show. The pre-assigned room number is dropped.
    pub fn mark_no_show(&mut self) -> CoreResult<()> {
        self.move_to(ReservationStatus::NoShow)?;
        self.room_number = None;
        Ok(())
    }

    /// Adds a payment to the paid amount.
    ///
    /// ## Rules
    /// - Amount must be positive
    /// - Reservation must not be closed
    /// - paid must stay <= total
    pub fn record_payment(&mut self, amount: Money) -> CoreResult<()> {
        validate_positive_amount("amount", amount)?;
        self.ensure_open()?;

        let balance = self.balance();
        if amount > balance {
            return Err(CoreError::Overpayment { amount, balance });
        }

        self.paid_amount += amount;
        Ok(())
    }

    /// Adds an extra to the bill.
    ///
    /// ## Rules
    /// - Amount must be positive
    /// - Reservation must not be closed
    pub fn post_charge(&mut self, amount: Money) -> CoreResult<()> {
        validate_positive_amount("amount", amount)?;
        self.ensure_open()?;

        self.incidentals += amount;
        validate_amount("incidentals", self.incidentals)?;
        Ok(())
    }
}

// =============================================================================
// Group Block
// =============================================================================

/// Rooms held for one organiser (wedding, conference, tour).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GroupBlock {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,

    /// Rooms requested for the block.
    pub total_rooms: u32,

    /// Rooms already allocated; never above `total_rooms`.
    pub assigned_rooms: u32,

    #[serde(default)]
    pub reservation_ids: Vec<String>,

    pub total_amount: Money,
    pub paid_amount: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GroupBlock {
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("name", &self.name)?;
        validate_required("contactPerson", &self.contact_person)?;
        validate_stay_dates(self.check_in, self.check_out)?;
        validate_count_within("assignedRooms", self.assigned_rooms, "totalRooms", self.total_rooms)?;
        validate_unique_ids("reservationIds", &self.reservation_ids)?;
        validate_payment_split(self.total_amount, self.paid_amount)?;
        validate_notes(self.notes.as_deref())?;
        Ok(())
    }

    pub fn balance(&self) -> Money {
        self.total_amount - self.paid_amount
    }

    /// Rooms still to allocate.
    pub fn remaining_rooms(&self) -> u32 {
        self.total_rooms.saturating_sub(self.assigned_rooms)
    }

    pub fn is_linked(&self, reservation_id: &str) -> bool {
        self.reservation_ids.iter().any(|id| id == reservation_id)
    }

    /// Adds a reservation id once. Returns false when it was already linked.
    pub fn link_reservation(&mut self, reservation_id: &str) -> bool {
        if self.is_linked(reservation_id) {
            return false;
        }
        self.reservation_ids.push(reservation_id.to_string());
        true
    }
}

// =============================================================================
// Logbook
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Open,
    Resolved,
}

impl LogStatus {
    pub const fn toggled(&self) -> LogStatus {
        match self {
            LogStatus::Open => LogStatus::Resolved,
            LogStatus::Resolved => LogStatus::Open,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum LogPriority {
    Low,
    Medium,
    High,
}

impl Default for LogPriority {
    fn default() -> Self {
        LogPriority::Medium
    }
}

/// A shift-handover note. Only `status` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub message: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub status: LogStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<LogPriority>,
}

impl LogEntry {
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("message", &self.message)?;
        validate_required("author", &self.author)?;
        Ok(())
    }
}

// =============================================================================
// Rates & Inventory
// =============================================================================

/// Price for one room type on one night. `(room_type, date)` is the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RatePrice {
    pub room_type: String,
    pub date: NaiveDate,
    pub price: Money,
}

impl RatePrice {
    pub fn matches_key(&self, room_type: &str, date: NaiveDate) -> bool {
        self.room_type == room_type && self.date == date
    }

    pub fn validate(&self) -> CoreResult<()> {
        validate_required("roomType", &self.room_type)?;
        validate_amount("price", self.price)?;
        Ok(())
    }
}

/// Sellable rooms of one type on one night. `(room_type, date)` is the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAvailability {
    pub room_type: String,
    pub date: NaiveDate,
    pub available: u32,
    pub total: u32,
}

impl InventoryAvailability {
    pub fn matches_key(&self, room_type: &str, date: NaiveDate) -> bool {
        self.room_type == room_type && self.date == date
    }

    /// Rooms of this type already sold for the night.
    pub fn sold(&self) -> u32 {
        self.total.saturating_sub(self.available)
    }

    pub fn validate(&self) -> CoreResult<()> {
        validate_required("roomType", &self.room_type)?;
        validate_count_within("available", self.available, "total", self.total)?;
        Ok(())
    }
}

// =============================================================================
// Channel
// =============================================================================

/// A distribution channel (OTA) and its last sync outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub status: ChannelStatus,
    pub last_sync: DateTime<Utc>,
    /// Message from the last failed sync; cleared on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl Channel {
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("name", &self.name)?;
        Ok(())
    }

    fn move_to(&mut self, next: ChannelStatus) -> CoreResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidChannelTransition {
                channel_id: self.id.clone(),
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    pub fn begin_sync(&mut self) -> CoreResult<()> {
        self.move_to(ChannelStatus::Syncing)
    }

    pub fn complete_sync(&mut self, at: DateTime<Utc>) -> CoreResult<()> {
        self.move_to(ChannelStatus::Synced)?;
        self.last_sync = at;
        self.last_error = None;
        Ok(())
    }

    pub fn fail_sync(&mut self, message: &str) -> CoreResult<()> {
        validate_required("message", message)?;
        self.move_to(ChannelStatus::Error)?;
        self.last_error = Some(message.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
