//! # Command Inputs
//!
//! Creation requests, patches and list filters accepted by the store.
//!
//! ## Patch Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ReservationUpdate { check_out: Some(19th), ..Default::default() }      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_to(&mut copy)   ← only Some(..) fields are written               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  copy.validate()       ← whole entity re-checked                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  commit or discard                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No patch carries a status. Statuses move only through the transition
//! commands (check-in, check-out, cancel, housekeeping, sync). Likewise a
//! reservation's paid amount and incidentals move only through payments
//! and posted charges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::pricing::{Discount, Promotion};
use crate::status::{ReservationStatus, RoomStatus};
use crate::types::{BookingSource, GroupBlock, LogEntry, LogPriority, LogStatus, Reservation, Room};

// =============================================================================
// Rooms
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: String,
    pub floor: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomUpdate {
    pub room_number: Option<String>,
    pub room_type: Option<String>,
    pub floor: Option<i32>,
}

impl RoomUpdate {
    pub fn apply_to(&self, room: &mut Room) {
        if let Some(number) = &self.room_number {
            room.room_number = number.clone();
        }
        if let Some(room_type) = &self.room_type {
            room.room_type = room_type.clone();
        }
        if let Some(floor) = self.floor {
            room.floor = floor;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomFilter {
    pub status: Option<RoomStatus>,
    pub room_type: Option<String>,
    pub floor: Option<i32>,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        self.status.map_or(true, |s| room.status == s)
            && self.room_type.as_ref().map_or(true, |t| &room.room_type == t)
            && self.floor.map_or(true, |f| room.floor == f)
    }
}

// =============================================================================
// Reservations
// =============================================================================

/// A booking as entered at the desk. New reservations always start
/// confirmed with no room assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub confirmation_number: String,
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: String,
    #[serde(default)]
    pub guest_phone: String,
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub number_of_guests: u32,
    #[serde(default)]
    pub source: BookingSource,
    pub total_amount: Money,
    #[serde(default)]
    pub paid_amount: Money,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
}

impl NewReservation {
    pub fn into_reservation(self, id: String) -> Reservation {
        Reservation {
            id,
            confirmation_number: self.confirmation_number,
            guest_name: self.guest_name,
            guest_email: self.guest_email,
            guest_phone: self.guest_phone,
            room_type: self.room_type,
            room_number: None,
            check_in: self.check_in,
            check_out: self.check_out,
            number_of_guests: self.number_of_guests,
            source: self.source,
            status: ReservationStatus::Confirmed,
            total_amount: self.total_amount,
            paid_amount: self.paid_amount,
            incidentals: Money::zero(),
            notes: self.notes,
            group_id: self.group_id,
        }
    }
}

/// Partial edit of a reservation's booking details.
///
/// Money moves only through payments and posted charges, so the paid
/// amount is not patchable and a patch naming it fails to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ReservationUpdate {
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub room_type: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub number_of_guests: Option<u32>,
    pub source: Option<BookingSource>,
    pub total_amount: Option<Money>,
    pub notes: Option<String>,
}

impl ReservationUpdate {
    pub fn apply_to(&self, res: &mut Reservation) {
        if let Some(v) = &self.guest_name {
            res.guest_name = v.clone();
        }
        if let Some(v) = &self.guest_email {
            res.guest_email = v.clone();
        }
        if let Some(v) = &self.guest_phone {
            res.guest_phone = v.clone();
        }
        if let Some(v) = &self.room_type {
            res.room_type = v.clone();
        }
        if let Some(v) = self.check_in {
            res.check_in = v;
        }
        if let Some(v) = self.check_out {
            res.check_out = v;
        }
        if let Some(v) = self.number_of_guests {
            res.number_of_guests = v;
        }
        if let Some(v) = self.source {
            res.source = v;
        }
        if let Some(v) = self.total_amount {
            res.total_amount = v;
        }
        if let Some(v) = &self.notes {
            res.notes = Some(v.clone());
        }
    }

    /// True when the patch moves the stay window.
    pub fn changes_dates(&self) -> bool {
        self.check_in.is_some() || self.check_out.is_some()
    }
}

/// Guest details corrected at the desk during check-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckInDetails {
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
    pub number_of_guests: Option<u32>,
    pub notes: Option<String>,
}

impl CheckInDetails {
    pub fn apply_to(&self, res: &mut Reservation) {
        ReservationUpdate {
            guest_name: self.guest_name.clone(),
            guest_email: self.guest_email.clone(),
            guest_phone: self.guest_phone.clone(),
            number_of_guests: self.number_of_guests,
            notes: self.notes.clone(),
            ..Default::default()
        }
        .apply_to(res);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub group_id: Option<String>,
}

impl ReservationFilter {
    pub fn matches(&self, res: &Reservation) -> bool {
        self.status.map_or(true, |s| res.status == s)
            && self.check_in.map_or(true, |d| res.check_in == d)
            && self.check_out.map_or(true, |d| res.check_out == d)
            && self
                .group_id
                .as_ref()
                .map_or(true, |g| res.group_id.as_ref() == Some(g))
    }
}

// =============================================================================
// Groups
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub contact_person: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_rooms: u32,
    #[serde(default)]
    pub assigned_rooms: u32,
    pub total_amount: Money,
    #[serde(default)]
    pub paid_amount: Money,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewGroup {
    pub fn into_group(self, id: String) -> GroupBlock {
        GroupBlock {
            id,
            name: self.name,
            contact_person: self.contact_person,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            check_in: self.check_in,
            check_out: self.check_out,
            total_rooms: self.total_rooms,
            assigned_rooms: self.assigned_rooms,
            reservation_ids: Vec::new(),
            total_amount: self.total_amount,
            paid_amount: self.paid_amount,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupUpdate {
    pub name: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub total_rooms: Option<u32>,
    pub assigned_rooms: Option<u32>,
    pub total_amount: Option<Money>,
    pub paid_amount: Option<Money>,
    pub notes: Option<String>,
}

impl GroupUpdate {
    pub fn apply_to(&self, group: &mut GroupBlock) {
        if let Some(v) = &self.name {
            group.name = v.clone();
        }
        if let Some(v) = &self.contact_person {
            group.contact_person = v.clone();
        }
        if let Some(v) = &self.contact_email {
            group.contact_email = v.clone();
        }
        if let Some(v) = &self.contact_phone {
            group.contact_phone = v.clone();
        }
        if let Some(v) = self.check_in {
            group.check_in = v;
        }
        if let Some(v) = self.check_out {
            group.check_out = v;
        }
        if let Some(v) = self.total_rooms {
            group.total_rooms = v;
        }
        if let Some(v) = self.assigned_rooms {
            group.assigned_rooms = v;
        }
        if let Some(v) = self.total_amount {
            group.total_amount = v;
        }
        if let Some(v) = self.paid_amount {
            group.paid_amount = v;
        }
        if let Some(v) = &self.notes {
            group.notes = Some(v.clone());
        }
    }
}

// =============================================================================
// Logbook
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewLogEntry {
    pub message: String,
    pub author: String,
    #[serde(default)]
    pub priority: Option<LogPriority>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct LogFilter {
    pub status: Option<LogStatus>,
    pub priority: Option<LogPriority>,
}

impl LogFilter {
    /// Only entries still needing attention.
    pub fn open() -> Self {
        LogFilter {
            status: Some(LogStatus::Open),
            priority: None,
        }
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        self.status.map_or(true, |s| entry.status == s)
            && self.priority.map_or(true, |p| entry.priority == Some(p))
    }
}

// =============================================================================
// Channels
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewChannel {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelUpdate {
    pub name: Option<String>,
}

// =============================================================================
// Rates & Inventory
// =============================================================================

/// Room type plus an inclusive date window. Unset bounds are open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct DateRangeFilter {
    pub room_type: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRangeFilter {
    pub fn for_room_type(room_type: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        DateRangeFilter {
            room_type: Some(room_type.into()),
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn matches(&self, room_type: &str, date: NaiveDate) -> bool {
        self.room_type.as_deref().map_or(true, |t| t == room_type)
            && self.from.map_or(true, |from| date >= from)
            && self.to.map_or(true, |to| date <= to)
    }
}

// =============================================================================
// Promotions
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewPromotion {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub discount: Discount,
    #[serde(default)]
    pub room_types: Vec<String>,
    #[serde(default)]
    pub min_stay_length: Option<u32>,
    #[serde(default)]
    pub is_active: bool,
}

impl NewPromotion {
    pub fn into_promotion(self, id: String) -> Promotion {
        Promotion {
            id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            discount: self.discount,
            room_types: self.room_types,
            min_stay_length: self.min_stay_length,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct PromotionUpdate {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub discount: Option<Discount>,
    pub room_types: Option<Vec<String>>,
    pub min_stay_length: Option<u32>,
    pub is_active: Option<bool>,
}

impl PromotionUpdate {
    pub fn apply_to(&self, promo: &mut Promotion) {
        if let Some(v) = &self.name {
            promo.name = v.clone();
        }
        if let Some(v) = self.start_date {
            promo.start_date = v;
        }
        if let Some(v) = self.end_date {
            promo.end_date = v;
        }
        if let Some(v) = &self.discount {
            promo.discount = v.clone();
        }
        if let Some(v) = &self.room_types {
            promo.room_types = v.clone();
        }
        if let Some(v) = self.min_stay_length {
            promo.min_stay_length = Some(v);
        }
        if let Some(v) = self.is_active {
            promo.is_active = v;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
