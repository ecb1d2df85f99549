//! # Status State Machines
//!
//! Reservations, rooms and channels each move through a fixed graph of
//! statuses. The graphs live here so every write path asks the same question:
//! `from.can_transition_to(to)`.
//!
//! ## Reservation
//! ```text
//!                ┌──────────► cancelled
//!                │
//!   confirmed ───┼──────────► no-show
//!                │
//!                └──► checked-in ──► checked-out
//! ```
//!
//! ## Room
//! ```text
//!   available ◄──────► occupied ◄──────► dirty ◄──────► available
//!       │                 ▲   │                            │
//!       ▼                 │   ▼                            ▼
//!    arriving ────────────┘ departing ──► dirty       maintenance
//!       │                                                  │
//!       └──► available                      available ◄────┘
//! ```
//! Maintenance is entered from available or dirty and only returns to
//! available.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Reservation Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ReservationStatus {
    /// Booked, guest not yet arrived.
    Confirmed,
    /// Guest is in house.
    CheckedIn,
    /// Guest has left and the stay is closed.
    CheckedOut,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::CheckedIn => "checked-in",
            ReservationStatus::CheckedOut => "checked-out",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::NoShow => "no-show",
        }
    }

    /// No transition leaves a terminal status.
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReservationStatus::CheckedOut | ReservationStatus::Cancelled | ReservationStatus::NoShow
        )
    }

    pub const fn can_transition_to(&self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (*self, next),
            (Confirmed, CheckedIn)
                | (Confirmed, Cancelled)
                | (Confirmed, NoShow)
                | (CheckedIn, CheckedOut)
        )
    }
}

impl Default for ReservationStatus {
    fn default() -> Self {
        ReservationStatus::Confirmed
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Room Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum RoomStatus {
    /// Clean and sellable.
    Available,
    /// A guest is in house.
    Occupied,
    /// Vacated, waiting for housekeeping.
    Dirty,
    /// Out of order.
    Maintenance,
    /// Held for a guest arriving today.
    Arriving,
    /// Guest in house, due out today.
    Departing,
}

impl RoomStatus {
    /// Every status, in dashboard display order.
    pub const ALL: [RoomStatus; 6] = [
        RoomStatus::Occupied,
        RoomStatus::Available,
        RoomStatus::Arriving,
        RoomStatus::Departing,
        RoomStatus::Dirty,
        RoomStatus::Maintenance,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Dirty => "dirty",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Arriving => "arriving",
            RoomStatus::Departing => "departing",
        }
    }

    /// Statuses that must carry guest occupancy, and only these may.
    pub const fn requires_occupancy(&self) -> bool {
        matches!(
            self,
            RoomStatus::Occupied | RoomStatus::Arriving | RoomStatus::Departing
        )
    }

    pub const fn can_transition_to(&self, next: RoomStatus) -> bool {
        use RoomStatus::*;
        matches!(
            (*self, next),
            (Available, Occupied)
                | (Available, Arriving)
                | (Available, Dirty)
                | (Available, Maintenance)
                | (Occupied, Available)
                | (Occupied, Dirty)
                | (Occupied, Departing)
                | (Dirty, Available)
                | (Dirty, Occupied)
                | (Dirty, Maintenance)
                | (Arriving, Occupied)
                | (Arriving, Available)
                | (Departing, Dirty)
                | (Departing, Occupied)
                | (Maintenance, Available)
        )
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Channel Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ChannelStatus {
    Synced,
    Syncing,
    Error,
}

impl ChannelStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ChannelStatus::Synced => "synced",
            ChannelStatus::Syncing => "syncing",
            ChannelStatus::Error => "error",
        }
    }

    /// A sync run starts from a resting state and ends in synced or error.
    pub const fn can_transition_to(&self, next: ChannelStatus) -> bool {
        use ChannelStatus::*;
        matches!(
            (*self, next),
            (Synced, Syncing) | (Error, Syncing) | (Syncing, Synced) | (Syncing, Error)
        )
    }
}

impl fmt::Display for ChannelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
