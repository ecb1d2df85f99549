//! # Error Types
//!
//! Domain-specific error types for innkeep-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  innkeep-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  innkeep-store errors (separate crate)                                 │
//! │  └── StoreError       - Not found, duplicate ids, bad seeds            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is a value. A rejected write never leaves an entity
//! half-modified; the store discards its working copy instead.

use thiserror::Error;

use crate::money::Money;
use crate::status::{ChannelStatus, ReservationStatus, RoomStatus};

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by entity methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The reservation state machine does not allow this move.
    ///
    /// ## When This Occurs
    /// - Checking in a reservation that is already checked in
    /// - Checking out a reservation that was never checked in
    /// - Any move out of checked-out, cancelled or no-show
    #[error("Reservation {reservation_id} cannot move from {from} to {to}")]
    InvalidReservationTransition {
        reservation_id: String,
        from: ReservationStatus,
        to: ReservationStatus,
    },

    /// The room state machine does not allow this move.
    #[error("Room {room_number} cannot move from {from} to {to}")]
    InvalidRoomTransition {
        room_number: String,
        from: RoomStatus,
        to: RoomStatus,
    },

    /// The room cannot take this guest right now.
    ///
    /// ## User Workflow
    /// ```text
    /// Front desk picks room 103 for RES005
    ///      │
    ///      ▼
    /// Room 103 is dirty
    ///      │
    ///      ▼
    /// RoomUnavailable { room_number: "103", status: Dirty }
    ///      │
    ///      ▼
    /// UI shows: "Room 103 is dirty"
    /// ```
    #[error("Room {room_number} is {status} and cannot be assigned")]
    RoomUnavailable {
        room_number: String,
        status: RoomStatus,
    },

    /// The room is linked to a different reservation than the one acting on it.
    #[error("Room {room_number} is held by reservation {held_by:?}, not {reservation_id}")]
    OccupancyMismatch {
        room_number: String,
        reservation_id: String,
        held_by: Option<String>,
    },

    /// A housekeeping status change would put a room into an occupancy
    /// state without a guest, or strip the guest from one.
    #[error("Room {room_number} cannot be set to {status} without a front-desk transition")]
    OccupancyRequired {
        room_number: String,
        status: RoomStatus,
    },

    /// A room's status and occupancy disagree (occupancy present on a
    /// vacant status, or missing on an occupied one).
    #[error("Room {room_number} is {status} but its occupancy does not match (present: {has_occupancy})")]
    OccupancyInconsistent {
        room_number: String,
        status: RoomStatus,
        has_occupancy: bool,
    },

    /// The reservation is not in the status this operation needs.
    #[error("Reservation {reservation_id} is {actual}, expected {expected}")]
    ReservationStatusMismatch {
        reservation_id: String,
        expected: ReservationStatus,
        actual: ReservationStatus,
    },

    /// Check-out attempted with money still owed.
    #[error("Reservation {reservation_id} has an outstanding balance of {balance}")]
    OutstandingBalance {
        reservation_id: String,
        balance: Money,
    },

    /// A payment would push the paid amount above the total.
    #[error("Payment of {amount} exceeds the balance of {balance}")]
    Overpayment { amount: Money, balance: Money },

    /// The entity is in a terminal state and can no longer be edited.
    #[error("Reservation {reservation_id} is {status} and can no longer be modified")]
    ReservationClosed {
        reservation_id: String,
        status: ReservationStatus,
    },

    /// The channel sync state machine does not allow this move.
    #[error("Channel {channel_id} cannot move from {from} to {to}")]
    InvalidChannelTransition {
        channel_id: String,
        from: ChannelStatus,
        to: ChannelStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when an entity, patch or command argument breaks a field rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// One value must not exceed another (paid <= total, available <= total).
    #[error("{field} ({value}) must not exceed {limit_field} ({limit})")]
    ExceedsLimit {
        field: String,
        value: i64,
        limit_field: String,
        limit: i64,
    },

    /// A date range ends before (or, when strict, on) its start.
    #[error("{field}: {end} must be after {start}")]
    InvalidDateRange {
        field: String,
        start: String,
        end: String,
    },

    /// Invalid format (e.g., a stay-x-pay-y with nothing free).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value inside one entity (e.g., a reservation linked twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
