//! # innkeep-core: Pure Domain Logic for Innkeep
//!
//! Entity types, status state machines and business rules for the hotel
//! property state store. Nothing in this crate holds state or performs I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Innkeep Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-office Dashboard                       │   │
//! │  │   Arrivals ──► Check-in ──► In-house ──► Departures ──► Folio  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 innkeep-store (PropertyStore)                   │   │
//! │  │      collections, id generation, atomic cross-entity writes    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ innkeep-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  status   │  │  pricing  │  │ validation│  │   │
//! │  │   │   Room    │  │  state    │  │ Promotion │  │   rules   │  │   │
//! │  │   │Reservation│  │ machines  │  │ StayQuote │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • NO ENVIRONMENT                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Rooms, reservations, groups, logbook, rates, inventory, channels
//! - [`status`] - Reservation, room and channel state machines
//! - [`money`] - Integer paise amounts
//! - [`pricing`] - Promotions and stay quotes
//! - [`folio`] - Charges, payments and the derived guest bill
//! - [`guest`] - Guest profiles and reviews
//! - [`dashboard`] - Occupancy summary
//! - [`dto`] - Creation requests, patches and filters
//! - [`validation`] - Field rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use innkeep_core::{Money, ReservationStatus};
//!
//! let total = Money::from_major(15_000);
//! let paid = Money::from_major(15_000);
//! assert!((total - paid).is_zero());
//!
//! assert!(ReservationStatus::Confirmed.can_transition_to(ReservationStatus::CheckedIn));
//! assert!(!ReservationStatus::Cancelled.can_transition_to(ReservationStatus::CheckedIn));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dashboard;
pub mod dto;
pub mod error;
pub mod folio;
pub mod guest;
pub mod money;
pub mod pricing;
pub mod status;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dashboard::{OccupancySummary, StatusCount};
pub use dto::*;
pub use error::{CoreError, CoreResult, ValidationError};
pub use folio::{
    ChargeRecord, Department, Folio, FolioCharge, FolioPayment, PaymentMethod, PaymentRecord,
};
pub use guest::{
    GuestFilter, GuestProfile, GuestTag, Review, ReviewFilter, ReviewSentiment, ReviewSource,
    ReviewSummary,
};
pub use money::Money;
pub use pricing::{Discount, NightlyRate, Promotion, StayQuote};
pub use status::{ChannelStatus, ReservationStatus, RoomStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest party accepted on a single reservation.
pub const MAX_PARTY_SIZE: u32 = 12;

/// Longest notes field accepted on reservations and groups, in characters.
pub const MAX_NOTES_LEN: usize = 1000;

/// Currency the demo property trades in.
pub const DEFAULT_CURRENCY: &str = "INR";
