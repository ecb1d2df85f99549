//! # innkeep-store: Property State Store
//!
//! The single authoritative holder of a property's rooms, reservations,
//! groups, logbook, rates, inventory, channels and promotions, plus the
//! folio records, guest profiles and reviews around them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Innkeep Data Flow                                │
//! │                                                                         │
//! │  Host app (dashboard, front desk screen)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   innkeep-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  StoreHandle  │    │  Repositories │    │  Front Desk  │  │   │
//! │  │   │  (handle.rs)  │    │  (room.rs,    │    │ (check-in,   │  │   │
//! │  │   │               │───►│   rate.rs...) │    │  check-out)  │  │   │
//! │  │   │ Arc<Mutex<>>  │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           │                    │                    │          │   │
//! │  │           └────────────────────┼────────────────────┘          │   │
//! │  │                                ▼                               │   │
//! │  │                         PropertyStore                          │   │
//! │  │                (collections, seeded at startup)                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  innkeep-core (entities, state machines, validation, pricing)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `PropertyStore` and seed loading
//! - [`repository`] - Per-collection reads and writes
//! - [`front_desk`] - Check-in, check-out and other cross-entity moves
//! - [`seed`] - Seed documents and the demo property
//! - [`config`] - Startup configuration from the environment
//! - [`handle`] - Shared access for multi-threaded hosts
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use innkeep_store::{PropertyStore, StoreConfig};
//!
//! let config = StoreConfig::from_env();
//! let mut store = PropertyStore::from_seed(config.load_seed()?)?;
//!
//! store.check_in("7", "104", None)?;
//! let summary = store.occupancy_summary();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collection;
pub mod config;
pub mod error;
pub mod front_desk;
pub mod handle;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use front_desk::FrontDeskSnapshot;
pub use handle::StoreHandle;
pub use seed::Seed;
pub use store::{generate_id, PropertyStore};
