//! # Repository Module
//!
//! Per-collection operations on the [`PropertyStore`](crate::PropertyStore).
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Caller (dashboard view, host command)                                 │
//! │       │                                                                 │
//! │       │  store.update_reservation(id, patch)                           │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  reservation.rs                                                 │   │
//! │  │  - look up, clone, patch                                        │   │
//! │  │  - entity.validate()          (innkeep-core rules)              │   │
//! │  │  - commit                                                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Collection<T> (in-memory, insertion ordered)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Uniform Shape
//! | Operation | Returns |
//! |---|---|
//! | `list_*(filter)` | clones of matching entities |
//! | `get_*(id)` | clone, or `NotFound` |
//! | `create_*(new)` | the created entity with a generated id |
//! | `update_*(id, patch)` | the updated entity, or `NotFound` / rule error |
//! | `delete_promotion(id)` | the removed promotion, or `NotFound` |
//! | `post_charge` / `record_payment` | the new record; the reservation's totals move with it |
//! | `mark_review_replied(id)` | the review, or `NotFound` |

pub mod channel;
pub mod folio;
pub mod group;
pub mod guest;
pub mod inventory;
pub mod logbook;
pub mod promotion;
pub mod rate;
pub mod reservation;
pub mod room;
