//! # Front Desk
//!
//! Cross-entity front-office operations: every one of them touches a
//! reservation and a room together and commits both or neither.
//!
//! ## Guest Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Reservation              Room                                         │
//! │   ───────────              ────                                         │
//! │   confirmed ──assign_room──► available → arriving  (occupancy set)     │
//! │       │                                                                 │
//! │       │ check_in            available/arriving → occupied              │
//! │       ▼                                                                 │
//! │   checked-in                                                           │
//! │       │                                                                 │
//! │       │ check_out           occupied/departing → dirty (cleared)       │
//! │       ▼                     (refused while a balance is owed)          │
//! │   checked-out                                                          │
//! │                                                                         │
//! │   confirmed ──cancel / no-show──► cancelled / no-show                  │
//! │                                   arriving room → available            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use innkeep_core::{
    CheckInDetails, LogEntry, LogFilter, OccupancySummary, Occupancy, Reservation,
    ReservationFilter, ReservationStatus, Room,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::PropertyStore;

/// Everything the front-office dashboard shows for one business date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontDeskSnapshot {
    pub business_date: NaiveDate,
    pub occupancy: OccupancySummary,
    pub arrivals: Vec<Reservation>,
    pub departures: Vec<Reservation>,
    pub in_house: Vec<Reservation>,
    pub open_logs: Vec<LogEntry>,
}

impl PropertyStore {
    // =========================================================================
    // Queries
    // =========================================================================

    /// Confirmed reservations arriving on `date`.
    pub fn arrivals(&self, date: NaiveDate) -> Vec<Reservation> {
        self.list_reservations(&ReservationFilter {
            status: Some(ReservationStatus::Confirmed),
            check_in: Some(date),
            ..Default::default()
        })
    }

    /// Checked-in reservations due out on `date`.
    pub fn departures(&self, date: NaiveDate) -> Vec<Reservation> {
        self.list_reservations(&ReservationFilter {
            status: Some(ReservationStatus::CheckedIn),
            check_out: Some(date),
            ..Default::default()
        })
    }

    /// Every checked-in reservation.
    pub fn in_house(&self) -> Vec<Reservation> {
        self.list_reservations(&ReservationFilter {
            status: Some(ReservationStatus::CheckedIn),
            ..Default::default()
        })
    }

    pub fn occupancy_summary(&self) -> OccupancySummary {
        OccupancySummary::from_rooms(&self.rooms.list(|_| true))
    }

    pub fn snapshot(&self, date: NaiveDate) -> FrontDeskSnapshot {
        FrontDeskSnapshot {
            business_date: date,
            occupancy: self.occupancy_summary(),
            arrivals: self.arrivals(date),
            departures: self.departures(date),
            in_house: self.in_house(),
            open_logs: self.list_logs(&LogFilter::open()),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Puts a confirmed guest into a room.
    ///
    /// ## Steps (all checked before anything is written)
    /// 1. Reservation exists, room number exists
    /// 2. Desk corrections (`details`) applied and re-validated
    /// 3. Reservation confirmed → checked-in, room number recorded
    /// 4. Room available (or arriving for this guest) → occupied
    /// 5. A different room pre-assigned to this guest is released
    pub fn check_in(
        &mut self,
        reservation_id: &str,
        room_number: &str,
        details: Option<CheckInDetails>,
    ) -> StoreResult<Reservation> {
        let mut res = self.reservations.get(reservation_id)?;
        let mut room = self.room_by_number(room_number)?;

        let result = (|| -> StoreResult<Option<Room>> {
            if let Some(details) = &details {
                details.apply_to(&mut res);
                res.validate()?;
            }
            res.check_in(room_number)?;
            room.occupy(Occupancy::for_reservation(&res))?;

            match self.room_held_by(reservation_id) {
                Some(held) if held.id != room.id => {
                    let mut held = held.clone();
                    held.release(reservation_id)?;
                    Ok(Some(held))
                }
                _ => Ok(None),
            }
        })();

        let released = result.map_err(|err| {
            warn!(reservation_id = %reservation_id, room_number = %room_number, error = %err, "Check-in rejected");
            err
        })?;

        info!(
            reservation_id = %reservation_id,
            room_number = %room_number,
            guest = %res.guest_name,
            "Guest checked in"
        );
        self.reservations.replace(res.clone())?;
        self.rooms.replace(room)?;
        if let Some(held) = released {
            self.rooms.replace(held)?;
        }
        Ok(res)
    }

    /// Checks a guest out and sends the room to housekeeping.
    ///
    /// Refused unless the reservation is checked in with nothing owed.
    pub fn check_out(&mut self, reservation_id: &str) -> StoreResult<Reservation> {
        let mut res = self.reservations.get(reservation_id)?;

        let result = (|| -> StoreResult<Room> {
            res.check_out()?;

            let mut room = self.room_held_by(reservation_id).cloned().ok_or_else(|| {
                StoreError::not_found(
                    "Room",
                    res.room_number.clone().unwrap_or_else(|| reservation_id.to_string()),
                )
            })?;
            room.vacate(reservation_id)?;
            Ok(room)
        })();

        let room = result.map_err(|err| {
            warn!(reservation_id = %reservation_id, error = %err, "Check-out rejected");
            err
        })?;

        info!(
            reservation_id = %reservation_id,
            room_number = %room.room_number,
            "Guest checked out"
        );
        self.reservations.replace(res.clone())?;
        self.rooms.replace(room)?;
        Ok(res)
    }

    /// Cancels a confirmed booking, freeing any room held for it.
    pub fn cancel_reservation(&mut self, reservation_id: &str) -> StoreResult<Reservation> {
        self.close_unarrived(reservation_id, Reservation::cancel, "Reservation cancelled")
    }

    /// Marks a confirmed booking as a no-show, freeing any room held for it.
    pub fn mark_no_show(&mut self, reservation_id: &str) -> StoreResult<Reservation> {
        self.close_unarrived(reservation_id, Reservation::mark_no_show, "Reservation marked no-show")
    }

    fn close_unarrived(
        &mut self,
        reservation_id: &str,
        transition: fn(&mut Reservation) -> innkeep_core::CoreResult<()>,
        message: &'static str,
    ) -> StoreResult<Reservation> {
        let mut res = self.reservations.get(reservation_id)?;

        let result = (|| -> StoreResult<Option<Room>> {
            transition(&mut res)?;
            match self.room_held_by(reservation_id) {
                Some(held) => {
                    let mut held = held.clone();
                    held.release(reservation_id)?;
                    Ok(Some(held))
                }
                None => Ok(None),
            }
        })();

        let released = result.map_err(|err| {
            warn!(reservation_id = %reservation_id, error = %err, "{} rejected", message);
            err
        })?;

        info!(
            reservation_id = %reservation_id,
            released_room = released.as_ref().map(|r| r.room_number.as_str()),
            "{}",
            message
        );
        self.reservations.replace(res.clone())?;
        if let Some(room) = released {
            self.rooms.replace(room)?;
        }
        Ok(res)
    }

    /// Pre-assigns a clean room to a confirmed booking ahead of arrival.
    ///
    /// Assigning the room already held is a no-op; assigning a different
    /// one releases the old room.
    pub fn assign_room(&mut self, reservation_id: &str, room_number: &str) -> StoreResult<Reservation> {
        let mut res = self.reservations.get(reservation_id)?;
        let mut room = self.room_by_number(room_number)?;

        if room.linked_reservation_id() == Some(reservation_id) {
            return Ok(res);
        }

        let result = (|| -> StoreResult<Option<Room>> {
            res.assign_room(room_number)?;
            room.hold_for(Occupancy::for_reservation(&res))?;

            match self.room_held_by(reservation_id) {
                Some(held) => {
                    let mut held = held.clone();
                    held.release(reservation_id)?;
                    Ok(Some(held))
                }
                None => Ok(None),
            }
        })();

        let released = result.map_err(|err| {
            warn!(reservation_id = %reservation_id, room_number = %room_number, error = %err, "Room assignment rejected");
            err
        })?;

        info!(reservation_id = %reservation_id, room_number = %room_number, "Room assigned");
        self.reservations.replace(res.clone())?;
        self.rooms.replace(room)?;
        if let Some(held) = released {
            self.rooms.replace(held)?;
        }
        Ok(res)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use innkeep_core::{
        BookingSource, CoreError, Money, PaymentMethod, RoomStatus,
    };

    use super::*;
    use crate::seed::Seed;
    use crate::test_support::{day, demo_store};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    /// One clean room 101 and one confirmed reservation R1 for 16th-19th.
    fn r1_store() -> PropertyStore {
        let mut seed = Seed::empty();
        seed.rooms.push(Room::vacant("room-101", "101", "Deluxe", 1));
        seed.rooms.push(Room::vacant("room-102", "102", "Deluxe", 1));
        seed.reservations.push(Reservation {
            id: "R1".to_string(),
            confirmation_number: "RES001".to_string(),
            guest_name: "Rajesh Kumar".to_string(),
            guest_email: "rajesh@email.com".to_string(),
            guest_phone: "+91 98765 43210".to_string(),
            room_type: "Deluxe".to_string(),
            room_number: None,
            check_in: date(16),
            check_out: date(19),
            number_of_guests: 2,
            source: BookingSource::BookingCom,
            status: ReservationStatus::Confirmed,
            total_amount: Money::from_major(15_000),
            paid_amount: Money::from_major(15_000),
            incidentals: Money::zero(),
            notes: None,
            group_id: None,
        });
        PropertyStore::from_seed(seed).unwrap()
    }

    #[test]
    fn test_check_in_r1_into_101() {
        let mut store = r1_store();
        store.check_in("R1", "101", None).unwrap();

        let res = store.get_reservation("R1").unwrap();
        assert_eq!(res.status, ReservationStatus::CheckedIn);
        assert_eq!(res.room_number.as_deref(), Some("101"));

        let room = store.room_by_number("101").unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
        assert_eq!(
            room.occupancy,
            Some(Occupancy {
                guest_name: "Rajesh Kumar".to_string(),
                reservation_id: "R1".to_string(),
                check_in: date(16),
                check_out: date(19),
            })
        );
    }

    #[test]
    fn test_check_in_with_desk_corrections() {
        let mut store = r1_store();
        let details = CheckInDetails {
            guest_name: Some("Rajesh K. Kumar".to_string()),
            number_of_guests: Some(3),
            ..Default::default()
        };
        let res = store.check_in("R1", "101", Some(details)).unwrap();

        assert_eq!(res.number_of_guests, 3);
        let room = store.room_by_number("101").unwrap();
        assert_eq!(room.occupancy.unwrap().guest_name, "Rajesh K. Kumar");
    }

    #[test]
    fn test_check_in_twice_rejected() {
        let mut store = r1_store();
        store.check_in("R1", "101", None).unwrap();
        let before = store.export();

        let err = store.check_in("R1", "102", None).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::InvalidReservationTransition { .. })
        ));
        assert_eq!(store.export(), before);
    }

    #[test]
    fn test_check_in_into_occupied_room_rejected() {
        let mut store = demo_store();
        let before = store.export();

        // 101 is occupied by RES001
        let err = store.check_in("7", "101", None).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::RoomUnavailable { .. })
        ));
        assert_eq!(store.export(), before);
    }

    #[test]
    fn test_check_in_into_dirty_room_rejected() {
        let mut store = demo_store();
        assert!(store.check_in("7", "103", None).is_err());
        assert_eq!(
            store.get_reservation("7").unwrap().status,
            ReservationStatus::Confirmed
        );
    }

    #[test]
    fn test_check_in_unknown_room() {
        let mut store = demo_store();
        assert_eq!(
            store.check_in("7", "999", None).unwrap_err(),
            StoreError::not_found("Room", "999")
        );
    }

    #[test]
    fn test_check_in_to_room_held_for_someone_else_rejected() {
        let mut store = demo_store();
        // 105 is arriving for RES003
        let err = store.check_in("7", "105", None).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::OccupancyMismatch { .. })
        ));
    }

    #[test]
    fn test_check_in_to_pre_assigned_room() {
        let mut store = demo_store();
        store.check_in("3", "105", None).unwrap();
        let room = store.room_by_number("105").unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
        assert_eq!(room.linked_reservation_id(), Some("3"));
    }

    #[test]
    fn test_check_in_elsewhere_releases_pre_assigned_room() {
        let mut store = demo_store();
        // RES005 is held in 204; put the guest in 203 instead
        store.check_in("5", "203", None).unwrap();

        assert_eq!(store.room_by_number("203").unwrap().status, RoomStatus::Occupied);
        let old = store.room_by_number("204").unwrap();
        assert_eq!(old.status, RoomStatus::Available);
        assert!(old.occupancy.is_none());
    }

    #[test]
    fn test_check_out_settled_guest() {
        let mut store = demo_store();
        // RES002 is departing from 102, fully paid
        let res = store.check_out("2").unwrap();
        assert_eq!(res.status, ReservationStatus::CheckedOut);

        let room = store.room_by_number("102").unwrap();
        assert_eq!(room.status, RoomStatus::Dirty);
        assert!(room.occupancy.is_none());
    }

    #[test]
    fn test_check_out_with_balance_rejected() {
        let mut store = demo_store();
        let before = store.export();

        // RES001 still owes ₹2500
        let err = store.check_out("1").unwrap_err();
        assert_eq!(
            err,
            StoreError::Core(CoreError::OutstandingBalance {
                reservation_id: "1".to_string(),
                balance: Money::from_major(2500),
            })
        );
        assert_eq!(store.export(), before);
    }

    #[test]
    fn test_check_out_after_settling() {
        let mut store = demo_store();
        store
            .record_payment("1", Money::from_major(2500), PaymentMethod::Cash)
            .unwrap();
        store.check_out("1").unwrap();
        assert_eq!(store.room_by_number("101").unwrap().status, RoomStatus::Dirty);
    }

    #[test]
    fn test_check_out_requires_check_in() {
        let mut store = r1_store();
        assert!(matches!(
            store.check_out("R1"),
            Err(StoreError::Core(CoreError::InvalidReservationTransition { .. }))
        ));
    }

    #[test]
    fn test_full_stay_round_trip() {
        let mut store = r1_store();
        store.check_in("R1", "101", None).unwrap();
        store.check_out("R1").unwrap();

        let room = store.room_by_number("101").unwrap();
        assert_eq!(room.status, RoomStatus::Dirty);
        assert!(room.validate().is_ok());
        assert!(store.check_in("R1", "102", None).is_err());
    }

    #[test]
    fn test_arrivals_exactly_confirmed_on_date() {
        let mut store = demo_store();
        let ids = |list: Vec<Reservation>| list.into_iter().map(|r| r.id).collect::<Vec<_>>();

        assert_eq!(ids(store.arrivals(day(0))), vec!["3", "5", "7"]);

        store.check_in("7", "104", None).unwrap();
        assert_eq!(ids(store.arrivals(day(0))), vec!["3", "5"]);
        assert!(store.arrivals(day(-1)).is_empty());
    }

    #[test]
    fn test_departures_exactly_checked_in_on_date() {
        let store = demo_store();
        let ids = |list: Vec<Reservation>| list.into_iter().map(|r| r.id).collect::<Vec<_>>();

        assert_eq!(ids(store.departures(day(0))), vec!["2"]);
        // RES005 and RES007 also leave tomorrow but have not arrived
        assert_eq!(ids(store.departures(day(1))), vec!["1", "4"]);
    }

    #[test]
    fn test_cancel_releases_arriving_room() {
        let mut store = demo_store();
        let res = store.cancel_reservation("3").unwrap();
        assert_eq!(res.status, ReservationStatus::Cancelled);
        assert!(res.room_number.is_none());

        let room = store.room_by_number("105").unwrap();
        assert_eq!(room.status, RoomStatus::Available);
        assert!(room.occupancy.is_none());
    }

    #[test]
    fn test_cancel_checked_in_rejected() {
        let mut store = demo_store();
        let before = store.export();
        assert!(store.cancel_reservation("1").is_err());
        assert_eq!(store.export(), before);
    }

    #[test]
    fn test_no_show_without_room() {
        let mut store = demo_store();
        let res = store.mark_no_show("7").unwrap();
        assert_eq!(res.status, ReservationStatus::NoShow);
        assert!(store.mark_no_show("7").is_err());
    }

    #[test]
    fn test_assign_room() {
        let mut store = demo_store();
        let res = store.assign_room("7", "104").unwrap();
        assert_eq!(res.room_number.as_deref(), Some("104"));

        let room = store.room_by_number("104").unwrap();
        assert_eq!(room.status, RoomStatus::Arriving);
        assert_eq!(room.linked_reservation_id(), Some("7"));

        // Same room again changes nothing
        let before = store.export();
        store.assign_room("7", "104").unwrap();
        assert_eq!(store.export(), before);

        // Moving to another room frees the first
        store.assign_room("7", "203").unwrap();
        assert_eq!(store.room_by_number("104").unwrap().status, RoomStatus::Available);
        assert_eq!(store.room_by_number("203").unwrap().status, RoomStatus::Arriving);
    }

    #[test]
    fn test_assign_dirty_room_rejected() {
        let mut store = demo_store();
        let before = store.export();
        assert!(matches!(
            store.assign_room("7", "302"),
            Err(StoreError::Core(CoreError::RoomUnavailable { .. }))
        ));
        assert_eq!(store.export(), before);
    }

    #[test]
    fn test_every_room_keeps_occupancy_invariant() {
        let mut store = demo_store();
        store.check_out("2").unwrap();
        store.check_in("3", "105", None).unwrap();
        store.cancel_reservation("5").unwrap();
        store.assign_room("7", "104").unwrap();

        for room in store.list_rooms(&Default::default()) {
            assert_eq!(
                room.occupancy.is_some(),
                room.status.requires_occupancy(),
                "room {}",
                room.room_number
            );
        }
    }

    #[test]
    fn test_occupancy_summary_for_demo() {
        let store = demo_store();
        let summary = store.occupancy_summary();

        assert_eq!(summary.total_rooms, 12);
        assert_eq!(summary.count(RoomStatus::Occupied), 3);
        assert_eq!(summary.count(RoomStatus::Maintenance), 1);
        // occupied 3 + departing 1 over 11 sellable rooms
        assert_eq!(summary.in_house, 4);
        assert_eq!(summary.occupancy_percent, 36);
    }

    #[test]
    fn test_snapshot() {
        let store = demo_store();
        let snapshot = store.snapshot(day(0));
        assert_eq!(snapshot.arrivals.len(), 3);
        assert_eq!(snapshot.departures.len(), 1);
        assert_eq!(snapshot.in_house.len(), 4);
        assert_eq!(snapshot.open_logs.len(), 2);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["businessDate"], "2025-10-17");
    }
}
