//! # Reservation Repository
//!
//! Booking creation, edits and payments. Status changes (check-in,
//! check-out, cancel, no-show) live in [`crate::front_desk`].
//!
//! ## Date Changes
//! ```text
//! update_reservation(R1, { check_out: 20th })
//!      │
//!      ├── R1 confirmed, no room held ──► reservation only
//!      │
//!      └── R1 holds room 101 (arriving / occupied / departing)
//!               │
//!               ▼
//!          room 101 occupancy dates rewritten in the same commit
//! ```

use chrono::Utc;
use innkeep_core::{
    Money, NewReservation, PaymentMethod, PaymentRecord, Reservation, ReservationFilter,
    ReservationUpdate,
};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::store::{generate_id, PropertyStore};

impl PropertyStore {
    pub fn list_reservations(&self, filter: &ReservationFilter) -> Vec<Reservation> {
        self.reservations.list(|res| filter.matches(res))
    }

    pub fn get_reservation(&self, id: &str) -> StoreResult<Reservation> {
        self.reservations.get(id)
    }

    /// Records a new confirmed booking.
    ///
    /// When `group_id` is set the group must exist and the booking is
    /// linked into it in the same commit.
    pub fn create_reservation(&mut self, new: NewReservation) -> StoreResult<Reservation> {
        let res = new.into_reservation(generate_id());
        res.validate()?;

        let group = match &res.group_id {
            Some(group_id) => {
                let mut group = self.groups.get(group_id)?;
                group.link_reservation(&res.id);
                Some(group)
            }
            None => None,
        };

        debug!(
            id = %res.id,
            confirmation = %res.confirmation_number,
            check_in = %res.check_in,
            "Creating reservation"
        );
        self.reservations.insert(res.clone())?;
        if let Some(group) = group {
            self.groups.replace(group)?;
        }
        Ok(res)
    }

    /// Patches guest details, dates, party size or the room charge. The
    /// paid amount only moves through [`record_payment`](Self::record_payment).
    ///
    /// ## Rules
    /// - Closed reservations (checked-out, cancelled, no-show) are read-only
    /// - The patched reservation must pass `validate()` (paid <= charges, dates)
    /// - A room holding the reservation gets the new guest name and dates
    pub fn update_reservation(
        &mut self,
        id: &str,
        patch: ReservationUpdate,
    ) -> StoreResult<Reservation> {
        let mut res = self.reservations.get(id)?;
        res.ensure_open()?;
        patch.apply_to(&mut res);
        res.validate().map_err(|err| {
            warn!(id = %id, error = %err, "Reservation update rejected");
            err
        })?;

        let room = self.room_held_by(id).cloned().map(|mut room| {
            room.sync_stay(&res);
            room
        });

        debug!(id = %id, dates_changed = patch.changes_dates(), "Updating reservation");
        self.reservations.replace(res.clone())?;
        if let Some(room) = room {
            self.rooms.replace(room)?;
        }
        Ok(res)
    }

    /// Takes a payment against a reservation's balance.
    ///
    /// ## Rules
    /// - Amount must be positive
    /// - Reservation must not be closed
    /// - The payment may not exceed the outstanding balance
    pub fn record_payment(
        &mut self,
        reservation_id: &str,
        amount: Money,
        method: PaymentMethod,
    ) -> StoreResult<PaymentRecord> {
        let mut res = self.reservations.get(reservation_id)?;
        res.record_payment(amount).map_err(|err| {
            warn!(id = %reservation_id, %amount, error = %err, "Payment rejected");
            err
        })?;

        let payment = PaymentRecord {
            id: generate_id(),
            reservation_id: reservation_id.to_string(),
            amount,
            method,
            recorded_at: Utc::now(),
        };

        debug!(
            id = %reservation_id,
            %amount,
            balance = %res.balance(),
            "Recording payment"
        );
        self.payments.insert(payment.clone())?;
        self.reservations.replace(res)?;
        Ok(payment)
    }
}
