//! # Folio Repository
//!
//! Incidental charges posted to a stay, and the folio view. Folios are
//! derived from a reservation and its charge and payment records each time
//! they are asked for.
//!
//! ```text
//! post_charge(R1, F&B, ₹3500)
//!      │
//!      ├── R1.incidentals += ₹3500   (balance and check-out gate follow)
//!      └── ChargeRecord appended     (itemised folio line)
//! ```

use chrono::Utc;
use innkeep_core::{ChargeRecord, Department, Folio, Money, PaymentRecord};
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::store::{generate_id, PropertyStore};

impl PropertyStore {
    /// Payments recorded against a reservation, oldest first.
    pub fn payments_for(&self, reservation_id: &str) -> StoreResult<Vec<PaymentRecord>> {
        self.reservations.get(reservation_id)?;
        let mut payments = self.payments.list(|p| p.reservation_id == reservation_id);
        payments.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
        Ok(payments)
    }

    /// Charges posted to a reservation, oldest first.
    pub fn charges_for(&self, reservation_id: &str) -> StoreResult<Vec<ChargeRecord>> {
        self.reservations.get(reservation_id)?;
        let mut charges = self.charges.list(|c| c.reservation_id == reservation_id);
        charges.sort_by(|a, b| a.posted_at.cmp(&b.posted_at));
        Ok(charges)
    }

    /// Posts an incidental charge (dinner, laundry, spa) to a stay.
    ///
    /// ## Rules
    /// - Amount must be positive and the description present
    /// - Reservation must not be closed
    /// - The charge raises the balance, so check-out waits until it is paid
    pub fn post_charge(
        &mut self,
        reservation_id: &str,
        department: Department,
        description: &str,
        amount: Money,
    ) -> StoreResult<ChargeRecord> {
        let mut res = self.reservations.get(reservation_id)?;

        let charge = ChargeRecord {
            id: generate_id(),
            reservation_id: reservation_id.to_string(),
            department,
            description: description.trim().to_string(),
            amount,
            posted_at: Utc::now(),
        };

        charge
            .validate()
            .and_then(|()| res.post_charge(amount))
            .map_err(|err| {
                warn!(id = %reservation_id, %amount, error = %err, "Charge rejected");
                err
            })?;

        debug!(
            id = %reservation_id,
            ?department,
            %amount,
            balance = %res.balance(),
            "Posting charge"
        );
        self.charges.insert(charge.clone())?;
        self.reservations.replace(res)?;
        Ok(charge)
    }

    pub fn folio(&self, reservation_id: &str) -> StoreResult<Folio> {
        let res = self.reservations.get(reservation_id)?;
        let charges = self.charges_for(reservation_id)?;
        let payments = self.payments_for(reservation_id)?;
        Ok(Folio::build(&res, &charges, &payments))
    }
}
