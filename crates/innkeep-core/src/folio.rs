//! # Folio
//!
//! A guest's bill, derived on demand from a reservation and the charge and
//! payment records posted against it. Nothing here is stored; the
//! reservation's `total_amount`, `incidentals` and `paid_amount` stay the
//! source of truth, so a folio's balance always equals
//! `Reservation::balance()`.
//!
//! ```text
//! Reservation ──► room charge split per night ─┬─► charges[]
//!      │                                       │
//!      ├── incidentals ─┬─► ChargeRecords ─────┤
//!      │                └─► remainder as "Incidentals"
//!      │
//!      └── paid_amount ─┬─► PaymentRecords ──► payments[]
//!                       └─► remainder as "Deposit on booking"
//!
//! balance = total_charges - total_payments
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Reservation;
use crate::validation::{validate_positive_amount, validate_required};

/// Revenue department a charge is posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Department {
    Room,
    #[serde(rename = "F&B")]
    FoodAndBeverage,
    Spa,
    Laundry,
    Other,
}

/// An incidental charge posted to a reservation (dinner, laundry, spa).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRecord {
    pub id: String,
    pub reservation_id: String,
    pub department: Department,
    pub description: String,
    pub amount: Money,
    pub posted_at: DateTime<Utc>,
}

impl ChargeRecord {
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("description", &self.description)?;
        validate_positive_amount("amount", self.amount)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    #[serde(rename = "Cash")]
    Cash,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

/// A payment taken at the desk and applied to a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub reservation_id: String,
    pub amount: Money,
    pub method: PaymentMethod,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FolioCharge {
    pub date: NaiveDate,
    pub description: String,
    pub department: Department,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FolioPayment {
    pub date: NaiveDate,
    pub description: String,
    /// Unknown for money taken before payments were itemised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Folio {
    pub reservation_id: String,
    pub confirmation_number: String,
    pub guest_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    pub charges: Vec<FolioCharge>,
    pub payments: Vec<FolioPayment>,
    pub total_charges: Money,
    pub total_payments: Money,
    pub balance: Money,
}

impl Folio {
    /// Builds the folio for `reservation`. Records belonging to other
    /// reservations are ignored.
    ///
    /// Totals and balance come from the reservation itself. Amounts the
    /// records don't itemise show up as one synthetic line on each side.
    pub fn build(
        reservation: &Reservation,
        charges: &[ChargeRecord],
        payments: &[PaymentRecord],
    ) -> Folio {
        let mut charge_lines = room_charges(reservation);

        let posted: Vec<FolioCharge> = charges
            .iter()
            .filter(|c| c.reservation_id == reservation.id)
            .map(|c| FolioCharge {
                date: c.posted_at.date_naive(),
                description: c.description.clone(),
                department: c.department,
                amount: c.amount,
            })
            .collect();
        let itemised: Money = posted.iter().map(|c| c.amount).sum();
        let unposted = reservation.incidentals - itemised;
        if unposted.is_positive() {
            charge_lines.push(FolioCharge {
                date: reservation.check_in,
                description: "Incidentals".to_string(),
                department: Department::Other,
                amount: unposted,
            });
        }
        charge_lines.extend(posted);

        let mut payment_lines: Vec<FolioPayment> = payments
            .iter()
            .filter(|p| p.reservation_id == reservation.id)
            .map(|p| FolioPayment {
                date: p.recorded_at.date_naive(),
                description: "Payment".to_string(),
                method: Some(p.method),
                amount: p.amount,
            })
            .collect();

        let itemised: Money = payment_lines.iter().map(|p| p.amount).sum();
        let deposit = reservation.paid_amount - itemised;
        if deposit.is_positive() {
            payment_lines.insert(
                0,
                FolioPayment {
                    date: reservation.check_in,
                    description: "Deposit on booking".to_string(),
                    method: None,
                    amount: deposit,
                },
            );
        }

        Folio {
            reservation_id: reservation.id.clone(),
            confirmation_number: reservation.confirmation_number.clone(),
            guest_name: reservation.guest_name.clone(),
            room_number: reservation.room_number.clone(),
            charges: charge_lines,
            payments: payment_lines,
            total_charges: reservation.total_charges(),
            total_payments: reservation.paid_amount,
            balance: reservation.balance(),
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.balance.is_positive()
    }

    /// Charge total for one department.
    pub fn department_total(&self, department: Department) -> Money {
        self.charges
            .iter()
            .filter(|c| c.department == department)
            .map(|c| c.amount)
            .sum()
    }
}

/// One line per night; any paise left over from the split land on the
/// last night so the lines add up to the total exactly.
fn room_charges(reservation: &Reservation) -> Vec<FolioCharge> {
    let nights = reservation.nights().max(1);
    let per_night = Money::from_minor(reservation.total_amount.minor() / nights);
    let remainder = reservation.total_amount - per_night * nights;

    reservation
        .check_in
        .iter_days()
        .take(nights as usize)
        .enumerate()
        .map(|(i, date)| {
            let night = i as i64 + 1;
            let amount = if night == nights {
                per_night + remainder
            } else {
                per_night
            };
            FolioCharge {
                date,
                description: format!("Room Charge - Night {night}"),
                department: Department::Room,
                amount,
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::ReservationStatus;
    use crate::types::BookingSource;

    fn reservation(total: Money, paid: Money) -> Reservation {
        Reservation {
            id: "R1".to_string(),
            confirmation_number: "RES001".to_string(),
            guest_name: "Rajesh Kumar".to_string(),
            guest_email: "rajesh@email.com".to_string(),
            guest_phone: "+91 98765 43210".to_string(),
            room_type: "Deluxe".to_string(),
            room_number: Some("101".to_string()),
            check_in: NaiveDate::from_ymd_opt(2025, 10, 16).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 10, 19).unwrap(),
            number_of_guests: 2,
            source: BookingSource::Direct,
            status: ReservationStatus::CheckedIn,
            total_amount: total,
            paid_amount: paid,
            incidentals: Money::zero(),
            notes: None,
            group_id: None,
        }
    }

    #[test]
    fn test_room_charges_split_per_night() {
        let folio = Folio::build(&reservation(Money::from_minor(1_000_001), Money::zero()), &[], &[]);

        assert_eq!(folio.charges.len(), 3);
        assert_eq!(folio.charges[0].description, "Room Charge - Night 1");
        assert_eq!(folio.charges[0].department, Department::Room);
        assert_eq!(folio.charges[0].amount, Money::from_minor(333_333));
        assert_eq!(folio.charges[2].amount, Money::from_minor(333_335));
        assert_eq!(folio.total_charges, Money::from_minor(1_000_001));
        assert_eq!(folio.charges[2].date, NaiveDate::from_ymd_opt(2025, 10, 18).unwrap());
    }

    #[test]
    fn test_deposit_covers_unitemised_paid_amount() {
        let res = reservation(Money::from_major(15_000), Money::from_major(10_000));
        let payments = vec![
            PaymentRecord {
                id: "P1".to_string(),
                reservation_id: "R1".to_string(),
                amount: Money::from_major(4000),
                method: PaymentMethod::Upi,
                recorded_at: Utc::now(),
            },
            PaymentRecord {
                id: "P2".to_string(),
                reservation_id: "R2".to_string(),
                amount: Money::from_major(999),
                method: PaymentMethod::Cash,
                recorded_at: Utc::now(),
            },
        ];

        let folio = Folio::build(&res, &[], &payments);

        assert_eq!(folio.payments.len(), 2);
        assert_eq!(folio.payments[0].description, "Deposit on booking");
        assert_eq!(folio.payments[0].amount, Money::from_major(6000));
        assert_eq!(folio.payments[1].method, Some(PaymentMethod::Upi));
        assert_eq!(folio.total_payments, Money::from_major(10_000));
        assert_eq!(folio.balance, Money::from_major(5000));
        assert!(!folio.is_settled());
    }

    #[test]
    fn test_settled_folio() {
        let folio = Folio::build(&reservation(Money::from_major(9000), Money::from_major(9000)), &[], &[]);
        assert_eq!(folio.balance, Money::zero());
        assert!(folio.is_settled());
    }

    fn charge(res_id: &str, department: Department, amount: Money) -> ChargeRecord {
        ChargeRecord {
            id: format!("C-{}", amount.minor()),
            reservation_id: res_id.to_string(),
            department,
            description: "Dinner at Rooftop Grill".to_string(),
            amount,
            posted_at: Utc::now(),
        }
    }

    #[test]
    fn test_posted_charges_follow_room_nights() {
        let mut res = reservation(Money::from_major(16_000), Money::from_major(20_000));
        res.incidentals = Money::from_major(4500);
        let charges = vec![
            charge("R1", Department::FoodAndBeverage, Money::from_major(3500)),
            charge("R1", Department::Laundry, Money::from_major(1000)),
            charge("R2", Department::Spa, Money::from_major(7000)),
        ];

        let folio = Folio::build(&res, &charges, &[]);

        assert_eq!(folio.charges.len(), 5);
        assert_eq!(folio.charges[3].department, Department::FoodAndBeverage);
        assert_eq!(folio.total_charges, Money::from_major(20_500));
        assert_eq!(folio.department_total(Department::Room), Money::from_major(16_000));
        assert_eq!(folio.department_total(Department::Spa), Money::zero());
        assert_eq!(folio.balance, Money::from_major(500));
        assert_eq!(folio.balance, res.balance());
    }

    #[test]
    fn test_unposted_incidentals_get_one_line() {
        let mut res = reservation(Money::from_major(9000), Money::zero());
        res.incidentals = Money::from_major(1200);

        let folio = Folio::build(&res, &[], &[]);
        let last = folio.charges.last().unwrap();
        assert_eq!(last.description, "Incidentals");
        assert_eq!(last.department, Department::Other);
        assert_eq!(last.amount, Money::from_major(1200));
        let lines: Money = folio.charges.iter().map(|c| c.amount).sum();
        assert_eq!(lines, folio.total_charges);
    }

    #[test]
    fn test_charge_record_validation() {
        assert!(charge("R1", Department::Spa, Money::from_major(10)).validate().is_ok());
        assert!(charge("R1", Department::Spa, Money::zero()).validate().is_err());

        let mut blank = charge("R1", Department::Spa, Money::from_major(10));
        blank.description = " ".to_string();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_department_wire_names() {
        assert_eq!(
            serde_json::to_string(&Department::FoodAndBeverage).unwrap(),
            "\"F&B\""
        );
        assert_eq!(serde_json::to_string(&Department::Laundry).unwrap(), "\"Laundry\"");
    }

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"Credit Card\""
        );
        assert_eq!(serde_json::to_string(&PaymentMethod::Upi).unwrap(), "\"UPI\"");
    }
}
