//! # Validation Module
//!
//! Field rules shared by every entity's `validate()` and by the store's
//! command arguments.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard (TypeScript)                                       │
//! │  └── Immediate feedback (empty fields, disabled buttons)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Entity validate() (innkeep-core)                             │
//! │  └── THIS MODULE: presence, ranges, date order, paid <= total          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store write path (innkeep-store)                             │
//! │  └── Id uniqueness, cross-entity state, atomic commit                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only presence is checked for free-text fields; email and phone formats
//! are the dashboard's concern.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::{Money, MAX_AMOUNT};
use crate::{MAX_NOTES_LEN, MAX_PARTY_SIZE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is present and not blank.
///
/// ```rust
/// use innkeep_core::validation::validate_required;
///
/// assert!(validate_required("guestName", "Amit Patel").is_ok());
/// assert!(validate_required("guestName", "   ").is_err());
/// ```
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates optional free-text notes.
pub fn validate_notes(notes: Option<&str>) -> ValidationResult<()> {
    match notes {
        Some(text) if text.chars().count() > MAX_NOTES_LEN => Err(ValidationError::TooLong {
            field: "notes".to_string(),
            max: MAX_NOTES_LEN,
        }),
        _ => Ok(()),
    }
}

// =============================================================================
// Date Validators
// =============================================================================

/// Validates a stay: check-out must be strictly after check-in.
///
/// ```rust
/// use chrono::NaiveDate;
/// use innkeep_core::validation::validate_stay_dates;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 10, day).unwrap();
/// assert!(validate_stay_dates(d(16), d(19)).is_ok());
/// assert!(validate_stay_dates(d(16), d(16)).is_err());
/// ```
pub fn validate_stay_dates(check_in: NaiveDate, check_out: NaiveDate) -> ValidationResult<()> {
    if check_out <= check_in {
        return Err(ValidationError::InvalidDateRange {
            field: "checkOut".to_string(),
            start: check_in.to_string(),
            end: check_out.to_string(),
        });
    }

    Ok(())
}

/// Validates an inclusive window such as a promotion's active dates.
/// A single-day window (start == end) is allowed.
pub fn validate_date_window(field: &str, start: NaiveDate, end: NaiveDate) -> ValidationResult<()> {
    if end < start {
        return Err(ValidationError::InvalidDateRange {
            field: field.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a party size.
///
/// ## Rules
/// - At least one guest
/// - No more than MAX_PARTY_SIZE
pub fn validate_party_size(guests: u32) -> ValidationResult<()> {
    if guests == 0 || guests > MAX_PARTY_SIZE {
        return Err(ValidationError::OutOfRange {
            field: "numberOfGuests".to_string(),
            min: 1,
            max: MAX_PARTY_SIZE as i64,
        });
    }

    Ok(())
}

/// Validates that a stored amount is not negative. Zero is allowed
/// (complimentary stays, unpaid bookings).
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }
    validate_within_max(field, amount)
}

fn validate_within_max(field: &str, amount: Money) -> ValidationResult<()> {
    if amount > MAX_AMOUNT {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_AMOUNT.minor(),
        });
    }
    Ok(())
}

/// Validates an amount that must be strictly positive (a payment).
pub fn validate_positive_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    validate_within_max(field, amount)
}

/// Validates a total/paid pair.
///
/// ## Rules
/// - Both non-negative
/// - paid <= total
///
/// ```rust
/// use innkeep_core::money::Money;
/// use innkeep_core::validation::validate_payment_split;
///
/// assert!(validate_payment_split(Money::from_major(5000), Money::from_major(2500)).is_ok());
/// assert!(validate_payment_split(Money::from_major(5000), Money::from_major(6000)).is_err());
/// ```
pub fn validate_payment_split(total: Money, paid: Money) -> ValidationResult<()> {
    validate_amount("totalAmount", total)?;
    validate_amount("paidAmount", paid)?;

    if paid > total {
        return Err(ValidationError::ExceedsLimit {
            field: "paidAmount".to_string(),
            value: paid.minor(),
            limit_field: "totalAmount".to_string(),
            limit: total.minor(),
        });
    }

    Ok(())
}

/// Validates a `part <= whole` count (available/total, assigned/total).
pub fn validate_count_within(
    field: &str,
    value: u32,
    limit_field: &str,
    limit: u32,
) -> ValidationResult<()> {
    if value > limit {
        return Err(ValidationError::ExceedsLimit {
            field: field.to_string(),
            value: value as i64,
            limit_field: limit_field.to_string(),
            limit: limit as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that a list of ids has no repeats.
pub fn validate_unique_ids(field: &str, ids: &[String]) -> ValidationResult<()> {
    for (i, id) in ids.iter().enumerate() {
        if ids[..i].contains(id) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: id.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
