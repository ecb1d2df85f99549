//! # Money Module
//!
//! Provides the `Money` type for reservation totals, payments, rates and
//! promotion discounts.
//!
//! ## Integer Minor Units
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ₹5,000.00 is stored as 500000 paise                                    │
//! │                                                                         │
//! │  Reservation.total_amount ──┐                                          │
//! │  Reservation.incidentals  ──┤                                          │
//! │  Reservation.paid_amount  ──┼──► balance() ──► check-out gate          │
//! │  RatePrice.price ───────────┼──► StayQuote.subtotal                    │
//! │  Discount::Fixed ───────────┘      └──► discount ──► StayQuote.total   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use innkeep_core::money::Money;
//!
//! let room = Money::from_major(5000);      // ₹5000.00
//! let deposit = Money::from_major(2500);
//! assert_eq!((room - deposit).major(), 2500);
//! assert_eq!(room.percentage(20).major(), 1000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Minor units per major unit (paise per rupee).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Largest amount any stored field may hold: ₹1,000,000,000,000.
///
/// Far below `i64::MAX`, so summing a long stay of maximal nightly rates
/// still fits.
pub const MAX_AMOUNT: Money = Money(1_000_000_000_000 * MINOR_PER_MAJOR);

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// Signed so that a balance can go negative when a guest has been credited,
/// but every stored amount on an entity is validated as non-negative and
/// at most [`MAX_AMOUNT`]. Arithmetic saturates at the `i64` bounds instead
/// of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use innkeep_core::money::Money;
    ///
    /// let price = Money::from_minor(250050);
    /// assert_eq!(price.major(), 2500);
    /// assert_eq!(price.minor_part(), 50);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Subtraction that floors at zero. Used when a discount is larger than
    /// the amount it applies to.
    ///
    /// ```rust
    /// use innkeep_core::money::Money;
    ///
    /// let stay = Money::from_major(800);
    /// assert_eq!(stay.saturating_sub(Money::from_major(1000)), Money::zero());
    /// ```
    #[inline]
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0).max(0))
    }

    /// Returns `pct` percent of this amount, rounded half up.
    ///
    /// ```rust
    /// use innkeep_core::money::Money;
    ///
    /// // 15% of ₹33.33 = ₹4.9995 → ₹5.00
    /// assert_eq!(Money::from_minor(3333).percentage(15).minor(), 500);
    /// ```
    pub fn percentage(&self, pct: u8) -> Money {
        // i128 keeps large group totals from overflowing
        let scaled = (self.0 as i128 * pct as i128 + 50) / 100;
        Money::from_minor(scaled.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display. The dashboard does its own locale formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a night count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, nights: i64) -> Self {
        Money(self.0.saturating_mul(nights))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_and_minor() {
        let money = Money::from_major(5000);
        assert_eq!(money.minor(), 500_000);
        assert_eq!(money.major(), 5000);
        assert_eq!(money.minor_part(), 0);

        let odd = Money::from_minor(1099);
        assert_eq!(odd.major(), 10);
        assert_eq!(odd.minor_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(2500).to_string(), "₹2500.00");
        assert_eq!(Money::from_minor(1099).to_string(), "₹10.99");
        assert_eq!(Money::from_minor(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(1000);
        let b = Money::from_major(400);

        assert_eq!((a + b).major(), 1400);
        assert_eq!((a - b).major(), 600);
        assert_eq!((b - a).major(), -600);
        assert_eq!((a * 3).major(), 3000);

        let mut running = Money::zero();
        running += a;
        running -= b;
        assert_eq!(running.major(), 600);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let top = Money::from_minor(i64::MAX);
        assert_eq!(top + Money::from_minor(1), top);
        assert_eq!(top * 3, top);
        assert_eq!(Money::from_minor(i64::MIN) - Money::from_minor(1), Money::from_minor(i64::MIN));
        assert_eq!([top, top].iter().sum::<Money>(), top);
        assert_eq!(top.percentage(255), top);
    }

    #[test]
    fn test_sum() {
        let nights = [Money::from_major(5000), Money::from_major(5500)];
        let total: Money = nights.iter().sum();
        assert_eq!(total.major(), 10_500);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(Money::from_major(10_000).percentage(20).major(), 2000);
        // 1% of 50 paise = 0.5 paise → 1 paisa
        assert_eq!(Money::from_minor(50).percentage(1).minor(), 1);
        assert_eq!(Money::from_major(123).percentage(0), Money::zero());
        assert_eq!(Money::from_major(123).percentage(100).major(), 123);
    }

    #[test]
    fn test_saturating_sub() {
        let small = Money::from_major(500);
        assert_eq!(small.saturating_sub(Money::from_major(1000)), Money::zero());
        assert_eq!(
            Money::from_major(1500).saturating_sub(small),
            Money::from_major(1000)
        );
    }

    #[test]
    fn test_serializes_as_minor_units() {
        let json = serde_json::to_string(&Money::from_major(25)).unwrap();
        assert_eq!(json, "2500");
        let back: Money = serde_json::from_str("2500").unwrap();
        assert_eq!(back, Money::from_major(25));
    }
}
