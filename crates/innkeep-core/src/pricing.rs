//! # Pricing
//!
//! Promotions and the stay quote built from nightly rates.
//!
//! ## Quote Flow
//! ```text
//! RatePrice (Deluxe, 16th) ─┐
//! RatePrice (Deluxe, 17th) ─┼──► nightly[] ──► subtotal
//! RatePrice (Deluxe, 18th) ─┘                     │
//!                                                  ▼
//! Promotions ──► applies_to(type, check_in, nights) ──► best discount
//!                                                  │
//!                                                  ▼
//!                                     total = subtotal - discount (>= 0)
//! ```
//!
//! Rate lookup lives in the store; everything here is pure arithmetic over
//! values the caller supplies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_amount, validate_date_window, validate_required};

// =============================================================================
// Discount
// =============================================================================

/// How a promotion takes money off a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Discount {
    /// Percent off the whole stay (0-100).
    Percentage { value: u8 },

    /// Flat amount off the whole stay, never below zero.
    Fixed { value: Money },

    /// Every block of `stay_nights` nights, only `pay_nights` are charged.
    /// The cheapest nights go free.
    #[serde(rename = "stay-x-pay-y")]
    StayPay {
        #[serde(rename = "stayNights")]
        stay_nights: u32,
        #[serde(rename = "payNights")]
        pay_nights: u32,
    },
}

impl Discount {
    pub fn validate(&self) -> CoreResult<()> {
        match *self {
            Discount::Percentage { value } if value > 100 => Err(ValidationError::OutOfRange {
                field: "discount.value".to_string(),
                min: 0,
                max: 100,
            }
            .into()),
            Discount::Percentage { .. } => Ok(()),
            Discount::Fixed { value } => Ok(validate_amount("discount.value", value)?),
            Discount::StayPay {
                stay_nights,
                pay_nights,
            } => {
                if pay_nights == 0 || pay_nights >= stay_nights {
                    return Err(ValidationError::InvalidFormat {
                        field: "discount".to_string(),
                        reason: format!(
                            "pay nights ({pay_nights}) must be at least 1 and below stay nights ({stay_nights})"
                        ),
                    }
                    .into());
                }
                Ok(())
            }
        }
    }

    /// Amount taken off a stay with these nightly prices. Never more than
    /// the stay's subtotal and never below zero, even for a discount that
    /// would fail `validate()`.
    pub fn amount_off(&self, nightly: &[Money]) -> Money {
        let subtotal: Money = nightly.iter().sum();

        let off = match *self {
            Discount::Percentage { value } => subtotal.percentage(value),
            Discount::Fixed { value } => value,
            Discount::StayPay {
                stay_nights,
                pay_nights,
            } => {
                if stay_nights == 0 {
                    return Money::zero();
                }
                let blocks = nightly.len() / stay_nights as usize;
                let free = blocks * stay_nights.saturating_sub(pay_nights) as usize;

                let mut prices = nightly.to_vec();
                prices.sort();
                prices.iter().take(free).sum()
            }
        };

        off.clamp(Money::zero(), subtotal.max(Money::zero()))
    }
}

// =============================================================================
// Promotion
// =============================================================================

/// A time-boxed discount offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: String,
    pub name: String,

    /// First check-in date the offer accepts (inclusive).
    pub start_date: NaiveDate,

    /// Last check-in date the offer accepts (inclusive).
    pub end_date: NaiveDate,

    pub discount: Discount,

    /// Room types covered; empty means every type.
    #[serde(default)]
    pub room_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stay_length: Option<u32>,

    pub is_active: bool,
}

impl Promotion {
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("name", &self.name)?;
        validate_date_window("endDate", self.start_date, self.end_date)?;
        self.discount.validate()?;

        if self.min_stay_length == Some(0) {
            return Err(ValidationError::MustBePositive {
                field: "minStayLength".to_string(),
            }
            .into());
        }

        Ok(())
    }

    pub fn covers_room_type(&self, room_type: &str) -> bool {
        self.room_types.is_empty() || self.room_types.iter().any(|t| t == room_type)
    }

    /// Whether a stay of `nights` nights of `room_type`, arriving on
    /// `check_in`, qualifies for this offer.
    pub fn applies_to(&self, room_type: &str, check_in: NaiveDate, nights: u32) -> bool {
        self.is_active
            && self.start_date <= check_in
            && check_in <= self.end_date
            && self.covers_room_type(room_type)
            && nights >= self.min_stay_length.unwrap_or(1)
    }
}

// =============================================================================
// Stay Quote
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NightlyRate {
    pub date: NaiveDate,
    pub price: Money,
}

/// Price for a stay with the best applicable promotion applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub room_type: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nightly: Vec<NightlyRate>,
    pub subtotal: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_name: Option<String>,
    pub discount: Money,
    pub total: Money,
}

impl StayQuote {
    /// Builds a quote from one price per night, in date order.
    ///
    /// When several promotions apply the one with the largest discount wins;
    /// ties keep the earlier promotion. A promotion worth nothing on this
    /// stay is not reported.
    pub fn build(
        room_type: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        nightly: Vec<NightlyRate>,
        promotions: &[Promotion],
    ) -> StayQuote {
        let prices: Vec<Money> = nightly.iter().map(|n| n.price).collect();
        let subtotal: Money = prices.iter().sum();
        let nights = nightly.len() as u32;

        let mut best: Option<(&Promotion, Money)> = None;
        for promo in promotions
            .iter()
            .filter(|p| p.applies_to(room_type, check_in, nights))
        {
            let off = promo.discount.amount_off(&prices);
            if !off.is_positive() {
                continue;
            }
            match best {
                Some((_, best_off)) if best_off >= off => {}
                _ => best = Some((promo, off)),
            }
        }

        let discount = best.map(|(_, off)| off).unwrap_or_default();

        StayQuote {
            room_type: room_type.to_string(),
            check_in,
            check_out,
            nightly,
            subtotal,
            promotion_id: best.map(|(p, _)| p.id.clone()),
            promotion_name: best.map(|(p, _)| p.name.clone()),
            discount,
            total: subtotal.saturating_sub(discount),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    fn promo(id: &str, discount: Discount) -> Promotion {
        Promotion {
            id: id.to_string(),
            name: format!("Offer {id}"),
            start_date: day(1),
            end_date: day(20),
            discount,
            room_types: vec!["Deluxe".to_string(), "Suite".to_string()],
            min_stay_length: Some(2),
            is_active: true,
        }
    }

    fn nights(prices: &[i64]) -> Vec<NightlyRate> {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| NightlyRate {
                date: day(16 + i as u32),
                price: Money::from_major(*p),
            })
            .collect()
    }

    #[test]
    fn test_discount_amounts() {
        let prices = [
            Money::from_major(5000),
            Money::from_major(4000),
            Money::from_major(6000),
        ];

        assert_eq!(
            Discount::Percentage { value: 20 }.amount_off(&prices),
            Money::from_major(3000)
        );
        assert_eq!(
            Discount::Fixed {
                value: Money::from_major(1000)
            }
            .amount_off(&prices),
            Money::from_major(1000)
        );
        // One block of three: the cheapest night is free
        assert_eq!(
            Discount::StayPay {
                stay_nights: 3,
                pay_nights: 2
            }
            .amount_off(&prices),
            Money::from_major(4000)
        );
        // Two nights is not a full block
        assert_eq!(
            Discount::StayPay {
                stay_nights: 3,
                pay_nights: 2
            }
            .amount_off(&prices[..2]),
            Money::zero()
        );
    }

    #[test]
    fn test_fixed_discount_capped_at_subtotal() {
        let prices = [Money::from_major(800)];
        let off = Discount::Fixed {
            value: Money::from_major(1000),
        }
        .amount_off(&prices);
        assert_eq!(off, Money::from_major(800));
    }

    #[test]
    fn test_unvalidated_stay_pay_takes_nothing_off() {
        let prices = [Money::from_major(3000); 4];

        let zero_block = Discount::StayPay {
            stay_nights: 0,
            pay_nights: 0,
        };
        assert_eq!(zero_block.amount_off(&prices), Money::zero());

        let inverted = Discount::StayPay {
            stay_nights: 2,
            pay_nights: 5,
        };
        assert_eq!(inverted.amount_off(&prices), Money::zero());
    }

    #[test]
    fn test_discount_validate() {
        assert!(Discount::Percentage { value: 100 }.validate().is_ok());
        assert!(matches!(
            Discount::Percentage { value: 101 }.validate(),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert!(Discount::StayPay {
            stay_nights: 3,
            pay_nights: 3
        }
        .validate()
        .is_err());
        assert!(Discount::Fixed {
            value: Money::from_major(-1)
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_applies_to() {
        let p = promo("1", Discount::Percentage { value: 20 });

        assert!(p.applies_to("Deluxe", day(16), 3));
        assert!(p.applies_to("Suite", day(20), 2));
        assert!(!p.applies_to("Standard", day(16), 3));
        assert!(!p.applies_to("Deluxe", day(21), 3));
        assert!(!p.applies_to("Deluxe", day(16), 1));

        let inactive = Promotion {
            is_active: false,
            ..p.clone()
        };
        assert!(!inactive.applies_to("Deluxe", day(16), 3));

        let every_type = Promotion {
            room_types: vec![],
            ..p
        };
        assert!(every_type.applies_to("Standard", day(16), 3));
    }

    #[test]
    fn test_promotion_validate() {
        let mut p = promo("1", Discount::Percentage { value: 20 });
        assert!(p.validate().is_ok());

        p.end_date = day(1);
        assert!(p.validate().is_ok());

        p.end_date = p.start_date.pred_opt().unwrap();
        assert!(p.validate().is_err());

        let mut p = promo("1", Discount::Percentage { value: 20 });
        p.min_stay_length = Some(0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_quote_picks_largest_discount() {
        let promos = vec![
            promo(
                "fixed",
                Discount::Fixed {
                    value: Money::from_major(1000),
                },
            ),
            promo("pct", Discount::Percentage { value: 20 }),
        ];

        let quote = StayQuote::build("Deluxe", day(16), day(19), nights(&[5000, 5000, 5000]), &promos);

        assert_eq!(quote.subtotal, Money::from_major(15_000));
        assert_eq!(quote.promotion_id.as_deref(), Some("pct"));
        assert_eq!(quote.discount, Money::from_major(3000));
        assert_eq!(quote.total, Money::from_major(12_000));
    }

    #[test]
    fn test_quote_without_applicable_promotion() {
        let promos = vec![promo("1", Discount::Percentage { value: 20 })];
        let quote = StayQuote::build("Standard", day(16), day(18), nights(&[3000, 3000]), &promos);

        assert!(quote.promotion_id.is_none());
        assert_eq!(quote.discount, Money::zero());
        assert_eq!(quote.total, Money::from_major(6000));
    }

    #[test]
    fn test_discount_wire_format() {
        let json = serde_json::to_value(Discount::StayPay {
            stay_nights: 3,
            pay_nights: 2,
        })
        .unwrap();
        assert_eq!(json["type"], "stay-x-pay-y");
        assert_eq!(json["stayNights"], 3);
        assert_eq!(json["payNights"], 2);

        let back: Discount = serde_json::from_str(r#"{"type":"percentage","value":20}"#).unwrap();
        assert_eq!(back, Discount::Percentage { value: 20 });
    }
}
