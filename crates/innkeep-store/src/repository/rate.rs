//! # Rate Repository
//!
//! Nightly prices keyed by `(room_type, date)`.
//!
//! ## Upsert
//! ```text
//! upsert_rate(Deluxe, 16th, ₹5500)
//!      │
//!      ├── key exists ──► price replaced in place
//!      └── key missing ──► entry appended
//!
//! Applying the same triple twice leaves one entry with that price.
//! ```

use chrono::NaiveDate;
use innkeep_core::{DateRangeFilter, Money, RatePrice};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::{key_label, PropertyStore};

impl PropertyStore {
    pub fn list_rates(&self, filter: &DateRangeFilter) -> Vec<RatePrice> {
        self.rates
            .iter()
            .filter(|rate| filter.matches(&rate.room_type, rate.date))
            .cloned()
            .collect()
    }

    pub fn get_rate(&self, room_type: &str, date: NaiveDate) -> StoreResult<RatePrice> {
        self.rates
            .iter()
            .find(|rate| rate.matches_key(room_type, date))
            .cloned()
            .ok_or_else(|| StoreError::not_found("Rate", key_label(room_type, date)))
    }

    /// Inserts or replaces the price for one room type on one night.
    pub fn upsert_rate(&mut self, room_type: &str, date: NaiveDate, price: Money) -> StoreResult<RatePrice> {
        let rate = RatePrice {
            room_type: room_type.to_string(),
            date,
            price,
        };
        rate.validate()?;

        debug!(room_type = %room_type, %date, %price, "Upserting rate");
        self.apply_rate(rate.clone());
        Ok(rate)
    }

    /// Upserts a batch of rates. Every entry is validated before any is
    /// applied; one bad entry rejects the whole batch.
    pub fn upsert_rates(&mut self, rates: Vec<RatePrice>) -> StoreResult<usize> {
        for rate in &rates {
            rate.validate()?;
        }

        debug!(count = rates.len(), "Upserting rate batch");
        let count = rates.len();
        for rate in rates {
            self.apply_rate(rate);
        }
        Ok(count)
    }

    fn apply_rate(&mut self, rate: RatePrice) {
        match self
            .rates
            .iter_mut()
            .find(|existing| existing.matches_key(&rate.room_type, rate.date))
        {
            Some(existing) => existing.price = rate.price,
            None => self.rates.push(rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{day, demo_store};

    #[test]
    fn test_list_rates_for_window() {
        let store = demo_store();
        let rates = store.list_rates(&DateRangeFilter::for_room_type("Suite", day(0), day(2)));
        assert_eq!(rates.len(), 3);
        assert!(rates.iter().all(|r| r.price == Money::from_major(8000)));
    }

    #[test]
    fn test_upsert_rate_is_idempotent() {
        let mut store = demo_store();
        let before = store.list_rates(&DateRangeFilter::default()).len();

        store.upsert_rate("Deluxe", day(1), Money::from_major(5500)).unwrap();
        store.upsert_rate("Deluxe", day(1), Money::from_major(5500)).unwrap();

        let matching = store.list_rates(&DateRangeFilter::for_room_type("Deluxe", day(1), day(1)));
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].price, Money::from_major(5500));
        assert_eq!(store.list_rates(&DateRangeFilter::default()).len(), before);
    }

    #[test]
    fn test_upsert_rate_inserts_new_key() {
        let mut store = demo_store();
        store.upsert_rate("Penthouse", day(0), Money::from_major(20_000)).unwrap();
        assert_eq!(
            store.get_rate("Penthouse", day(0)).unwrap().price,
            Money::from_major(20_000)
        );
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut store = demo_store();
        assert!(store.upsert_rate("Deluxe", day(0), Money::from_major(-1)).is_err());
        assert_eq!(store.get_rate("Deluxe", day(0)).unwrap().price, Money::from_major(5000));
    }

    #[test]
    fn test_bulk_upsert_is_all_or_nothing() {
        let mut store = demo_store();
        let before = store.export();

        let batch = vec![
            RatePrice {
                room_type: "Deluxe".to_string(),
                date: day(0),
                price: Money::from_major(6000),
            },
            RatePrice {
                room_type: "".to_string(),
                date: day(1),
                price: Money::from_major(6000),
            },
        ];
        assert!(store.upsert_rates(batch).is_err());
        assert_eq!(store.export(), before);

        let batch = vec![
            RatePrice {
                room_type: "Deluxe".to_string(),
                date: day(0),
                price: Money::from_major(6000),
            },
            RatePrice {
                room_type: "Deluxe".to_string(),
                date: day(40),
                price: Money::from_major(6000),
            },
        ];
        assert_eq!(store.upsert_rates(batch).unwrap(), 2);
        assert_eq!(store.get_rate("Deluxe", day(0)).unwrap().price, Money::from_major(6000));
        assert!(store.get_rate("Deluxe", day(40)).is_ok());
    }

    #[test]
    fn test_missing_rate_is_not_found() {
        let store = demo_store();
        assert_eq!(
            store.get_rate("Deluxe", day(60)).unwrap_err(),
            StoreError::not_found("Rate", key_label("Deluxe", day(60)))
        );
    }
}
