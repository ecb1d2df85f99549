//! # Promotion Repository
//!
//! Promotion CRUD (the only collection with deletes) and stay quotes.

use chrono::NaiveDate;
use innkeep_core::{
    validation::validate_stay_dates, NewPromotion, NightlyRate, Promotion, PromotionUpdate,
    StayQuote,
};
use tracing::debug;

use crate::error::StoreResult;
use crate::store::{generate_id, PropertyStore};

impl PropertyStore {
    pub fn list_promotions(&self) -> Vec<Promotion> {
        self.promotions.list(|_| true)
    }

    /// Promotions that would apply to a stay of this shape.
    pub fn applicable_promotions(&self, room_type: &str, check_in: NaiveDate, nights: u32) -> Vec<Promotion> {
        self.promotions
            .list(|promo| promo.applies_to(room_type, check_in, nights))
    }

    pub fn get_promotion(&self, id: &str) -> StoreResult<Promotion> {
        self.promotions.get(id)
    }

    pub fn create_promotion(&mut self, new: NewPromotion) -> StoreResult<Promotion> {
        let promo = new.into_promotion(generate_id());
        promo.validate()?;

        debug!(id = %promo.id, name = %promo.name, "Creating promotion");
        self.promotions.insert(promo.clone())?;
        Ok(promo)
    }

    pub fn update_promotion(&mut self, id: &str, patch: PromotionUpdate) -> StoreResult<Promotion> {
        let mut promo = self.promotions.get(id)?;
        patch.apply_to(&mut promo);
        promo.validate()?;

        debug!(id = %id, active = promo.is_active, "Updating promotion");
        self.promotions.replace(promo.clone())?;
        Ok(promo)
    }

    /// Removes exactly one promotion. Unknown ids are `NotFound`.
    pub fn delete_promotion(&mut self, id: &str) -> StoreResult<Promotion> {
        let removed = self.promotions.remove(id)?;
        debug!(id = %id, name = %removed.name, "Deleted promotion");
        Ok(removed)
    }

    /// Prices a stay from the nightly rates for `[check_in, check_out)` and
    /// applies the best promotion.
    ///
    /// A night with no rate loaded is `NotFound` for that rate key.
    pub fn quote_stay(
        &self,
        room_type: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> StoreResult<StayQuote> {
        validate_stay_dates(check_in, check_out)?;

        let nightly = check_in
            .iter_days()
            .take_while(|date| *date < check_out)
            .map(|date| {
                self.get_rate(room_type, date).map(|rate| NightlyRate {
                    date,
                    price: rate.price,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;

        let promotions = self.promotions.list(|_| true);
        let quote = StayQuote::build(room_type, check_in, check_out, nightly, &promotions);

        debug!(
            room_type = %room_type,
            %check_in,
            %check_out,
            total = %quote.total,
            promotion = ?quote.promotion_id,
            "Quoted stay"
        );
        Ok(quote)
    }
}
