//! # Guest Repository
//!
//! Guest profiles and the review inbox behind the reputation view. Reviews
//! arrive from the seed; the desk only ever marks them as replied.

use innkeep_core::{GuestFilter, GuestProfile, Review, ReviewFilter, ReviewSummary};
use tracing::debug;

use crate::error::StoreResult;
use crate::store::PropertyStore;

impl PropertyStore {
    pub fn list_guests(&self, filter: &GuestFilter) -> Vec<GuestProfile> {
        self.guests.list(|guest| filter.matches(guest))
    }

    pub fn get_guest(&self, id: &str) -> StoreResult<GuestProfile> {
        self.guests.get(id)
    }

    /// Reviews matching `filter`, newest first.
    pub fn list_reviews(&self, filter: &ReviewFilter) -> Vec<Review> {
        let mut reviews = self.reviews.list(|review| filter.matches(review));
        reviews.sort_by(|a, b| b.date.cmp(&a.date));
        reviews
    }

    pub fn get_review(&self, id: &str) -> StoreResult<Review> {
        self.reviews.get(id)
    }

    /// Marks a review as answered. Marking it again changes nothing.
    pub fn mark_review_replied(&mut self, id: &str) -> StoreResult<Review> {
        let mut review = self.reviews.get(id)?;
        let changed = review.mark_replied();

        debug!(id = %id, changed, "Marking review replied");
        if changed {
            self.reviews.replace(review.clone())?;
        }
        Ok(review)
    }

    /// Rating and sentiment stats over every review.
    pub fn review_summary(&self) -> ReviewSummary {
        ReviewSummary::from_reviews(&self.reviews.list(|_| true))
    }
}

#[cfg(test)]
mod tests {
    use innkeep_core::{GuestTag, ReviewSentiment, ReviewSource};

    use super::*;
    use crate::test_support::demo_store;

    #[test]
    fn test_search_guests_by_name_or_email() {
        let store = demo_store();
        let found = store.list_guests(&GuestFilter {
            query: Some("SHARMA".to_string()),
            ..Default::default()
        });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "gst_02");

        let found = store.list_guests(&GuestFilter {
            query: Some("example.com".to_string()),
            ..Default::default()
        });
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_filter_guests_by_tag() {
        let store = demo_store();
        let corporate: Vec<String> = store
            .list_guests(&GuestFilter {
                tag: Some(GuestTag::Corporate),
                ..Default::default()
            })
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(corporate, vec!["gst_01", "gst_04"]);

        let vip = store.get_guest("gst_01").unwrap();
        assert!(vip.has_tag(GuestTag::Vip));
        assert_eq!(vip.total_visits, 5);
        assert!(store.get_guest("gst_99").unwrap_err().is_not_found());
    }

    #[test]
    fn test_reviews_newest_first_and_filtered() {
        let store = demo_store();
        let ids: Vec<String> = store
            .list_reviews(&ReviewFilter::default())
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["rev_04", "rev_03", "rev_02", "rev_01"]);

        let google = store.list_reviews(&ReviewFilter {
            source: Some(ReviewSource::Google),
            ..Default::default()
        });
        assert_eq!(google.len(), 2);

        let waiting = store.list_reviews(&ReviewFilter {
            replied: Some(false),
            sentiment: Some(ReviewSentiment::Negative),
            ..Default::default()
        });
        assert_eq!(waiting.len(), 1);
        assert_eq!(waiting[0].id, "rev_03");
    }

    #[test]
    fn test_mark_review_replied() {
        let mut store = demo_store();
        assert_eq!(store.review_summary().awaiting_reply, 2);

        let review = store.mark_review_replied("rev_03").unwrap();
        assert!(review.replied);
        assert!(store.get_review("rev_03").unwrap().replied);
        assert_eq!(store.review_summary().awaiting_reply, 1);

        // Already answered
        let review = store.mark_review_replied("rev_01").unwrap();
        assert!(review.replied);
        assert!(store.mark_review_replied("rev_99").unwrap_err().is_not_found());
    }

    #[test]
    fn test_review_summary_for_demo() {
        let summary = demo_store().review_summary();
        assert_eq!(summary.total_reviews, 4);
        assert_eq!(summary.average_rating_tenths, 35);
        assert_eq!(summary.positive, 2);
        assert_eq!(summary.neutral, 1);
        assert_eq!(summary.negative, 1);
    }
}
