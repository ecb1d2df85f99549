//! # Guest Management
//!
//! Guest profiles (the CRM side of the front office) and online reviews
//! gathered for reputation tracking.
//!
//! ## Review Summary
//! ```text
//! reviews ──┬── rating 1..=5 ────────► average (tenths, half up)
//!           ├── sentiment ───────────► positive / neutral / negative
//!           └── replied == false ────► awaiting reply
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_amount, validate_notes, validate_required};

/// Lowest and highest star rating a review can carry.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

// =============================================================================
// Guest Profiles
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuestTag {
    #[serde(rename = "VIP")]
    Vip,
    Corporate,
    Honeymoon,
    Family,
    Solo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GuestProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub total_visits: u32,
    pub total_spend: Money,
    #[serde(default)]
    pub tags: Vec<GuestTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<NaiveDate>,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl GuestProfile {
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("name", &self.name)?;
        validate_amount("totalSpend", self.total_spend)?;
        validate_notes(self.notes.as_deref())?;
        for (i, tag) in self.tags.iter().enumerate() {
            if self.tags[..i].contains(tag) {
                return Err(ValidationError::Duplicate {
                    field: "tags".to_string(),
                    value: format!("{tag:?}"),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn has_tag(&self, tag: GuestTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Case-insensitive match on name or email, as the profile search box does.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct GuestFilter {
    pub query: Option<String>,
    pub tag: Option<GuestTag>,
}

impl GuestFilter {
    pub fn matches(&self, guest: &GuestProfile) -> bool {
        self.query.as_deref().map_or(true, |q| guest.matches_query(q))
            && self.tag.map_or(true, |t| guest.has_tag(t))
    }
}

// =============================================================================
// Reviews
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ReviewSource {
    Google,
    MakeMyTrip,
    #[serde(rename = "Booking.com")]
    BookingCom,
    Direct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSentiment {
    Positive,
    Neutral,
    Negative,
}

/// A guest review pulled from a review site. Only `replied` changes after
/// it lands in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub source: ReviewSource,
    pub guest_name: String,
    pub rating: u8,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub date: NaiveDate,
    pub sentiment: ReviewSentiment,
    #[serde(default)]
    pub replied: bool,
}

impl Review {
    pub fn validate(&self) -> CoreResult<()> {
        validate_required("guestName", &self.guest_name)?;
        validate_required("title", &self.title)?;
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                min: MIN_RATING as i64,
                max: MAX_RATING as i64,
            }
            .into());
        }
        Ok(())
    }

    /// Returns false when the review had already been answered.
    pub fn mark_replied(&mut self) -> bool {
        let changed = !self.replied;
        self.replied = true;
        changed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewFilter {
    pub source: Option<ReviewSource>,
    pub sentiment: Option<ReviewSentiment>,
    pub replied: Option<bool>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        self.source.map_or(true, |s| review.source == s)
            && self.sentiment.map_or(true, |s| review.sentiment == s)
            && self.replied.map_or(true, |r| review.replied == r)
    }
}

/// Reputation stat cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub total_reviews: u32,

    /// Mean rating times ten, rounded half up (4.5 stars is 45). Zero when
    /// there are no reviews.
    pub average_rating_tenths: u32,

    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
    pub awaiting_reply: u32,
}

impl ReviewSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let total_reviews = reviews.len() as u32;
        let count = |sentiment: ReviewSentiment| {
            reviews.iter().filter(|r| r.sentiment == sentiment).count() as u32
        };

        let rating_sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
        let average_rating_tenths = if total_reviews == 0 {
            0
        } else {
            (rating_sum * 10 * 2 + total_reviews) / (total_reviews * 2)
        };

        ReviewSummary {
            total_reviews,
            average_rating_tenths,
            positive: count(ReviewSentiment::Positive),
            neutral: count(ReviewSentiment::Neutral),
            negative: count(ReviewSentiment::Negative),
            awaiting_reply: reviews.iter().filter(|r| !r.replied).count() as u32,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(name: &str, email: &str, tags: Vec<GuestTag>) -> GuestProfile {
        GuestProfile {
            id: "gst_01".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            total_visits: 5,
            total_spend: Money::from_major(150_000),
            tags,
            last_visit: NaiveDate::from_ymd_opt(2025, 9, 15),
            preferences: vec!["High-floor room".to_string()],
            notes: None,
        }
    }

    fn review(rating: u8, sentiment: ReviewSentiment, replied: bool) -> Review {
        Review {
            id: format!("rev_{rating}"),
            source: ReviewSource::Google,
            guest_name: "Rohan V.".to_string(),
            rating,
            title: "Exceptional Stay!".to_string(),
            content: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 9, 18).unwrap(),
            sentiment,
            replied,
        }
    }

    #[test]
    fn test_guest_search_is_case_insensitive() {
        let g = guest("Rohan Verma", "rohan.v@example.com", vec![GuestTag::Vip]);
        assert!(g.matches_query("rohan"));
        assert!(g.matches_query("EXAMPLE.COM"));
        assert!(g.matches_query("  "));
        assert!(!g.matches_query("anika"));
    }

    #[test]
    fn test_guest_filter_combines_query_and_tag() {
        let g = guest("Sameer Khan", "sameer.k@example.com", vec![GuestTag::Corporate]);
        let filter = GuestFilter {
            query: Some("sameer".to_string()),
            tag: Some(GuestTag::Corporate),
        };
        assert!(filter.matches(&g));

        let filter = GuestFilter {
            tag: Some(GuestTag::Vip),
            ..filter
        };
        assert!(!filter.matches(&g));
        assert!(GuestFilter::default().matches(&g));
    }

    #[test]
    fn test_guest_validation() {
        assert!(guest("Priya Patel", "", vec![GuestTag::Family]).validate().is_ok());
        assert!(guest(" ", "", vec![]).validate().is_err());
        assert!(guest("Priya Patel", "", vec![GuestTag::Family, GuestTag::Family])
            .validate()
            .is_err());
    }

    #[test]
    fn test_review_rating_bounds() {
        assert!(review(1, ReviewSentiment::Negative, false).validate().is_ok());
        assert!(review(5, ReviewSentiment::Positive, false).validate().is_ok());
        assert!(review(0, ReviewSentiment::Negative, false).validate().is_err());
        assert!(review(6, ReviewSentiment::Positive, false).validate().is_err());
    }

    #[test]
    fn test_mark_replied_reports_change() {
        let mut r = review(3, ReviewSentiment::Neutral, false);
        assert!(r.mark_replied());
        assert!(r.replied);
        assert!(!r.mark_replied());
    }

    #[test]
    fn test_review_summary() {
        let reviews = vec![
            review(5, ReviewSentiment::Positive, true),
            review(3, ReviewSentiment::Neutral, false),
            review(2, ReviewSentiment::Negative, false),
            review(4, ReviewSentiment::Positive, true),
        ];
        let summary = ReviewSummary::from_reviews(&reviews);
        assert_eq!(summary.total_reviews, 4);
        // 14 / 4 = 3.5
        assert_eq!(summary.average_rating_tenths, 35);
        assert_eq!(summary.positive, 2);
        assert_eq!(summary.neutral, 1);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.awaiting_reply, 2);

        assert_eq!(ReviewSummary::from_reviews(&[]), ReviewSummary::default());
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 13 / 3 = 4.333.. -> 43, 14 / 3 = 4.666.. -> 47
        let three = |a, b, c| {
            ReviewSummary::from_reviews(&[
                review(a, ReviewSentiment::Positive, true),
                review(b, ReviewSentiment::Positive, true),
                review(c, ReviewSentiment::Positive, true),
            ])
            .average_rating_tenths
        };
        assert_eq!(three(5, 4, 4), 43);
        assert_eq!(three(5, 5, 4), 47);
    }

    #[test]
    fn test_review_wire_format() {
        let mut r = review(2, ReviewSentiment::Negative, false);
        r.source = ReviewSource::BookingCom;
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["source"], "Booking.com");
        assert_eq!(json["sentiment"], "negative");
        assert_eq!(json["guestName"], "Rohan V.");
        assert_eq!(serde_json::to_string(&GuestTag::Vip).unwrap(), "\"VIP\"");
    }
}
