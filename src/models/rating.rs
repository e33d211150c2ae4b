// src/models/rating.rs
use crate::error::ValidationError;
use crate::models::listing::Listing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of a server-issued identifier (24 hex characters).
pub const USER_ID_LEN: usize = 24;

/// Person reference as populated on a rating.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RatingParty {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub rated_user: Option<RatingParty>,
    #[serde(default)]
    pub rated_by: Option<RatingParty>,
    pub rating: u8,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub food_listing: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn rater_name(&self) -> &str {
        self.rated_by
            .as_ref()
            .map(|r| r.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Anonymous")
    }
}

/// Body of `POST /ratings`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingDraft {
    pub rated_user_id: String,
    pub rating: u8,
    pub review: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_listing_id: Option<String>,
}

impl RatingDraft {
    /// Entry from the ratings page, where the id is pasted by hand.
    /// The id must look like a server identifier.
    pub fn for_user_id(raw_id: &str, rating: u8, review: &str) -> Result<Self, ValidationError> {
        let id = raw_id.trim();
        if id.is_empty() {
            return Err(ValidationError::MissingUserId);
        }
        if !looks_like_object_id(id) {
            return Err(ValidationError::InvalidUserId);
        }
        Ok(Self {
            rated_user_id: id.to_string(),
            rating,
            review: review.to_string(),
            food_listing_id: None,
        })
    }

    /// Entry from a listing page: the donor is rated and no id shape check runs.
    // FIXME: the two entry points validate ids differently; needs a product decision
    pub fn for_listing_donor(listing: &Listing, rating: u8, review: &str) -> Option<Self> {
        let donor = listing.donor.as_ref()?;
        Some(Self {
            rated_user_id: donor.id.clone(),
            rating,
            review: review.to_string(),
            food_listing_id: Some(listing.id.clone()),
        })
    }

    /// Guards applied before anything is sent.
    pub fn check(&self, rater_id: &str) -> Result<(), ValidationError> {
        if self.rated_user_id == rater_id {
            return Err(ValidationError::SelfRating);
        }
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::ScoreOutOfRange(self.rating));
        }
        Ok(())
    }
}

fn looks_like_object_id(id: &str) -> bool {
    id.len() == USER_ID_LEN && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Stars for a score, filled first: `(filled, empty)`.
pub fn star_counts(score: f64) -> (usize, usize) {
    let filled = score.floor().clamp(0.0, 5.0) as usize;
    (filled, 5 - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ME: &str = "64b7f0c2a1b2c3d4e5f60718";
    const OTHER: &str = "64b7f0c2a1b2c3d4e5f60000";

    #[test]
    fn pasted_id_is_trimmed_and_checked() {
        let draft = RatingDraft::for_user_id(&format!("  {OTHER} "), 4, "Great").unwrap();
        assert_eq!(draft.rated_user_id, OTHER);
        assert_eq!(RatingDraft::for_user_id("   ", 4, ""), Err(ValidationError::MissingUserId));
        assert_eq!(RatingDraft::for_user_id("abc", 4, ""), Err(ValidationError::InvalidUserId));
        assert_eq!(
            RatingDraft::for_user_id(&OTHER.to_uppercase(), 4, ""),
            Err(ValidationError::InvalidUserId)
        );
    }

    #[test]
    fn self_rating_is_rejected() {
        let draft = RatingDraft::for_user_id(ME, 5, "").unwrap();
        assert_eq!(draft.check(ME), Err(ValidationError::SelfRating));
        assert_eq!(draft.check(OTHER), Ok(()));
    }

    #[test]
    fn score_must_be_in_range() {
        let mut draft = RatingDraft::for_user_id(OTHER, 0, "").unwrap();
        assert_eq!(draft.check(ME), Err(ValidationError::ScoreOutOfRange(0)));
        draft.rating = 6;
        assert_eq!(draft.check(ME), Err(ValidationError::ScoreOutOfRange(6)));
    }

    #[test]
    fn listing_path_skips_id_shape_check() {
        let listing: Listing = serde_json::from_str(
            r#"{"_id":"L1","foodName":"Rice","quantity":2,"unit":"kg","category":"grains",
            "expiryDate":"2026-11-01T00:00:00Z","status":"available",
            "donor":{"_id":"not-an-object-id","name":"Asha"}}"#,
        )
        .unwrap();
        let draft = RatingDraft::for_listing_donor(&listing, 5, "Thanks").unwrap();
        assert_eq!(draft.rated_user_id, "not-an-object-id");
        assert_eq!(draft.food_listing_id.as_deref(), Some("L1"));
        assert_eq!(draft.check(ME), Ok(()));
    }

    #[test]
    fn draft_serializes_without_listing_when_absent() {
        let draft = RatingDraft::for_user_id(OTHER, 3, "ok").unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["ratedUserId"], OTHER);
        assert!(json.get("foodListingId").is_none());
    }

    #[test]
    fn stars_round_down() {
        assert_eq!(star_counts(4.6), (4, 1));
        assert_eq!(star_counts(0.0), (0, 5));
    }
}
