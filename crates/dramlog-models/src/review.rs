use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flavor::FlavorSet;
use crate::notes::Notes;
use crate::scores::ScoreCard;
use crate::whisky::Whisky;

/// A committed tasting review. `id` and `created_at` are assigned by the
/// store at creation and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    pub whisky: Whisky,
    pub scores: ScoreCard,
    pub notes: Notes,
    #[serde(default)]
    pub flavors: FlavorSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub would_rebuy: Option<Rebuy>,
}

/// Review content without the store-assigned `id`/`created_at`. This is
/// the payload for create, update and share-token encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    pub whisky: Whisky,
    #[serde(default)]
    pub scores: ScoreCard,
    #[serde(default)]
    pub notes: Notes,
    #[serde(default)]
    pub flavors: FlavorSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub would_rebuy: Option<Rebuy>,
}

impl ReviewInput {
    pub fn into_review(self, id: String, created_at: DateTime<Utc>) -> Review {
        Review {
            id,
            created_at,
            reviewer: self.reviewer,
            whisky: self.whisky,
            scores: self.scores,
            notes: self.notes,
            flavors: self.flavors,
            would_rebuy: self.would_rebuy,
        }
    }
}

impl From<Review> for ReviewInput {
    fn from(review: Review) -> Self {
        Self {
            reviewer: review.reviewer,
            whisky: review.whisky,
            scores: review.scores,
            notes: review.notes,
            flavors: review.flavors,
            would_rebuy: review.would_rebuy,
        }
    }
}

/// An unsaved review-in-progress. Every field is optional; the single
/// draft slot is cleared when a review is committed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whisky: Option<Whisky>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavors: Option<FlavorSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub would_rebuy: Option<Rebuy>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rebuy {
    Yes,
    No,
    Maybe,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor::FlavorEntry;

    #[test]
    fn test_review_parses_web_export_shape() {
        // Shape produced by the original web app's export, including a
        // legacy plain-string flavor list.
        let json = r#"{
            "id": "a1b2",
            "createdAt": "2024-03-01T12:00:00.000Z",
            "reviewer": "mina",
            "whisky": { "name": "Ardbeg 10", "distillery": "Ardbeg", "country": "SC", "color": 0.4 },
            "scores": { "nose": 22, "palate": 21, "finish": 20, "balance": 21 },
            "notes": { "nose": "tar and lemon", "palate": "ash", "finish": "long" },
            "flavors": { "nose": ["peat_smoke", "lemon"], "palate": [{"id":"ash","strength":4}], "finish": [] },
            "wouldRebuy": "yes"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.scores.total(), 84);
        assert_eq!(review.flavors.nose[0], FlavorEntry::new("peat_smoke", 3));
        assert_eq!(review.would_rebuy, Some(Rebuy::Yes));
    }

    #[test]
    fn test_input_round_trips_through_review() {
        let input = ReviewInput {
            reviewer: Some("jae".to_string()),
            whisky: Whisky { name: "Glendronach 12".to_string(), ..Default::default() },
            ..Default::default()
        };
        let review = input.clone().into_review("id-1".to_string(), Utc::now());
        assert_eq!(ReviewInput::from(review), input);
    }
}
