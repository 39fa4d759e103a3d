use chrono::Utc;
use dramlog_models::{Lang, Review, ReviewDraft, ReviewInput};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::backend::StorageBackend;

/// Committed review collection, one JSON array under this key.
pub const REVIEWS_KEY: &str = "wmg-reviews";
/// Single-slot unsaved draft.
pub const DRAFT_KEY: &str = "wmg-draft";
/// Last reviewer name, remembered for future drafts.
pub const REVIEWER_KEY: &str = "wmg-reviewer";
/// Display language preference ("ko" / "en").
pub const LANG_KEY: &str = "wmg-lang";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("review not found: {0}")]
    NotFound(String),
    #[error("stored collection is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The local review collection over an injected storage backend.
///
/// Every mutation is a full read-modify-write of the collection under
/// `wmg-reviews`; there is no locking, callers serialize access. Two
/// stores racing on the same backend lose updates last-writer-wins.
pub struct ReviewStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> ReviewStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All reviews, newest first (creation prepends). An absent key is an
    /// empty collection; a malformed blob is a hard error, recovery is
    /// the caller's call.
    pub fn list(&self) -> Result<Vec<Review>, StoreError> {
        match self.backend.read(REVIEWS_KEY)? {
            Some(raw) => {
                let reviews: Vec<Review> = serde_json::from_str(&raw)?;
                debug!("loaded {} reviews", reviews.len());
                Ok(reviews)
            }
            None => Ok(Vec::new()),
        }
    }

    pub fn get(&self, id: &str) -> Result<Review, StoreError> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Commits a new review: assigns id and timestamp, prepends, remembers
    /// the reviewer name, and clears any pending draft.
    pub fn create(&self, input: ReviewInput) -> Result<Review, StoreError> {
        let mut input = input;
        input.flavors.dedupe();

        let mut reviews = self.list()?;
        let review = input.into_review(Uuid::new_v4().to_string(), Utc::now());
        if let Some(reviewer) = &review.reviewer {
            self.backend.write(REVIEWER_KEY, reviewer)?;
        }
        reviews.insert(0, review.clone());
        self.persist(&reviews)?;
        self.clear_draft()?;
        info!("created review {} ({})", review.id, review.whisky.name);
        Ok(review)
    }

    /// Replaces everything except `id` and the original `created_at`.
    pub fn update(&self, id: &str, input: ReviewInput) -> Result<Review, StoreError> {
        let mut input = input;
        input.flavors.dedupe();

        let mut reviews = self.list()?;
        let index = reviews
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let updated = input.into_review(id.to_string(), reviews[index].created_at);
        reviews[index] = updated.clone();
        self.persist(&reviews)?;
        info!("updated review {}", id);
        Ok(updated)
    }

    /// Removes the matching review; a no-op when the id is absent.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut reviews = self.list()?;
        let before = reviews.len();
        reviews.retain(|r| r.id != id);
        self.persist(&reviews)?;
        if reviews.len() < before {
            info!("deleted review {}", id);
        } else {
            debug!("delete: review {} not present", id);
        }
        Ok(())
    }

    pub fn save_draft(&self, draft: &ReviewDraft) -> Result<(), StoreError> {
        let json = serde_json::to_string(draft)?;
        self.backend.write(DRAFT_KEY, &json)?;
        Ok(())
    }

    pub fn draft(&self) -> Result<Option<ReviewDraft>, StoreError> {
        match self.backend.read(DRAFT_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn clear_draft(&self) -> Result<(), StoreError> {
        self.backend.remove(DRAFT_KEY)?;
        Ok(())
    }

    /// Whole-collection JSON, pretty-printed for hand inspection.
    pub fn export_all(&self) -> Result<String, StoreError> {
        let reviews = self.list()?;
        Ok(serde_json::to_string_pretty(&reviews)?)
    }

    /// Replaces the entire collection (no merge). Legacy flavor shapes in
    /// the imported JSON normalize on parse; lists are deduped on the way
    /// in. Returns the imported count.
    pub fn import_all(&self, json: &str) -> Result<usize, StoreError> {
        let mut reviews: Vec<Review> = serde_json::from_str(json)?;
        for review in &mut reviews {
            review.flavors.dedupe();
        }
        self.persist(&reviews)?;
        info!("imported {} reviews (collection replaced)", reviews.len());
        Ok(reviews.len())
    }

    pub fn reviewer(&self) -> Result<Option<String>, StoreError> {
        Ok(self.backend.read(REVIEWER_KEY)?)
    }

    pub fn set_reviewer(&self, name: &str) -> Result<(), StoreError> {
        self.backend.write(REVIEWER_KEY, name)?;
        Ok(())
    }

    pub fn language(&self) -> Result<Option<Lang>, StoreError> {
        Ok(self
            .backend
            .read(LANG_KEY)?
            .and_then(|s| s.trim().parse().ok()))
    }

    pub fn set_language(&self, lang: Lang) -> Result<(), StoreError> {
        self.backend.write(LANG_KEY, lang.as_str())?;
        Ok(())
    }

    pub fn clear_reviews(&self) -> Result<(), StoreError> {
        self.backend.remove(REVIEWS_KEY)?;
        info!("cleared review collection");
        Ok(())
    }

    fn persist(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let json = serde_json::to_string(reviews)?;
        self.backend.write(REVIEWS_KEY, &json)?;
        Ok(())
    }
}
