//! Seam to the set-storage collaborator.
//!
//! The review core never persists anything itself; it receives a card stack
//! once at session start. `SetStore` is the contract that the hosting app's
//! storage layer implements, and `InMemorySetStore` backs tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

use swipe_core::classify::SwipeConfig;
use swipe_core::model::{Card, CardDraft, CardId, CardStack, CardValidationError, FaceDraft, SetId};
use swipe_core::time::Clock;

use crate::controller::ReviewController;
use crate::error::{ReviewStartError, StoreError};

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

/// Persisted shape for a card.
///
/// Mirrors the domain `Card` with raw strings for the image URIs so storage
/// adapters can serialize without leaking their format into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,
    pub question_text: String,
    pub question_image: Option<String>,
    pub answer_text: String,
    pub answer_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CardRecord {
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id(),
            question_text: card.question().text().to_owned(),
            question_image: card.question().image().map(|uri| uri.to_uri_string()),
            answer_text: card.answer().text().to_owned(),
            answer_image: card.answer().image().map(|uri| uri.to_uri_string()),
            created_at: card.created_at(),
        }
    }

    /// Convert the record back into a domain `Card`.
    ///
    /// # Errors
    ///
    /// Returns `CardValidationError` if either face fails validation.
    pub fn into_card(self) -> Result<Card, CardValidationError> {
        let question = match self.question_image {
            Some(image) => FaceDraft::with_image(self.question_text, image),
            None => FaceDraft::text_only(self.question_text),
        };
        let answer = match self.answer_image {
            Some(image) => FaceDraft::with_image(self.answer_text, image),
            None => FaceDraft::text_only(self.answer_text),
        };

        let validated = CardDraft { question, answer }.validate(self.created_at)?;
        Ok(validated.assign_id(self.id))
    }
}

/// A named flashcard set, ready to review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSet {
    pub id: SetId,
    pub name: String,
    pub cards: CardStack,
}

//
// ─── STORE CONTRACT ────────────────────────────────────────────────────────────
//

/// Repository contract for flashcard sets.
#[async_trait]
pub trait SetStore: Send + Sync {
    /// Fetch a set by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if missing, or other storage errors.
    async fn load_set(&self, id: SetId) -> Result<CardSet, StoreError>;
}

/// In-memory `SetStore` for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct InMemorySetStore {
    sets: Arc<Mutex<HashMap<SetId, CardSet>>>,
}

impl InMemorySetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the backing lock is poisoned.
    pub fn insert_set(&self, set: CardSet) -> Result<(), StoreError> {
        let mut sets = self
            .sets
            .lock()
            .map_err(|_| StoreError::Connection("poisoned lock".into()))?;
        sets.insert(set.id, set);
        Ok(())
    }
}

#[async_trait]
impl SetStore for InMemorySetStore {
    async fn load_set(&self, id: SetId) -> Result<CardSet, StoreError> {
        let sets = self
            .sets
            .lock()
            .map_err(|_| StoreError::Connection("poisoned lock".into()))?;
        sets.get(&id).cloned().ok_or(StoreError::NotFound)
    }
}

//
// ─── WORKFLOW ──────────────────────────────────────────────────────────────────
//

/// Load a set and start a review session over it.
///
/// The set identifier is opaque to the core; it arrives from navigation and
/// is resolved entirely by the storage collaborator. The screen width is the
/// hosting screen's measured width, passed in explicitly so the classifier
/// never reads a display environment.
///
/// # Errors
///
/// Returns `ReviewStartError::Store` for storage failures and
/// `ReviewStartError::Config` for an invalid screen width. An empty set is
/// not an error: it produces a session that is already complete.
pub async fn start_review(
    store: &dyn SetStore,
    set_id: SetId,
    screen_width: f32,
    clock: Clock,
) -> Result<ReviewController, ReviewStartError> {
    let config = SwipeConfig::new(screen_width)?;
    let set = store.load_set(set_id).await?;
    debug!(set = %set.id, cards = set.cards.len(), "starting review session");
    Ok(ReviewController::new(set.cards, config, clock))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
