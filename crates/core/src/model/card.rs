use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{
    content::{CardFace, FaceDraft, FaceValidationError},
    ids::CardId,
};

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// Unvalidated card as entered by the user or read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub question: FaceDraft,
    pub answer: FaceDraft,
}

impl CardDraft {
    pub fn validate(self, now: DateTime<Utc>) -> Result<ValidatedCard, CardValidationError> {
        let question = self
            .question
            .validate()
            .map_err(CardValidationError::Question)?;

        let answer = self.answer.validate().map_err(CardValidationError::Answer)?;

        Ok(ValidatedCard {
            question,
            answer,
            created_at: now,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCard {
    pub question: CardFace,
    pub answer: CardFace,
    pub created_at: DateTime<Utc>,
}

impl ValidatedCard {
    #[must_use]
    pub fn assign_id(self, id: CardId) -> Card {
        Card {
            id,
            question: self.question,
            answer: self.answer,
            created_at: self.created_at,
        }
    }
}

/// A validated flashcard. Immutable once loaded into a session stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    question: CardFace,
    answer: CardFace,
    created_at: DateTime<Utc>,
}

impl Card {
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &CardFace {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &CardFace {
        &self.answer
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

//
// ─── CARD VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    #[error("invalid question face: {0}")]
    Question(#[source] FaceValidationError),

    #[error("invalid answer face: {0}")]
    Answer(#[source] FaceValidationError),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn card_fails_if_question_text_empty() {
        let draft = CardDraft {
            question: FaceDraft::text_only("   "),
            answer: FaceDraft::text_only("ok"),
        };

        let err = draft.validate(fixed_now()).unwrap_err();
        assert!(matches!(err, CardValidationError::Question(_)));
    }

    #[test]
    fn card_fails_if_answer_text_empty() {
        let draft = CardDraft {
            question: FaceDraft::text_only("ok"),
            answer: FaceDraft::text_only(" "),
        };

        let err = draft.validate(fixed_now()).unwrap_err();
        assert!(matches!(err, CardValidationError::Answer(_)));
    }

    #[test]
    fn valid_card_validates_and_assigns_id() {
        let draft = CardDraft {
            question: FaceDraft::with_image("hello", "img.png"),
            answer: FaceDraft::text_only("ok"),
        };

        let validated = draft.validate(fixed_now()).unwrap();
        let card = validated.assign_id(CardId::new(42));

        assert_eq!(card.id(), CardId::new(42));
        assert_eq!(card.question().text(), "hello");
        assert!(card.question().has_image());
        assert_eq!(card.answer().text(), "ok");
        assert_eq!(card.created_at(), fixed_now());
    }
}
