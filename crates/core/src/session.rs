use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{CardStack, VisibleCards};
use crate::time::Clock;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Rejected state-machine transitions.
///
/// These are misuse guards, not user-facing failures: the interactive surface
/// that could trigger them is hidden once the session completes, so callers
/// typically discard the error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("session already completed")]
    Completed,

    #[error("cannot record a judgment while the question face is showing")]
    QuestionShowing,
}

//
// ─── REVEAL MODE & OUTCOME ─────────────────────────────────────────────────────
//

/// Which face of the top card is showing.
///
/// Gates judgment: a card must be flipped to its answer before a swipe can be
/// recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealMode {
    Question,
    Answer,
}

/// The user's judgment of the top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Serializable view of session state for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub current_index: usize,
    pub num_correct: usize,
    pub num_incorrect: usize,
    pub reveal: RevealMode,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State machine for one run through a fixed card stack.
///
/// Two states: reviewing (`current_index < stack.len()`) and complete
/// (`current_index == stack.len()`). Every advance increments exactly one
/// counter together with the index, so `num_correct + num_incorrect ==
/// current_index` holds in every reachable state.
///
/// An empty stack is a valid degenerate session that starts complete.
#[derive(Debug)]
pub struct ReviewSession {
    stack: CardStack,
    current: usize,
    num_correct: usize,
    num_incorrect: usize,
    reveal: RevealMode,
    clock: Clock,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl ReviewSession {
    #[must_use]
    pub fn new(stack: CardStack, clock: Clock) -> Self {
        let started_at = clock.now();
        let completed_at = stack.is_empty().then_some(started_at);
        Self {
            stack,
            current: 0,
            num_correct: 0,
            num_incorrect: 0,
            reveal: RevealMode::Question,
            clock,
            started_at,
            completed_at,
        }
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn stack(&self) -> &CardStack {
        &self.stack
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn num_correct(&self) -> usize {
        self.num_correct
    }

    #[must_use]
    pub fn num_incorrect(&self) -> usize {
        self.num_incorrect
    }

    #[must_use]
    pub fn reveal(&self) -> RevealMode {
        self.reveal
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current == self.stack.len()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// The top card and the one peeking out under it.
    #[must_use]
    pub fn visible_cards(&self) -> VisibleCards<'_> {
        self.stack.visible_from(self.current)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_index: self.current,
            num_correct: self.num_correct,
            num_incorrect: self.num_incorrect,
            reveal: self.reveal,
            is_complete: self.is_complete(),
        }
    }

    /// Aggregate result, available once the session is complete.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        let completed_at = self.completed_at?;
        Some(SessionSummary {
            num_correct: self.num_correct,
            num_incorrect: self.num_incorrect,
            total: self.stack.len(),
            started_at: self.started_at,
            completed_at,
        })
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Flip the top card between its question and answer face.
    ///
    /// Repeatable indefinitely; flipping back and forth before judging is
    /// allowed. Never touches the index or counters.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::Completed` once the stack is exhausted.
    pub fn toggle_reveal(&mut self) -> Result<(), TransitionError> {
        if self.is_complete() {
            return Err(TransitionError::Completed);
        }
        self.reveal = match self.reveal {
            RevealMode::Question => RevealMode::Answer,
            RevealMode::Answer => RevealMode::Question,
        };
        Ok(())
    }

    /// Record a judgment for the top card and move to the next one.
    ///
    /// Increments the matching counter and the index together, and resets the
    /// reveal so the next card starts on its question face. Reaching the end
    /// of the stack completes the session.
    ///
    /// The reveal guard is independent of the classifier gate: even a caller
    /// that bypasses classification cannot record a judgment on an unflipped
    /// card.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError::Completed` once the stack is exhausted, and
    /// `TransitionError::QuestionShowing` while the question face is up.
    pub fn advance(&mut self, outcome: Outcome) -> Result<(), TransitionError> {
        if self.is_complete() {
            return Err(TransitionError::Completed);
        }
        if self.reveal == RevealMode::Question {
            return Err(TransitionError::QuestionShowing);
        }

        match outcome {
            Outcome::Correct => self.num_correct += 1,
            Outcome::Incorrect => self.num_incorrect += 1,
        }
        self.current += 1;
        self.reveal = RevealMode::Question;

        if self.is_complete() {
            self.completed_at = Some(self.clock.now());
        }

        debug_assert_eq!(self.num_correct + self.num_incorrect, self.current);
        Ok(())
    }

    /// Reinitialize counters, index, and reveal against the same stack.
    ///
    /// Valid from any state and idempotent. The stack is not reloaded or
    /// reordered.
    pub fn reset(&mut self) {
        self.current = 0;
        self.num_correct = 0;
        self.num_incorrect = 0;
        self.reveal = RevealMode::Question;
        self.started_at = self.clock.now();
        self.completed_at = self.stack.is_empty().then_some(self.started_at);
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Aggregate result of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    num_correct: usize,
    num_incorrect: usize,
    total: usize,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl SessionSummary {
    #[must_use]
    pub fn num_correct(&self) -> usize {
        self.num_correct
    }

    #[must_use]
    pub fn num_incorrect(&self) -> usize {
        self.num_incorrect
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Fraction of cards judged correct, `None` for an empty session.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        // Counts are bounded by the stack length, far below f64 precision limits.
        #[allow(clippy::cast_precision_loss)]
        let accuracy = self.num_correct as f64 / self.total as f64;
        Some(accuracy)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
