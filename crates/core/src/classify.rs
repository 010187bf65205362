use thiserror::Error;

use crate::session::RevealMode;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SwipeConfigError {
    #[error("screen width must be positive and finite, got {0}")]
    InvalidWidth(f32),
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Swipe threshold configuration.
///
/// The screen width is passed in explicitly rather than read from a display
/// environment, so classification stays pure and testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    screen_width: f32,
}

impl SwipeConfig {
    /// # Errors
    ///
    /// Returns `SwipeConfigError::InvalidWidth` for zero, negative, or
    /// non-finite widths.
    pub fn new(screen_width: f32) -> Result<Self, SwipeConfigError> {
        if !screen_width.is_finite() || screen_width <= 0.0 {
            return Err(SwipeConfigError::InvalidWidth(screen_width));
        }
        Ok(Self { screen_width })
    }

    #[must_use]
    pub fn screen_width(&self) -> f32 {
        self.screen_width
    }

    /// Horizontal displacement a release must exceed to register a judgment.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.screen_width / 2.0
    }
}

//
// ─── CLASSIFICATION ────────────────────────────────────────────────────────────
//

/// Discrete outcome of a released drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Correct,
    Incorrect,
    Cancelled,
}

/// Maps a released drag's horizontal displacement to a judgment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeClassifier {
    config: SwipeConfig,
}

impl SwipeClassifier {
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Classify a released drag.
    ///
    /// A judgment can only be recorded once the answer face is showing; while
    /// the question is up every release cancels. The threshold is a
    /// half-screen-width magnitude, direction-symmetric, and strict: a release
    /// at exactly the threshold snaps back.
    #[must_use]
    pub fn classify(&self, dx: f32, reveal: RevealMode) -> Classification {
        if reveal == RevealMode::Question {
            return Classification::Cancelled;
        }

        let threshold = self.config.threshold();
        if dx > threshold {
            Classification::Correct
        } else if dx < -threshold {
            Classification::Incorrect
        } else {
            Classification::Cancelled
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
