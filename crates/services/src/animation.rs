//! Animation directives for the rendering layer.
//!
//! The controller never animates anything itself; it emits these as plain
//! data and lets whatever rendering technology hosts the session map them to
//! actual motion. Completion of a [`SwipeAnimation::Fling`] is the point at
//! which the state machine advances.

use swipe_core::classify::{Classification, SwipeConfig};
use swipe_core::gesture::DragOffset;

/// How far past the screen edge a judged card keeps flying.
pub const FLING_OVERSHOOT: f32 = 100.0;

/// Spring friction for the snap-back of a cancelled drag.
pub const SPRING_FRICTION: f32 = 4.0;

/// What the rendering layer should do with the top card after a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeAnimation {
    /// Continue outward past the screen edge; the judgment commits when this
    /// finishes.
    Fling { to: DragOffset },

    /// Spring back to the origin; no state change follows.
    SpringBack { friction: f32 },
}

impl SwipeAnimation {
    /// Directive for a classified release.
    ///
    /// A judged card flings to `±(screen_width + overshoot)` horizontally and
    /// keeps the vertical offset it was released at; a cancelled drag springs
    /// back to the origin.
    #[must_use]
    pub fn for_release(
        classification: Classification,
        release: DragOffset,
        config: &SwipeConfig,
    ) -> Self {
        let fling_x = config.screen_width() + FLING_OVERSHOOT;
        match classification {
            Classification::Correct => Self::Fling {
                to: DragOffset::new(fling_x, release.dy),
            },
            Classification::Incorrect => Self::Fling {
                to: DragOffset::new(-fling_x, release.dy),
            },
            Classification::Cancelled => Self::SpringBack {
                friction: SPRING_FRICTION,
            },
        }
    }

    #[must_use]
    pub fn is_fling(&self) -> bool {
        matches!(self, Self::Fling { .. })
    }
}
