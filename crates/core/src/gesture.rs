use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GestureError {
    /// A second gesture tried to start while one was already being tracked.
    /// Only one continuous pointer gesture exists per top card.
    #[error("a gesture is already being tracked")]
    AlreadyTracking,

    #[error("no gesture is being tracked")]
    NotTracking,
}

//
// ─── DRAG OFFSET ───────────────────────────────────────────────────────────────
//

/// Cumulative pointer offset relative to where the gesture started.
///
/// Ephemeral: exists only between a gesture start and its release. Never
/// stored in session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragOffset {
    pub dx: f32,
    pub dy: f32,
}

impl DragOffset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

//
// ─── GESTURE TRACKER ───────────────────────────────────────────────────────────
//

/// Tracks a single in-flight drag gesture on the top card.
///
/// Two states: idle and tracking. While tracking, the live offset mirrors the
/// pointer so the rendering layer can move the card in real time. The final
/// offset returned by [`GestureTracker::release`] is what the swipe classifier
/// consumes.
#[derive(Debug, Default)]
pub struct GestureTracker {
    active: Option<DragOffset>,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a gesture at the origin.
    ///
    /// # Errors
    ///
    /// Returns `GestureError::AlreadyTracking` if a gesture is already in
    /// flight; tracker state is never silently overwritten.
    pub fn begin(&mut self) -> Result<(), GestureError> {
        if self.active.is_some() {
            return Err(GestureError::AlreadyTracking);
        }
        self.active = Some(DragOffset::ZERO);
        Ok(())
    }

    /// Record the cumulative offset of the active gesture.
    ///
    /// # Errors
    ///
    /// Returns `GestureError::NotTracking` if no gesture is in flight.
    pub fn update(&mut self, dx: f32, dy: f32) -> Result<DragOffset, GestureError> {
        match self.active.as_mut() {
            Some(offset) => {
                *offset = DragOffset::new(dx, dy);
                Ok(*offset)
            }
            None => Err(GestureError::NotTracking),
        }
    }

    /// End the active gesture, returning its final offset.
    ///
    /// # Errors
    ///
    /// Returns `GestureError::NotTracking` if no gesture is in flight.
    pub fn release(&mut self, dx: f32, dy: f32) -> Result<DragOffset, GestureError> {
        if self.active.is_none() {
            return Err(GestureError::NotTracking);
        }
        self.active = None;
        Ok(DragOffset::new(dx, dy))
    }

    /// Drop any in-flight gesture and return to idle.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Live offset of the in-flight gesture, `None` when idle.
    #[must_use]
    pub fn offset(&self) -> Option<DragOffset> {
        self.active
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
