//! Event-driven controller for one swipe-review session.
//!
//! Wires the gesture tracker, swipe classifier, and session state machine
//! together: pointer events come in, animation directives go out, and the
//! state machine only advances when the rendering layer reports that the
//! outward fling has finished. That ordering keeps the stack from popping
//! mid-animation.

use tracing::{debug, trace};

use swipe_core::classify::{Classification, SwipeClassifier, SwipeConfig};
use swipe_core::gesture::{DragOffset, GestureTracker};
use swipe_core::model::{CardStack, VisibleCards};
use swipe_core::session::{Outcome, ReviewSession, SessionSnapshot, SessionSummary};
use swipe_core::time::Clock;

use crate::animation::SwipeAnimation;
use crate::error::ControllerError;

/// What is waiting on an animation-completion callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Pending {
    #[default]
    None,
    SpringBack,
    Commit(Outcome),
}

/// Controller for one run through a card stack.
///
/// Owned exclusively by the hosting screen; every method runs on its event
/// thread. The animation-completion callback is the only asynchronous
/// boundary: a judged release parks its outcome until
/// [`ReviewController::animation_complete`] fires, exactly once per release.
#[derive(Debug)]
pub struct ReviewController {
    session: ReviewSession,
    tracker: GestureTracker,
    classifier: SwipeClassifier,
    pending: Pending,
}

impl ReviewController {
    #[must_use]
    pub fn new(stack: CardStack, config: SwipeConfig, clock: Clock) -> Self {
        Self {
            session: ReviewSession::new(stack, clock),
            tracker: GestureTracker::new(),
            classifier: SwipeClassifier::new(config),
            pending: Pending::None,
        }
    }

    //
    // ─── GESTURE EVENTS ────────────────────────────────────────────────────────
    //

    /// A pointer went down on the top card.
    ///
    /// A new drag supersedes a spring-back that is still running (the offset
    /// simply starts following the new pointer), but cannot start while a
    /// judged swipe is waiting on its fling to commit, and not at all once the
    /// session is complete.
    ///
    /// # Errors
    ///
    /// `ControllerError::Completed`, `ControllerError::CommitPending`, or a
    /// wrapped `GestureError::AlreadyTracking`.
    pub fn gesture_start(&mut self) -> Result<(), ControllerError> {
        if self.session.is_complete() {
            return Err(ControllerError::Completed);
        }
        match self.pending {
            Pending::Commit(_) => return Err(ControllerError::CommitPending),
            Pending::SpringBack => {
                debug!("new drag supersedes spring-back");
                self.pending = Pending::None;
                self.tracker.cancel();
            }
            Pending::None => {}
        }
        self.tracker.begin()?;
        trace!("gesture started");
        Ok(())
    }

    /// The pointer moved; `(dx, dy)` is cumulative from the gesture start.
    ///
    /// Returns the live offset the rendering layer should mirror onto the top
    /// card.
    ///
    /// # Errors
    ///
    /// Wrapped `GestureError::NotTracking` if no gesture is in flight.
    pub fn gesture_move(&mut self, dx: f32, dy: f32) -> Result<DragOffset, ControllerError> {
        let offset = self.tracker.update(dx, dy)?;
        trace!(dx = offset.dx, dy = offset.dy, "gesture moved");
        Ok(offset)
    }

    /// The pointer lifted; classify and answer with an animation directive.
    ///
    /// A judged release parks its outcome until the fling completes; a
    /// cancelled release parks a spring-back. No session state changes here.
    ///
    /// # Errors
    ///
    /// Wrapped `GestureError::NotTracking` if no gesture is in flight.
    pub fn gesture_release(&mut self, dx: f32, dy: f32) -> Result<SwipeAnimation, ControllerError> {
        let release = self.tracker.release(dx, dy)?;
        let classification = self.classifier.classify(release.dx, self.session.reveal());
        self.pending = match classification {
            Classification::Correct => Pending::Commit(Outcome::Correct),
            Classification::Incorrect => Pending::Commit(Outcome::Incorrect),
            Classification::Cancelled => Pending::SpringBack,
        };
        debug!(dx = release.dx, ?classification, "drag released");
        Ok(SwipeAnimation::for_release(
            classification,
            release,
            self.classifier.config(),
        ))
    }

    /// The rendering layer finished the animation for the last release.
    ///
    /// Commits a parked judgment, or clears a finished spring-back. Calling
    /// this with nothing pending is a no-op, so a stale completion callback
    /// is harmless.
    pub fn animation_complete(&mut self) {
        match std::mem::take(&mut self.pending) {
            Pending::Commit(outcome) => {
                debug!(?outcome, "committing swipe");
                if let Err(err) = self.session.advance(outcome) {
                    debug!(%err, "commit dropped");
                }
            }
            Pending::SpringBack => trace!("spring-back finished"),
            Pending::None => {}
        }
    }

    //
    // ─── SCREEN ACTIONS ────────────────────────────────────────────────────────
    //

    /// Flip the top card between question and answer.
    ///
    /// Ignored while a drag is in flight or a judged swipe is waiting on its
    /// fling, and once the session is complete. A spring-back does not block
    /// the flip: the card snapping home is still the same card, and the flip
    /// button keeps working through it. Repeatable any number of times
    /// otherwise.
    pub fn toggle_reveal(&mut self) {
        if self.tracker.is_tracking() || matches!(self.pending, Pending::Commit(_)) {
            debug!("flip ignored while a swipe is in flight");
            return;
        }
        if let Err(err) = self.session.toggle_reveal() {
            debug!(%err, "flip ignored");
        }
    }

    /// The summary screen's "practice again" action.
    ///
    /// Resets counters and index against the same stack, in the same order,
    /// and clears any in-flight gesture or pending commit.
    pub fn restart(&mut self) {
        self.pending = Pending::None;
        self.tracker.cancel();
        self.session.reset();
        debug!("session restarted");
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    /// Live drag offset for continuous rendering feedback, `None` when idle.
    #[must_use]
    pub fn offset(&self) -> Option<DragOffset> {
        self.tracker.offset()
    }

    /// The top card and the one peeking out underneath.
    #[must_use]
    pub fn visible_cards(&self) -> VisibleCards<'_> {
        self.session.visible_cards()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// Aggregate result, available once the session is complete.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.session.summary()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use swipe_core::gesture::GestureError;
    use swipe_core::model::{Card, CardDraft, CardId, FaceDraft};
    use swipe_core::session::RevealMode;
    use swipe_core::time::{fixed_clock, fixed_now};

    fn build_card(id: u64) -> Card {
        CardDraft {
            question: FaceDraft::text_only(format!("Q{id}")),
            answer: FaceDraft::text_only(format!("A{id}")),
        }
        .validate(fixed_now())
        .unwrap()
        .assign_id(CardId::new(id))
    }

    fn controller_of(n: u64) -> ReviewController {
        let cards = (1..=n).map(build_card).collect();
        ReviewController::new(
            CardStack::new(cards),
            SwipeConfig::new(300.0).unwrap(),
            fixed_clock(),
        )
    }

    fn swipe(controller: &mut ReviewController, dx: f32) -> SwipeAnimation {
        controller.gesture_start().unwrap();
        controller.gesture_move(dx / 2.0, 0.0).unwrap();
        controller.gesture_release(dx, 0.0).unwrap()
    }

    #[test]
    fn judged_swipe_commits_only_after_fling_completes() {
        let mut controller = controller_of(2);
        controller.toggle_reveal();

        let anim = swipe(&mut controller, 180.0);
        assert!(anim.is_fling());

        // Not committed yet: the card is still flying off screen.
        assert_eq!(controller.snapshot().current_index, 0);

        controller.animation_complete();
        let snap = controller.snapshot();
        assert_eq!(snap.current_index, 1);
        assert_eq!(snap.num_correct, 1);
        assert_eq!(snap.reveal, RevealMode::Question);
    }

    #[test]
    fn left_swipe_counts_incorrect() {
        let mut controller = controller_of(1);
        controller.toggle_reveal();

        swipe(&mut controller, -180.0);
        controller.animation_complete();

        let snap = controller.snapshot();
        assert_eq!(snap.num_incorrect, 1);
        assert!(snap.is_complete);
    }

    #[test]
    fn release_on_question_face_springs_back() {
        let mut controller = controller_of(1);

        let anim = swipe(&mut controller, 250.0);
        assert!(!anim.is_fling());

        controller.animation_complete();
        assert_eq!(controller.snapshot().current_index, 0);
    }

    #[test]
    fn short_release_springs_back_without_advancing() {
        let mut controller = controller_of(1);
        controller.toggle_reveal();

        let anim = swipe(&mut controller, 40.0);
        assert_eq!(
            anim,
            SwipeAnimation::SpringBack {
                friction: crate::animation::SPRING_FRICTION
            }
        );

        controller.animation_complete();
        let snap = controller.snapshot();
        assert_eq!(snap.current_index, 0);
        assert_eq!(snap.reveal, RevealMode::Answer);
    }

    #[test]
    fn new_gesture_blocked_until_fling_commits() {
        let mut controller = controller_of(2);
        controller.toggle_reveal();
        swipe(&mut controller, 180.0);

        assert_eq!(
            controller.gesture_start().unwrap_err(),
            ControllerError::CommitPending
        );

        controller.animation_complete();
        assert!(controller.gesture_start().is_ok());
    }

    #[test]
    fn new_gesture_supersedes_spring_back() {
        let mut controller = controller_of(1);
        controller.toggle_reveal();
        swipe(&mut controller, 40.0);

        // Spring-back still running; grabbing the card redirects the offset.
        controller.gesture_start().unwrap();
        let offset = controller.gesture_move(10.0, 2.0).unwrap();
        assert_eq!(offset, DragOffset::new(10.0, 2.0));

        // The superseded spring-back no longer has anything to clear.
        controller.gesture_release(170.0, 0.0).unwrap();
        controller.animation_complete();
        assert_eq!(controller.snapshot().num_correct, 1);
    }

    #[test]
    fn second_start_during_drag_is_rejected() {
        let mut controller = controller_of(1);
        controller.gesture_start().unwrap();
        assert_eq!(
            controller.gesture_start().unwrap_err(),
            ControllerError::Gesture(GestureError::AlreadyTracking)
        );
    }

    #[test]
    fn move_without_start_is_rejected() {
        let mut controller = controller_of(1);
        assert_eq!(
            controller.gesture_move(5.0, 5.0).unwrap_err(),
            ControllerError::Gesture(GestureError::NotTracking)
        );
    }

    #[test]
    fn completed_session_rejects_gestures_and_flips() {
        let mut controller = controller_of(1);
        controller.toggle_reveal();
        swipe(&mut controller, 200.0);
        controller.animation_complete();
        assert!(controller.is_complete());

        assert_eq!(
            controller.gesture_start().unwrap_err(),
            ControllerError::Completed
        );

        controller.toggle_reveal();
        assert_eq!(controller.snapshot().reveal, RevealMode::Question);
    }

    #[test]
    fn flip_works_during_spring_back() {
        let mut controller = controller_of(1);
        swipe(&mut controller, 40.0);

        // The card is still snapping home; the flip button stays live.
        controller.toggle_reveal();
        assert_eq!(controller.snapshot().reveal, RevealMode::Answer);

        controller.animation_complete();
        assert_eq!(controller.snapshot().reveal, RevealMode::Answer);
        assert_eq!(controller.snapshot().current_index, 0);
    }

    #[test]
    fn flip_ignored_while_commit_pending() {
        let mut controller = controller_of(2);
        controller.toggle_reveal();
        swipe(&mut controller, 180.0);

        controller.toggle_reveal();
        assert_eq!(controller.snapshot().reveal, RevealMode::Answer);

        controller.animation_complete();
        assert_eq!(controller.snapshot().reveal, RevealMode::Question);
    }

    #[test]
    fn flip_ignored_mid_drag() {
        let mut controller = controller_of(1);
        controller.gesture_start().unwrap();
        controller.toggle_reveal();
        assert_eq!(controller.snapshot().reveal, RevealMode::Question);
    }

    #[test]
    fn stray_completion_is_a_no_op() {
        let mut controller = controller_of(1);
        controller.animation_complete();
        assert_eq!(controller.snapshot().current_index, 0);
    }

    #[test]
    fn restart_resets_session_and_inflight_state() {
        let mut controller = controller_of(2);
        controller.toggle_reveal();
        swipe(&mut controller, 180.0);
        controller.animation_complete();

        controller.gesture_start().unwrap();
        controller.restart();

        let snap = controller.snapshot();
        assert_eq!(snap.current_index, 0);
        assert_eq!(snap.num_correct, 0);
        assert_eq!(snap.reveal, RevealMode::Question);
        assert_eq!(controller.offset(), None);

        // A parked commit must not survive the restart.
        controller.animation_complete();
        assert_eq!(controller.snapshot().current_index, 0);
    }

    #[test]
    fn visible_cards_track_the_index() {
        let mut controller = controller_of(3);
        let visible = controller.visible_cards();
        assert_eq!(visible.top.unwrap().id(), CardId::new(1));
        assert_eq!(visible.next.unwrap().id(), CardId::new(2));

        controller.toggle_reveal();
        swipe(&mut controller, 180.0);
        controller.animation_complete();

        let visible = controller.visible_cards();
        assert_eq!(visible.top.unwrap().id(), CardId::new(2));
        assert_eq!(visible.next.unwrap().id(), CardId::new(3));
    }

    #[test]
    fn empty_stack_session_is_immediately_complete() {
        let controller = controller_of(0);
        assert!(controller.is_complete());
        let summary = controller.summary().unwrap();
        assert_eq!(summary.num_correct(), 0);
        assert_eq!(summary.num_incorrect(), 0);
    }

    #[test]
    fn offset_follows_the_drag() {
        let mut controller = controller_of(1);
        assert_eq!(controller.offset(), None);

        controller.gesture_start().unwrap();
        assert_eq!(controller.offset(), Some(DragOffset::ZERO));

        controller.gesture_move(33.0, -7.0).unwrap();
        assert_eq!(controller.offset(), Some(DragOffset::new(33.0, -7.0)));

        controller.gesture_release(33.0, -7.0).unwrap();
        assert_eq!(controller.offset(), None);
    }
}
