#![forbid(unsafe_code)]

pub mod classify;
pub mod gesture;
pub mod model;
pub mod session;
pub mod time;

pub use classify::{Classification, SwipeClassifier, SwipeConfig, SwipeConfigError};
pub use gesture::{DragOffset, GestureError, GestureTracker};
pub use model::{Card, CardDraft, CardFace, CardId, CardStack, FaceDraft, SetId, VisibleCards};
pub use session::{
    Outcome, RevealMode, ReviewSession, SessionSnapshot, SessionSummary, TransitionError,
};
pub use time::Clock;
