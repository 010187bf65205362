#![forbid(unsafe_code)]

pub mod animation;
pub mod controller;
pub mod error;
pub mod store;

pub use swipe_core::Clock;

pub use animation::{FLING_OVERSHOOT, SPRING_FRICTION, SwipeAnimation};
pub use controller::ReviewController;
pub use error::{ControllerError, ReviewStartError, StoreError};
pub use store::{CardRecord, CardSet, InMemorySetStore, SetStore, start_review};
