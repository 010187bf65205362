//! Shared error types for the services crate.

use thiserror::Error;

use swipe_core::classify::SwipeConfigError;
use swipe_core::gesture::GestureError;
use swipe_core::model::CardValidationError;

/// Errors surfaced by set storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("set not found")]
    NotFound,

    #[error(transparent)]
    InvalidCard(#[from] CardValidationError),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Rejected controller events.
///
/// These mirror the state machine's misuse guards at the event-handling
/// boundary; the hosting screen usually just drops them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ControllerError {
    #[error("session already completed")]
    Completed,

    #[error("previous swipe has not committed yet")]
    CommitPending,

    #[error(transparent)]
    Gesture(#[from] GestureError),
}

/// Errors emitted when starting a review session from storage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReviewStartError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] SwipeConfigError),
}
