mod card;
pub mod content;
mod ids;
mod stack;

pub use content::{CardFace, FaceDraft, FaceValidationError, MediaUri, MediaValidationError};
pub use ids::{CardId, SetId};

pub use card::{Card, CardDraft, CardValidationError, ValidatedCard};
pub use stack::{CardStack, VisibleCards};
