use crate::model::Card;

/// Immutable ordered list of cards for one review session.
///
/// The order is fixed for the lifetime of the session. "Practice again"
/// resets the session counters against the same stack; it never permutes
/// the cards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardStack {
    cards: Vec<Card>,
}

/// The top card of the stack plus the card peeking out underneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleCards<'a> {
    pub top: Option<&'a Card>,
    pub next: Option<&'a Card>,
}

impl CardStack {
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards visible when `index` is on top: the top card and the one under it.
    ///
    /// Past the end of the stack both slots are `None` (the summary is showing).
    #[must_use]
    pub fn visible_from(&self, index: usize) -> VisibleCards<'_> {
        VisibleCards {
            top: self.cards.get(index),
            next: self.cards.get(index + 1),
        }
    }
}
