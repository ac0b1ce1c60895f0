//! Deck generation and draws.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// Produces the 52-card sequence for one round.
///
/// The suits are shuffled once; each suit block then emits the thirteen
/// ranks in a freshly shuffled order. Two independent small shuffles, not
/// one uniform permutation of the 52-card sequence.
fn generate_sequence(rng: &mut ChaCha8Rng) -> Vec<Card> {
    let mut suits = Suit::ALL;
    suits.shuffle(rng);

    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in suits {
        let mut ranks = Rank::ALL;
        ranks.shuffle(rng);
        for rank in ranks {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// A finite, consumable stack of cards: the sole card source for a round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds a freshly shuffled 52-card deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Integrity`] if the generator did not produce
    /// exactly [`DECK_SIZE`] cards; that indicates a generator bug, not a
    /// recoverable table condition.
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Result<Self, DeckError> {
        let cards = generate_sequence(rng);
        if cards.len() != DECK_SIZE {
            return Err(DeckError::Integrity(cards.len()));
        }
        Ok(Self {
            cards: cards.into(),
        })
    }

    /// Builds a deck from an explicit sequence, front card drawn first.
    ///
    /// Intended for scripted layouts in tests and replays; no size or
    /// uniqueness check is applied.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if no cards remain.
    pub fn take(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Exhausted)
    }

    /// Remaining card count. Monotonically non-increasing.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
