//! Error types for engine operations.

use thiserror::Error;

use crate::card::DECK_SIZE;

/// Errors from building or drawing from a deck.
///
/// Both variants are fatal to the round in progress: the caller must
/// abandon it and construct a fresh round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The generator produced the wrong number of cards.
    #[error("deck generation produced {0} cards, expected {DECK_SIZE}")]
    Integrity(usize),
    /// No cards remain.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur when a seat draws a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The round is already finished.
    #[error("round is already finished")]
    RoundFinished,
    /// The player is not seated in this round.
    #[error("player not found")]
    PlayerNotFound,
    /// The seat's draw budget is spent.
    #[error("no draws left for this seat")]
    NoDrawsLeft,
    /// No cards remain in the deck.
    #[error("no cards left in the deck")]
    DeckExhausted,
}

/// Errors that can occur when placing or doubling a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The round is already finished.
    #[error("round is already finished")]
    RoundFinished,
    /// The player is not seated in this round.
    #[error("player not found")]
    PlayerNotFound,
    /// The seat has used up its allowed bet placements.
    #[error("bet increase limit reached")]
    TooManyIncreases,
    /// The amount is outside the table's bet bounds.
    #[error("bet amount is outside the table bounds")]
    OutOfBounds,
    /// The amount exceeds the player's balance.
    #[error("bet amount exceeds the player's balance")]
    InsufficientBalance,
    /// The seat already doubled its bet.
    #[error("bet was already doubled")]
    AlreadyDoubled,
}

/// Errors that can occur when folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FoldError {
    /// The round is already finished.
    #[error("round is already finished")]
    RoundFinished,
    /// The player is not seated in this round.
    #[error("player not found")]
    PlayerNotFound,
    /// The seat already folded.
    #[error("seat already folded")]
    AlreadyFolded,
}

/// Errors that can occur when settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FinishError {
    /// The round was already settled.
    #[error("round is already finished")]
    AlreadyFinished,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewRoundError {
    /// The current round has not finished.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// Fewer than two roster players can cover the minimum bet.
    #[error("fewer than two players can cover the minimum bet")]
    InsufficientPlayers,
    /// The deck could not be built.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors from loading a table configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),
    /// The text is not valid configuration JSON.
    #[error("failed to parse configuration")]
    Parse(#[from] serde_json::Error),
}
