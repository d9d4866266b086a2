//! Error types for deck and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur during game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// No cards left in the deck when one was required.
    #[error("no cards left in the deck")]
    DeckExhausted,
}
