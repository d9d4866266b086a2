//! A single-player blackjack simulator with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round against a dealer
//! who draws to 17: the initial deal, the player's hit/stand decisions, the
//! dealer's turn, and the comparison of totals.
//!
//! # Example
//!
//! ```
//! use blackjack21::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! if game.state() == GameState::Active {
//!     game.stand().unwrap();
//! }
//! let result = game.showdown().unwrap();
//! println!("{result}");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DeckError, GameError};
pub use game::{Console, Decision, Game, GameState};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
