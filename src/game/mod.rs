//! Game engine and state management.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;

mod actions;
mod deal;
mod dealer;
mod round;
pub mod state;

pub use round::Console;
pub use state::{Decision, GameState};

/// A single-player blackjack game against a fixed-strategy dealer.
///
/// The game owns the deck and both hands. It moves from
/// [`GameState::Start`] through [`GameState::Active`] to one terminal
/// outcome, and [`Game::showdown`] then ends it in [`GameState::Quit`].
#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    /// Cards not yet dealt.
    deck: Deck<R>,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Result recorded once a terminal outcome is reached.
    result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Start);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut deck = Deck::new(seed);
        deck.shuffle(options.shuffle_iterations);
        Self::with_deck(options, deck)
    }

    /// Creates a new game with a deck shuffled from operating system
    /// entropy.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_os_rng(options: GameOptions) -> Self {
        let mut deck = Deck::from_os_rng();
        deck.shuffle(options.shuffle_iterations);
        Self::with_deck(options, deck)
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game that deals from `deck` as given, without
    /// shuffling it.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck<R>) -> Self {
        Self {
            deck,
            options,
            state: GameState::Start,
            player: Hand::new(),
            dealer: Hand::new(),
            result: None,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Option<Card> {
        self.deck.deal()
    }

    fn set_state(&mut self, state: GameState) {
        trace!(from = ?self.state, to = ?state, "state transition");
        self.state = state;
        if let Some(outcome) = state.outcome() {
            let result = RoundResult {
                outcome,
                player_value: self.player.value(),
                dealer_value: self.dealer.value(),
            };
            debug!(
                ?outcome,
                player_value = result.player_value,
                dealer_value = result.dealer_value,
                "round decided"
            );
            self.result = Some(result);
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck<R> {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.cards_remaining()
    }

    /// Returns the round result once a terminal outcome has been reached.
    ///
    /// The result stays available after [`Game::showdown`].
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }
}
