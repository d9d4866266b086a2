use alloc::vec::Vec;

use rand::Rng;
use tracing::debug;

use crate::card::Card;
use crate::error::GameError;
use crate::hand::Hand;

use super::{Game, GameState};

/// Cards dealt before the player's first decision.
const INITIAL_CARDS: usize = 4;

impl<R: Rng> Game<R> {
    /// Deals two cards each to the player and the dealer, alternating and
    /// starting with the player.
    ///
    /// The game moves to [`GameState::Active`]. When the player holds a
    /// natural and the dealer does not, the player's turn is skipped, the
    /// dealer plays, and the returned state is the resolved outcome.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if the game is not in the start
    /// state, or [`GameError::DeckExhausted`] if fewer than four cards remain
    /// or a lone player natural leaves too few for the dealer. Nothing is
    /// dealt on error.
    pub fn deal(&mut self) -> Result<GameState, GameError> {
        if self.state != GameState::Start {
            return Err(GameError::InvalidState);
        }

        if self.cards_remaining() < INITIAL_CARDS {
            return Err(GameError::DeckExhausted);
        }

        let mut player = Hand::new();
        let mut dealer = Hand::new();
        let preview: Vec<Card> = self.deck.upcoming().take(INITIAL_CARDS).collect();
        for pair in preview.chunks_exact(2) {
            player.add_card(pair[0]);
            dealer.add_card(pair[1]);
        }

        // A lone natural goes straight to the dealer, so its draws must be
        // covered before anything is dealt.
        let natural = player.is_blackjack() && !dealer.is_blackjack();
        if natural && !self.dealer_can_finish(&dealer, INITIAL_CARDS) {
            return Err(GameError::DeckExhausted);
        }

        for _ in 0..2 {
            let card = self.draw().ok_or(GameError::DeckExhausted)?;
            self.player.add_card(card);
            let card = self.draw().ok_or(GameError::DeckExhausted)?;
            self.dealer.add_card(card);
        }

        debug!(
            player = %self.player,
            player_value = self.player.value(),
            dealer_up = ?self.dealer.up_card(),
            "initial deal"
        );

        if natural {
            debug!("player natural, skipping player turn");
            self.dealer_play()?;
        } else {
            self.set_state(GameState::Active);
        }

        Ok(self.state)
    }
}
