use core::cmp::Ordering;

use rand::Rng;
use tracing::{debug, info};

use crate::error::GameError;
use crate::hand::Hand;
use crate::result::RoundResult;

use super::{Game, GameState};

impl<R: Rng> Game<R> {
    /// Returns whether the deck holds enough cards for `dealer` to reach
    /// its stand total, counting only cards after the first `skip`.
    pub(super) fn dealer_can_finish(&self, dealer: &Hand, skip: usize) -> bool {
        let mut dealer = dealer.clone();
        let mut upcoming = self.deck.upcoming().skip(skip);
        while dealer.value() < self.options.dealer_stands_on {
            match upcoming.next() {
                Some(card) => dealer.add_card(card),
                None => return false,
            }
        }
        true
    }

    /// Ends the player's turn: the dealer plays, then totals are compared.
    ///
    /// Fails without drawing anything if the deck cannot cover the dealer's
    /// draws.
    pub(super) fn finish_player_turn(&mut self) -> Result<(), GameError> {
        if !self.dealer_can_finish(&self.dealer, 0) {
            return Err(GameError::DeckExhausted);
        }
        self.dealer_play()
    }

    /// Dealer draws while its total is below [`GameOptions::dealer_stands_on`].
    ///
    /// The dealer never makes a discretionary choice. A bust moves the game
    /// to [`GameState::DealerBust`], otherwise totals are compared.
    ///
    /// [`GameOptions::dealer_stands_on`]: crate::GameOptions::dealer_stands_on
    pub(super) fn dealer_play(&mut self) -> Result<(), GameError> {
        while self.dealer.value() < self.options.dealer_stands_on {
            let card = self.draw().ok_or(GameError::DeckExhausted)?;
            self.dealer.add_card(card);
            debug!(card = %card, dealer_value = self.dealer.value(), "dealer draws");
        }

        if self.dealer.is_bust() {
            self.set_state(GameState::DealerBust);
        } else {
            self.resolve();
        }

        Ok(())
    }

    /// Compares the totals of two standing hands.
    fn resolve(&mut self) {
        let state = match self.player.value().cmp(&self.dealer.value()) {
            Ordering::Greater => GameState::PlayerWin,
            Ordering::Equal => GameState::Push,
            Ordering::Less => GameState::DealerWin,
        };
        self.set_state(state);
    }

    /// Reports the outcome and ends the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the game is in one of the
    /// terminal outcome states.
    pub fn showdown(&mut self) -> Result<RoundResult, GameError> {
        if !self.state.is_outcome() {
            return Err(GameError::InvalidState);
        }
        let result = self.result.ok_or(GameError::InvalidState)?;

        info!(
            outcome = ?result.outcome,
            player_value = result.player_value,
            dealer_value = result.dealer_value,
            "{result}"
        );
        self.set_state(GameState::Quit);

        Ok(result)
    }
}
