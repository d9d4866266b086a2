use rand::Rng;
use tracing::debug;

use crate::card::Card;
use crate::error::GameError;

use super::{Decision, Game, GameState};

impl<R: Rng> Game<R> {
    const fn ensure_active(&self) -> Result<(), GameError> {
        match self.state {
            GameState::Active => Ok(()),
            _ => Err(GameError::InvalidState),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust moves the game to [`GameState::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the active state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, GameError> {
        self.ensure_active()?;

        let card = self.draw().ok_or(GameError::DeckExhausted)?;
        self.player.add_card(card);
        debug!(card = %card, player_value = self.player.value(), "player hits");

        if self.player.is_bust() {
            self.set_state(GameState::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer plays out its hand and the round is resolved. Returns the
    /// resulting terminal state.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the active state or the deck
    /// runs out while the dealer must draw.
    pub fn stand(&mut self) -> Result<GameState, GameError> {
        self.ensure_active()?;

        debug!(player_value = self.player.value(), "player stands");
        self.finish_player_turn()?;

        Ok(self.state)
    }

    /// Applies a player decision and returns the state that follows.
    ///
    /// # Errors
    ///
    /// Same as [`Game::hit`] and [`Game::stand`].
    pub fn decide(&mut self, decision: Decision) -> Result<GameState, GameError> {
        match decision {
            Decision::Hit => self.hit().map(|_| self.state),
            Decision::Stand => self.stand(),
        }
    }
}
