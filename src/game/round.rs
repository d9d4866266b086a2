use rand::Rng;

use crate::error::GameError;
use crate::hand::Hand;
use crate::result::RoundResult;

use super::{Decision, Game, GameState};

/// The player's side of the table: where decisions come from and where
/// results go.
pub trait Console {
    /// Shows the player's running total during their turn.
    fn show_player_value(&mut self, value: u8);

    /// Asks the player for a decision on the given hand.
    ///
    /// Blocks for as long as the player takes.
    fn decide(&mut self, hand: &Hand) -> Decision;

    /// Reports the final result.
    fn announce(&mut self, result: &RoundResult);
}

impl<R: Rng> Game<R> {
    /// Plays a whole round from the initial deal to [`GameState::Quit`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been dealt or the deck runs
    /// out of cards.
    pub fn play_round<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundResult, GameError> {
        self.deal()?;

        while self.state == GameState::Active {
            console.show_player_value(self.player.value());
            let decision = console.decide(&self.player);
            self.decide(decision)?;
        }

        let result = self.showdown()?;
        console.announce(&result);
        Ok(result)
    }
}
