//! Round result types.

use core::fmt;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player went over 21.
    PlayerBust,
    /// The dealer went over 21.
    DealerBust,
    /// The player finished with the higher total.
    PlayerWin,
    /// The dealer finished with the higher total.
    DealerWin,
    /// Both totals are equal.
    Push,
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl RoundResult {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(&self) -> bool {
        matches!(self.outcome, Outcome::PlayerWin | Outcome::DealerBust)
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::PlayerBust => f.write_str("You busted! Dealer wins."),
            Outcome::DealerBust => f.write_str("Dealer busted! You win."),
            Outcome::PlayerWin => write!(f, "You won with: {}", self.player_value),
            Outcome::Push => f.write_str("It's a tie!"),
            Outcome::DealerWin => write!(f, "Dealer wins with: {}", self.dealer_value),
        }
    }
}
