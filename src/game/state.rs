//! Game state types.

use crate::result::Outcome;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the initial deal.
    Start,
    /// Waiting for the player's decisions.
    Active,
    /// The player busted.
    PlayerBust,
    /// The dealer busted.
    DealerBust,
    /// The player won on totals.
    PlayerWin,
    /// The dealer won on totals.
    DealerWin,
    /// The totals tied.
    Push,
    /// The game is over.
    Quit,
}

impl GameState {
    /// Returns the outcome this state reports, if it is a terminal outcome.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::PlayerBust => Some(Outcome::PlayerBust),
            Self::DealerBust => Some(Outcome::DealerBust),
            Self::PlayerWin => Some(Outcome::PlayerWin),
            Self::DealerWin => Some(Outcome::DealerWin),
            Self::Push => Some(Outcome::Push),
            Self::Start | Self::Active | Self::Quit => None,
        }
    }

    /// Returns whether this state is a terminal outcome awaiting showdown.
    #[must_use]
    pub const fn is_outcome(self) -> bool {
        self.outcome().is_some()
    }
}

/// A player decision during the active phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// Take no further cards.
    Stand,
}

impl Decision {
    /// Parses a single input character.
    ///
    /// `'h'` (either case) is a hit. Everything else is a stand; ambiguous
    /// input is not re-prompted.
    #[must_use]
    pub const fn from_input(input: char) -> Self {
        match input {
            'h' | 'H' => Self::Hit,
            _ => Self::Stand,
        }
    }
}
