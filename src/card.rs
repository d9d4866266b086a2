//! Card types and the 16-bit card encoding.

use core::fmt;

/// Card rank, in ordinal order from Two (0) to Ace (12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ordinal order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the ordinal of the rank (Two = 0, Ace = 12).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given ordinal, if it exists.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if (ordinal as usize) < Self::ALL.len() {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// Returns whether this rank is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

/// Card suit, in ordinal order from Clubs (0) to Spades (3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in ordinal order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the ordinal of the suit (Clubs = 0, Spades = 3).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the suit with the given ordinal, if it exists.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if (ordinal as usize) < Self::ALL.len() {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }
}

/// A playing card.
///
/// Cards order by rank first, then suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the blackjack point value of the card.
    ///
    /// Number cards count their face value and face cards count 10. An ace
    /// counts 11 when `ace_high` is set, otherwise 1.
    #[must_use]
    pub const fn value(self, ace_high: bool) -> u8 {
        match self.rank {
            Rank::Ace => {
                if ace_high {
                    11
                } else {
                    1
                }
            }
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            rank => rank.ordinal() + 2,
        }
    }

    /// Encodes the card as 16 bits: rank ordinal in the high byte, suit
    /// ordinal in the low byte.
    #[must_use]
    pub const fn encode(self) -> u16 {
        (self.rank.ordinal() as u16) << 8 | self.suit.ordinal() as u16
    }

    /// Recovers the rank from an encoded card.
    #[must_use]
    pub const fn decode_rank(bits: u16) -> Option<Rank> {
        Rank::from_ordinal((bits >> 8) as u8)
    }

    /// Recovers the suit from an encoded card.
    #[must_use]
    pub const fn decode_suit(bits: u16) -> Option<Suit> {
        Suit::from_ordinal((bits & 0xFF) as u8)
    }

    /// Recovers a whole card from its encoding.
    ///
    /// Returns `None` if either byte is outside its enumeration.
    #[must_use]
    pub const fn decode(bits: u16) -> Option<Self> {
        match (Self::decode_rank(bits), Self::decode_suit(bits)) {
            (Some(rank), Some(suit)) => Some(Self::new(rank, suit)),
            _ => None,
        }
    }

    /// Returns a description such as `"Ace of Spades"`.
    #[must_use]
    pub fn describe(self) -> alloc::string::String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();
