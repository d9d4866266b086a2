//! Hand representation and blackjack scoring.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Difference between an ace counted high (11) and low (1).
const ACE_DEMOTION: u8 = 10;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut high_aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            high_aces += 1;
        }
        value += u16::from(card.value(true));
    }

    // Demote one ace at a time until the hand fits or no high ace is left.
    while value > u16::from(BLACKJACK) && high_aces > 0 {
        value -= u16::from(ACE_DEMOTION);
        high_aces -= 1;
    }

    (u8::try_from(value).unwrap_or(u8::MAX), high_aces > 0)
}

/// Cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, which is the dealer's visible card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// Totals above 255 are reported as 255, which is still a bust.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
    /// hand.add_card(Card::new(Rank::Ace, Suit::Spades));
    /// hand.add_card(Card::new(Rank::Nine, Suit::Clubs));
    /// assert_eq!(hand.value(), 21);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
