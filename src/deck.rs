//! The 52-card deck.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards that is dealt without replacement.
///
/// The deck owns its random source, so two decks never share a generator.
/// The top of the deck is the end of the internal sequence.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    cards: Vec<Card>,
    initial_size: usize,
    rng: R,
}

impl Deck {
    /// Creates a full deck in canonical order with a seeded generator.
    ///
    /// The same seed always produces the same shuffles.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack21::Deck;
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a full deck in canonical order with a generator seeded from
    /// the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }
}

impl<R: Rng> Deck<R> {
    /// Creates a full deck in canonical order using the given generator.
    ///
    /// Canonical order is every rank of Clubs, then Diamonds, Hearts and
    /// Spades, each suit running Two through Ace.
    #[must_use]
    pub fn from_rng(rng: R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self {
            initial_size: cards.len(),
            cards,
            rng,
        }
    }

    /// Creates a deck that deals exactly `draws`, first element first.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card appears twice.
    pub fn stacked(draws: &[Card], rng: R) -> Result<Self, DeckError> {
        let mut seen = [false; DECK_SIZE];
        for card in draws {
            let index =
                card.suit.ordinal() as usize * Rank::ALL.len() + card.rank.ordinal() as usize;
            if seen[index] {
                return Err(DeckError::DuplicateCard(*card));
            }
            seen[index] = true;
        }

        let mut cards = draws.to_vec();
        cards.reverse();

        Ok(Self {
            initial_size: cards.len(),
            cards,
            rng,
        })
    }

    /// Shuffles the remaining cards `iterations` times.
    ///
    /// A single pass is already a uniform permutation; extra passes add
    /// nothing statistically. Zero is treated as one pass.
    pub fn shuffle(&mut self, iterations: u32) {
        let passes = iterations.max(1);
        for _ in 0..passes {
            self.cards.shuffle(&mut self.rng);
        }
        debug!(passes, remaining = self.cards.len(), "shuffled deck");
    }

    /// Deals the top card, or `None` once the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        trace!(card = %card, bits = %format_args!("{:04x}", card.encode()), "dealt card");
        Some(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards dealt so far.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.initial_size - self.cards.len()
    }

    /// Returns the number of cards the deck started with.
    #[must_use]
    pub const fn initial_size(&self) -> usize {
        self.initial_size
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in the order they will be dealt, without
    /// dealing them.
    pub fn upcoming(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().rev().copied()
    }

    /// Returns the remaining cards, with the top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
