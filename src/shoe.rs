//! The multi-deck shoe cards are dealt from.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Suit};

/// Cards-remaining low-water mark.
///
/// Every intent that draws rebuilds the shoe first when fewer cards than this
/// remain. The largest single intent is a dealer playing out from two cards,
/// which draws at most 15 more, so a checked shoe can never run dry.
pub const RESHUFFLE_THRESHOLD: usize = 20;

/// Deck counts a shoe may be built from.
pub const SUPPORTED_DECKS: [u8; 5] = [1, 2, 4, 6, 8];

/// Error returned when drawing from an empty shoe.
///
/// The engine reshuffles below [`RESHUFFLE_THRESHOLD`] before every draw, so
/// seeing this means that contract was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the shoe is exhausted")]
pub struct ShoeExhausted;

/// A shuffled pool of cards drawn from the top (the end of the vector).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
}

impl Shoe {
    /// Builds `decks` full decks and shuffles them.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        debug!(decks, cards = cards.len(), "built shoe");

        Self { cards, decks }
    }

    /// Builds a stacked shoe from cards in draw order (first element is drawn
    /// first).
    ///
    /// Returns `None` if more cards are given than `decks` full decks hold.
    #[must_use]
    pub fn from_cards(decks: u8, draws: &[Card]) -> Option<Self> {
        if draws.len() > decks as usize * DECK_SIZE {
            return None;
        }

        let mut cards = draws.to_vec();
        cards.reverse();
        Some(Self { cards, decks })
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] if the shoe is empty.
    pub fn draw(&mut self) -> Result<Card, ShoeExhausted> {
        self.cards.pop().ok_or(ShoeExhausted)
    }

    /// Returns whether the shoe has fallen below [`RESHUFFLE_THRESHOLD`].
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.len() < RESHUFFLE_THRESHOLD
    }

    /// Returns the number of decks the shoe was built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the undrawn cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn new_shoe_has_full_composition() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for decks in SUPPORTED_DECKS {
            let shoe = Shoe::new(decks, &mut rng);
            let n = decks as usize;
            assert_eq!(shoe.remaining(), n * DECK_SIZE);

            let tens = shoe.cards().iter().filter(|c| c.is_ten_valued()).count();
            assert_eq!(tens, n * 16);

            for rank in 1..=13 {
                let count = shoe.cards().iter().filter(|c| c.rank == rank).count();
                assert_eq!(count, n * 4, "rank {rank} with {decks} decks");
            }
        }
    }

    #[test]
    fn draws_in_stacked_order_until_exhausted() {
        let draws = [Card::new(Suit::Hearts, 5), Card::new(Suit::Spades, 12)];
        let mut shoe = Shoe::from_cards(1, &draws).unwrap();

        assert_eq!(shoe.draw(), Ok(draws[0]));
        assert_eq!(shoe.draw(), Ok(draws[1]));
        assert_eq!(shoe.draw(), Err(ShoeExhausted));
        assert_eq!(shoe.remaining(), 0);
    }

    #[test]
    fn stacked_shoe_respects_capacity() {
        let too_many = alloc::vec![Card::new(Suit::Clubs, 2); DECK_SIZE + 1];
        assert!(Shoe::from_cards(1, &too_many).is_none());
        assert!(Shoe::from_cards(2, &too_many).is_some());
    }

    #[test]
    fn low_water_mark() {
        let cards = alloc::vec![Card::new(Suit::Clubs, 2); RESHUFFLE_THRESHOLD];
        let mut shoe = Shoe::from_cards(1, &cards).unwrap();
        assert!(!shoe.needs_reshuffle());

        shoe.draw().unwrap();
        assert!(shoe.needs_reshuffle());
    }
}
