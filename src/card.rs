//! Card types and deck utilities.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        };
        f.write_str(name)
    }
}

/// A playing card.
///
/// Cards carry no identity beyond suit and rank; a multi-deck shoe holds
/// several equal cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns whether the card is worth ten (10, J, Q or K).
    ///
    /// These are the "tens" of the unseen-card tally.
    #[must_use]
    pub const fn is_ten_valued(&self) -> bool {
        matches!(self.rank, 10..=13)
    }

    /// Returns the short rank label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_label(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ten-valued cards per deck.
pub const TENS_PER_DECK: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_valued_ranks() {
        let tens: usize = (1..=13)
            .filter(|&rank| Card::new(Suit::Clubs, rank).is_ten_valued())
            .count();
        assert_eq!(tens * Suit::ALL.len(), TENS_PER_DECK);
        assert!(!Card::new(Suit::Clubs, 1).is_ten_valued());
        assert!(!Card::new(Suit::Clubs, 9).is_ten_valued());
    }

    #[test]
    fn display_uses_rank_labels() {
        use alloc::string::ToString;

        assert_eq!(Card::new(Suit::Spades, 1).to_string(), "A of spades");
        assert_eq!(Card::new(Suit::Hearts, 12).to_string(), "Q of hearts");
        assert_eq!(Card::new(Suit::Diamonds, 10).to_string(), "10 of diamonds");
    }
}
