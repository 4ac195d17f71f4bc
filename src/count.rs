//! Running tally of unseen ten-valued and other cards.

use crate::card::{Card, DECK_SIZE, TENS_PER_DECK};

/// Approximate player advantage (in percent) by unseen others-per-ten ratio.
///
/// Ordered from the richest ratio for the house to the richest for the
/// player.
pub const ADVANTAGE_TABLE: [(f64, f64); 11] = [
    (3.0, -2.0),
    (2.25, 0.1),
    (2.0, 1.0),
    (1.75, 2.0),
    (1.63, 3.0),
    (1.5, 4.0),
    (1.35, 5.0),
    (1.25, 6.0),
    (1.16, 7.0),
    (1.08, 8.0),
    (1.0, 9.0),
];

/// Unseen-card tally for the current shoe.
///
/// `unseen_others + unseen_tens` always equals the cards left in the shoe
/// the tally was seeded from, as long as every drawn card is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountTracker {
    unseen_others: u32,
    unseen_tens: u32,
}

impl CountTracker {
    /// Creates a tally for a fresh shoe of `decks` decks.
    #[must_use]
    pub const fn new(decks: u8) -> Self {
        let decks = decks as u32;
        Self {
            unseen_others: decks * (DECK_SIZE - TENS_PER_DECK) as u32,
            unseen_tens: decks * TENS_PER_DECK as u32,
        }
    }

    /// Creates a tally matching an arbitrary set of undrawn cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let tens = cards.iter().filter(|c| c.is_ten_valued()).count() as u32;
        Self {
            unseen_others: cards.len() as u32 - tens,
            unseen_tens: tens,
        }
    }

    /// Records revealed cards.
    ///
    /// Observing a card the tally no longer holds means it has drifted from
    /// the shoe; debug builds panic, release builds clamp at zero.
    pub fn observe(&mut self, cards: &[Card]) {
        for card in cards {
            let unseen = if card.is_ten_valued() {
                &mut self.unseen_tens
            } else {
                &mut self.unseen_others
            };
            debug_assert!(*unseen > 0, "tally drifted from the shoe at {card}");
            *unseen = unseen.saturating_sub(1);
        }
    }

    /// Resets the tally for a freshly built shoe.
    pub const fn reset(&mut self, decks: u8) {
        *self = Self::new(decks);
    }

    /// Returns the number of unseen non-ten cards.
    #[must_use]
    pub const fn unseen_others(&self) -> u32 {
        self.unseen_others
    }

    /// Returns the number of unseen ten-valued cards.
    #[must_use]
    pub const fn unseen_tens(&self) -> u32 {
        self.unseen_tens
    }

    /// Returns the total number of unseen cards.
    #[must_use]
    pub const fn unseen(&self) -> u32 {
        self.unseen_others + self.unseen_tens
    }

    /// Returns the others-to-tens ratio, or `None` once every ten is seen.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        if self.unseen_tens == 0 {
            return None;
        }
        Some(f64::from(self.unseen_others) / f64::from(self.unseen_tens))
    }

    /// Looks up the approximate player advantage for the current ratio.
    ///
    /// Picks the row with the smallest ratio at or above the current one;
    /// ratios beyond either end of [`ADVANTAGE_TABLE`] clamp to that end.
    #[must_use]
    pub fn approximate_advantage_pct(&self) -> Option<f64> {
        let ratio = self.ratio()?;
        let mut advantage = ADVANTAGE_TABLE[0].1;
        for &(others_per_ten, pct) in &ADVANTAGE_TABLE {
            if ratio <= others_per_ten {
                advantage = pct;
            } else {
                break;
            }
        }
        Some(advantage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn fresh_tally_per_deck() {
        let tally = CountTracker::new(6);
        assert_eq!(tally.unseen_tens(), 96);
        assert_eq!(tally.unseen_others(), 216);
        assert_eq!(tally.unseen(), 312);
    }

    #[test]
    fn observe_splits_by_rank_class() {
        let mut tally = CountTracker::new(1);
        tally.observe(&[
            Card::new(Suit::Hearts, 10),
            Card::new(Suit::Hearts, 13),
            Card::new(Suit::Hearts, 1),
        ]);
        assert_eq!(tally.unseen_tens(), 14);
        assert_eq!(tally.unseen_others(), 35);

        tally.reset(1);
        assert_eq!(tally, CountTracker::new(1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "tally drifted from the shoe")]
    fn observing_an_unheld_card_is_caught() {
        let mut tally = CountTracker::from_cards(&[Card::new(Suit::Clubs, 4)]);
        tally.observe(&[Card::new(Suit::Hearts, 12)]);
    }

    #[test]
    fn ratio_sentinel_when_tens_exhausted() {
        let tally = CountTracker::from_cards(&[Card::new(Suit::Clubs, 4)]);
        assert_eq!(tally.ratio(), None);
        assert_eq!(tally.approximate_advantage_pct(), None);
    }

    #[test]
    fn advantage_lookup_clamps_and_rounds_up() {
        // 36 / 16 = 2.25
        assert_eq!(CountTracker::new(1).approximate_advantage_pct(), Some(0.1));

        let rich = CountTracker::from_cards(&[
            Card::new(Suit::Clubs, 10),
            Card::new(Suit::Clubs, 11),
            Card::new(Suit::Clubs, 2),
        ]);
        assert_eq!(rich.approximate_advantage_pct(), Some(9.0));

        let poor = CountTracker::from_cards(&[
            Card::new(Suit::Clubs, 10),
            Card::new(Suit::Clubs, 2),
            Card::new(Suit::Clubs, 3),
            Card::new(Suit::Clubs, 4),
            Card::new(Suit::Clubs, 5),
        ]);
        assert_eq!(poor.approximate_advantage_pct(), Some(-2.0));
    }
}
