//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

const fn card_value(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value(card.rank));
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Scores a set of cards.
///
/// Aces count 11 until the total exceeds 21, then fall back to 1 one at a
/// time. An empty slice scores 0.
///
/// ```
/// use bjtable::{Card, Suit, score_hand};
///
/// let aces = [Card::new(Suit::Hearts, 1), Card::new(Suit::Spades, 1)];
/// assert_eq!(score_hand(&aces), 12);
/// ```
#[must_use]
pub fn score_hand(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Status of a player hand within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood (or doubled without busting).
    Stand,
    /// Hand has busted (over 21).
    Bust,
}

/// An ordered set of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score_hand(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is a pair that can be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
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

    /// Removes and returns the second card of a pair.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// A player's hand together with the stake riding on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerHand {
    hand: Hand,
    status: HandStatus,
    stake: usize,
    first_turn: bool,
    doubled: bool,
}

impl PlayerHand {
    /// Creates a new empty hand with the given stake.
    #[must_use]
    pub const fn new(stake: usize) -> Self {
        Self {
            hand: Hand::new(),
            status: HandStatus::Active,
            stake,
            first_turn: true,
            doubled: false,
        }
    }

    /// Adds a card, marking the hand bust when it goes over 21.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
        if self.hand.is_bust() {
            self.status = HandStatus::Bust;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns whether the hand can still act.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == HandStatus::Active
    }

    /// Returns the stake riding on this hand.
    #[must_use]
    pub const fn stake(&self) -> usize {
        self.stake
    }

    /// Returns whether no action has been taken on this hand yet.
    #[must_use]
    pub const fn is_first_turn(&self) -> bool {
        self.first_turn
    }

    /// Records that the player acted on this hand.
    pub const fn end_first_turn(&mut self) {
        self.first_turn = false;
    }

    /// Returns whether the hand was doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Doubles the stake.
    pub const fn double_stake(&mut self) {
        self.stake *= 2;
        self.doubled = true;
        self.first_turn = false;
    }

    /// Returns whether the hand is a pair that can be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.hand.can_split()
    }

    /// Removes and returns the second card of a pair.
    pub fn take_split_card(&mut self) -> Option<Card> {
        self.hand.take_split_card()
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealerHand {
    hand: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, |c| card_value(c.rank))
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Clubs, rank)).collect()
    }

    #[test]
    fn scores_soft_and_hard_aces() {
        assert_eq!(score_hand(&[]), 0);
        assert_eq!(score_hand(&cards(&[1])), 11);
        assert_eq!(score_hand(&cards(&[1, 1])), 12);
        assert_eq!(score_hand(&cards(&[1, 1, 1])), 13);
        assert_eq!(score_hand(&cards(&[1, 13])), 21);
        assert_eq!(score_hand(&cards(&[10, 9, 1])), 20);
        assert_eq!(score_hand(&cards(&[1, 9, 8])), 18);
        assert_eq!(score_hand(&cards(&[11, 12, 13])), 30);
    }

    #[test]
    fn softness_follows_ace_resolution() {
        assert!(Hand::from_cards(&cards(&[1, 6])).is_soft());
        assert!(!Hand::from_cards(&cards(&[1, 6, 10])).is_soft());
        assert!(!Hand::from_cards(&cards(&[10, 7])).is_soft());
    }

    #[test]
    fn pairs_split_on_rank_only() {
        let mut pair = Hand::new();
        pair.add_card(Card::new(Suit::Hearts, 8));
        pair.add_card(Card::new(Suit::Spades, 8));
        assert!(pair.can_split());

        // Ten-valued but different ranks.
        assert!(!Hand::from_cards(&cards(&[10, 13])).can_split());
        assert!(!Hand::from_cards(&cards(&[8, 8, 8])).can_split());
    }

    #[test]
    fn player_hand_busts_and_doubles() {
        let mut hand = PlayerHand::new(10);
        hand.add_card(Card::new(Suit::Hearts, 10));
        hand.add_card(Card::new(Suit::Spades, 6));
        assert!(hand.is_active());
        assert!(hand.is_first_turn());

        hand.double_stake();
        assert_eq!(hand.stake(), 20);
        assert!(hand.is_doubled());
        assert!(!hand.is_first_turn());

        hand.add_card(Card::new(Suit::Clubs, 9));
        assert_eq!(hand.status(), HandStatus::Bust);
    }

    #[test]
    fn dealer_hand_conceals_hole_card() {
        let mut dealer = DealerHand::new();
        dealer.add_card(Card::new(Suit::Hearts, 1));
        dealer.add_card(Card::new(Suit::Clubs, 6));

        assert_eq!(dealer.visible_value(), 11);
        dealer.reveal_hole();
        assert_eq!(dealer.visible_value(), 17);
        assert!(dealer.is_soft());
    }
}
