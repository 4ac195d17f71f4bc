//! Read-only snapshot of a table for rendering.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{HandStatus, PlayerHand};
use crate::options::TableOptions;
use crate::result::{GameMessage, HandResult};

use super::{Phase, RoundState};

/// Which intents the current state accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionFlags {
    /// A bet of at least the table minimum can be placed.
    pub can_bet: bool,
    /// The active hand can hit.
    pub can_hit: bool,
    /// The active hand can stand.
    pub can_stand: bool,
    /// The active hand can double down.
    pub can_double: bool,
    /// The active hand can split.
    pub can_split: bool,
    /// The deck count can be changed.
    pub can_configure: bool,
}

/// A player hand as shown at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandView {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Hand value.
    pub value: u8,
    /// Stake riding on the hand.
    pub stake: usize,
    /// Hand status.
    pub status: HandStatus,
    /// Whether the hand was doubled.
    pub doubled: bool,
}

impl From<&PlayerHand> for HandView {
    fn from(hand: &PlayerHand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            value: hand.value(),
            stake: hand.stake(),
            status: hand.status(),
            doubled: hand.is_doubled(),
        }
    }
}

/// Everything a front end needs to draw the table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableView {
    /// Round phase.
    pub phase: Phase,
    /// Player balance.
    pub balance: usize,
    /// Base bet of the round.
    pub bet: usize,
    /// Player hands.
    pub hands: Vec<HandView>,
    /// Index of the hand being played.
    pub active_hand: usize,
    /// Dealer cards; the hole card is `None` while concealed.
    pub dealer_cards: Vec<Option<Card>>,
    /// Value of the visible dealer cards.
    pub dealer_value: u8,
    /// Last message for the player.
    pub message: Option<GameMessage>,
    /// Settled hands of the round.
    pub results: Vec<HandResult>,
    /// Intents currently accepted.
    pub actions: ActionFlags,
    /// Unseen non-ten cards.
    pub unseen_others: u32,
    /// Unseen ten-valued cards.
    pub unseen_tens: u32,
    /// Others-to-tens ratio, `None` once no tens remain.
    pub ratio: Option<f64>,
    /// Approximate player advantage in percent.
    pub advantage_pct: Option<f64>,
    /// Cards left in the shoe.
    pub cards_remaining: usize,
    /// Decks in the shoe.
    pub decks: u8,
}

impl RoundState {
    /// Returns the intents the current state accepts.
    #[must_use]
    pub fn action_flags(&self, options: &TableOptions) -> ActionFlags {
        let can_act = self.check_player_turn().is_ok();

        ActionFlags {
            can_bet: self.accepts_bets()
                && options.min_bet <= options.max_bet
                && self.balance >= options.min_bet,
            can_hit: can_act,
            can_stand: can_act,
            can_double: self.check_double(options).is_ok(),
            can_split: self.check_split(options).is_ok(),
            can_configure: !self.hand_in_progress(),
        }
    }

    /// Builds a snapshot for rendering.
    #[must_use]
    pub fn view(&self, options: &TableOptions) -> TableView {
        let concealed = !self.dealer.is_hole_revealed();
        let dealer_cards = self
            .dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (!(concealed && index == 1)).then_some(*card))
            .collect();

        TableView {
            phase: self.phase,
            balance: self.balance,
            bet: self.bet,
            hands: self.player_hands.iter().map(HandView::from).collect(),
            active_hand: self.active_hand,
            dealer_cards,
            dealer_value: self.dealer.visible_value(),
            message: self.message,
            results: self.results.clone(),
            actions: self.action_flags(options),
            unseen_others: self.count.unseen_others(),
            unseen_tens: self.count.unseen_tens(),
            ratio: self.count.ratio(),
            advantage_pct: self.count.approximate_advantage_pct(),
            cards_remaining: self.shoe.remaining(),
            decks: self.shoe.decks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::game::Intent;

    #[test]
    fn idle_table_waits_for_new_round() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let options = TableOptions::default();
        let state = RoundState::new(&options, &mut rng);
        let view = state.view(&options);

        assert_eq!(
            view.actions,
            ActionFlags {
                can_configure: true,
                ..ActionFlags::default()
            }
        );

        let waiting = state.apply(Intent::NewRound, &options, &mut rng).unwrap();
        assert!(waiting.view(&options).actions.can_bet);
        assert!(view.dealer_cards.is_empty());
        assert_eq!(view.cards_remaining, 104);
        assert_eq!(view.unseen_others + view.unseen_tens, 104);
    }

    #[test]
    fn hole_card_hidden_during_player_turn() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let options = TableOptions::default();
        let state = RoundState::new(&options, &mut rng)
            .apply(Intent::NewRound, &options, &mut rng)
            .and_then(|state| state.apply(Intent::PlaceBet(10), &options, &mut rng))
            .unwrap();

        if state.phase() == Phase::PlayerTurn {
            let view = state.view(&options);
            assert_eq!(view.dealer_cards.len(), 2);
            assert!(view.dealer_cards[0].is_some());
            assert!(view.dealer_cards[1].is_none());
            assert!(view.actions.can_hit);
            assert!(!view.actions.can_bet);
            assert!(!view.actions.can_configure);
        }
    }
}
