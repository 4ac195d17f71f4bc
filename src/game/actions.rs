use alloc::vec;

use rand::Rng;
use tracing::{debug, info};

use crate::error::{IntentError, Rejection};
use crate::hand::{HandStatus, PlayerHand};
use crate::options::TableOptions;
use crate::result::{GameMessage, HandOutcome, HandResult};

use super::{Phase, RoundState};

impl RoundState {
    /// Checks that the active hand can take an action.
    pub(super) fn check_player_turn(&self) -> Result<&PlayerHand, Rejection> {
        if self.phase != Phase::PlayerTurn {
            return Err(Rejection::InvalidState);
        }

        let hand = self.active_hand().ok_or(Rejection::InvalidState)?;
        if hand.cards().is_empty() || !hand.is_active() {
            return Err(Rejection::HandNotActive);
        }
        Ok(hand)
    }

    /// Checks that the active hand may double down.
    pub(super) fn check_double(&self, options: &TableOptions) -> Result<(), Rejection> {
        let hand = self.check_player_turn()?;

        if !options.allow_double_down || !hand.is_first_turn() {
            return Err(Rejection::CannotDouble);
        }
        if self.balance < hand.stake() {
            return Err(Rejection::InsufficientFunds);
        }
        Ok(())
    }

    /// Checks that the active hand may be split.
    pub(super) fn check_split(&self, options: &TableOptions) -> Result<(), Rejection> {
        let hand = self.check_player_turn()?;

        // Only the original hand splits; split hands never split again.
        if !options.allow_split || self.player_hands.len() > 1 || !hand.can_split() {
            return Err(Rejection::CannotSplit);
        }
        if self.balance < self.bet {
            return Err(Rejection::InsufficientFunds);
        }
        Ok(())
    }

    fn active_hand_mut(&mut self) -> Result<&mut PlayerHand, Rejection> {
        self.player_hands
            .get_mut(self.active_hand)
            .ok_or(Rejection::InvalidState)
    }

    /// Player action: Hit (draw a card).
    pub(super) fn hit<R: Rng + ?Sized>(
        &mut self,
        options: &TableOptions,
        rng: &mut R,
    ) -> Result<(), IntentError> {
        self.check_player_turn()?;
        self.reshuffle_if_needed(rng);

        let card = self.draw()?;
        let hand = self.active_hand_mut()?;
        hand.add_card(card);
        hand.end_first_turn();

        if hand.status() == HandStatus::Bust {
            self.record_bust();
            self.advance_after_hand(options)?;
        }
        Ok(())
    }

    /// Player action: Stand (keep the active hand).
    pub(super) fn stand<R: Rng + ?Sized>(
        &mut self,
        options: &TableOptions,
        rng: &mut R,
    ) -> Result<(), IntentError> {
        self.check_player_turn()?;
        self.reshuffle_if_needed(rng);

        let hand = self.active_hand_mut()?;
        hand.set_status(HandStatus::Stand);
        hand.end_first_turn();

        self.advance_after_hand(options)
    }

    /// Player action: Double down (double the stake, take one card, stand).
    pub(super) fn double_down<R: Rng + ?Sized>(
        &mut self,
        options: &TableOptions,
        rng: &mut R,
    ) -> Result<(), IntentError> {
        self.check_double(options)?;
        self.reshuffle_if_needed(rng);

        let extra = self.active_hand_mut()?.stake();
        self.balance -= extra;

        let card = self.draw()?;
        let hand = self.active_hand_mut()?;
        hand.double_stake();
        hand.add_card(card);

        let status = hand.status();
        if status == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }
        info!(extra, %card, balance = self.balance, "doubled down");

        if status == HandStatus::Bust {
            self.record_bust();
        }
        self.advance_after_hand(options)
    }

    /// Player action: Split (split a pair into two hands).
    pub(super) fn split<R: Rng + ?Sized>(
        &mut self,
        options: &TableOptions,
        rng: &mut R,
    ) -> Result<(), IntentError> {
        self.check_split(options)?;
        self.reshuffle_if_needed(rng);

        let bet = self.bet;
        self.balance -= bet;

        let mut pair = self.active_hand_mut()?.clone();
        let second = pair.take_split_card().ok_or(Rejection::CannotSplit)?;
        let first = pair.cards()[0];

        let mut first_hand = PlayerHand::new(bet);
        first_hand.add_card(first);
        first_hand.add_card(self.draw()?);

        let mut second_hand = PlayerHand::new(bet);
        second_hand.add_card(second);
        second_hand.add_card(self.draw()?);

        self.player_hands = vec![first_hand, second_hand];
        self.active_hand = 0;
        info!(bet, balance = self.balance, "split pair into two hands");
        Ok(())
    }

    /// Records an immediate loss for the busted active hand.
    fn record_bust(&mut self) {
        let Some(hand) = self.active_hand() else {
            return;
        };

        let result = HandResult {
            hand_index: self.active_hand,
            outcome: HandOutcome::Bust,
            stake: hand.stake(),
            payout: 0,
            player_value: hand.value(),
            dealer_value: None,
        };
        info!(hand = self.active_hand, stake = result.stake, "hand busted");

        self.results.push(result);
        self.message = Some(GameMessage::Busted);
    }

    /// Moves to the next unplayed hand, or settles the round after the last.
    fn advance_after_hand(&mut self, options: &TableOptions) -> Result<(), IntentError> {
        let next = (self.active_hand + 1..self.player_hands.len())
            .find(|&index| self.player_hands[index].is_active());

        if let Some(index) = next {
            debug!(from = self.active_hand, to = index, "advancing to next split hand");
            self.active_hand = index;
            self.message = None;
            return Ok(());
        }

        self.settle_round(options)
    }
}
