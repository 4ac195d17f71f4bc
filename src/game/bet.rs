use rand::Rng;
use tracing::info;

use crate::error::{IntentError, Rejection};
use crate::hand::PlayerHand;
use crate::options::TableOptions;
use crate::payout::check_bet;

use super::{Phase, RoundState};

impl RoundState {
    /// Returns whether a new bet can be taken in the current phase.
    ///
    /// An idle table first moves to [`Phase::AwaitingBet`] with
    /// [`Intent::NewRound`](super::Intent::NewRound).
    pub(super) const fn accepts_bets(&self) -> bool {
        matches!(self.phase, Phase::AwaitingBet | Phase::Settled)
    }

    /// Stakes `amount` and deals player, dealer, player, dealer.
    pub(super) fn place_bet<R: Rng + ?Sized>(
        &mut self,
        amount: usize,
        options: &TableOptions,
        rng: &mut R,
    ) -> Result<(), IntentError> {
        if !self.accepts_bets() {
            return Err(Rejection::InvalidState.into());
        }
        check_bet(amount, self.balance, options)?;

        self.clear_round();
        self.balance -= amount;
        self.bet = amount;
        self.reshuffle_if_needed(rng);

        let mut hand = PlayerHand::new(amount);
        hand.add_card(self.draw()?);
        let up_card = self.draw()?;
        self.dealer.add_card(up_card);
        hand.add_card(self.draw()?);
        let hole_card = self.draw()?;
        self.dealer.add_card(hole_card);

        let player_value = hand.value();
        self.player_hands.push(hand);
        self.active_hand = 0;
        self.phase = Phase::PlayerTurn;

        info!(
            amount,
            balance = self.balance,
            player_value,
            %up_card,
            "bet placed and cards dealt"
        );

        if options.auto_stand_on_21 && player_value == 21 {
            info!("initial 21 stands automatically");
            self.stand(options, rng)?;
        }

        Ok(())
    }
}
