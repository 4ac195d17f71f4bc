use tracing::{debug, info};

use crate::error::IntentError;
use crate::hand::HandStatus;
use crate::options::TableOptions;
use crate::payout::settle_hand;
use crate::result::{GameMessage, HandResult};

use super::{Phase, RoundState};

/// Total the dealer stands on, soft or hard.
const DEALER_STANDS_ON: u8 = 17;

impl RoundState {
    /// Reveals the hole card and draws until the dealer reaches 17.
    ///
    /// Aces only fold down to 1 when the total would bust, so a soft 17
    /// stands like any other 17.
    fn dealer_play(&mut self) -> Result<(), IntentError> {
        self.dealer.reveal_hole();

        while self.dealer.value() < DEALER_STANDS_ON {
            let card = self.draw()?;
            self.dealer.add_card(card);
            debug!(%card, value = self.dealer.value(), "dealer draws");
        }
        Ok(())
    }

    /// Plays the dealer out and settles every hand that has not busted.
    pub(super) fn settle_round(&mut self, options: &TableOptions) -> Result<(), IntentError> {
        self.phase = Phase::DealerTurn;

        // With every hand bust there is nothing left to play against.
        let any_standing = self
            .player_hands
            .iter()
            .any(|hand| hand.status() == HandStatus::Stand);
        let dealer_value = if any_standing {
            self.dealer_play()?;
            Some(self.dealer.value())
        } else {
            self.dealer.reveal_hole();
            None
        };

        for result in &mut self.results {
            result.dealer_value = dealer_value;
        }

        for (hand_index, hand) in self.player_hands.iter().enumerate() {
            if hand.status() != HandStatus::Stand {
                continue;
            }

            let stake = hand.stake();
            let player_value = hand.value();
            let (outcome, payout) = settle_hand(player_value, dealer_value, stake, options);
            self.balance += payout;

            info!(
                hand_index,
                ?outcome,
                stake,
                payout,
                player_value,
                dealer_value,
                "hand settled"
            );

            self.results.push(HandResult {
                hand_index,
                outcome,
                stake,
                payout,
                player_value,
                dealer_value,
            });
        }
        self.results.sort_by_key(|result| result.hand_index);

        self.message = self
            .results
            .iter()
            .find(|result| result.hand_index == self.active_hand)
            .map(|result| GameMessage::from(result.outcome));
        self.phase = Phase::Settled;

        info!(balance = self.balance, "round settled");
        Ok(())
    }
}
