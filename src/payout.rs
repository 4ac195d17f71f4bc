//! Bankroll and payout policy.

use crate::error::Rejection;
use crate::options::{RoundingMode, TableOptions};
use crate::result::HandOutcome;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Amount credited for a winning stake: `stake × blackjack_pays`, rounded.
///
/// The multiplier applies to every win, not only two-card 21s, and the
/// credit replaces the stake rather than adding to it.
#[must_use]
pub fn winnings(stake: usize, options: &TableOptions) -> usize {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for monetary values"
    )]
    let amount = stake as f64 * options.blackjack_pays;
    round_amount(amount, options.rounding)
}

/// Settles one hand.
///
/// `dealer_value` is `None` when the dealer never played, which only happens
/// when every hand busted. Returns the outcome and the amount credited back
/// to the balance; the stake itself was charged when it was placed.
#[must_use]
pub fn settle_hand(
    player_value: u8,
    dealer_value: Option<u8>,
    stake: usize,
    options: &TableOptions,
) -> (HandOutcome, usize) {
    if player_value > 21 {
        return (HandOutcome::Bust, 0);
    }

    let dealer_value = dealer_value.unwrap_or(0);
    if dealer_value > 21 || player_value > dealer_value {
        (HandOutcome::Win, winnings(stake, options))
    } else if dealer_value > player_value {
        (HandOutcome::Lose, 0)
    } else {
        (HandOutcome::Push, stake)
    }
}

/// Checks a bet against the table limits and the available balance.
///
/// # Errors
///
/// Returns the rejection for the first limit the bet breaks.
pub const fn check_bet(
    amount: usize,
    balance: usize,
    options: &TableOptions,
) -> Result<(), Rejection> {
    if amount < options.min_bet {
        return Err(Rejection::BetBelowMinimum {
            min: options.min_bet,
        });
    }
    if amount > options.max_bet {
        return Err(Rejection::BetAboveMaximum {
            max: options.max_bet,
        });
    }
    if amount > balance {
        return Err(Rejection::InsufficientFunds);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_scenarios_at_three_to_two() {
        let options = TableOptions::default();

        assert_eq!(settle_hand(20, Some(19), 10, &options), (HandOutcome::Win, 15));
        assert_eq!(settle_hand(20, Some(20), 10, &options), (HandOutcome::Push, 10));
        assert_eq!(settle_hand(22, Some(18), 10, &options), (HandOutcome::Bust, 0));
        assert_eq!(settle_hand(22, Some(25), 10, &options), (HandOutcome::Bust, 0));
        assert_eq!(settle_hand(21, Some(22), 10, &options), (HandOutcome::Win, 15));
        assert_eq!(settle_hand(17, Some(18), 10, &options), (HandOutcome::Lose, 0));
    }

    #[test]
    fn six_to_five_and_rounding() {
        let options = TableOptions::default().with_blackjack_pays(1.2);
        assert_eq!(winnings(10, &options), 12);

        let options = TableOptions::default();
        assert_eq!(winnings(5, &options), 7);
        let options = options.with_rounding(RoundingMode::Up);
        assert_eq!(winnings(5, &options), 8);
        let options = options.with_rounding(RoundingMode::Nearest);
        assert_eq!(winnings(5, &options), 8);
    }

    #[test]
    fn bet_limits() {
        let options = TableOptions::default().with_bet_limits(5, 100);

        assert_eq!(
            check_bet(4, 1000, &options),
            Err(Rejection::BetBelowMinimum { min: 5 })
        );
        assert_eq!(
            check_bet(101, 1000, &options),
            Err(Rejection::BetAboveMaximum { max: 100 })
        );
        assert_eq!(check_bet(50, 40, &options), Err(Rejection::InsufficientFunds));
        assert_eq!(check_bet(5, 5, &options), Ok(()));
        assert_eq!(check_bet(100, 1000, &options), Ok(()));
    }
}
