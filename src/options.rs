//! Table configuration options.

use crate::error::ConfigError;
use crate::shoe::SUPPORTED_DECKS;

/// Payout ratios a table may be configured with (6:5 and 3:2).
pub const SUPPORTED_PAYOUTS: [f64; 2] = [1.2, 1.5];

/// Bankroll a player starts with and returns to on reset.
pub const DEFAULT_STARTING_BALANCE: usize = 1000;

/// Rounding mode for fractional winnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Options are read-only while a round is in progress. Use the builder
/// pattern to customize them:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(1.2)
///     .with_bet_limits(10, 200);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Smallest accepted bet.
    pub min_bet: usize,
    /// Largest accepted bet.
    pub max_bet: usize,
    /// Winnings multiplier applied to every winning stake.
    pub blackjack_pays: f64,
    /// Whether pairs may be split.
    pub allow_split: bool,
    /// Whether the first action on a hand may be a double down.
    pub allow_double_down: bool,
    /// Balance at table creation and after a reset.
    pub starting_balance: usize,
    /// Whether an initial two-card 21 stands without waiting for the player.
    pub auto_stand_on_21: bool,
    /// Rounding mode for fractional winnings.
    pub rounding: RoundingMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 2,
            min_bet: 5,
            max_bet: 500,
            blackjack_pays: 1.5,
            allow_split: true,
            allow_double_down: true,
            starting_balance: DEFAULT_STARTING_BALANCE,
            auto_stand_on_21: false,
            rounding: RoundingMode::Down,
        }
    }
}

impl TableOptions {
    /// Checks the options against the supported table configurations.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count or payout ratio is unsupported, or
    /// the bet limits are empty or inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_DECKS.contains(&self.decks) {
            return Err(ConfigError::UnsupportedDecks(self.decks));
        }
        if !SUPPORTED_PAYOUTS.contains(&self.blackjack_pays) {
            return Err(ConfigError::UnsupportedPayout);
        }
        if self.min_bet == 0 || self.min_bet > self.max_bet {
            return Err(ConfigError::InvalidBetLimits {
                min: self.min_bet,
                max: self.max_bet,
            });
        }
        Ok(())
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the minimum and maximum bet.
    #[must_use]
    pub const fn with_bet_limits(mut self, min: usize, max: usize) -> Self {
        self.min_bet = min;
        self.max_bet = max;
        self
    }

    /// Sets the winnings multiplier.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether pairs may be split.
    #[must_use]
    pub const fn with_allow_split(mut self, allowed: bool) -> Self {
        self.allow_split = allowed;
        self
    }

    /// Sets whether doubling down is allowed.
    #[must_use]
    pub const fn with_allow_double_down(mut self, allowed: bool) -> Self {
        self.allow_double_down = allowed;
        self
    }

    /// Sets the starting balance.
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets whether an initial 21 stands automatically.
    #[must_use]
    pub const fn with_auto_stand_on_21(mut self, enabled: bool) -> Self {
        self.auto_stand_on_21 = enabled;
        self
    }

    /// Sets the rounding mode for fractional winnings.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding(RoundingMode::Nearest);
    /// assert_eq!(options.rounding, RoundingMode::Nearest);
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_valid() {
        assert_eq!(TableOptions::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_unsupported_configurations() {
        assert_eq!(
            TableOptions::default().with_decks(3).validate(),
            Err(ConfigError::UnsupportedDecks(3))
        );
        assert_eq!(
            TableOptions::default().with_blackjack_pays(2.0).validate(),
            Err(ConfigError::UnsupportedPayout)
        );
        assert_eq!(
            TableOptions::default().with_bet_limits(50, 10).validate(),
            Err(ConfigError::InvalidBetLimits { min: 50, max: 10 })
        );
        assert!(TableOptions::default().with_bet_limits(0, 10).validate().is_err());
    }
}
