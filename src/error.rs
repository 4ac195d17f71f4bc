//! Error types for table operations.

use thiserror::Error;

use crate::shoe::ShoeExhausted;

/// An intent the current state or table policy does not allow.
///
/// Rejections are expected during play and never change the table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Invalid round phase for this intent.
    #[error("invalid round phase for this intent")]
    InvalidState,
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum of {min}")]
    BetBelowMinimum {
        /// Table minimum.
        min: usize,
    },
    /// Bet is above the table maximum.
    #[error("bet is above the table maximum of {max}")]
    BetAboveMaximum {
        /// Table maximum.
        max: usize,
    },
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// A hand is in progress.
    #[error("a hand is in progress")]
    HandInProgress,
    /// Unsupported deck count.
    #[error("unsupported deck count {0}")]
    UnsupportedDecks(u8),
}

/// Errors returned when applying an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntentError {
    /// The intent was refused; the state is unchanged.
    #[error("intent rejected: {0}")]
    Rejected(#[from] Rejection),
    /// A card was drawn from an empty shoe.
    ///
    /// The engine reshuffles before every draw that could run the shoe dry,
    /// so this is a bug rather than a player-facing condition.
    #[error(transparent)]
    ShoeExhausted(#[from] ShoeExhausted),
}

impl IntentError {
    /// Returns the rejection if this error is a policy rejection.
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            Self::ShoeExhausted(_) => None,
        }
    }
}

/// Errors in table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Deck count is not one of 1, 2, 4, 6 or 8.
    #[error("unsupported deck count {0}")]
    UnsupportedDecks(u8),
    /// Payout ratio is not 1.2 or 1.5.
    #[error("unsupported payout ratio")]
    UnsupportedPayout,
    /// Bet limits are zero or inverted.
    #[error("invalid bet limits {min}..={max}")]
    InvalidBetLimits {
        /// Minimum bet.
        min: usize,
        /// Maximum bet.
        max: usize,
    },
    /// Options were changed while a hand was in progress.
    #[error("options cannot change while a hand is in progress")]
    HandInProgress,
}
