//! Settlement result types and table messages.

use core::fmt;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (dealer has higher value).
    Lose,
    /// Player busted.
    Bust,
    /// Push (tie).
    Push,
}

/// Settlement of one player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The stake riding on the hand (doubled stakes included).
    pub stake: usize,
    /// Amount credited to the balance at settlement.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value, `None` if the dealer never played.
    pub dealer_value: Option<u8>,
}

impl HandResult {
    /// Net effect of the hand on the bankroll.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "stakes fit in isize")]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.stake as isize
    }
}

/// Message shown to the player after an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMessage {
    /// The shoe was rebuilt before drawing.
    DeckReshuffled,
    /// The active hand went over 21.
    Busted,
    /// The hand beat the dealer.
    Win,
    /// The dealer beat the hand.
    Lose,
    /// The hand tied the dealer.
    Push,
}

impl From<HandOutcome> for GameMessage {
    fn from(outcome: HandOutcome) -> Self {
        match outcome {
            HandOutcome::Win => Self::Win,
            HandOutcome::Lose => Self::Lose,
            HandOutcome::Bust => Self::Busted,
            HandOutcome::Push => Self::Push,
        }
    }
}

impl fmt::Display for GameMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::DeckReshuffled => "Deck reshuffled!",
            Self::Busted => "You busted! You lose!",
            Self::Win => "You win!",
            Self::Lose => "You lose!",
            Self::Push => "Push!",
        };
        f.write_str(text)
    }
}
