//! Round phases and player intents.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Fresh table or full reset; nothing dealt yet.
    Idle,
    /// Waiting for the next bet.
    AwaitingBet,
    /// Waiting for player actions on the active hand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Every hand of the round has been settled.
    Settled,
}

/// A command issued by the player or the table host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Stake the given amount and deal a new round.
    PlaceBet(usize),
    /// Draw a card to the active hand.
    Hit,
    /// Keep the active hand.
    Stand,
    /// Double the stake, take exactly one card, then stand.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
    /// Rebuild the shoe with the given deck count and reset the table.
    ConfigureDecks(u8),
    /// Restore the starting balance.
    ResetBalance,
    /// Clear the finished round and wait for a bet.
    NewRound,
    /// Reset the table with the current deck count.
    Reset,
}
