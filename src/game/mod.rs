//! Round state machine.
//!
//! [`RoundState`] is an immutable snapshot of the table. Every [`Intent`] is
//! applied with [`RoundState::apply`], which returns the next snapshot and
//! leaves the current one untouched, so a rejected intent never changes
//! anything.

use alloc::vec::Vec;

use rand::Rng;
use tracing::{debug, info};

use crate::card::Card;
use crate::count::CountTracker;
use crate::error::{IntentError, Rejection};
use crate::hand::{DealerHand, PlayerHand};
use crate::options::TableOptions;
use crate::result::{GameMessage, HandResult};
use crate::shoe::{SUPPORTED_DECKS, Shoe, ShoeExhausted};

mod actions;
mod bet;
mod dealer;
pub mod state;
pub mod view;

pub use state::{Intent, Phase};
pub use view::{ActionFlags, HandView, TableView};

/// Complete state of a single blackjack table.
///
/// The shoe, hands and count tracker are only ever changed through
/// [`RoundState::apply`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    phase: Phase,
    /// Base bet of the current round.
    bet: usize,
    balance: usize,
    player_hands: Vec<PlayerHand>,
    active_hand: usize,
    dealer: DealerHand,
    shoe: Shoe,
    count: CountTracker,
    message: Option<GameMessage>,
    results: Vec<HandResult>,
}

impl RoundState {
    /// Creates an idle table with a freshly shuffled shoe.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(options: &TableOptions, rng: &mut R) -> Self {
        Self::with_shoe(options, Shoe::new(options.decks, rng))
    }

    /// Creates an idle table dealing from the given shoe.
    ///
    /// The count tracker is seeded from the cards left in `shoe`.
    #[must_use]
    pub fn with_shoe(options: &TableOptions, shoe: Shoe) -> Self {
        Self {
            phase: Phase::Idle,
            bet: 0,
            balance: options.starting_balance,
            player_hands: Vec::new(),
            active_hand: 0,
            dealer: DealerHand::new(),
            count: CountTracker::from_cards(shoe.cards()),
            shoe,
            message: None,
            results: Vec::new(),
        }
    }

    /// Applies an intent and returns the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::Rejected`] when the intent is not allowed in the
    /// current phase or by the table options, and
    /// [`IntentError::ShoeExhausted`] if a draw found the shoe empty.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        intent: Intent,
        options: &TableOptions,
        rng: &mut R,
    ) -> Result<Self, IntentError> {
        let mut next = self.clone();

        let outcome = match intent {
            Intent::PlaceBet(amount) => next.place_bet(amount, options, rng),
            Intent::Hit => next.hit(options, rng),
            Intent::Stand => next.stand(options, rng),
            Intent::DoubleDown => next.double_down(options, rng),
            Intent::Split => next.split(options, rng),
            Intent::ConfigureDecks(decks) => next.configure_decks(decks, options, rng),
            Intent::ResetBalance => {
                next.balance = options.starting_balance;
                Ok(())
            }
            Intent::NewRound => next.new_round(),
            Intent::Reset => {
                next.full_reset(self.shoe.decks(), options, rng);
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {
                debug!(?intent, phase = ?next.phase, balance = next.balance, "intent applied");
                Ok(next)
            }
            Err(err) => {
                debug!(?intent, phase = ?self.phase, %err, "intent rejected");
                Err(err)
            }
        }
    }

    fn configure_decks<R: Rng + ?Sized>(
        &mut self,
        decks: u8,
        options: &TableOptions,
        rng: &mut R,
    ) -> Result<(), IntentError> {
        if self.hand_in_progress() {
            return Err(Rejection::HandInProgress.into());
        }
        if !SUPPORTED_DECKS.contains(&decks) {
            return Err(Rejection::UnsupportedDecks(decks).into());
        }

        self.full_reset(decks, options, rng);
        Ok(())
    }

    fn new_round(&mut self) -> Result<(), IntentError> {
        if !matches!(
            self.phase,
            Phase::Idle | Phase::AwaitingBet | Phase::Settled
        ) {
            return Err(Rejection::InvalidState.into());
        }

        self.clear_round();
        self.phase = Phase::AwaitingBet;
        Ok(())
    }

    /// Rebuilds the shoe and tally and restores the starting balance.
    fn full_reset<R: Rng + ?Sized>(&mut self, decks: u8, options: &TableOptions, rng: &mut R) {
        self.shoe = Shoe::new(decks, rng);
        self.count.reset(decks);
        self.balance = options.starting_balance;
        self.clear_round();
        self.phase = Phase::Idle;
        info!(decks, balance = self.balance, "table reset");
    }

    /// Clears hands, bet, message and results of the previous round.
    fn clear_round(&mut self) {
        self.bet = 0;
        self.player_hands.clear();
        self.active_hand = 0;
        self.dealer = DealerHand::new();
        self.message = None;
        self.results.clear();
    }

    /// Rebuilds the shoe when it has fallen below the low-water mark.
    fn reshuffle_if_needed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.shoe.needs_reshuffle() {
            return;
        }

        let decks = self.shoe.decks();
        info!(remaining = self.shoe.remaining(), decks, "reshuffling shoe");
        self.shoe = Shoe::new(decks, rng);
        self.count.reset(decks);
        self.message = Some(GameMessage::DeckReshuffled);
    }

    /// Draws a card and records it in the tally.
    fn draw(&mut self) -> Result<Card, ShoeExhausted> {
        let card = self.shoe.draw()?;
        self.count.observe(&[card]);
        debug!(%card, remaining = self.shoe.remaining(), "drew card");
        Ok(card)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the base bet of the current round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the player's hands (two after a split).
    #[must_use]
    pub fn player_hands(&self) -> &[PlayerHand] {
        &self.player_hands
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn active_hand_index(&self) -> usize {
        self.active_hand
    }

    /// Returns the hand being played, if any.
    #[must_use]
    pub fn active_hand(&self) -> Option<&PlayerHand> {
        self.player_hands.get(self.active_hand)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the unseen-card tally.
    #[must_use]
    pub const fn count(&self) -> &CountTracker {
        &self.count
    }

    /// Returns the last message for the player.
    #[must_use]
    pub const fn message(&self) -> Option<GameMessage> {
        self.message
    }

    /// Returns the settled hands of the current round, by hand index.
    #[must_use]
    pub fn results(&self) -> &[HandResult] {
        &self.results
    }

    /// Returns whether the round has been fully settled.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Settled
    }

    /// Returns whether cards are out and the round is not yet settled.
    #[must_use]
    pub fn hand_in_progress(&self) -> bool {
        matches!(self.phase, Phase::PlayerTurn | Phase::DealerTurn)
    }
}
