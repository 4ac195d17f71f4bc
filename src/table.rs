//! A table that owns its state and random source.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};

use crate::error::{ConfigError, IntentError};
use crate::game::{Intent, RoundState, TableView};
use crate::options::TableOptions;
use crate::sync::Mutex;

/// A blackjack table processing one intent at a time.
///
/// Each intent runs as a single critical section: the current state is
/// reduced into the next one and swapped in only on success.
///
/// ```
/// use bjtable::{Phase, Table, TableOptions};
///
/// let table = Table::new(TableOptions::default(), 42).unwrap();
/// table.new_round().unwrap();
/// let view = table.place_bet(10).unwrap();
/// assert!(matches!(view.phase, Phase::PlayerTurn | Phase::Settled));
/// ```
pub struct Table {
    options: Mutex<TableOptions>,
    state: Mutex<RoundState>,
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a table with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`TableOptions::validate`].
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = RoundState::new(&options, &mut rng);

        Ok(Self {
            options: Mutex::new(options),
            state: Mutex::new(state),
            rng: Mutex::new(rng),
        })
    }

    /// Creates a table resuming from an existing state.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`TableOptions::validate`].
    pub fn from_state(
        options: TableOptions,
        state: RoundState,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        options.validate()?;

        Ok(Self {
            options: Mutex::new(options),
            state: Mutex::new(state),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        })
    }

    /// Applies an intent and returns the new snapshot.
    ///
    /// # Errors
    ///
    /// Returns the rejection if the intent is not allowed; the table is left
    /// unchanged.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn apply(&self, intent: Intent) -> Result<TableView, IntentError> {
        let mut options = self.options.lock();
        let mut state = self.state.lock();
        let mut rng = self.rng.lock();

        let next = state.apply(intent, &options, &mut *rng).inspect_err(|err| {
            if matches!(err, IntentError::ShoeExhausted(_)) {
                error!(?intent, "drew from an empty shoe");
            }
        })?;

        if let Intent::ConfigureDecks(decks) = intent {
            options.decks = decks;
        }
        *state = next;

        Ok(state.view(&options))
    }

    /// Places a bet and deals a new round.
    ///
    /// # Errors
    ///
    /// Rejected outside the betting phases or when the bet breaks the table
    /// limits or exceeds the balance.
    pub fn place_bet(&self, amount: usize) -> Result<TableView, IntentError> {
        self.apply(Intent::PlaceBet(amount))
    }

    /// Draws a card to the active hand.
    ///
    /// # Errors
    ///
    /// Rejected unless the active hand can act.
    pub fn hit(&self) -> Result<TableView, IntentError> {
        self.apply(Intent::Hit)
    }

    /// Stands on the active hand.
    ///
    /// # Errors
    ///
    /// Rejected unless the active hand can act.
    pub fn stand(&self) -> Result<TableView, IntentError> {
        self.apply(Intent::Stand)
    }

    /// Doubles down on the active hand.
    ///
    /// # Errors
    ///
    /// Rejected unless this is the first action on the hand, doubling is
    /// allowed and the balance covers the extra stake.
    pub fn double_down(&self) -> Result<TableView, IntentError> {
        self.apply(Intent::DoubleDown)
    }

    /// Splits the active pair.
    ///
    /// # Errors
    ///
    /// Rejected unless splitting is allowed, the hand is an unsplit pair and
    /// the balance covers the second stake.
    pub fn split(&self) -> Result<TableView, IntentError> {
        self.apply(Intent::Split)
    }

    /// Rebuilds the shoe with `decks` decks and resets the table.
    ///
    /// # Errors
    ///
    /// Rejected while a hand is in progress or for unsupported deck counts.
    pub fn configure_decks(&self, decks: u8) -> Result<TableView, IntentError> {
        self.apply(Intent::ConfigureDecks(decks))
    }

    /// Restores the starting balance.
    ///
    /// # Errors
    ///
    /// Never rejected; the signature matches the other intents.
    pub fn reset_balance(&self) -> Result<TableView, IntentError> {
        self.apply(Intent::ResetBalance)
    }

    /// Clears the finished round.
    ///
    /// # Errors
    ///
    /// Rejected while a hand is in progress.
    pub fn new_round(&self) -> Result<TableView, IntentError> {
        self.apply(Intent::NewRound)
    }

    /// Resets the table with the current deck count.
    ///
    /// # Errors
    ///
    /// Never rejected; the signature matches the other intents.
    pub fn reset(&self) -> Result<TableView, IntentError> {
        self.apply(Intent::Reset)
    }

    /// Replaces the table options between rounds.
    ///
    /// A different deck count resets the table as
    /// [`Intent::ConfigureDecks`] does.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid or a hand is in progress.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn set_options(&self, new_options: TableOptions) -> Result<(), ConfigError> {
        new_options.validate()?;

        let mut options = self.options.lock();
        let mut state = self.state.lock();
        if state.hand_in_progress() {
            return Err(ConfigError::HandInProgress);
        }

        if new_options.decks != options.decks {
            let mut rng = self.rng.lock();
            *state = RoundState::new(&new_options, &mut *rng);
            info!(decks = new_options.decks, "deck count changed, table reset");
        }
        *options = new_options;

        Ok(())
    }

    /// Returns the current snapshot.
    pub fn view(&self) -> TableView {
        let options = self.options.lock();
        self.state.lock().view(&options)
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> RoundState {
        self.state.lock().clone()
    }

    /// Returns a copy of the current options.
    pub fn options(&self) -> TableOptions {
        self.options.lock().clone()
    }
}
