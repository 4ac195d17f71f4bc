//! A single-table blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`RoundState`] reducer that applies player
//! [`Intent`]s one at a time (betting, hit, stand, double down, split), plays
//! the dealer, settles stakes and keeps a running tally of unseen ten-valued
//! cards. [`Table`] wraps the reducer with its own random source and lock.
//!
//! # Example
//!
//! ```
//! use bjtable::{Intent, RoundState, TableOptions};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let options = TableOptions::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let state = RoundState::new(&options, &mut rng);
//! let waiting = state.apply(Intent::NewRound, &options, &mut rng).unwrap();
//! let next = waiting.apply(Intent::PlaceBet(10), &options, &mut rng).unwrap();
//! assert_eq!(next.bet(), 10);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod count;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod payout;
pub mod result;
pub mod shoe;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use count::CountTracker;
pub use error::{ConfigError, IntentError, Rejection};
pub use game::{ActionFlags, HandView, Intent, Phase, RoundState, TableView};
pub use hand::{DealerHand, Hand, HandStatus, PlayerHand, score_hand};
pub use options::{RoundingMode, TableOptions};
pub use result::{GameMessage, HandOutcome, HandResult};
pub use shoe::{RESHUFFLE_THRESHOLD, Shoe, ShoeExhausted};
pub use table::Table;
