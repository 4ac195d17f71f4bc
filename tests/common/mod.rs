//! Shared helpers for the integration tests.

use std::sync::Once;

use bjtable::{Card, Shoe, Suit};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Cards placed under the scripted draws so no intent trips the reshuffle.
pub const FILLER: usize = 40;

/// Installs a test subscriber once per test binary.
///
/// The level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Two-deck shoe dealing `draws` in order, then twos.
pub fn stacked(draws: &[Card]) -> Shoe {
    let mut cards = draws.to_vec();
    cards.extend(core::iter::repeat_n(card(Suit::Clubs, 2), FILLER));
    Shoe::from_cards(2, &cards).expect("scripted draws fit in two decks")
}
