//! Table wrapper integration tests.

extern crate alloc;

mod common;

use alloc::sync::Arc;
use std::thread;

use bjtable::{
    ConfigError, Intent, IntentError, Phase, Rejection, RoundState, Suit, Table, TableOptions,
};
use common::{card, init_logging, stacked};

fn scripted_table(options: TableOptions) -> Table {
    init_logging();
    let state = RoundState::with_shoe(
        &options,
        stacked(&[
            card(Suit::Hearts, 10),
            card(Suit::Clubs, 10),
            card(Suit::Diamonds, 9),
            card(Suit::Spades, 8),
        ]),
    );
    let table = Table::from_state(options, state, 1).unwrap();
    table.new_round().unwrap();
    table
}

#[test]
fn invalid_options_are_refused() {
    assert!(matches!(
        Table::new(TableOptions::default().with_decks(5), 1),
        Err(ConfigError::UnsupportedDecks(5))
    ));
    assert!(matches!(
        Table::new(TableOptions::default().with_blackjack_pays(1.0), 1),
        Err(ConfigError::UnsupportedPayout)
    ));
}

#[test]
fn round_through_table_api() {
    let table = scripted_table(TableOptions::default());

    let view = table.place_bet(10).unwrap();
    assert_eq!(view.phase, Phase::PlayerTurn);
    assert_eq!(view.balance, 990);
    assert_eq!(view.hands[0].value, 19);
    assert_eq!(view.dealer_cards, vec![Some(card(Suit::Clubs, 10)), None]);
    assert_eq!(view.dealer_value, 10);
    assert!(view.actions.can_hit && view.actions.can_double);
    assert!(!view.actions.can_split);

    let view = table.stand().unwrap();
    assert_eq!(view.phase, Phase::Settled);
    assert_eq!(view.balance, 1005);
    assert_eq!(view.dealer_cards.len(), 2);
    assert!(view.dealer_cards.iter().all(Option::is_some));
    assert_eq!(view.dealer_value, 18);
    assert_eq!(view.message.map(|m| m.to_string()).as_deref(), Some("You win!"));
    assert!(view.actions.can_bet && view.actions.can_configure);
}

#[test]
fn rejected_intent_keeps_table_state() {
    let table = scripted_table(TableOptions::default());
    let before = table.state();

    assert_eq!(
        table.stand().unwrap_err(),
        IntentError::Rejected(Rejection::InvalidState)
    );
    assert_eq!(
        table.place_bet(1).unwrap_err(),
        IntentError::Rejected(Rejection::BetBelowMinimum { min: 5 })
    );
    assert_eq!(table.state(), before);
}

#[test]
fn configure_decks_updates_options() {
    let table = scripted_table(TableOptions::default());
    table.place_bet(10).unwrap();

    assert_eq!(
        table.configure_decks(4).unwrap_err(),
        IntentError::Rejected(Rejection::HandInProgress)
    );
    assert!(matches!(
        table.set_options(TableOptions::default().with_decks(4)),
        Err(ConfigError::HandInProgress)
    ));

    table.stand().unwrap();
    let view = table.configure_decks(4).unwrap();
    assert_eq!(view.decks, 4);
    assert_eq!(view.cards_remaining, 208);
    assert_eq!(view.balance, 1000);
    assert_eq!(table.options().decks, 4);
}

#[test]
fn set_options_between_rounds() {
    let table = scripted_table(TableOptions::default());
    table.place_bet(10).unwrap();
    table.stand().unwrap();

    // Same deck count: the settled round stays on the table.
    table
        .set_options(TableOptions::default().with_blackjack_pays(1.2))
        .unwrap();
    assert_eq!(table.view().phase, Phase::Settled);
    assert_eq!(table.view().balance, 1005);

    table
        .set_options(TableOptions::default().with_decks(8))
        .unwrap();
    let view = table.view();
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.decks, 8);
    assert_eq!(view.balance, 1000);
}

#[test]
fn reset_and_new_round() {
    let table = scripted_table(TableOptions::default());
    table.place_bet(10).unwrap();
    assert_eq!(table.reset_balance().unwrap().balance, 1000);
    table.stand().unwrap();

    let view = table.new_round().unwrap();
    assert_eq!(view.phase, Phase::AwaitingBet);
    assert!(view.hands.is_empty());

    let view = table.reset().unwrap();
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.cards_remaining, 104);
    assert_eq!(view.unseen_others + view.unseen_tens, 104);
}

#[test]
fn intents_from_many_threads_stay_consistent() {
    init_logging();
    let table = Arc::new(Table::new(TableOptions::default().with_decks(1), 99).unwrap());
    assert_eq!(
        table.place_bet(5).unwrap_err(),
        IntentError::Rejected(Rejection::InvalidState)
    );
    table.new_round().unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for _ in 0..25 {
                    let _ = table.apply(Intent::PlaceBet(5));
                    let _ = table.apply(Intent::Stand);
                    let view = table.view();
                    assert_eq!(
                        (view.unseen_others + view.unseen_tens) as usize,
                        view.cards_remaining
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
