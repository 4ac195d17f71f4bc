//! CLI blackjack table.
//!
//! Run with `cargo run --example cli_table`; set `RUST_LOG=bjtable=debug` to
//! watch every draw.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Card, HandView, Intent, Phase, Suit, Table, TableOptions, TableView};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("Blackjack CLI (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let Ok(table) = Table::new(options.clone(), seed) else {
        println!("Invalid table options.");
        return;
    };

    loop {
        let mut view = table.view();
        if view.phase == Phase::Idle {
            match table.new_round() {
                Ok(next) => view = next,
                Err(err) => {
                    println!("Cannot open a round: {err}");
                    break;
                }
            }
        }

        if view.balance < options.min_bet {
            println!("You are out of money.");
            match prompt_line("Reset balance? (y/n): ").as_str() {
                "y" | "yes" => match table.reset_balance() {
                    Ok(view) => {
                        println!("Balance restored to {}.", view.balance);
                        continue;
                    }
                    Err(err) => {
                        println!("Cannot reset balance: {err}");
                        break;
                    }
                },
                _ => break,
            }
        }

        let prompt = format!(
            "Bet ({}-{}), 'd' to change decks, 'q' to quit: ",
            options.min_bet,
            options.max_bet.min(view.balance)
        );
        let input = prompt_line(&prompt);
        let intent = match input.as_str() {
            "q" | "quit" => break,
            "d" | "decks" => match prompt_line("Decks (1/2/4/6/8): ").parse::<u8>() {
                Ok(decks) => Intent::ConfigureDecks(decks),
                Err(_) => continue,
            },
            amount => match amount.parse::<usize>() {
                Ok(amount) => Intent::PlaceBet(amount),
                Err(_) => {
                    println!("Please enter a number.");
                    continue;
                }
            },
        };

        let mut view = match table.apply(intent) {
            Ok(view) => view,
            Err(err) => {
                println!("Rejected: {err}");
                continue;
            }
        };

        while view.phase == Phase::PlayerTurn {
            print_table(&view);
            println!("{}", format_actions(&view));

            let intent = match prompt_line("Action: ").as_str() {
                "h" | "hit" => Intent::Hit,
                "s" | "stand" => Intent::Stand,
                "d" | "double" => Intent::DoubleDown,
                "p" | "split" => Intent::Split,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match table.apply(intent) {
                Ok(next) => view = next,
                Err(err) => println!("Rejected: {err}"),
            }
        }

        print_table(&view);
        for result in &view.results {
            println!(
                "Hand {}: {:?} | stake {} | payout {} (net {})",
                result.hand_index,
                result.outcome,
                result.stake,
                result.payout,
                result.net()
            );
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(view: &TableView) {
    println!(
        "\nShoe: {} cards remaining ({} decks)",
        view.cards_remaining, view.decks
    );
    let ratio = view
        .ratio
        .map_or_else(|| "-".to_string(), |ratio| format!("{ratio:.2}"));
    let advantage = view
        .advantage_pct
        .map_or_else(|| "-".to_string(), |pct| format!("{pct}%"));
    println!(
        "Tally: {} others / {} tens | ratio {ratio} | approx. advantage {advantage}",
        view.unseen_others, view.unseen_tens
    );

    let dealer = view
        .dealer_cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    println!("\nDealer: {dealer} (value {})", view.dealer_value);

    for (index, hand) in view.hands.iter().enumerate() {
        let marker = if index == view.active_hand && view.phase == Phase::PlayerTurn {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} Hand {index}: {} | value {} | stake {} | {:?}",
            format_hand(hand),
            hand.value,
            hand.stake,
            hand.status
        );
    }

    println!("Balance: {}", view.balance);
    if let Some(message) = view.message {
        println!("{message}");
    }
    println!();
}

fn format_actions(view: &TableView) -> String {
    let actions = view.actions;
    let parts = [
        format_action("hit", "h", actions.can_hit),
        format_action("stand", "s", actions.can_stand),
        format_action("double", "d", actions.can_double),
        format_action("split", "p", actions.can_split),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &HandView) -> String {
    if hand.cards.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = card.rank_label();
    let colored_rank = if card.rank == 1 || card.rank > 10 {
        colorize(rank, color_code)
    } else {
        rank.to_string()
    };
    format!("{colored_rank}{}", colorize(suit, color_code))
}
