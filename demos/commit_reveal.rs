//! Commit/reveal shuffle walkthrough.
//!
//! Run with `cargo run --example commit_reveal [seed]`.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use verideck::{Deck, verify_shuffle};

fn main() {
    let compact_seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    let before = Deck::new();
    let mut deck = before.clone();
    let seed = deck.shuffle_seeded(compact_seed);

    println!("Dealer commits:");
    println!("  order hash: {}", deck.hash());
    println!("  seed hash:  {}", deck.seed_hash());

    let players = ["north", "east", "south", "west"];
    for player in players {
        match deck.deal(2) {
            Ok(hand) => {
                let hand: Vec<String> = hand.iter().map(ToString::to_string).collect();
                println!("{player:>6}: {}", hand.join(" "));
            }
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        }
    }

    println!();
    println!("Saved state: {deck}");
    println!();

    println!("Dealer reveals seed {compact_seed}:");
    println!("  seed matches commitment: {}", deck.verify_seed(&seed));
    match verify_shuffle(&before, &seed, deck.hash()) {
        Ok(valid) => println!("  replayed order matches:   {valid}"),
        Err(err) => println!("  replay failed: {err}"),
    }
}
