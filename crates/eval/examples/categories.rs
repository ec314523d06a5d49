// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Counts the best hand categories of random 7 cards hands, jokers replace
// some of the dealt cards.
//
// ```bash
// $ cargo r --release --example categories -- --hands 100000 --jokers 2
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use wildpoker_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of random hands.
    #[clap(long, default_value_t = 100_000)]
    hands: usize,
    /// Number of jokers in each hand.
    #[clap(long, default_value_t = 0, value_parser = value_parser!(u8).range(0..=2))]
    jokers: u8,
}

#[rustfmt::skip]
fn main() {
    let cli = Cli::parse();
    let jokers = [Joker::Black, Joker::Red];

    let mut rng = rand::rng();
    let mut counts = [0usize; 9];
    let now = Instant::now();

    for _ in 0..cli.hands {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let mut hand = jokers
            .iter()
            .take(cli.jokers as usize)
            .map(|&j| Token::Joker(j))
            .collect::<Vec<_>>();

        while hand.len() < 7 {
            let Some(card) = deck.deal() else { break };
            hand.push(Token::Card(card));
        }

        if let Ok(best) = best_wild_of(&hand) {
            counts[best.rank() as usize] += 1;
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Straight:        {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
