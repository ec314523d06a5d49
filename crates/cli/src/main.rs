// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildpoker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, value_parser};
use log::info;

use wildpoker_eval::{BestHand, Variant};

mod random;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity, -v for debug and -vv for trace.
    #[clap(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Print the best hand cards sorted by rank and suit.
    #[clap(long, global = true)]
    sorted: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Finds the best five cards out of 5 to 7 cards.
    Best {
        /// The cards, for example 6C 7C 8C 9C TC 5C JS.
        #[clap(required = true)]
        tokens: Vec<String>,
    },
    /// Finds the best five cards out of 5 to 7 cards with jokers (?B, ?R).
    Wild {
        /// The cards and jokers, for example TD TC 5H 5C 7C ?R ?B.
        #[clap(required = true)]
        tokens: Vec<String>,
    },
    /// Deals random 7 cards hands and finds their best hands.
    Random {
        /// Number of hands to deal.
        #[clap(long, short, default_value_t = 10)]
        count: usize,
        /// Number of jokers in each hand.
        #[clap(long, short, default_value_t = 0, value_parser = value_parser!(u8).range(0..=2))]
        jokers: u8,
        /// Number of evaluation threads.
        #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u16).range(1..=256))]
        tasks: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    match cli.command {
        Command::Best { tokens } => search(Variant::Standard, &tokens, cli.sorted),
        Command::Wild { tokens } => search(Variant::Wild, &tokens, cli.sorted),
        Command::Random {
            count,
            jokers,
            tasks,
        } => {
            let hands = random::deal_hands(&mut rand::rng(), count, jokers as usize);
            info!("Dealt {} hands with {jokers} jokers", hands.len());

            let variant = if jokers > 0 {
                Variant::Wild
            } else {
                Variant::Standard
            };

            let results = wildpoker_eval::par_best_hands(tasks as usize, &hands, variant);
            for (hand, result) in hands.iter().zip(results) {
                let best = result.with_context(|| format!("Invalid hand {}", hand.join(" ")))?;
                println!("{} => {}", hand.join(" "), format_best(&best, cli.sorted));
            }

            Ok(())
        }
    }
}

fn search(variant: Variant, tokens: &[String], sorted: bool) -> Result<()> {
    let best = variant
        .best_hand(tokens)
        .with_context(|| format!("Invalid hand {}", tokens.join(" ")))?;
    println!("{}", format_best(&best, sorted));
    Ok(())
}

fn format_best(best: &BestHand, sorted: bool) -> String {
    let cards = if sorted {
        best.sorted_cards()
    } else {
        *best.cards()
    };

    let cards = cards.map(|c| c.to_string()).join(" ");
    format!("{cards} {}", best.value())
}
