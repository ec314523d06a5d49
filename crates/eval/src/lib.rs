// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildpoker best hand evaluator.
//!
//! Finds the best five cards hand out of a 5 to 7 cards hand, with a variant
//! that accepts jokers: the black joker `?B` can stand for any club or spade
//! and the red joker `?R` for any heart or diamond.
//!
//! ```
//! # use wildpoker_eval::*;
//! let best = best_hand(&["TD", "TC", "TH", "7C", "7D", "8C", "8S"])?;
//! assert_eq!(best.rank(), HandRank::FullHouse);
//!
//! let best = best_wild_hand(&["TD", "TC", "5H", "5C", "7C", "?R", "?B"])?;
//! assert_eq!(best.rank(), HandRank::FourOfAKind);
//!
//! let sorted = best.sorted_cards().map(|c| c.to_string());
//! assert_eq!(sorted, ["7C", "TC", "TS", "TH", "TD"]);
//!
//! assert!(matches!(best_hand(&["XX"; 7]), Err(InvalidCardError::Rank(_))));
//! # Ok::<(), InvalidCardError>(())
//! ```
//!
//! Hands can be evaluated directly with [HandValue]:
//!
//! ```
//! # use wildpoker_eval::*;
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
//! let v2 = HandValue::eval(&[cards[5], cards[6], cards[7], cards[8], cards[9]]);
//! assert!(v2 > v1);
//! ```
//!
//! Straights only play the ace high, A-2-3-4-5 is not a straight.
//!
//! The **`parallel`** feature enables `par_best_hands` to evaluate many hands
//! using multiple threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    BestHand, Combinations, HandRank, HandValue, Realizations, Variant, best_hand, best_of,
    best_wild_hand, best_wild_of,
};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_best_hands;

// Reexport cards types.
pub use wildpoker_cards as cards;
pub use wildpoker_cards::{Card, Color, Deck, InvalidCardError, Joker, Rank, Suit, Token};
