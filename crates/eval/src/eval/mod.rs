// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! [HandValue::eval] computes the value of a five cards hand, values compare
//! by category and then by the ranks that break ties between hands of the same
//! category.
//!
//! [best_hand] and [best_wild_hand] search the best five cards out of a 5 to 7
//! cards hand, the latter replacing each joker with every card of its color
//! using [Realizations].

mod combinations;
mod search;
mod value;
mod wild;

pub use combinations::{Combinations, nck};
pub use search::{BestHand, Variant, best_hand, best_of, best_wild_hand, best_wild_of};
pub use value::{HandRank, HandValue};
pub use wild::Realizations;
