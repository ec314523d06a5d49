// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card parsing errors.
use thiserror::Error;

/// A malformed card or hand.
///
/// This is the only error returned by the cards and evaluation crates, each
/// variant carries the offending token as it was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCardError {
    /// The token is not two characters long.
    #[error("card `{0}` should have 2 characters")]
    Length(String),
    /// The first character is not one of `23456789TJQKA`.
    #[error("card `{0}` has an unknown rank, valid ranks are 23456789TJQKA")]
    Rank(String),
    /// The second character is not one of `CSHD`.
    #[error("card `{0}` has an unknown suit, valid suits are CSHD")]
    Suit(String),
    /// A `?` marker that is neither `?B` nor `?R`.
    #[error("unknown joker `{0}`, valid jokers are ?B and ?R")]
    Joker(String),
    /// A joker where only concrete cards are accepted.
    #[error("joker `{0}` is not allowed here")]
    UnexpectedJoker(String),
    /// The deck holds a single black and a single red joker.
    #[error("joker `{0}` appears more than once")]
    DuplicateJoker(String),
    /// Hands must have between 5 and 7 cards.
    #[error("a hand should have 5 to 7 cards, got {0}")]
    HandSize(usize),
}
