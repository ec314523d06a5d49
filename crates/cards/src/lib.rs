// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildpoker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use wildpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! to parse cards and jokers from their two characters tokens, parsing is case
//! insensitive and jokers are written as `?B` (black) and `?R` (red):
//!
//! ```
//! # use wildpoker_cards::{Card, InvalidCardError, Joker, Rank, Suit, Token};
//! let tc = "tc".parse::<Token>()?;
//! assert_eq!(tc, Token::Card(Card::new(Rank::Ten, Suit::Clubs)));
//!
//! let joker = "?B".parse::<Token>()?;
//! assert_eq!(joker, Token::Joker(Joker::Black));
//!
//! assert!(matches!("XX".parse::<Token>(), Err(InvalidCardError::Rank(_))));
//! # Ok::<(), InvalidCardError>(())
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
mod error;
mod joker;

pub use deck::{Card, Color, Deck, Rank, Suit};
pub use error::InvalidCardError;
pub use joker::{Joker, Token, parse_token};
