// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand search.
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Combinations, HandRank, HandValue, Realizations, nck};
use crate::cards::{Card, InvalidCardError, Joker, Token};

/// The hand sizes accepted by the search.
const HAND_SIZES: std::ops::RangeInclusive<usize> = 5..=7;

/// The best five cards hand and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BestHand {
    cards: [Card; 5],
    value: HandValue,
}

impl BestHand {
    /// The five cards, jokers replaced by the cards they stand for.
    ///
    /// Cards keep the order they had in the input hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The cards sorted by rank and suit.
    pub fn sorted_cards(&self) -> [Card; 5] {
        let mut cards = self.cards;
        cards.sort();
        cards
    }

    /// The hand value.
    pub fn value(&self) -> HandValue {
        self.value
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.value.rank()
    }
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        write!(f, "{}", self.value)
    }
}

/// The search variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Concrete cards only, see [best_hand].
    Standard,
    /// Cards and jokers, see [best_wild_hand].
    Wild,
}

impl Variant {
    /// Runs this variant search on the given tokens.
    pub fn best_hand<S: AsRef<str>>(&self, tokens: &[S]) -> Result<BestHand, InvalidCardError> {
        match self {
            Variant::Standard => best_hand(tokens),
            Variant::Wild => best_wild_hand(tokens),
        }
    }
}

/// Returns the best five cards hand out of a 5 to 7 cards hand.
///
/// All tokens are parsed before the search starts, it fails if any token is
/// not a valid card, jokers included, or if the hand size is not 5 to 7.
///
/// ```
/// # use wildpoker_eval::*;
/// let best = best_hand(&["6C", "7C", "8C", "9C", "TC", "5C", "JS"])?;
/// assert_eq!(best.rank(), HandRank::StraightFlush);
/// assert_eq!(best.cards().map(|c| c.to_string()), ["6C", "7C", "8C", "9C", "TC"]);
/// # Ok::<(), InvalidCardError>(())
/// ```
pub fn best_hand<S: AsRef<str>>(tokens: &[S]) -> Result<BestHand, InvalidCardError> {
    check_size(tokens.len())?;

    let cards = tokens
        .iter()
        .map(|t| t.as_ref().parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;

    best_of(&cards)
}

/// Returns the best five cards hand out of 5 to 7 concrete cards.
pub fn best_of(cards: &[Card]) -> Result<BestHand, InvalidCardError> {
    check_size(cards.len())?;
    debug!(
        "Searching best hand for {} in {} combinations",
        join(cards),
        nck(cards.len(), 5)
    );

    let hands = Combinations::<5>::new(cards.len()).map(|subset| subset.map(|i| cards[i]));
    let best = max_value(hands).ok_or(InvalidCardError::HandSize(cards.len()))?;

    debug!("Best hand {best}");
    Ok(best)
}

/// Returns the best five cards hand out of a 5 to 7 cards hand with jokers.
///
/// Jokers are replaced by every card of their color not already in the five
/// cards being evaluated, the returned hand has the jokers replaced by the
/// cards that give the highest value. A hand can have at most one black and
/// one red joker.
///
/// ```
/// # use wildpoker_eval::*;
/// let best = best_wild_hand(&["6C", "7C", "8C", "9C", "TC", "5C", "?B"])?;
/// assert_eq!(best.rank(), HandRank::StraightFlush);
/// assert_eq!(best.cards().map(|c| c.to_string()), ["7C", "8C", "9C", "TC", "JC"]);
/// # Ok::<(), InvalidCardError>(())
/// ```
pub fn best_wild_hand<S: AsRef<str>>(tokens: &[S]) -> Result<BestHand, InvalidCardError> {
    check_size(tokens.len())?;

    let parsed = tokens
        .iter()
        .map(|t| t.as_ref().parse::<Token>())
        .collect::<Result<Vec<_>, _>>()?;

    for joker in [Joker::Black, Joker::Red] {
        let mut positions = parsed.iter().enumerate().filter(|(_, t)| t.joker() == Some(joker));
        if let (Some(_), Some((idx, _))) = (positions.next(), positions.next()) {
            return Err(InvalidCardError::DuplicateJoker(tokens[idx].as_ref().to_string()));
        }
    }

    best_wild_of(&parsed)
}

/// Returns the best five cards hand out of 5 to 7 parsed tokens.
///
/// Unlike [best_wild_hand] this doesn't limit the number of jokers, each
/// joker multiplies the number of evaluated hands by up to 26.
pub fn best_wild_of(tokens: &[Token]) -> Result<BestHand, InvalidCardError> {
    check_size(tokens.len())?;
    debug!(
        "Searching best wild hand for {} in {} combinations",
        join(tokens),
        nck(tokens.len(), 5)
    );

    let hands = Combinations::<5>::new(tokens.len())
        .flat_map(|subset| Realizations::new(subset.map(|i| tokens[i])));
    let best = max_value(hands).ok_or(InvalidCardError::HandSize(tokens.len()))?;

    debug!("Best wild hand {best}");
    Ok(best)
}

/// Returns the hand with the highest value, the first one wins ties.
fn max_value(hands: impl Iterator<Item = [Card; 5]>) -> Option<BestHand> {
    let mut best: Option<BestHand> = None;
    let mut count = 0usize;

    for cards in hands {
        count += 1;

        let value = HandValue::eval(&cards);
        if best.is_none_or(|b| value > b.value) {
            trace!("New best {} {value}", join(&cards));
            best = Some(BestHand { cards, value });
        }
    }

    trace!("Evaluated {count} hands");
    best
}

fn check_size(len: usize) -> Result<(), InvalidCardError> {
    if HAND_SIZES.contains(&len) {
        Ok(())
    } else {
        Err(InvalidCardError::HandSize(len))
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
