// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand value.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Rank};

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight and flush.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// Max number of tiebreak ranks, two pairs plus the five ranks.
const MAX_TIEBREAK: usize = 7;

/// The value of a five cards hand.
///
/// Values are ordered by category first and then by the tiebreak ranks
/// compared lexicographically, two values with the same category always have
/// the same number of tiebreak ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: [Rank; MAX_TIEBREAK],
    len: u8,
}

impl HandValue {
    /// Evaluates a five cards hand.
    ///
    /// A straight is five distinct consecutive ranks, the ace only plays high
    /// so that A-2-3-4-5 is not a straight.
    pub fn eval(cards: &[Card; 5]) -> HandValue {
        let mut ranks = cards.map(|c| c.rank());
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = is_straight(&ranks);

        if straight && flush {
            return Self::new(HandRank::StraightFlush, &[ranks[0]], &[]);
        }

        if let (Some(quad), Some(kicker)) = (kind(4, &ranks), kind(1, &ranks)) {
            return Self::new(HandRank::FourOfAKind, &[quad, kicker], &[]);
        }

        if let (Some(triple), Some(pair)) = (kind(3, &ranks), kind(2, &ranks)) {
            return Self::new(HandRank::FullHouse, &[triple, pair], &[]);
        }

        if flush {
            return Self::new(HandRank::Flush, &[], &ranks);
        }

        if straight {
            return Self::new(HandRank::Straight, &[ranks[0]], &[]);
        }

        if let Some(triple) = kind(3, &ranks) {
            return Self::new(HandRank::ThreeOfAKind, &[triple], &ranks);
        }

        if let Some((high, low)) = two_pair(&ranks) {
            return Self::new(HandRank::TwoPair, &[high, low], &ranks);
        }

        if let Some(pair) = kind(2, &ranks) {
            return Self::new(HandRank::OnePair, &[pair], &ranks);
        }

        Self::new(HandRank::HighCard, &[], &ranks)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The ranks used to break ties between hands of the same category.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak[..self.len as usize]
    }

    fn new(rank: HandRank, head: &[Rank], ranks: &[Rank]) -> Self {
        let mut tiebreak = [Rank::Deuce; MAX_TIEBREAK];
        let len = head.len() + ranks.len();
        debug_assert!(len <= MAX_TIEBREAK);

        for (dst, src) in tiebreak.iter_mut().zip(head.iter().chain(ranks)) {
            *dst = *src;
        }

        Self {
            rank,
            tiebreak,
            len: len as u8,
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.rank)?;
        for (idx, rank) in self.tiebreak().iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{rank}")?;
        }
        write!(f, "]")
    }
}

/// Ranks must be sorted from highest to lowest.
fn is_straight(ranks: &[Rank; 5]) -> bool {
    ranks.windows(2).all(|w| w[0].value() == w[1].value() + 1)
}

/// Returns the highest rank that appears exactly n times.
///
/// Ranks must be sorted from highest to lowest, so the first group found with
/// n cards is the highest one.
fn kind(n: usize, ranks: &[Rank]) -> Option<Rank> {
    ranks
        .chunk_by(|a, b| a == b)
        .find(|group| group.len() == n)
        .map(|group| group[0])
}

/// Returns the two highest pairs ranks if there are two pairs.
fn two_pair(ranks: &[Rank]) -> Option<(Rank, Rank)> {
    let high = kind(2, ranks)?;
    let rest = ranks.iter().copied().filter(|&r| r != high).collect::<Vec<_>>();
    let low = kind(2, &rest)?;
    Some((high, low))
}
