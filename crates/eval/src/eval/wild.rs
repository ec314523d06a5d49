// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokers substitution.
use std::iter::FusedIterator;

use crate::cards::{Card, Joker, Token};

/// Iterator over all the concrete hands a five tokens hand can stand for.
///
/// Each joker is replaced in place by every card of its color that is not
/// already in the hand, with two or more jokers the iterator goes through the
/// cartesian product of their substitutes. Red jokers come first and black
/// jokers move fastest, whatever their position in the hand. A hand without
/// jokers yields itself once.
///
/// The iterator is lazy and can be restarted by cloning it before use.
#[derive(Debug, Clone)]
pub struct Realizations {
    cards: [Card; 5],
    jokers: [(usize, Joker); 5],
    num_jokers: usize,
    cursors: [usize; 5],
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Running,
    Done,
}

impl Realizations {
    /// Creates the realizations for the given hand.
    pub fn new(hand: [Token; 5]) -> Self {
        let mut jokers = [(0, Joker::Black); 5];
        let mut num_jokers = 0;

        let cards = hand.map(|token| match token {
            Token::Card(card) => card,
            Token::Joker(joker) => joker.substitute(0),
        });

        for (pos, token) in hand.iter().enumerate() {
            if let Token::Joker(joker) = token {
                jokers[num_jokers] = (pos, *joker);
                num_jokers += 1;
            }
        }

        // Stable, jokers of the same color keep their hand order.
        jokers[..num_jokers].sort_by_key(|&(_, joker)| joker != Joker::Red);

        Self {
            cards,
            jokers,
            num_jokers,
            cursors: [0; 5],
            state: State::Start,
        }
    }

    /// Moves the jokers to the next substitution, returns false when all
    /// substitutions have been visited.
    fn advance(&mut self) -> bool {
        for idx in (0..self.num_jokers).rev() {
            let (pos, joker) = self.jokers[idx];

            self.cursors[idx] += 1;
            if self.cursors[idx] < Joker::SUBSTITUTES {
                self.cards[pos] = joker.substitute(self.cursors[idx]);
                return true;
            }

            self.cursors[idx] = 0;
            self.cards[pos] = joker.substitute(0);
        }

        false
    }

    /// Checks that no joker substitute duplicates another card in the hand.
    fn is_valid(&self) -> bool {
        self.jokers[..self.num_jokers].iter().all(|&(pos, _)| {
            self.cards
                .iter()
                .enumerate()
                .all(|(idx, card)| idx == pos || *card != self.cards[pos])
        })
    }
}

impl Iterator for Realizations {
    type Item = [Card; 5];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Start => self.state = State::Running,
                State::Running => {
                    if !self.advance() {
                        self.state = State::Done;
                        return None;
                    }
                }
                State::Done => return None,
            }

            if self.is_valid() {
                return Some(self.cards);
            }
        }
    }
}

impl FusedIterator for Realizations {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use ahash::HashSet;

    fn tokens(s: &str) -> [Token; 5] {
        let tokens = s
            .split_whitespace()
            .map(|t| t.parse::<Token>().unwrap())
            .collect::<Vec<_>>();
        tokens.try_into().unwrap()
    }

    fn is_distinct(cards: &[Card; 5]) -> bool {
        cards.iter().collect::<HashSet<_>>().len() == cards.len()
    }

    #[test]
    fn no_jokers() {
        let hand = tokens("6C 7C 8C 9C TC");
        let all = Realizations::new(hand).collect::<Vec<_>>();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].map(Token::Card), hand);
    }

    #[test]
    fn black_joker() {
        let hand = tokens("6C 7C 8C 9C ?B");
        let all = Realizations::new(hand).collect::<Vec<_>>();

        // 26 black cards minus the 4 clubs in the hand.
        assert_eq!(all.len(), 22);
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), 22);

        let clubs = hand[..4].iter().map(|t| t.card().unwrap()).collect::<Vec<_>>();
        for cards in &all {
            assert_eq!(cards[..4], clubs[..]);
            assert_eq!(cards[4].suit().color(), Joker::Black.color());
            assert!(is_distinct(cards));
        }

        // Rank major order, deuce of clubs first.
        assert_eq!(all[0][4], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(all[21][4], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn red_joker_ignores_black_cards() {
        let hand = tokens("?R 7C 8S 9C TS");
        let all = Realizations::new(hand).collect::<Vec<_>>();
        assert_eq!(all.len(), Joker::SUBSTITUTES);
        assert!(all.iter().all(|cards| Joker::Red.matches(cards[0])));
    }

    #[test]
    fn two_jokers() {
        let hand = tokens("TD TC ?R 7C ?B");
        let all = Realizations::new(hand).collect::<Vec<_>>();

        // Red has 25 candidates (TD taken), black 24 (TC, 7C taken).
        assert_eq!(all.len(), 25 * 24);
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), 25 * 24);

        for cards in &all {
            assert!(is_distinct(cards));
            assert!(Joker::Red.matches(cards[2]));
            assert!(Joker::Black.matches(cards[4]));
        }
    }

    #[test]
    fn same_color_jokers() {
        let hand = tokens("?B ?B 2H 3H 4H");
        let all = Realizations::new(hand).collect::<Vec<_>>();

        // Ordered pairs of distinct black cards.
        assert_eq!(all.len(), 26 * 25);
        assert!(all.iter().all(is_distinct));
    }

    #[test]
    fn black_joker_moves_fastest() {
        let card = |s: &str| s.parse::<Card>().unwrap();

        for hand in ["?B 2H 3H ?R 4H", "?R 2H 3H ?B 4H"] {
            let hand = tokens(hand);
            let all = Realizations::new(hand).collect::<Vec<_>>();
            let (red, black) = if hand[0] == Token::Joker(Joker::Red) {
                (0, 3)
            } else {
                (3, 0)
            };

            // 2H is taken, the red joker starts from 2D.
            assert_eq!(all[0][red], card("2D"));
            assert_eq!(all[0][black], card("2C"));
            assert_eq!(all[1][red], card("2D"));
            assert_eq!(all[1][black], card("2S"));
            assert_eq!(all[2][red], card("2D"));
            assert_eq!(all[2][black], card("3C"));
            assert_eq!(all[3][red], card("2D"));
            assert_eq!(all[3][black], card("3S"));

            // Real cards stay in place.
            assert!(all.iter().all(|cards| cards[1] == card("2H") && cards[4] == card("4H")));
        }
    }

    #[test]
    fn restartable() {
        let hand = tokens("TD ?R 5H 5C ?B");
        let iter = Realizations::new(hand);

        let first = iter.clone().collect::<Vec<_>>();
        let second = iter.collect::<Vec<_>>();
        assert_eq!(first, second);

        let mut iter = Realizations::new(hand);
        iter.by_ref().for_each(drop);
        assert_eq!(iter.next(), None);
    }
}
