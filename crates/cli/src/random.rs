// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random hands dealing.
use rand::prelude::*;

use wildpoker_eval::{Deck, Joker};

/// Cards in a dealt hand, jokers included.
pub const HAND_SIZE: usize = 7;

/// Deals `count` hands of 7 tokens from fresh shuffled decks.
///
/// Each hand has `jokers` jokers, the black one first, placed at random
/// positions. Panics if `jokers > 2`.
pub fn deal_hands<R: Rng>(rng: &mut R, count: usize, jokers: usize) -> Vec<Vec<String>> {
    assert!(jokers <= 2, "jokers={jokers} must be <= 2");

    (0..count)
        .map(|_| {
            let mut deck = Deck::new_and_shuffled(rng);
            let mut hand = [Joker::Black, Joker::Red]
                .iter()
                .take(jokers)
                .map(|j| j.to_string())
                .collect::<Vec<_>>();

            while hand.len() < HAND_SIZE {
                match deck.deal() {
                    Some(card) => hand.push(card.to_string()),
                    None => break,
                }
            }

            hand.shuffle(rng);
            hand
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn dealt_hands() {
        let mut rng = rand::rng();

        for jokers in 0..=2 {
            let hands = deal_hands(&mut rng, 20, jokers);
            assert_eq!(hands.len(), 20);

            for hand in &hands {
                assert_eq!(hand.len(), HAND_SIZE);
                assert_eq!(hand.iter().collect::<HashSet<_>>().len(), HAND_SIZE);
                assert_eq!(hand.iter().filter(|t| t.starts_with('?')).count(), jokers);
            }
        }
    }

    #[test]
    fn dealt_hands_evaluate() {
        let mut rng = rand::rng();
        let hands = deal_hands(&mut rng, 10, 2);

        for hand in &hands {
            assert!(wildpoker_eval::best_wild_hand(hand).is_ok());
        }
    }
}
