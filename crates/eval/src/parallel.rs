// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hands evaluation.
use log::debug;
use std::thread;

use crate::cards::InvalidCardError;
use crate::eval::{BestHand, Variant};

/// Searches the best hand for each hand in `hands` using `num_tasks` threads.
///
/// Hands are split in `num_tasks` chunks of consecutive hands, results are
/// returned in the same order as the input hands and an invalid hand only
/// fails its own result.
///
/// Panics if `num_tasks` is zero.
pub fn par_best_hands<H, S>(
    num_tasks: usize,
    hands: &[H],
    variant: Variant,
) -> Vec<Result<BestHand, InvalidCardError>>
where
    H: AsRef<[S]> + Sync,
    S: AsRef<str>,
{
    assert!(num_tasks > 0);

    if hands.is_empty() {
        return Vec::new();
    }

    let hands_per_task = hands.len().div_ceil(num_tasks);
    let mut results = (0..hands.len()).map(|_| None).collect::<Vec<_>>();

    debug!(
        "Evaluating {} hands with {num_tasks} tasks {hands_per_task} hands per task",
        hands.len()
    );

    thread::scope(|s| {
        let chunks = hands.chunks(hands_per_task);
        let outputs = results.chunks_mut(hands_per_task);

        for (chunk, output) in chunks.zip(outputs) {
            s.spawn(move || {
                for (hand, result) in chunk.iter().zip(output.iter_mut()) {
                    *result = Some(variant.best_hand(hand.as_ref()));
                }
            });
        }
    });

    results.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Deck;

    fn random_hands(count: usize) -> Vec<Vec<String>> {
        let mut rng = rand::rng();
        (0..count)
            .map(|_| {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                (0..7).map(|_| deck.deal().unwrap().to_string()).collect()
            })
            .collect()
    }

    #[test]
    fn same_as_sequential() {
        let hands = random_hands(101);

        for num_tasks in [1, 3, 4, 200] {
            let results = par_best_hands(num_tasks, &hands, Variant::Standard);
            assert_eq!(results.len(), hands.len());

            for (hand, result) in hands.iter().zip(results) {
                assert_eq!(result, crate::eval::best_hand(hand));
            }
        }
    }

    #[test]
    fn errors_stay_in_place() {
        let hands = vec![
            vec!["6C", "7C", "8C", "9C", "TC", "5C", "?B"],
            vec!["6C", "7C", "8C", "9C", "TC", "5C", "XX"],
            vec!["TD", "TC", "5H", "5C", "7C", "?R", "?B"],
        ];

        let results = par_best_hands(2, &hands, Variant::Wild);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(InvalidCardError::Rank("XX".to_string())));
        assert!(results[2].is_ok());

        assert!(par_best_hands::<Vec<&str>, &str>(4, &[], Variant::Wild).is_empty());
    }
}
