// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! K-subsets iteration.
use std::iter::FusedIterator;

/// Iterator over the K-subsets of the indices `0..n` in lexicographic order.
///
/// For n = 7 and K = 5 the first subsets are `[0, 1, 2, 3, 4]`,
/// `[0, 1, 2, 3, 5]`, `[0, 1, 2, 3, 6]`, `[0, 1, 2, 4, 5]`, ...
#[derive(Debug, Clone)]
pub struct Combinations<const K: usize> {
    n: usize,
    indices: [usize; K],
    done: bool,
}

impl<const K: usize> Combinations<K> {
    /// Creates an iterator over the K-subsets of `0..n`, there are none if
    /// `n < K`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            indices: std::array::from_fn(|i| i),
            done: n < K,
        }
    }
}

impl<const K: usize> Iterator for Combinations<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let subset = self.indices;

        // Find the rightmost index that can still move right.
        match (0..K).rev().find(|&i| self.indices[i] < self.n - K + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(subset)
    }
}

impl<const K: usize> FusedIterator for Combinations<K> {}

/// Returns the binomial coefficient for n choose k.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    (0..k.min(n - k)).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
