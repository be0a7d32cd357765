// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Exact binomial coefficients and lexicographic combination enumeration.
use crate::error::OverflowError;

/// Returns the binomial coefficient for n choose r.
///
/// Returns 0 when `r > n` and 1 when `r == 0` or `r == n`. The result is
/// exact; fails with [OverflowError::Binomial] when it would exceed
/// `i64::MAX`, which happens around `n = 67` for `r` near `n / 2`.
pub fn n_choose_r(n: u64, r: u64) -> Result<i64, OverflowError> {
    if r > n {
        return Ok(0);
    }
    if r == 0 || r == n {
        return Ok(1);
    }

    // C(n, r) == C(n, n - r), the smaller side needs fewer steps.
    let steps = r.min(n - r) as u128;
    let n = n as u128;

    // The partial product after step i is C(n - steps + i, i), itself a
    // binomial, so every division is exact. Partials grow monotonically and
    // overflow surfaces at the first step past i64::MAX.
    let mut result: u128 = 1;
    for i in 1..=steps {
        result = result * (n - steps + i) / i;
        if result > i64::MAX as u128 {
            return Err(OverflowError::Binomial { n: n as u64, r });
        }
    }

    Ok(result as i64)
}

/// Lazy enumerator over all r-subsets of `{0, .., n - 1}`.
///
/// Create it with [combinations]. Subsets come out in strict lexicographic
/// order, each one sorted ascending, starting at `[0, 1, .., r - 1]` and
/// ending at `[n - r, .., n - 1]`. Each call to [combinations] starts a fresh
/// enumeration.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    state: Option<Vec<usize>>,
}

/// Enumerates all r-subsets of `{0, .., n - 1}` in lexicographic order.
///
/// The sequence is empty when `r > n`, and yields the single empty subset
/// when `r == 0`.
pub fn combinations(n: usize, r: usize) -> Combinations {
    let state = (r <= n).then(|| (0..r).collect());
    Combinations { n, state }
}

impl Combinations {
    /// Computes the successor of a combination, or `None` at the last one.
    fn increment(n: usize, combination: &[usize]) -> Option<Vec<usize>> {
        let r = combination.len();

        // Rightmost position not yet at its maximum value n - r + i.
        let pivot = (0..r).rev().find(|&i| combination[i] != n - r + i)?;

        let mut next = combination.to_vec();
        next[pivot] += 1;
        for i in pivot + 1..r {
            next[i] = next[i - 1] + 1;
        }

        Some(next)
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.state.take()?;
        self.state = Self::increment(self.n, &current);
        Some(current)
    }
}
