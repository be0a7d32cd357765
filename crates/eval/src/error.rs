// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator error types.
use thiserror::Error;

use crate::hand::HandCategory;

/// A combinatorial result too large for its integer representation.
///
/// Recoverable by the caller, which can retry with a smaller universe or give
/// up on the precomputation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OverflowError {
    /// The binomial coefficient exceeds `i64::MAX`.
    #[error("result of {n} choose {r} is too large to be stored in an i64")]
    Binomial {
        /// Total number of objects.
        n: u64,
        /// Number of objects chosen.
        r: u64,
    },
    /// A combination rank accumulation wrapped past `i64::MAX`.
    #[error("combination rank is too large to be stored in an i64")]
    CombinationRank,
}

/// Errors from hand classification and best hand selection.
///
/// The size variants are caller mistakes. The repetition variants signal a
/// repetition count impossible for the matched category; they are unreachable
/// as long as category predicates are evaluated from best to worst, so
/// receiving one means a dispatch bug and should be treated as fatal by the
/// caller rather than silently recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand was built from other than exactly five cards.
    #[error("expected {expected} cards in a hand, got {actual}")]
    InvalidHandSize {
        /// Number of cards a hand must have.
        expected: usize,
        /// Number of cards received.
        actual: usize,
    },
    /// Best hand selection received other than exactly five community cards.
    #[error("expected {expected} community cards, got {actual}")]
    InvalidCommunitySize {
        /// Number of community cards on a full board.
        expected: usize,
        /// Number of cards received.
        actual: usize,
    },
    /// A rank repetition count impossible for the matched category.
    #[error("{category} cannot contain a rank repeated {repetitions} times")]
    InvalidRepetitionShape {
        /// The category whose builder rejected the hand.
        category: HandCategory,
        /// The impossible repetition count.
        repetitions: u8,
    },
    /// A rank with a repetition count required by the category was absent.
    #[error("{category} requires a rank repeated {expected} times")]
    MissingExpectedRepetition {
        /// The category whose builder rejected the hand.
        category: HandCategory,
        /// The repetition count no rank had.
        expected: u8,
    },
}
