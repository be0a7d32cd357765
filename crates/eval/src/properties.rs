// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand property extraction.
use ahash::AHashMap;
use pokermaster_cards::{Card, Rank};

/// Derived properties of a five cards hand.
///
/// Holds the features classification dispatches on: the highest effective
/// rank, whether all cards share a suit, whether the ranks are sequential,
/// and how many times each rank repeats.
///
/// The category predicates overlap upward: a royal flush also satisfies
/// [is_straight_flush](Self::is_straight_flush) and a full house also
/// satisfies [is_three_of_a_kind](Self::is_three_of_a_kind). Query them from
/// the strongest category to the weakest.
#[derive(Debug, Clone, PartialEq)]
pub struct HandProperties {
    high_card_rank: Rank,
    is_same_suit: bool,
    is_sequential: bool,
    rank_counts: AHashMap<Rank, u8>,
}

impl HandProperties {
    /// Computes the properties of a five cards hand.
    ///
    /// The cards MUST be sorted ascending by rank; this is the caller's
    /// contract and is not validated, the properties of an unsorted hand are
    /// meaningless.
    pub fn from_sorted(cards: &[Card; 5]) -> Self {
        let mut rank_counts = AHashMap::with_capacity(cards.len());
        rank_counts.insert(cards[0].rank(), 1u8);

        // A-2-3-4-5 is the only straight whose sorted ranks are not adjacent.
        let wheel_possible = cards[3].rank() == Rank::Five && cards[4].rank() == Rank::Ace;

        let mut high_card_rank = cards[0].rank();
        let mut is_same_suit = true;
        let mut is_sequential = true;

        for i in 1..cards.len() {
            let (current, previous) = (cards[i], cards[i - 1]);

            high_card_rank = high_card_rank.max(current.rank());
            is_same_suit &= current.suit() == previous.suit();
            // Only the final 5 -> A boundary is waived; a repeated five
            // below it still breaks the sequence.
            is_sequential &= current.rank() as u8 == previous.rank() as u8 + 1
                || (current.rank() == Rank::Ace && wheel_possible);
            *rank_counts.entry(current.rank()).or_insert(0) += 1;
        }

        // In a wheel the ace plays low and the five is the high card.
        if is_sequential && wheel_possible {
            high_card_rank = Rank::Five;
        }

        Self {
            high_card_rank,
            is_same_suit,
            is_sequential,
            rank_counts,
        }
    }

    /// The highest effective rank in the hand.
    ///
    /// This is [Rank::Five] for a wheel, where the ace counts low.
    pub fn high_card_rank(&self) -> Rank {
        self.high_card_rank
    }

    /// Whether all five cards share the same suit.
    pub fn is_same_suit(&self) -> bool {
        self.is_same_suit
    }

    /// Whether the five ranks form a sequence, wheel included.
    pub fn is_sequential(&self) -> bool {
        self.is_sequential
    }

    /// How many times each rank appears in the hand; the counts sum to 5.
    pub fn rank_counts(&self) -> &AHashMap<Rank, u8> {
        &self.rank_counts
    }

    /// Checks the royal flush properties: same suit, sequential, ace high.
    pub fn is_royal_flush(&self) -> bool {
        self.is_same_suit && self.is_sequential && self.high_card_rank == Rank::Ace
    }

    /// Checks the straight flush properties: same suit and sequential.
    pub fn is_straight_flush(&self) -> bool {
        self.is_same_suit && self.is_sequential
    }

    /// Checks if any rank repeats at least four times.
    pub fn is_four_of_a_kind(&self) -> bool {
        self.rank_counts.values().any(|&count| count >= 4)
    }

    /// Checks for a rank repeated three times alongside a rank repeated
    /// twice.
    pub fn is_full_house(&self) -> bool {
        let mut triplet_found = false;
        let mut pair_found = false;
        for &count in self.rank_counts.values() {
            triplet_found |= count == 3;
            pair_found |= count == 2;
        }
        triplet_found && pair_found
    }

    /// Checks if all cards share a suit.
    pub fn is_flush(&self) -> bool {
        self.is_same_suit
    }

    /// Checks if the ranks are sequential.
    pub fn is_straight(&self) -> bool {
        self.is_sequential
    }

    /// Checks if any rank repeats at least three times.
    pub fn is_three_of_a_kind(&self) -> bool {
        self.rank_counts.values().any(|&count| count >= 3)
    }

    /// Checks for exactly two ranks repeated exactly twice.
    pub fn is_two_pair(&self) -> bool {
        self.rank_counts.values().filter(|&&count| count == 2).count() == 2
    }

    /// Checks if any rank repeats at least twice.
    ///
    /// Every hand that physically contains a pair satisfies this, including
    /// trips, quads, full houses, and two pairs; dispatch order keeps those
    /// from ever reaching the one pair builder.
    pub fn is_one_pair(&self) -> bool {
        self.rank_counts.values().any(|&count| count >= 2)
    }
}
