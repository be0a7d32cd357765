// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories, tie break data, and comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use pokermaster_cards::{Card, Rank, Suit};

/// The ten hand categories, best first.
///
/// The discriminant is the fixed category rank used for cross category
/// comparison: 0 for the best category down to 9 for the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// Ten to ace in a single suit.
    RoyalFlush = 0,
    /// Five sequential cards in a single suit.
    StraightFlush,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Five cards of a single suit.
    Flush,
    /// Five sequential cards.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Two pairs of matching ranks.
    TwoPair,
    /// One pair of matching ranks.
    OnePair,
    /// None of the above.
    HighCard,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::HighCard => "High Card",
        };

        write!(f, "{name}")
    }
}

/// A classified five cards Poker hand.
///
/// Each variant carries exactly the tie break fields its category compares
/// on, plus the five composing cards; a royal flush carries only its suit
/// since all royal flushes tie. Hands are immutable values built once by
/// [classify](crate::classify) and compared by content.
///
/// Rank arrays (`ranks`, `kickers`) are stored in descending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PokerHand {
    /// Ten to ace in a single suit; ties with every other royal flush.
    RoyalFlush {
        /// The suit all five cards share.
        suit: Suit,
    },
    /// Five sequential cards in a single suit.
    StraightFlush {
        /// The highest effective rank, `Five` for a wheel.
        high: Rank,
        /// The suit all five cards share.
        suit: Suit,
        /// The composing cards.
        cards: [Card; 5],
    },
    /// Four cards of the same rank plus a kicker.
    FourOfAKind {
        /// The rank repeated four times.
        quad: Rank,
        /// The unmatched card's rank.
        kicker: Rank,
        /// The composing cards.
        cards: [Card; 5],
    },
    /// Three cards of one rank and two of another.
    FullHouse {
        /// The rank repeated three times.
        triplet: Rank,
        /// The rank repeated twice.
        pair: Rank,
        /// The composing cards.
        cards: [Card; 5],
    },
    /// Five cards of a single suit.
    Flush {
        /// The suit all five cards share.
        suit: Suit,
        /// All five ranks, descending.
        ranks: [Rank; 5],
        /// The composing cards.
        cards: [Card; 5],
    },
    /// Five sequential cards.
    Straight {
        /// The highest effective rank, `Five` for a wheel.
        high: Rank,
        /// The composing cards.
        cards: [Card; 5],
    },
    /// Three cards of the same rank plus two kickers.
    ThreeOfAKind {
        /// The rank repeated three times.
        triplet: Rank,
        /// The higher kicker rank.
        high_kicker: Rank,
        /// The lower kicker rank.
        low_kicker: Rank,
        /// The composing cards.
        cards: [Card; 5],
    },
    /// Two pairs of matching ranks plus a kicker.
    TwoPair {
        /// The higher pair rank.
        high_pair: Rank,
        /// The lower pair rank.
        low_pair: Rank,
        /// The unmatched card's rank.
        kicker: Rank,
        /// The composing cards.
        cards: [Card; 5],
    },
    /// One pair of matching ranks plus three kickers.
    OnePair {
        /// The paired rank.
        pair: Rank,
        /// The kicker ranks, descending.
        kickers: [Rank; 3],
        /// The composing cards.
        cards: [Card; 5],
    },
    /// Five unmatched cards.
    HighCard {
        /// All five ranks, descending.
        ranks: [Rank; 5],
        /// The composing cards.
        cards: [Card; 5],
    },
}

impl PokerHand {
    /// The hand's category.
    pub fn category(&self) -> HandCategory {
        match self {
            PokerHand::RoyalFlush { .. } => HandCategory::RoyalFlush,
            PokerHand::StraightFlush { .. } => HandCategory::StraightFlush,
            PokerHand::FourOfAKind { .. } => HandCategory::FourOfAKind,
            PokerHand::FullHouse { .. } => HandCategory::FullHouse,
            PokerHand::Flush { .. } => HandCategory::Flush,
            PokerHand::Straight { .. } => HandCategory::Straight,
            PokerHand::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            PokerHand::TwoPair { .. } => HandCategory::TwoPair,
            PokerHand::OnePair { .. } => HandCategory::OnePair,
            PokerHand::HighCard { .. } => HandCategory::HighCard,
        }
    }

    /// The five cards composing the hand.
    ///
    /// A royal flush stores only its suit, so its cards are reconstructed.
    pub fn cards(&self) -> [Card; 5] {
        match self {
            PokerHand::RoyalFlush { suit } => {
                [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
                    .map(|rank| Card::new(rank, *suit))
            }
            PokerHand::StraightFlush { cards, .. }
            | PokerHand::FourOfAKind { cards, .. }
            | PokerHand::FullHouse { cards, .. }
            | PokerHand::Flush { cards, .. }
            | PokerHand::Straight { cards, .. }
            | PokerHand::ThreeOfAKind { cards, .. }
            | PokerHand::TwoPair { cards, .. }
            | PokerHand::OnePair { cards, .. }
            | PokerHand::HighCard { cards, .. } => *cards,
        }
    }

    /// Compares hand strength, where `Ordering::Less` means this hand is
    /// BETTER than the other.
    ///
    /// The inversion mirrors the category ranks: the best category is 0, so
    /// a smaller comparison key is a stronger hand, across categories and
    /// within them. This is a total order on strength but not on value, two
    /// hands of equal strength and different suits compare `Equal`; for that
    /// reason the [Ord] trait is deliberately not implemented.
    pub fn compare(&self, other: &PokerHand) -> Ordering {
        use PokerHand::*;

        match (self, other) {
            (RoyalFlush { .. }, RoyalFlush { .. }) => Ordering::Equal,
            (StraightFlush { high: a, .. }, StraightFlush { high: b, .. }) => b.cmp(a),
            (
                FourOfAKind {
                    quad: q1,
                    kicker: k1,
                    ..
                },
                FourOfAKind {
                    quad: q2,
                    kicker: k2,
                    ..
                },
            ) => (q2, k2).cmp(&(q1, k1)),
            (
                FullHouse {
                    triplet: t1,
                    pair: p1,
                    ..
                },
                FullHouse {
                    triplet: t2,
                    pair: p2,
                    ..
                },
            ) => (t2, p2).cmp(&(t1, p1)),
            (Flush { ranks: a, .. }, Flush { ranks: b, .. }) => b.cmp(a),
            (Straight { high: a, .. }, Straight { high: b, .. }) => b.cmp(a),
            (
                ThreeOfAKind {
                    triplet: t1,
                    high_kicker: h1,
                    low_kicker: l1,
                    ..
                },
                ThreeOfAKind {
                    triplet: t2,
                    high_kicker: h2,
                    low_kicker: l2,
                    ..
                },
            ) => (t2, h2, l2).cmp(&(t1, h1, l1)),
            (
                TwoPair {
                    high_pair: h1,
                    low_pair: l1,
                    kicker: k1,
                    ..
                },
                TwoPair {
                    high_pair: h2,
                    low_pair: l2,
                    kicker: k2,
                    ..
                },
            ) => (h2, l2, k2).cmp(&(h1, l1, k1)),
            (
                OnePair {
                    pair: p1,
                    kickers: k1,
                    ..
                },
                OnePair {
                    pair: p2,
                    kickers: k2,
                    ..
                },
            ) => (p2, k2).cmp(&(p1, k1)),
            (HighCard { ranks: a, .. }, HighCard { ranks: b, .. }) => b.cmp(a),
            _ => self.category().cmp(&other.category()),
        }
    }

    /// Checks if this hand is strictly better than the other.
    ///
    /// Tying hands return `false`.
    pub fn is_better_than(&self, other: &PokerHand) -> bool {
        self.compare(other) == Ordering::Less
    }
}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category())?;
        for card in self.cards() {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}
