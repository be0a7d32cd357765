// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection out of hole and community cards.
use pokermaster_cards::{Card, HoleCards};

use crate::classify::{HAND_SIZE, classify};
use crate::combinatorics::combinations;
use crate::error::HandError;
use crate::hand::PokerHand;

/// Number of community cards on a full board.
pub const COMMUNITY_CARDS: usize = 5;

/// Selects the best five cards hand out of hole and community cards.
///
/// Classifies all 21 five cards combinations of the seven cards and keeps
/// the strictly best one. The hole cards may not appear in the winning hand
/// at all when the board alone plays better. Fails with
/// [HandError::InvalidCommunitySize] unless exactly five community cards are
/// given.
pub fn best_of_seven(hole: &HoleCards, community: &[Card]) -> Result<PokerHand, HandError> {
    if community.len() != COMMUNITY_CARDS {
        return Err(HandError::InvalidCommunitySize {
            expected: COMMUNITY_CARDS,
            actual: community.len(),
        });
    }

    let mut cards = Vec::with_capacity(COMMUNITY_CARDS + 2);
    cards.extend_from_slice(community);
    cards.push(hole.first());
    cards.push(hole.second());

    let mut pick = [cards[0]; HAND_SIZE];
    let mut best: Option<PokerHand> = None;

    for subset in combinations(cards.len(), HAND_SIZE) {
        for (slot, &i) in pick.iter_mut().zip(subset.iter()) {
            *slot = cards[i];
        }

        let hand = classify(&pick)?;
        best = match best {
            Some(current) if !hand.is_better_than(&current) => Some(current),
            _ => Some(hand),
        };
    }

    Ok(best.expect("seven cards always make at least one hand"))
}
