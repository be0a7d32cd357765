// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card indexing and combination ranking.
//!
//! [card_index] maps a card onto a dense index in `[0, 52)` and
//! [card_from_index] maps it back. [combination_rank] builds on the card
//! indices to number every k-cards combination with a distinct integer in
//! `[0, C(52, k))`, the combinatorial (colex) ranking used for addressing
//! precomputed lookup tables.
use pokermaster_cards::{Card, Deck, Rank, Suit};

use crate::combinatorics::n_choose_r;
use crate::error::OverflowError;

/// Number of distinct rank values.
const RANK_COUNT: usize = 13;

/// Maps a card onto its dense index in `[0, 52)`.
///
/// Cards of the same suit occupy 13 consecutive indices in rank order, suits
/// follow the fixed S, H, D, C order.
pub fn card_index(card: Card) -> usize {
    card.rank() as usize + card.suit() as usize * RANK_COUNT
}

/// Maps an index back to its card.
///
/// Total inverse of [card_index]: any index outside `[0, 52)` yields `None`
/// instead of an error, out of range indices are expected benign inputs when
/// probing table bounds.
pub fn card_from_index(index: usize) -> Option<Card> {
    if index >= Deck::SIZE {
        return None;
    }

    let rank = Rank::ranks().nth(index % RANK_COUNT)?;
    let suit = Suit::suits().nth(index / RANK_COUNT)?;
    Some(Card::new(rank, suit))
}

/// Computes the unique non-negative rank of an unordered cards combination.
///
/// With the card indices sorted descending as `d[0..k)` the rank is
/// `sum of C(d[i], k - i)`, a bijection from all k-subsets of the deck onto
/// `[0, C(52, k))`. Fails with [OverflowError] if the accumulated rank no
/// longer fits an i64, which cannot happen for 52 card inputs with k <= 10.
pub fn combination_rank(cards: &[Card]) -> Result<i64, OverflowError> {
    let mut indices = cards.iter().map(|&c| card_index(c)).collect::<Vec<_>>();
    indices.sort_unstable_by(|a, b| b.cmp(a));

    let k = indices.len();
    let mut rank = 0i64;
    for (i, &d) in indices.iter().enumerate() {
        let term = n_choose_r(d as u64, (k - i) as u64)?;
        rank = rank
            .checked_add(term)
            .ok_or(OverflowError::CombinationRank)?;
    }

    Ok(rank)
}
