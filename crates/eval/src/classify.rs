// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification dispatch.
use pokermaster_cards::{Card, Rank};

use crate::error::HandError;
use crate::hand::{HandCategory, PokerHand};
use crate::properties::HandProperties;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

type Predicate = fn(&HandProperties) -> bool;
type Builder = fn(&[Card; 5], &HandProperties) -> Result<PokerHand, HandError>;

/// Category predicates paired with their builders, best category first.
///
/// Stronger categories satisfy weaker predicates (a full house is also a
/// three of a kind), so dispatch MUST walk this table in order; the high
/// card predicate at the end matches everything.
const CLASSIFIERS: [(Predicate, Builder); 10] = [
    (HandProperties::is_royal_flush, build_royal_flush),
    (HandProperties::is_straight_flush, build_straight_flush),
    (HandProperties::is_four_of_a_kind, build_four_of_a_kind),
    (HandProperties::is_full_house, build_full_house),
    (HandProperties::is_flush, build_flush),
    (HandProperties::is_straight, build_straight),
    (HandProperties::is_three_of_a_kind, build_three_of_a_kind),
    (HandProperties::is_two_pair, build_two_pair),
    (HandProperties::is_one_pair, build_one_pair),
    (always, build_high_card),
];

fn always(_: &HandProperties) -> bool {
    true
}

/// Classifies five cards into the best hand they make.
///
/// The cards may come in any order; classification is deterministic and
/// classifying the same five cards always yields equal hands. Fails with
/// [HandError::InvalidHandSize] for any other number of cards.
pub fn classify(cards: &[Card]) -> Result<PokerHand, HandError> {
    let mut hand: [Card; 5] = cards
        .try_into()
        .map_err(|_| HandError::InvalidHandSize {
            expected: HAND_SIZE,
            actual: cards.len(),
        })?;
    hand.sort_unstable();

    let properties = HandProperties::from_sorted(&hand);
    for (predicate, builder) in CLASSIFIERS {
        if predicate(&properties) {
            return builder(&hand, &properties);
        }
    }

    unreachable!("the high card predicate matches every hand")
}

/// All five ranks of a rank-ascending hand, descending.
fn ranks_descending(cards: &[Card; 5]) -> [Rank; 5] {
    let mut ranks = cards.map(|c| c.rank());
    ranks.reverse();
    ranks
}

fn build_royal_flush(cards: &[Card; 5], _: &HandProperties) -> Result<PokerHand, HandError> {
    Ok(PokerHand::RoyalFlush {
        suit: cards[0].suit(),
    })
}

fn build_straight_flush(
    cards: &[Card; 5],
    properties: &HandProperties,
) -> Result<PokerHand, HandError> {
    Ok(PokerHand::StraightFlush {
        high: properties.high_card_rank(),
        suit: cards[0].suit(),
        cards: *cards,
    })
}

fn build_four_of_a_kind(
    cards: &[Card; 5],
    properties: &HandProperties,
) -> Result<PokerHand, HandError> {
    const CATEGORY: HandCategory = HandCategory::FourOfAKind;

    let mut quad = None;
    let mut kicker = None;
    for (&rank, &count) in properties.rank_counts() {
        match count {
            4 => quad = Some(rank),
            1 => kicker = Some(rank),
            repetitions => {
                return Err(HandError::InvalidRepetitionShape {
                    category: CATEGORY,
                    repetitions,
                });
            }
        }
    }

    let quad = quad.ok_or(HandError::MissingExpectedRepetition {
        category: CATEGORY,
        expected: 4,
    })?;
    let kicker = kicker.ok_or(HandError::MissingExpectedRepetition {
        category: CATEGORY,
        expected: 1,
    })?;

    Ok(PokerHand::FourOfAKind {
        quad,
        kicker,
        cards: *cards,
    })
}

fn build_full_house(
    cards: &[Card; 5],
    properties: &HandProperties,
) -> Result<PokerHand, HandError> {
    const CATEGORY: HandCategory = HandCategory::FullHouse;

    let mut triplet = None;
    let mut pair = None;
    for (&rank, &count) in properties.rank_counts() {
        match count {
            3 => triplet = Some(rank),
            2 => pair = Some(rank),
            repetitions => {
                return Err(HandError::InvalidRepetitionShape {
                    category: CATEGORY,
                    repetitions,
                });
            }
        }
    }

    let triplet = triplet.ok_or(HandError::MissingExpectedRepetition {
        category: CATEGORY,
        expected: 3,
    })?;
    let pair = pair.ok_or(HandError::MissingExpectedRepetition {
        category: CATEGORY,
        expected: 2,
    })?;

    Ok(PokerHand::FullHouse {
        triplet,
        pair,
        cards: *cards,
    })
}

fn build_flush(cards: &[Card; 5], _: &HandProperties) -> Result<PokerHand, HandError> {
    Ok(PokerHand::Flush {
        suit: cards[0].suit(),
        ranks: ranks_descending(cards),
        cards: *cards,
    })
}

fn build_straight(cards: &[Card; 5], properties: &HandProperties) -> Result<PokerHand, HandError> {
    Ok(PokerHand::Straight {
        high: properties.high_card_rank(),
        cards: *cards,
    })
}

fn build_three_of_a_kind(
    cards: &[Card; 5],
    properties: &HandProperties,
) -> Result<PokerHand, HandError> {
    const CATEGORY: HandCategory = HandCategory::ThreeOfAKind;

    let mut triplet = None;
    let mut kickers = Vec::with_capacity(2);
    for (&rank, &count) in properties.rank_counts() {
        let mut count = count;
        if count >= 3 && triplet.is_none() {
            triplet = Some(rank);
            count -= 3;
        }

        // A repetition above three folds its excess into the kickers.
        while kickers.len() < 2 && count > 0 {
            kickers.push(rank);
            count -= 1;
        }
    }

    let triplet = triplet.ok_or(HandError::MissingExpectedRepetition {
        category: CATEGORY,
        expected: 3,
    })?;
    if kickers.len() < 2 {
        return Err(HandError::MissingExpectedRepetition {
            category: CATEGORY,
            expected: 1,
        });
    }

    Ok(PokerHand::ThreeOfAKind {
        triplet,
        high_kicker: kickers[0].max(kickers[1]),
        low_kicker: kickers[0].min(kickers[1]),
        cards: *cards,
    })
}

fn build_two_pair(cards: &[Card; 5], properties: &HandProperties) -> Result<PokerHand, HandError> {
    const CATEGORY: HandCategory = HandCategory::TwoPair;

    let mut pairs = Vec::with_capacity(2);
    let mut kicker = None;
    for (&rank, &count) in properties.rank_counts() {
        match count {
            2 => pairs.push(rank),
            1 => kicker = Some(rank),
            repetitions => {
                return Err(HandError::InvalidRepetitionShape {
                    category: CATEGORY,
                    repetitions,
                });
            }
        }
    }

    let (&first, &second) = match pairs.as_slice() {
        [first, second] => (first, second),
        _ => {
            return Err(HandError::MissingExpectedRepetition {
                category: CATEGORY,
                expected: 2,
            });
        }
    };
    let kicker = kicker.ok_or(HandError::MissingExpectedRepetition {
        category: CATEGORY,
        expected: 1,
    })?;

    Ok(PokerHand::TwoPair {
        high_pair: first.max(second),
        low_pair: first.min(second),
        kicker,
        cards: *cards,
    })
}

fn build_one_pair(cards: &[Card; 5], properties: &HandProperties) -> Result<PokerHand, HandError> {
    const CATEGORY: HandCategory = HandCategory::OnePair;

    let mut pair = None;
    let mut kickers = Vec::with_capacity(3);
    for (&rank, &count) in properties.rank_counts() {
        if count == 2 && pair.is_none() {
            pair = Some(rank);
            continue;
        }

        // Cards of a degraded stronger grouping all become kickers.
        for _ in 0..count {
            kickers.push(rank);
        }
    }

    let pair = pair.ok_or(HandError::MissingExpectedRepetition {
        category: CATEGORY,
        expected: 2,
    })?;

    kickers.sort_unstable_by(|a, b| b.cmp(a));
    let kickers: [Rank; 3] =
        kickers
            .try_into()
            .map_err(|_| HandError::MissingExpectedRepetition {
                category: CATEGORY,
                expected: 1,
            })?;

    Ok(PokerHand::OnePair {
        pair,
        kickers,
        cards: *cards,
    })
}

fn build_high_card(cards: &[Card; 5], _: &HandProperties) -> Result<PokerHand, HandError> {
    Ok(PokerHand::HighCard {
        ranks: ranks_descending(cards),
        cards: *cards,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokermaster_cards::Suit;

    fn cards(hand: [(Rank, Suit); 5]) -> [Card; 5] {
        hand.map(|(r, s)| Card::new(r, s))
    }

    #[test]
    fn classify_high_card() {
        let hand = classify(&cards([
            (Rank::Ace, Suit::Spades),
            (Rank::Nine, Suit::Hearts),
            (Rank::Seven, Suit::Diamonds),
            (Rank::Four, Suit::Clubs),
            (Rank::Deuce, Suit::Spades),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::HighCard {
                ranks: [Rank::Ace, Rank::Nine, Rank::Seven, Rank::Four, Rank::Deuce],
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_one_pair() {
        let hand = classify(&cards([
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Diamonds),
            (Rank::Nine, Suit::Hearts),
            (Rank::Six, Suit::Clubs),
            (Rank::Trey, Suit::Spades),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::OnePair {
                pair: Rank::Ace,
                kickers: [Rank::Nine, Rank::Six, Rank::Trey],
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_two_pair() {
        let hand = classify(&cards([
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Diamonds),
            (Rank::King, Suit::Clubs),
            (Rank::King, Suit::Hearts),
            (Rank::Seven, Suit::Spades),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::TwoPair {
                high_pair: Rank::Ace,
                low_pair: Rank::King,
                kicker: Rank::Seven,
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_three_of_a_kind() {
        let hand = classify(&cards([
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Diamonds),
            (Rank::Ace, Suit::Clubs),
            (Rank::King, Suit::Spades),
            (Rank::Seven, Suit::Diamonds),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::ThreeOfAKind {
                triplet: Rank::Ace,
                high_kicker: Rank::King,
                low_kicker: Rank::Seven,
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_wheel_straight() {
        let hand = classify(&cards([
            (Rank::Ace, Suit::Spades),
            (Rank::Deuce, Suit::Diamonds),
            (Rank::Trey, Suit::Clubs),
            (Rank::Four, Suit::Hearts),
            (Rank::Five, Suit::Spades),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::Straight {
                high: Rank::Five,
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_paired_five_near_wheel_is_one_pair() {
        // A run into a repeated five under an ace is no straight.
        let hand = classify(&cards([
            (Rank::Trey, Suit::Hearts),
            (Rank::Four, Suit::Diamonds),
            (Rank::Five, Suit::Hearts),
            (Rank::Five, Suit::Spades),
            (Rank::Ace, Suit::Clubs),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::OnePair {
                pair: Rank::Five,
                kickers: [Rank::Ace, Rank::Four, Rank::Trey],
                cards: hand.cards(),
            }
        );

        let hand = classify(&cards([
            (Rank::Four, Suit::Hearts),
            (Rank::Five, Suit::Diamonds),
            (Rank::Five, Suit::Hearts),
            (Rank::Five, Suit::Spades),
            (Rank::Ace, Suit::Clubs),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::ThreeOfAKind {
                triplet: Rank::Five,
                high_kicker: Rank::Ace,
                low_kicker: Rank::Four,
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_king_high_straight() {
        let hand = classify(&cards([
            (Rank::Nine, Suit::Spades),
            (Rank::Ten, Suit::Diamonds),
            (Rank::Jack, Suit::Clubs),
            (Rank::Queen, Suit::Hearts),
            (Rank::King, Suit::Spades),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::Straight {
                high: Rank::King,
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_flush() {
        let hand = classify(&cards([
            (Rank::Ace, Suit::Spades),
            (Rank::Ten, Suit::Spades),
            (Rank::Eight, Suit::Spades),
            (Rank::Five, Suit::Spades),
            (Rank::Deuce, Suit::Spades),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::Flush {
                suit: Suit::Spades,
                ranks: [Rank::Ace, Rank::Ten, Rank::Eight, Rank::Five, Rank::Deuce],
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_full_house() {
        let hand = classify(&cards([
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Diamonds),
            (Rank::Ace, Suit::Clubs),
            (Rank::King, Suit::Spades),
            (Rank::King, Suit::Diamonds),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::FullHouse {
                triplet: Rank::Ace,
                pair: Rank::King,
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_four_of_a_kind() {
        let hand = classify(&cards([
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Diamonds),
            (Rank::Ace, Suit::Clubs),
            (Rank::Ace, Suit::Hearts),
            (Rank::King, Suit::Spades),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::FourOfAKind {
                quad: Rank::Ace,
                kicker: Rank::King,
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_straight_flush() {
        let hand = classify(&cards([
            (Rank::Five, Suit::Hearts),
            (Rank::Six, Suit::Hearts),
            (Rank::Seven, Suit::Hearts),
            (Rank::Eight, Suit::Hearts),
            (Rank::Nine, Suit::Hearts),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::StraightFlush {
                high: Rank::Nine,
                suit: Suit::Hearts,
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_wheel_straight_flush() {
        let hand = classify(&cards([
            (Rank::Ace, Suit::Clubs),
            (Rank::Deuce, Suit::Clubs),
            (Rank::Trey, Suit::Clubs),
            (Rank::Four, Suit::Clubs),
            (Rank::Five, Suit::Clubs),
        ]))
        .unwrap();

        assert_eq!(
            hand,
            PokerHand::StraightFlush {
                high: Rank::Five,
                suit: Suit::Clubs,
                cards: hand.cards(),
            }
        );
    }

    #[test]
    fn classify_royal_flush() {
        let hand = classify(&cards([
            (Rank::Ten, Suit::Spades),
            (Rank::Jack, Suit::Spades),
            (Rank::Queen, Suit::Spades),
            (Rank::King, Suit::Spades),
            (Rank::Ace, Suit::Spades),
        ]))
        .unwrap();

        assert_eq!(hand, PokerHand::RoyalFlush { suit: Suit::Spades });
    }

    #[test]
    fn classify_wrong_hand_size() {
        let three = cards([
            (Rank::Ace, Suit::Spades),
            (Rank::King, Suit::Spades),
            (Rank::Queen, Suit::Spades),
            (Rank::Jack, Suit::Spades),
            (Rank::Ten, Suit::Spades),
        ]);

        assert_eq!(
            classify(&three[..3]),
            Err(HandError::InvalidHandSize {
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(
            classify(&[]),
            Err(HandError::InvalidHandSize {
                expected: 5,
                actual: 0
            })
        );
    }

    #[test]
    fn classify_is_order_independent() {
        let mut input = cards([
            (Rank::King, Suit::Hearts),
            (Rank::Ace, Suit::Spades),
            (Rank::Ace, Suit::Diamonds),
            (Rank::Seven, Suit::Spades),
            (Rank::King, Suit::Clubs),
        ]);

        let hand = classify(&input).unwrap();
        input.reverse();
        assert_eq!(classify(&input), Ok(hand.clone()));
        input.swap(1, 3);
        assert_eq!(classify(&input), Ok(hand));
    }

    #[test]
    fn classify_all_hands_category_frequencies() {
        use pokermaster_cards::Deck;

        // The canonical five cards category frequencies.
        let mut counts = [0usize; 10];
        Deck::default().for_each(5, |hand| {
            let category = classify(hand).unwrap().category();
            counts[category as usize] += 1;
        });

        assert_eq!(counts[HandCategory::RoyalFlush as usize], 4);
        assert_eq!(counts[HandCategory::StraightFlush as usize], 36);
        assert_eq!(counts[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(counts[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(counts[HandCategory::Flush as usize], 5_108);
        assert_eq!(counts[HandCategory::Straight as usize], 10_200);
        assert_eq!(counts[HandCategory::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(counts[HandCategory::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandCategory::HighCard as usize], 1_302_540);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }

    #[test]
    fn classify_is_idempotent() {
        let input = cards([
            (Rank::Nine, Suit::Spades),
            (Rank::Ten, Suit::Diamonds),
            (Rank::Jack, Suit::Clubs),
            (Rank::Queen, Suit::Hearts),
            (Rank::King, Suit::Spades),
        ]);

        assert_eq!(classify(&input).unwrap(), classify(&input).unwrap());
    }
}
