// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokermaster Poker hand classifier and combinatorial indexer.
//!
//! This crate is the computational core of a Poker engine. It classifies a
//! five cards hand into one of the ten Texas hold 'em categories with the tie
//! break data needed to compare hands, selects the best five cards hand out
//! of a player's hole cards and the five community cards, and provides a
//! bijective numeric rank for card combinations suitable for building
//! precomputed lookup tables.
//!
//! To classify a hand use [classify] and compare the results with
//! [PokerHand::compare] or [PokerHand::is_better_than]:
//!
//! ```
//! # use pokermaster_eval::*;
//! let royal = [
//!     Card::new(Rank::Ten, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Spades),
//! ];
//! let hand = classify(&royal).unwrap();
//! assert_eq!(hand.category(), HandCategory::RoyalFlush);
//! ```
//!
//! To number card combinations use [combination_rank], which maps every
//! k-cards combination onto a distinct integer in `[0, C(52, k))`:
//!
//! ```
//! # use pokermaster_eval::*;
//! let lowest = [
//!     Card::new(Rank::Deuce, Suit::Spades),
//!     Card::new(Rank::Trey, Suit::Spades),
//! ];
//! assert_eq!(combination_rank(&lowest).unwrap(), 0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod best_hand;
mod classify;
mod combinatorics;
mod error;
mod hand;
mod index;
mod properties;

pub use best_hand::{COMMUNITY_CARDS, best_of_seven};
pub use classify::{HAND_SIZE, classify};
pub use combinatorics::{Combinations, combinations, n_choose_r};
pub use error::{HandError, OverflowError};
pub use hand::{HandCategory, PokerHand};
pub use index::{card_from_index, card_index, combination_rank};
pub use properties::HandProperties;

// Reexport cards types.
pub use pokermaster_cards::{Card, Deck, HoleCards, Rank, Suit};
