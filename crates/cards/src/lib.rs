// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokermaster Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use pokermaster_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(kd.to_string(), "KD");
//! ```
//!
//! a [HoleCards] pair for a player's two private cards, and a [Deck] type for
//! shuffling, dealing, and iterating card combinations.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use pokermaster_cards::{Card, Deck, Rank, Suit};
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, HoleCards, Rank, Suit};
