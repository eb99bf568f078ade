// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//! ```
//!
//! a [HoleCards] type for a player two cards, and a [Deck] type for removing
//! known cards, shuffling, dealing, and iterating cards in the deck.
//!
//! For example to complete a flop with two random cards:
//!
//! ```
//! # use showdown_cards::{Card, Deck};
//! let board = Card::parse_list("Kh7d2c").unwrap();
//! let dead = board.iter().fold(0, |mask, c| mask | c.mask());
//!
//! let mut deck = Deck::without(dead);
//! deck.shuffle(&mut rand::rng());
//! let turn = deck.deal().unwrap();
//! let river = deck.deal().unwrap();
//! assert!(!board.contains(&turn) && !board.contains(&river));
//! ```
//!
//! or to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};

mod hole;
pub use hole::HoleCards;
