// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. A five cards hand is
//! evaluated to a [HandValue] that orders hands by poker strength, six and
//! seven cards hands are evaluated by searching all their five cards subsets.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use showdown_eval::*;
//! // 2c, 3c, .., Jc
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert!(v2 > v1);
//! assert_eq!(v2.rank(), HandRank::StraightFlush);
//!
//! let board = Card::parse_list("Ah2h3h4h5h9c2d").unwrap();
//! let v = HandValue::best(&board).unwrap();
//! assert_eq!(v.tiebreak(), 5);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue, best_hand, compare, evaluate};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, HoleCards, Rank, Suit};
