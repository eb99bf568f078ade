// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand value.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use showdown_cards::{Card, Rank};

/// Evaluator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The number of cards is not valid for the evaluation.
    #[error("wrong number of cards {found}, expected {min} to {max}")]
    WrongCardCount {
        /// The number of cards passed to the evaluator.
        found: usize,
        /// The minimum number of cards.
        min: usize,
        /// The maximum number of cards.
        max: usize,
    },
}

/// The hand category, from weakest to strongest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandRank {
    /// High card.
    #[default]
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// The number of hand categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from weakest to strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a five cards hand.
///
/// Values compare first by [HandRank], then by the category tiebreak, then by
/// the packed kickers:
///
/// | Category        | Tiebreak                   | Kickers                |
/// |-----------------|----------------------------|------------------------|
/// | Straight flush  | straight high card         |                        |
/// | Four of a kind  | quads rank                 | kicker                 |
/// | Full house      | trips rank                 | pair rank              |
/// | Flush           | highest card               | other four cards       |
/// | Straight        | straight high card         |                        |
/// | Three of a kind | trips rank                 | other two cards        |
/// | Two pair        | high pair * 100 + low pair | kicker                 |
/// | One pair        | pair rank                  | other three cards      |
/// | High card       | highest card               | other four cards       |
///
/// A wheel (A-2-3-4-5) has a tiebreak of 5. Kickers are packed four bits per
/// rank value, highest first, so two values are equal only for hands of
/// identical strength.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: u32,
    kickers: u32,
}

impl HandValue {
    /// Evaluates exactly five cards.
    pub fn eval(cards: &[Card]) -> Result<HandValue, EvalError> {
        let hand: &[Card; 5] = cards.try_into().map_err(|_| EvalError::WrongCardCount {
            found: cards.len(),
            min: 5,
            max: 5,
        })?;

        Ok(eval5(hand))
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The category tiebreak.
    pub fn tiebreak(&self) -> u32 {
        self.tiebreak
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank, self.tiebreak)
    }
}

/// Evaluates a five cards hand.
#[inline]
pub(crate) fn eval5(cards: &[Card; 5]) -> HandValue {
    let mut ranks = cards.map(|c| c.rank().value());
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let suit = cards[0].suit();
    let is_flush = cards.iter().all(|c| c.suit() == suit);
    let straight = straight_high(&ranks);

    // (count, rank) groups sorted by count and then by rank, both descending.
    let mut counts = [0u8; 15];
    for &r in &ranks {
        counts[r as usize] += 1;
    }

    let mut groups = [(0u8, 0u8); 5];
    let mut num_groups = 0;
    for &r in &ranks {
        let count = counts[r as usize];
        if count > 0 {
            groups[num_groups] = (count, r);
            counts[r as usize] = 0;
            num_groups += 1;
        }
    }

    let groups = &mut groups[..num_groups];
    groups.sort_unstable_by(|a, b| b.cmp(a));
    let groups = &*groups;

    let kickers = |skip: usize| {
        groups[skip..]
            .iter()
            .fold(0u32, |acc, &(_, r)| (acc << 4) | r as u32)
    };

    let top = groups[0].1 as u32;
    let (rank, tiebreak, kickers) = match (straight, is_flush) {
        (Some(high), true) if high == Rank::Ace.value() => (HandRank::RoyalFlush, high as u32, 0),
        (Some(high), true) => (HandRank::StraightFlush, high as u32, 0),
        _ if groups[0].0 == 4 => (HandRank::FourOfAKind, top, kickers(1)),
        _ if groups[0].0 == 3 && groups[1].0 == 2 => (HandRank::FullHouse, top, kickers(1)),
        (_, true) => (HandRank::Flush, top, kickers(1)),
        (Some(high), false) => (HandRank::Straight, high as u32, 0),
        _ if groups[0].0 == 3 => (HandRank::ThreeOfAKind, top, kickers(1)),
        _ if groups[0].0 == 2 && groups[1].0 == 2 => {
            let low = groups[1].1 as u32;
            (HandRank::TwoPair, top * 100 + low, kickers(2))
        }
        _ if groups[0].0 == 2 => (HandRank::OnePair, top, kickers(1)),
        _ => (HandRank::HighCard, top, kickers(1)),
    };

    HandValue {
        rank,
        tiebreak,
        kickers,
    }
}

/// Returns the straight high card for ranks sorted in descending order.
fn straight_high(ranks: &[u8; 5]) -> Option<u8> {
    const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];

    if ranks.windows(2).all(|w| w[0] == w[1] + 1) {
        Some(ranks[0])
    } else if *ranks == WHEEL {
        Some(Rank::Five.value())
    } else {
        None
    }
}
