// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player hole cards.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, ParseCardError};

/// A concrete pair of two distinct hole cards.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HoleCards(Card, Card);

impl HoleCards {
    /// Creates hole cards from two cards, `None` if the cards are the same.
    pub fn new(c1: Card, c2: Card) -> Option<Self> {
        (c1 != c2).then_some(Self(c1, c2))
    }

    /// The first card.
    pub fn first(&self) -> Card {
        self.0
    }

    /// The second card.
    pub fn second(&self) -> Card {
        self.1
    }

    /// The two cards.
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    /// The mask of the two cards.
    #[inline]
    pub fn mask(&self) -> u64 {
        self.0.mask() | self.1.mask()
    }

    /// Checks if both cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }

    /// Checks if both cards have the same rank.
    pub fn is_pair(&self) -> bool {
        self.0.rank() == self.1.rank()
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl fmt::Debug for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HoleCards({}{})", self.0, self.1)
    }
}

impl FromStr for HoleCards {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Card::parse_list(s)?.as_slice() {
            &[c1, c2] => HoleCards::new(c1, c2)
                .ok_or_else(|| ParseCardError::DuplicateCard(s.to_string())),
            _ => Err(ParseCardError::InvalidCard(s.to_string())),
        }
    }
}

impl From<HoleCards> for String {
    fn from(hole: HoleCards) -> Self {
        hole.to_string()
    }
}

impl TryFrom<String> for HoleCards {
    type Error = ParseCardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn hole_cards_parse() {
        let hole = "7h8h".parse::<HoleCards>().unwrap();
        assert_eq!(hole.first(), Card::new(Rank::Seven, Suit::Hearts));
        assert_eq!(hole.second(), Card::new(Rank::Eight, Suit::Hearts));
        assert!(hole.is_suited());
        assert!(!hole.is_pair());
        assert_eq!(hole.to_string(), "7h8h");
        assert_eq!(hole.mask().count_ones(), 2);

        assert!(matches!(
            "7h7h".parse::<HoleCards>(),
            Err(ParseCardError::DuplicateCard(_))
        ));
        assert!(matches!(
            "7h8h9h".parse::<HoleCards>(),
            Err(ParseCardError::InvalidCard(_))
        ));
        assert!("7h8x".parse::<HoleCards>().is_err());
    }

    #[test]
    fn hole_cards_new() {
        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        assert!(HoleCards::new(ah, ah).is_none());

        let aa = HoleCards::new(ah, ad).unwrap();
        assert!(aa.is_pair());
        assert!(!aa.is_suited());
        assert_eq!(aa.cards(), [ah, ad]);
    }
}
