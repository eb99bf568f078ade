// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hand classes.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use showdown_cards::{Card, HoleCards, Rank, Suit};

use crate::RangeError;

/// The shape of a starting hand class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Two cards of the same rank.
    Pair,
    /// Two ranks of the same suit.
    Suited,
    /// Two ranks of different suits.
    Offsuit,
}

/// One of the 169 distinct starting hand classes, like `AA`, `AKs`, or `AKo`.
///
/// The class ranks are stored with the high rank first, `KAs` and `AKs` are the
/// same class.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HandClass {
    high: Rank,
    low: Rank,
    shape: Shape,
}

impl HandClass {
    /// The number of distinct starting hand classes.
    pub const COUNT: usize = 169;

    /// Creates a pocket pair class.
    pub fn pair(rank: Rank) -> Self {
        Self {
            high: rank,
            low: rank,
            shape: Shape::Pair,
        }
    }

    /// Creates a suited class, `None` if the two ranks are the same.
    pub fn suited(r1: Rank, r2: Rank) -> Option<Self> {
        Self::unpaired(r1, r2, Shape::Suited)
    }

    /// Creates an offsuit class, `None` if the two ranks are the same.
    pub fn offsuit(r1: Rank, r2: Rank) -> Option<Self> {
        Self::unpaired(r1, r2, Shape::Offsuit)
    }

    fn unpaired(r1: Rank, r2: Rank, shape: Shape) -> Option<Self> {
        (r1 != r2).then(|| Self {
            high: r1.max(r2),
            low: r1.min(r2),
            shape,
        })
    }

    /// Returns all the classes, pairs from aces down, then for each high card
    /// from aces down the suited hands followed by the offsuit hands.
    pub fn all() -> impl Iterator<Item = HandClass> {
        let pairs = Rank::ranks().rev().map(HandClass::pair);
        let unpaired = Rank::ranks().rev().flat_map(|high| {
            let lows = move || Rank::ranks().rev().filter(move |&low| low < high);
            let suited = lows().filter_map(move |low| HandClass::suited(high, low));
            let offsuit = lows().filter_map(move |low| HandClass::offsuit(high, low));
            suited.chain(offsuit)
        });

        pairs.chain(unpaired)
    }

    /// The high rank.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The low rank, same as high for pairs.
    pub fn low(&self) -> Rank {
        self.low
    }

    /// The class shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The number of concrete hands in this class.
    pub fn combo_count(&self) -> usize {
        match self.shape {
            Shape::Pair => 6,
            Shape::Suited => 4,
            Shape::Offsuit => 12,
        }
    }

    /// Returns all the concrete hands in this class.
    pub fn combos(&self) -> Vec<HoleCards> {
        let (high, low) = (self.high, self.low);
        let mut combos = Vec::with_capacity(self.combo_count());

        for (i, s1) in Suit::suits().enumerate() {
            for (j, s2) in Suit::suits().enumerate() {
                let keep = match self.shape {
                    Shape::Pair => i < j,
                    Shape::Suited => i == j,
                    Shape::Offsuit => i != j,
                };

                if keep {
                    combos.extend(HoleCards::new(Card::new(high, s1), Card::new(low, s2)));
                }
            }
        }

        combos
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Shape::Pair => write!(f, "{}{}", self.high, self.low),
            Shape::Suited => write!(f, "{}{}s", self.high, self.low),
            Shape::Offsuit => write!(f, "{}{}o", self.high, self.low),
        }
    }
}

impl fmt::Debug for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandClass({self})")
    }
}

impl FromStr for HandClass {
    type Err = RangeError;

    /// Parses a two characters pair token or a three characters token ending
    /// with `s` or `o`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RangeError::InvalidRangeToken(s.to_string());
        let chars = s.chars().collect::<Vec<_>>();

        let (r1, r2, suffix) = match chars.as_slice() {
            &[r1, r2] => (r1, r2, None),
            &[r1, r2, suffix] => (r1, r2, Some(suffix)),
            _ => return Err(invalid()),
        };

        let r1 = Rank::from_char(r1).ok_or_else(invalid)?;
        let r2 = Rank::from_char(r2).ok_or_else(invalid)?;

        let class = match suffix {
            None if r1 == r2 => Some(HandClass::pair(r1)),
            Some('s' | 'S') => HandClass::suited(r1, r2),
            Some('o' | 'O') => HandClass::offsuit(r1, r2),
            _ => None,
        };

        class.ok_or_else(invalid)
    }
}

impl From<HandClass> for String {
    fn from(class: HandClass) -> Self {
        class.to_string()
    }
}

impl TryFrom<String> for HandClass {
    type Error = RangeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn parse_classes() {
        let aa = "AA".parse::<HandClass>().unwrap();
        assert_eq!(aa.shape(), Shape::Pair);
        assert_eq!(aa.high(), Rank::Ace);

        let aks = "AKs".parse::<HandClass>().unwrap();
        assert_eq!(aks.shape(), Shape::Suited);
        assert_eq!(aks, "KAs".parse().unwrap());
        assert_eq!("KAs".parse::<HandClass>().unwrap().to_string(), "AKs");

        let t9o = "T9o".parse::<HandClass>().unwrap();
        assert_eq!(t9o.shape(), Shape::Offsuit);
        assert_eq!(t9o.high(), Rank::Ten);
        assert_eq!(t9o.low(), Rank::Nine);
    }

    #[test]
    fn parse_invalid_classes() {
        for token in ["", "A", "AK", "AAs", "AAo", "AKx", "A1s", "1A", "AKso", "XX"] {
            assert_eq!(
                token.parse::<HandClass>(),
                Err(RangeError::InvalidRangeToken(token.to_string())),
                "{token}"
            );
        }
    }

    #[test]
    fn class_combos() {
        for class in HandClass::all() {
            let combos = class.combos();
            assert_eq!(combos.len(), class.combo_count(), "{class}");

            let unique = combos.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), combos.len(), "{class}");

            for hole in combos {
                assert_eq!(hole.first().rank(), class.high());
                assert_eq!(hole.second().rank(), class.low());
                match class.shape() {
                    Shape::Pair => assert!(hole.is_pair() && !hole.is_suited()),
                    Shape::Suited => assert!(hole.is_suited()),
                    Shape::Offsuit => assert!(!hole.is_suited() && !hole.is_pair()),
                }
            }
        }
    }

    #[test]
    fn all_classes() {
        let classes = HandClass::all().collect::<Vec<_>>();
        assert_eq!(classes.len(), HandClass::COUNT);

        let unique = classes.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), HandClass::COUNT);

        let combos = classes.iter().map(|c| c.combo_count()).sum::<usize>();
        assert_eq!(combos, 1_326);

        let names = classes.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(&names[..2], ["AA", "KK"]);
        assert_eq!(names[12], "22");
        assert_eq!(&names[13..16], ["AKs", "AQs", "AJs"]);
        assert_eq!(names[24], "A2s");
        assert_eq!(names[25], "AKo");
        assert_eq!(names[168], "32o");
    }
}
