// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Players ranges and results.
use serde::{Deserialize, Serialize};

use showdown_cards::HoleCards;
use showdown_range::{RangeError, expand_range, parse_range};

/// A player and the pool of hands it can be dealt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRange {
    id: String,
    hands: Vec<HoleCards>,
}

impl PlayerRange {
    /// Creates a player range from expanded hands.
    pub fn new(id: impl Into<String>, hands: Vec<HoleCards>) -> Self {
        Self {
            id: id.into(),
            hands,
        }
    }

    /// Creates a player range expanding the given range tokens.
    pub fn from_tokens<I, S>(id: impl Into<String>, tokens: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(id, expand_range(tokens)?))
    }

    /// Creates a player range from a comma or whitespace separated range.
    pub fn parse(id: impl Into<String>, range: &str) -> Result<Self, RangeError> {
        Ok(Self::new(id, parse_range(range)?))
    }

    /// The player id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The player hands pool.
    pub fn hands(&self) -> &[HoleCards] {
        &self.hands
    }
}

/// A player simulation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    /// The player id.
    pub player_id: String,
    /// Hands won outright.
    pub wins: u64,
    /// Hands tied with one or more players.
    pub ties: u64,
    /// Credit given for the tied hands.
    pub tie_credit: f64,
    /// Hands evaluated, the same for all players.
    pub total: u64,
    /// The player equity percentage.
    pub equity: f64,
}

impl PlayerResult {
    pub(crate) fn new(
        player_id: &str,
        wins: u64,
        ties: u64,
        tie_credit: f64,
        total: u64,
    ) -> Self {
        let equity = if total == 0 {
            0.0
        } else {
            (wins as f64 + tie_credit) / total as f64 * 100.0
        };

        Self {
            player_id: player_id.to_string(),
            wins,
            ties,
            tie_credit,
            total,
            equity,
        }
    }
}
