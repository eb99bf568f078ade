// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hands strength ranking.
//!
//! The 169 starting hand classes are ordered by a score that rewards pairs,
//! high cards, suitedness, and connectivity:
//!
//! ```text
//!   pair:     20000 + 100 * R
//!   non pair: 1000 * H + 50 * L + suited + connectivity + high card
//!
//!   suited       = 200 if suited
//!   connectivity = 100, 50, 25 for 0, 1, 2 ranks between H and L
//!   high card    = 500 if H is an ace, plus 100 if H is jack or better
//! ```
//!
//! Classes with the same score keep the [HandClass::all] order.
use ahash::AHashSet;
use log::debug;
use std::sync::LazyLock;

use crate::{HandClass, RangeError, Shape};

/// The number of two cards hands.
const NUM_HANDS: usize = 1_326;

/// The process wide ranking.
static RANKING: LazyLock<StartingHandRanking> = LazyLock::new(StartingHandRanking::build);

/// Returns the process wide starting hands ranking.
pub fn ranking() -> &'static StartingHandRanking {
    &RANKING
}

/// Returns the ranking score of a starting hand class.
pub fn score(class: &HandClass) -> u32 {
    let high = class.high().value() as u32;
    let low = class.low().value() as u32;

    if class.shape() == Shape::Pair {
        return 20_000 + 100 * high;
    }

    let suited = if class.shape() == Shape::Suited { 200 } else { 0 };

    let connectivity = match high - low - 1 {
        0 => 100,
        1 => 50,
        2 => 25,
        _ => 0,
    };

    let mut high_card = 0;
    if high == 14 {
        high_card += 500;
    }

    if high >= 11 {
        high_card += 100;
    }

    1_000 * high + 50 * low + suited + connectivity + high_card
}

/// The 169 starting hand classes ordered from strongest to weakest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingHandRanking {
    hands: Vec<HandClass>,
}

impl StartingHandRanking {
    /// Builds the ranking, use [ranking] for the shared instance.
    ///
    /// Panics if the ranking doesn't contain exactly 169 unique classes.
    pub fn build() -> Self {
        let mut hands = HandClass::all().collect::<Vec<_>>();

        // Stable sort to keep the generation order on ties.
        hands.sort_by_key(|class| std::cmp::Reverse(score(class)));

        assert_eq!(hands.len(), HandClass::COUNT, "ranking must have 169 hands");
        let unique = hands.iter().collect::<AHashSet<_>>();
        assert_eq!(unique.len(), hands.len(), "ranking has duplicate hands");

        debug!(
            "Built starting hands ranking from {} to {}",
            hands[0],
            hands[hands.len() - 1]
        );

        Self { hands }
    }

    /// The ranked classes, strongest first.
    pub fn hands(&self) -> &[HandClass] {
        &self.hands
    }

    /// The position of a class in the ranking, 0 is the strongest.
    pub fn position(&self, class: &HandClass) -> Option<usize> {
        self.hands.iter().position(|c| c == class)
    }

    /// Returns the strongest `round(percent / 100 * 169)` classes.
    ///
    /// The percentage counts classes, not combinations, see
    /// [StartingHandRanking::top_percent_combos] for a percentage of dealt hands.
    pub fn top_percent(&self, percent: f64) -> Result<&[HandClass], RangeError> {
        check_percent(percent)?;

        let count = (percent / 100.0 * self.hands.len() as f64).round() as usize;
        Ok(&self.hands[..count.min(self.hands.len())])
    }

    /// Returns the strongest classes that cover `percent` of the 1326 two
    /// cards hands.
    ///
    /// Classes are added until their combinations reach the target, so the
    /// last class can overshoot it by less than its own combinations.
    pub fn top_percent_combos(&self, percent: f64) -> Result<&[HandClass], RangeError> {
        check_percent(percent)?;

        let target = (percent / 100.0 * NUM_HANDS as f64).round() as usize;
        let mut combos = 0;
        let count = self
            .hands
            .iter()
            .take_while(|class| {
                let take = combos < target;
                combos += class.combo_count();
                take
            })
            .count();

        Ok(&self.hands[..count])
    }
}

fn check_percent(percent: f64) -> Result<(), RangeError> {
    if (0.0..=100.0).contains(&percent) {
        Ok(())
    } else {
        Err(RangeError::InvalidPercentage(percent))
    }
}
