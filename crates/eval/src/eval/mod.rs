// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator sorts five cards by rank and checks for flushes, straights
//! (including the five high wheel), and rank groups to compute a [HandValue]
//! made of a [HandRank] category, a category tiebreak, and packed kickers.
//!
//! Hands with six or seven cards are evaluated by searching all their five
//! cards subsets using precomputed positions tables, see [HandValue::best] and
//! [HandValue::best7] for the simulation hot path.
use std::cmp::Ordering;

use showdown_cards::Card;

mod best;
mod value;
pub use value::{EvalError, HandRank, HandValue};

/// Evaluates exactly five cards.
pub fn evaluate(cards: &[Card]) -> Result<HandValue, EvalError> {
    HandValue::eval(cards)
}

/// Evaluates the best five cards hand out of 5, 6, or 7 cards.
pub fn best_hand(cards: &[Card]) -> Result<HandValue, EvalError> {
    HandValue::best(cards)
}

/// Compares two hand values, `Equal` is a tie.
///
/// Use `compare(a, b) as i8` for a -1, 0, 1 result.
pub fn compare(a: &HandValue, b: &HandValue) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng, seq::SliceRandom};
    use showdown_cards::Deck;

    #[test]
    fn compare_is_total_order() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut cards = Deck::default().into_iter().collect::<Vec<_>>();

        let values = (0..500)
            .map(|_| {
                cards.shuffle(&mut rng);
                best_hand(&cards[..7]).unwrap()
            })
            .collect::<Vec<_>>();

        for x in &values {
            assert_eq!(compare(x, x), Ordering::Equal);
            assert_eq!(compare(x, x) as i8, 0);

            for y in &values {
                assert_eq!(compare(x, y), compare(y, x).reverse());

                for z in values.iter().take(50) {
                    if compare(x, y).is_le() && compare(y, z).is_le() {
                        assert!(compare(x, z).is_le());
                    }
                }
            }
        }
    }

    #[test]
    fn compare_signs() {
        let royal = evaluate(&Card::parse_list("AsKsQsJsTs").unwrap()).unwrap();
        let quads = evaluate(&Card::parse_list("AcAdAhAs2c").unwrap()).unwrap();
        assert_eq!(compare(&royal, &quads) as i8, 1);
        assert_eq!(compare(&quads, &royal) as i8, -1);
    }
}
