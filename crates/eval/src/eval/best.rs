// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand out of six or seven cards.
use showdown_cards::Card;

use super::value::{EvalError, HandValue, eval5};

/// Creates the table of all the 5-subsets positions of n cards.
///
/// M must be equal to nck(N, 5).
const fn make_subsets<const N: usize, const M: usize>() -> [[u8; 5]; M] {
    let mut out = [[0u8; 5]; M];
    let mut c = [0usize, 1, 2, 3, 4];
    let mut m = 0;

    while m < M {
        let mut k = 0;
        while k < 5 {
            out[m][k] = c[k] as u8;
            k += 1;
        }

        m += 1;

        // Move the rightmost position that has room and reset the ones after it.
        let mut i = 4;
        while i > 0 && c[i] == N - 5 + i {
            i -= 1;
        }

        c[i] += 1;
        let mut j = i + 1;
        while j < 5 {
            c[j] = c[j - 1] + 1;
            j += 1;
        }
    }

    out
}

/// The 21 ways of choosing 5 cards out of 7.
const SUBSETS_7: [[u8; 5]; 21] = make_subsets::<7, 21>();

/// The 6 ways of choosing 5 cards out of 6.
const SUBSETS_6: [[u8; 5]; 6] = make_subsets::<6, 6>();

impl HandValue {
    /// Evaluates the best five cards hand out of 5, 6, or 7 cards.
    ///
    /// All the five cards subsets are evaluated, the best hand doesn't always
    /// use the highest ranked cards.
    pub fn best(cards: &[Card]) -> Result<HandValue, EvalError> {
        match cards.len() {
            5 => HandValue::eval(cards),
            6 => Ok(best_of(cards, &SUBSETS_6)),
            7 => Ok(best_of(cards, &SUBSETS_7)),
            found => Err(EvalError::WrongCardCount {
                found,
                min: 5,
                max: 7,
            }),
        }
    }

    /// Evaluates the best hand for two hole cards and a five cards board.
    #[inline]
    pub fn best7(hole: [Card; 2], board: &[Card; 5]) -> HandValue {
        let cards = [
            hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
        ];
        best_of(&cards, &SUBSETS_7)
    }
}

#[inline]
fn best_of(cards: &[Card], subsets: &[[u8; 5]]) -> HandValue {
    subsets
        .iter()
        .map(|s| eval5(&s.map(|pos| cards[pos as usize])))
        .fold(HandValue::default(), HandValue::max)
}
