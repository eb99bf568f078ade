// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Range tokens parsing and expansion.
use log::debug;
use std::str::FromStr;
use thiserror::Error;

use showdown_cards::HoleCards;

use crate::HandClass;

/// Range errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// A token that is not a pair, suited, offsuit, or concrete hand.
    #[error("invalid range token '{0}'")]
    InvalidRangeToken(String),
    /// A span token like `AA-QQ` or `A7s+`.
    #[error("range token '{0}' is not supported")]
    NotSupported(String),
    /// A percentage outside 0..=100.
    #[error("invalid percentage {0}, expected a value between 0 and 100")]
    InvalidPercentage(f64),
}

/// A parsed range token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    /// A starting hand class like `AKs`.
    Class(HandClass),
    /// A concrete hand like `7h8h`.
    Hand(HoleCards),
}

impl RangeToken {
    /// The concrete hands denoted by this token.
    pub fn combos(&self) -> Vec<HoleCards> {
        match self {
            RangeToken::Class(class) => class.combos(),
            RangeToken::Hand(hole) => vec![*hole],
        }
    }

    /// The number of concrete hands denoted by this token.
    pub fn combo_count(&self) -> usize {
        match self {
            RangeToken::Class(class) => class.combo_count(),
            RangeToken::Hand(_) => 1,
        }
    }
}

impl FromStr for RangeToken {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        if is_span(token) {
            return Err(RangeError::NotSupported(token.to_string()));
        }

        if token.len() == 4 {
            token
                .parse::<HoleCards>()
                .map(RangeToken::Hand)
                .map_err(|_| RangeError::InvalidRangeToken(token.to_string()))
        } else {
            token.parse::<HandClass>().map(RangeToken::Class)
        }
    }
}

/// Checks for span tokens like `A7s+` or `AA-QQ` made of valid classes.
fn is_span(token: &str) -> bool {
    let is_class = |s: &str| s.parse::<HandClass>().is_ok();

    if let Some(from) = token.strip_suffix('+') {
        is_class(from)
    } else if let Some((from, to)) = token.split_once('-') {
        is_class(from) && is_class(to)
    } else {
        false
    }
}

/// Expands range tokens into the concrete hands they denote.
///
/// Each token contributes all its combinations (6 for a pair, 4 for a suited,
/// 12 for an offsuit hand, 1 for a concrete hand) and the result is not
/// deduplicated, so sampling uniformly from it follows the deal frequencies.
///
/// Fails on the first invalid token without returning a partial expansion.
pub fn expand_range<I, S>(tokens: I) -> Result<Vec<HoleCards>, RangeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = tokens
        .into_iter()
        .map(|t| t.as_ref().parse::<RangeToken>())
        .collect::<Result<Vec<_>, _>>()?;

    let size = tokens.iter().map(RangeToken::combo_count).sum();
    let mut hands = Vec::with_capacity(size);
    for token in &tokens {
        hands.extend(token.combos());
    }

    debug!("Expanded {} tokens to {} hands", tokens.len(), hands.len());

    Ok(hands)
}

/// Parses and expands a comma or whitespace separated range like `"AA,KK AKs"`.
pub fn parse_range(range: &str) -> Result<Vec<HoleCards>, RangeError> {
    expand_range(
        range
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty()),
    )
}
