// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown starting hand ranges.
//!
//! This crate expands range tokens into the concrete hands they denote:
//!
//! ```
//! # use showdown_range::*;
//! // 6 pairs + 4 suited + 12 offsuit hands.
//! let hands = expand_range(["QQ", "AKs", "AKo"]).unwrap();
//! assert_eq!(hands.len(), 22);
//!
//! // A concrete hand.
//! let hands = expand_range(["7h8h"]).unwrap();
//! assert_eq!(hands.len(), 1);
//!
//! assert!(matches!(expand_range(["AK"]), Err(RangeError::InvalidRangeToken(_))));
//! assert!(matches!(expand_range(["A7s+"]), Err(RangeError::NotSupported(_))));
//! ```
//!
//! and ranks the 169 starting hand classes to build percentage presets:
//!
//! ```
//! # use showdown_range::*;
//! let top = ranking().top_percent(10.0).unwrap();
//! assert_eq!(top.len(), 17);
//! assert_eq!(top[0].to_string(), "AA");
//!
//! let tokens = top.iter().map(|c| c.to_string()).collect::<Vec<_>>();
//! let hands = expand_range(&tokens).unwrap();
//! assert_eq!(hands.len(), top.iter().map(|c| c.combo_count()).sum::<usize>());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod class;
pub use class::{HandClass, Shape};

mod parser;
pub use parser::{RangeError, RangeToken, expand_range, parse_range};

pub mod ranking;
pub use ranking::{StartingHandRanking, ranking};
