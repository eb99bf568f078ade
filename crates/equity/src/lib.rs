// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Monte Carlo equity simulator.
//!
//! Computes the equity of two or more players, each with a range of starting
//! hands, on an empty or partially dealt board:
//!
//! ```
//! # use showdown_equity::*;
//! # use rand::{SeedableRng, rngs::SmallRng};
//! let players = vec![
//!     PlayerRange::from_tokens("hero", ["AA"]).unwrap(),
//!     PlayerRange::from_tokens("villain", ["KK"]).unwrap(),
//! ];
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let results = simulate(players, &[], 10_000, &mut rng).unwrap();
//! assert!(results[0].equity > 75.0);
//! assert_eq!(results[0].total, results[1].total);
//! ```
//!
//! Use [Simulation] to step through a simulation, or to stop a long run from
//! another thread.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use showdown_cards::Card;

mod player;
pub use player::{PlayerRange, PlayerResult};

mod simulation;
pub use simulation::{EquityError, Outcome, Report, Simulation, Tally, simulate};

/// How tied hands are credited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieCredit {
    /// Each of the k tied players gets 1/k of the pot.
    #[default]
    Split,
    /// Each tied player gets half pot whatever the number of tied players.
    Half,
}

/// Simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The number of simulation steps.
    pub iterations: u64,
    /// The random generator seed, a random seed if not set.
    pub seed: Option<u64>,
    /// Ties credit.
    pub tie_credit: TieCredit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: 100_000,
            seed: None,
            tie_credit: TieCredit::Split,
        }
    }
}

/// Runs a simulation with the given configuration.
pub fn run(
    config: &Config,
    players: Vec<PlayerRange>,
    board: &[Card],
) -> Result<Report, EquityError> {
    if config.iterations == 0 {
        return Err(EquityError::InvalidIterations);
    }

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut sim = Simulation::new(players, board)?;

    let now = Instant::now();
    sim.run(config.iterations, &mut rng)?;
    simulation::log_summary(&sim, now);

    Ok(sim.report(config.tie_credit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> Vec<PlayerRange> {
        vec![
            PlayerRange::parse("A", "AKs AKo").unwrap(),
            PlayerRange::parse("B", "QQ").unwrap(),
        ]
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.iterations, 100_000);
        assert_eq!(config.seed, None);
        assert_eq!(config.tie_credit, TieCredit::Split);
    }

    #[test]
    fn seeded_config() {
        let config = Config {
            iterations: 2_000,
            seed: Some(7),
            ..Default::default()
        };

        let r1 = run(&config, players(), &[]).unwrap();
        let r2 = run(&config, players(), &[]).unwrap();
        assert_eq!(r1, r2);
        assert_eq!(r1.attempts, 2_000);
        assert_eq!(r1.players[0].total + r1.conflicts, 2_000);

        // QQ is about a 55% favourite against AK.
        assert!((r1.players[1].equity - 55.0).abs() < 4.0, "{:?}", r1.players[1]);
    }

    #[test]
    fn zero_iterations() {
        let config = Config {
            iterations: 0,
            ..Default::default()
        };

        assert_eq!(
            run(&config, players(), &[]),
            Err(EquityError::InvalidIterations)
        );
    }
}
