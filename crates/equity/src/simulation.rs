// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity simulation.
use log::{debug, error, info};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::Instant,
};
use thiserror::Error;

use showdown_cards::{Card, Deck, HoleCards, Rank, Suit};
use showdown_eval::HandValue;

use crate::{PlayerRange, PlayerResult, TieCredit};

/// The number of cards in a complete board.
const BOARD_SIZE: usize = 5;

/// Simulation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    /// Less than two players with a non empty range.
    #[error("at least 2 players with a non empty range are required, found {found}")]
    InsufficientPlayers {
        /// The number of players with a non empty range.
        found: usize,
    },
    /// A player with an empty range next to other valid players.
    #[error("player '{0}' has an empty range")]
    EmptyRange(String),
    /// A board that is not empty, a flop, a turn, or a river.
    #[error("invalid board size {0}, expected 0, 3, 4 or 5 cards")]
    InvalidBoardSize(usize),
    /// A run with zero iterations.
    #[error("the number of iterations must be positive")]
    InvalidIterations,
    /// Not enough cards left in the deck to complete the board.
    #[error("deck exhausted, {needed} cards needed but only {remaining} left")]
    DeckExhausted {
        /// Cards needed to complete the board.
        needed: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// The outcome of a simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The hand was evaluated and counted.
    Counted,
    /// The sampled hands shared a card, the hand was skipped.
    Conflict,
}

/// A player counters.
#[derive(Debug, Clone, Default, PartialEq)]
struct PlayerTally {
    wins: u64,
    ties: u64,
    /// Sum of 1/k for each k-ways tie.
    split: f64,
}

/// Simulation counters.
///
/// Tallies from runs on the same players can be merged, so that a run can be
/// split into independent parts each with its own random source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    players: Vec<PlayerTally>,
    attempts: u64,
    counted: u64,
    conflicts: u64,
}

impl Tally {
    fn new(num_players: usize) -> Self {
        Self {
            players: vec![PlayerTally::default(); num_players],
            ..Default::default()
        }
    }

    /// Adds another tally counters to this tally.
    ///
    /// Panics if the tallies are for a different number of players.
    pub fn merge(&mut self, other: &Tally) {
        assert_eq!(self.players.len(), other.players.len());

        for (p, o) in self.players.iter_mut().zip(&other.players) {
            p.wins += o.wins;
            p.ties += o.ties;
            p.split += o.split;
        }

        self.attempts += other.attempts;
        self.counted += other.counted;
        self.conflicts += other.conflicts;
    }

    /// Number of simulation steps.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Number of evaluated hands.
    pub fn counted(&self) -> u64 {
        self.counted
    }

    /// Number of skipped hands.
    pub fn conflicts(&self) -> u64 {
        self.conflicts
    }
}

/// A simulation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The players results in the simulation players order.
    pub players: Vec<PlayerResult>,
    /// The fixed board cards.
    pub board: Vec<Card>,
    /// Number of simulation steps.
    pub attempts: u64,
    /// Number of steps skipped because of card conflicts.
    pub conflicts: u64,
}

/// A Monte Carlo equity simulation.
///
/// Each [Simulation::step] samples a hand for each player, completes the
/// board, and credits the players with the best hand. Steps where two players
/// or a player and the board share a card are skipped and counted as
/// conflicts.
#[derive(Debug, Clone)]
pub struct Simulation {
    players: Vec<PlayerRange>,
    board: Vec<Card>,
    board_mask: u64,
    board_conflict: bool,
    tally: Tally,
    // Per step buffers.
    holes: Vec<HoleCards>,
    values: Vec<HandValue>,
}

impl Simulation {
    /// Creates a new simulation for the given players and fixed board.
    pub fn new(players: Vec<PlayerRange>, board: &[Card]) -> Result<Self, EquityError> {
        let found = players.iter().filter(|p| !p.hands().is_empty()).count();
        if found < 2 {
            return Err(EquityError::InsufficientPlayers { found });
        }

        if let Some(p) = players.iter().find(|p| p.hands().is_empty()) {
            return Err(EquityError::EmptyRange(p.id().to_string()));
        }

        if !matches!(board.len(), 0 | 3 | 4 | 5) {
            return Err(EquityError::InvalidBoardSize(board.len()));
        }

        let board_mask = board.iter().fold(0, |mask, c| mask | c.mask());
        let board_conflict = board_mask.count_ones() as usize != board.len();

        debug!(
            "New simulation with {} players, board [{}], pools {:?}",
            players.len(),
            board.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" "),
            players.iter().map(|p| p.hands().len()).collect::<Vec<_>>(),
        );

        let num_players = players.len();
        Ok(Self {
            players,
            board: board.to_vec(),
            board_mask,
            board_conflict,
            tally: Tally::new(num_players),
            holes: Vec::with_capacity(num_players),
            values: Vec::with_capacity(num_players),
        })
    }

    /// The simulation counters.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Runs one simulation step.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Result<Outcome, EquityError> {
        self.tally.attempts += 1;

        if !self.sample_hands(rng) {
            self.tally.conflicts += 1;
            return Ok(Outcome::Conflict);
        }

        let in_play = self
            .holes
            .iter()
            .fold(self.board_mask, |mask, h| mask | h.mask());

        // Complete the board from a shuffled deck without the cards in play.
        let mut deck = Deck::without(in_play);
        let needed = BOARD_SIZE - self.board.len();
        let remaining = deck.count();
        if remaining < needed {
            error!("Deck exhausted, {needed} cards needed but only {remaining} left");
            return Err(EquityError::DeckExhausted { needed, remaining });
        }

        deck.shuffle(rng);

        // The fixed cards followed by at least `needed` deck cards fill the board.
        let mut board = [Card::new(Rank::Deuce, Suit::Clubs); BOARD_SIZE];
        let dealt = std::iter::from_fn(|| deck.deal());
        let cards = self.board.iter().copied().chain(dealt);
        for (slot, card) in board.iter_mut().zip(cards) {
            *slot = card;
        }

        self.values.clear();
        self.values
            .extend(self.holes.iter().map(|h| HandValue::best7(h.cards(), &board)));

        self.award();
        self.tally.counted += 1;

        Ok(Outcome::Counted)
    }

    /// Samples a hand for each player, returns false if any two cards in play
    /// are the same.
    fn sample_hands<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.holes.clear();

        let mut mask = self.board_mask;
        let mut conflict = self.board_conflict;

        for player in &self.players {
            let hands = player.hands();
            let hole = hands[rng.random_range(0..hands.len())];

            conflict |= mask & hole.mask() != 0;
            mask |= hole.mask();
            self.holes.push(hole);
        }

        !conflict
    }

    /// Credits the players with the best hand value.
    fn award(&mut self) {
        let Some(best) = self.values.iter().max().copied() else {
            return;
        };

        let winners = self.values.iter().filter(|v| **v == best).count();
        for (tally, value) in self.tally.players.iter_mut().zip(&self.values) {
            if *value != best {
                continue;
            }

            if winners == 1 {
                tally.wins += 1;
            } else {
                tally.ties += 1;
                tally.split += 1.0 / winners as f64;
            }
        }
    }

    /// Runs `iterations` simulation steps.
    pub fn run<R: Rng>(&mut self, iterations: u64, rng: &mut R) -> Result<(), EquityError> {
        for _ in 0..iterations {
            self.step(rng)?;
        }

        Ok(())
    }

    /// Runs up to `iterations` simulation steps, stopping early when `stop` is
    /// set, returns the number of steps run.
    pub fn run_until<R: Rng>(
        &mut self,
        iterations: u64,
        rng: &mut R,
        stop: &AtomicBool,
    ) -> Result<u64, EquityError> {
        let mut steps = 0;
        while steps < iterations && !stop.load(Ordering::Relaxed) {
            self.step(rng)?;
            steps += 1;
        }

        if steps < iterations {
            debug!("Simulation stopped after {steps} of {iterations} steps");
        }

        Ok(steps)
    }

    /// Merges the counters of another simulation part.
    pub fn merge(&mut self, tally: &Tally) {
        self.tally.merge(tally);
    }

    /// The players results with the given ties credit.
    pub fn results(&self, tie_credit: TieCredit) -> Vec<PlayerResult> {
        self.players
            .iter()
            .zip(&self.tally.players)
            .map(|(player, t)| {
                let credit = match tie_credit {
                    TieCredit::Split => t.split,
                    TieCredit::Half => t.ties as f64 / 2.0,
                };

                PlayerResult::new(player.id(), t.wins, t.ties, credit, self.tally.counted)
            })
            .collect()
    }

    /// The simulation report with the given ties credit.
    pub fn report(&self, tie_credit: TieCredit) -> Report {
        Report {
            players: self.results(tie_credit),
            board: self.board.clone(),
            attempts: self.tally.attempts,
            conflicts: self.tally.conflicts,
        }
    }
}

/// Simulates `iterations` hands and returns the players results.
///
/// Ties are credited as `1/k` for a k-ways tie.
pub fn simulate<R: Rng>(
    players: Vec<PlayerRange>,
    board: &[Card],
    iterations: u64,
    rng: &mut R,
) -> Result<Vec<PlayerResult>, EquityError> {
    if iterations == 0 {
        return Err(EquityError::InvalidIterations);
    }

    let mut sim = Simulation::new(players, board)?;

    let now = Instant::now();
    sim.run(iterations, rng)?;
    log_summary(&sim, now);

    Ok(sim.results(TieCredit::Split))
}

pub(crate) fn log_summary(sim: &Simulation, start: Instant) {
    let tally = sim.tally();
    info!(
        "Simulated {} hands, counted {} conflicts {} in {:.3}s",
        tally.attempts(),
        tally.counted(),
        tally.conflicts(),
        start.elapsed().as_secs_f64()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, tokens: &[&str]) -> PlayerRange {
        PlayerRange::from_tokens(id, tokens).unwrap()
    }

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_list(s).unwrap()
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(101)
    }

    #[test]
    fn aces_vs_kings_preflop() {
        let players = vec![player("A", &["AA"]), player("B", &["KK"])];
        let results = simulate(players, &[], 20_000, &mut rng()).unwrap();

        assert!((results[0].equity - 82.0).abs() < 3.0, "{:?}", results[0]);
        assert!((results[1].equity - 18.0).abs() < 3.0, "{:?}", results[1]);
        assert_eq!(results[0].player_id, "A");
        assert_eq!(results[1].player_id, "B");
    }

    #[test]
    fn kings_set_on_flop() {
        // Only the kings combos without the Kh are counted, the aces need two
        // running cards to win, so the kings hold about 91%.
        let players = vec![player("A", &["AA"]), player("B", &["KK"])];
        let results = simulate(players, &cards("Kh7d2c"), 20_000, &mut rng()).unwrap();

        assert!((results[1].equity - 91.0).abs() < 3.0, "{:?}", results[1]);
        assert!(results[1].total < 20_000);
    }

    #[test]
    fn flush_beats_top_two_pair() {
        let players = vec![player("A", &["7h8h"]), player("B", &["AKs", "AKo"])];
        let results = simulate(players, &cards("AhKhQh2c5h"), 2_000, &mut rng()).unwrap();

        let a = &results[0];
        assert!(a.total > 0);
        assert_eq!(a.wins, a.total);
        assert_eq!(a.equity, 100.0);
        assert_eq!(results[1].wins, 0);
        assert_eq!(results[1].equity, 0.0);
    }

    #[test]
    fn insufficient_players() {
        let res = simulate(vec![player("A", &["AA"])], &[], 10, &mut rng());
        assert_eq!(res, Err(EquityError::InsufficientPlayers { found: 1 }));

        let players = vec![player("A", &["AA"]), PlayerRange::new("B", vec![])];
        let res = simulate(players, &[], 10, &mut rng());
        assert_eq!(res, Err(EquityError::InsufficientPlayers { found: 1 }));

        let players = vec![
            player("A", &["AA"]),
            player("B", &["KK"]),
            PlayerRange::new("C", vec![]),
        ];
        let res = simulate(players, &[], 10, &mut rng());
        assert_eq!(res, Err(EquityError::EmptyRange("C".to_string())));
    }

    #[test]
    fn invalid_arguments() {
        let players = || vec![player("A", &["AA"]), player("B", &["KK"])];

        for board in ["Kh", "Kh7d", "Kh7d2c3c4c5c"] {
            let res = simulate(players(), &cards(board), 10, &mut rng());
            assert_eq!(res, Err(EquityError::InvalidBoardSize(cards(board).len())));
        }

        let res = simulate(players(), &[], 0, &mut rng());
        assert_eq!(res, Err(EquityError::InvalidIterations));
    }

    #[test]
    fn conflicts_are_skipped() {
        let players = vec![player("A", &["AA"]), player("B", &["AA"])];
        let mut sim = Simulation::new(players, &[]).unwrap();
        sim.run(6_000, &mut rng()).unwrap();

        let tally = sim.tally();
        assert_eq!(tally.attempts(), 6_000);
        assert_eq!(tally.counted() + tally.conflicts(), 6_000);

        // Only 1 in 6 pairs of aces don't share a card.
        let ratio = tally.conflicts() as f64 / tally.attempts() as f64;
        assert!((ratio - 5.0 / 6.0).abs() < 0.03, "{ratio}");

        let results = sim.results(TieCredit::Split);
        assert!(results.iter().all(|r| r.total == tally.counted()));
    }

    #[test]
    fn board_conflict() {
        let players = vec![player("A", &["AhAs"]), player("B", &["KK"])];
        let results = simulate(players, &cards("Ah7d2c"), 100, &mut rng()).unwrap();
        assert!(results.iter().all(|r| r.total == 0 && r.equity == 0.0));
    }

    #[test]
    fn step_outcomes() {
        let players = vec![player("A", &["AhAs"]), player("B", &["AhKd"])];
        let mut sim = Simulation::new(players, &[]).unwrap();
        assert_eq!(sim.step(&mut rng()), Ok(Outcome::Conflict));

        let players = vec![player("A", &["AhAs"]), player("B", &["KdKc"])];
        let mut sim = Simulation::new(players, &[]).unwrap();
        assert_eq!(sim.step(&mut rng()), Ok(Outcome::Counted));
        assert_eq!(sim.tally().counted(), 1);
    }

    #[test]
    fn totals_match_across_players() {
        let players = vec![
            player("A", &["AA", "KK", "AKs"]),
            player("B", &["QQ", "JJ", "AQo"]),
            player("C", &["76s", "T9s", "22"]),
        ];

        let results = simulate(players, &cards("Qc8d3h"), 3_000, &mut rng()).unwrap();
        assert!(results.iter().all(|r| r.total == results[0].total));

        // With split ties the equities add up to 100%.
        let sum = results.iter().map(|r| r.equity).sum::<f64>();
        assert!((sum - 100.0).abs() < 1e-6, "{sum}");
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let players = || vec![player("A", &["AKs", "AKo"]), player("B", &["QQ", "JTs"])];
        let r1 = simulate(players(), &[], 2_000, &mut rng()).unwrap();
        let r2 = simulate(players(), &[], 2_000, &mut rng()).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn board_royal_flush_splits() {
        let board = cards("AhKhQhJhTh");

        let players = vec![player("A", &["22"]), player("B", &["33"])];
        let results = simulate(players, &board, 500, &mut rng()).unwrap();
        for r in &results {
            assert_eq!(r.ties, r.total);
            assert_eq!(r.wins, 0);
            assert_eq!(r.equity, 50.0);
        }

        // Three ways ties are split in thirds, or halved with the legacy credit.
        let players = vec![player("A", &["22"]), player("B", &["33"]), player("C", &["44"])];
        let mut sim = Simulation::new(players, &board).unwrap();
        sim.run(500, &mut rng()).unwrap();

        for r in sim.results(TieCredit::Split) {
            assert!((r.equity - 100.0 / 3.0).abs() < 1e-9);
        }

        for r in sim.results(TieCredit::Half) {
            assert_eq!(r.equity, 50.0);
        }
    }

    #[test]
    fn run_until_stops() {
        let players = vec![player("A", &["AA"]), player("B", &["KK"])];
        let mut sim = Simulation::new(players, &[]).unwrap();

        let stop = AtomicBool::new(false);
        assert_eq!(sim.run_until(100, &mut rng(), &stop).unwrap(), 100);

        stop.store(true, Ordering::Relaxed);
        assert_eq!(sim.run_until(100, &mut rng(), &stop).unwrap(), 0);
        assert_eq!(sim.tally().attempts(), 100);
    }

    #[test]
    fn merge_parts() {
        let players = || vec![player("A", &["AA"]), player("B", &["KK"])];

        let mut sim = Simulation::new(players(), &[]).unwrap();
        sim.run(1_000, &mut SmallRng::seed_from_u64(1)).unwrap();

        let mut part = Simulation::new(players(), &[]).unwrap();
        part.run(1_000, &mut SmallRng::seed_from_u64(2)).unwrap();

        sim.merge(part.tally());
        assert_eq!(sim.tally().attempts(), 2_000);

        let results = sim.results(TieCredit::Split);
        assert_eq!(results[0].total, sim.tally().counted());
        assert_eq!(
            results[0].wins + results[1].wins + results[0].ties,
            sim.tally().counted()
        );
    }

    /// Players with pairs from deuces to kings, 48 cards in play.
    fn pairs_players(count: usize) -> Vec<PlayerRange> {
        let mut players = Vec::new();
        for r in Rank::ranks().take(12) {
            for (s1, s2) in [(Suit::Clubs, Suit::Diamonds), (Suit::Hearts, Suit::Spades)] {
                let hole = HoleCards::new(Card::new(r, s1), Card::new(r, s2)).unwrap();
                players.push(PlayerRange::new(format!("p{}", players.len()), vec![hole]));
            }
        }

        players.truncate(count);
        players
    }

    #[test]
    fn deck_exhausted() {
        // 24 players use 48 cards, leaving 4 for the 5 board cards.
        let mut sim = Simulation::new(pairs_players(24), &[]).unwrap();
        assert_eq!(
            sim.step(&mut rng()),
            Err(EquityError::DeckExhausted {
                needed: 5,
                remaining: 4
            })
        );

        // With a fixed flop only the spade ace is left for turn and river.
        let mut sim = Simulation::new(pairs_players(24), &cards("AcAdAh")).unwrap();
        assert_eq!(
            sim.step(&mut rng()),
            Err(EquityError::DeckExhausted {
                needed: 2,
                remaining: 1
            })
        );
        assert_eq!(sim.tally().counted(), 0);

        // One player less leaves exactly enough cards.
        let mut sim = Simulation::new(pairs_players(23), &cards("AcAdAh")).unwrap();
        assert_eq!(sim.step(&mut rng()), Ok(Outcome::Counted));

        let mut sim = Simulation::new(pairs_players(23), &[]).unwrap();
        assert_eq!(sim.step(&mut rng()), Ok(Outcome::Counted));
        assert_eq!(sim.tally().counted(), 1);
    }

    #[test]
    fn report_to_json() {
        let players = vec![player("A", &["AA"]), player("B", &["KK"])];
        let mut sim = Simulation::new(players, &cards("Kh7d2c")).unwrap();
        sim.run(100, &mut rng()).unwrap();

        let report = sim.report(TieCredit::Split);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["board"], serde_json::json!(["Kh", "7d", "2c"]));
        assert_eq!(json["attempts"], 100);
        assert_eq!(json["players"][1]["player_id"], "B");
    }
}
