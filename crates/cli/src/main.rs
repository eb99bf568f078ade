// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown equity calculator.
//!
//! ```bash
//! $ showdown equity -p AA -p "KK, AKs" -b Kh7d2c
//! $ showdown top --percent 10
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

use showdown_cards::Card;
use showdown_equity::{Config, PlayerRange, Report, TieCredit};
use showdown_range::ranking;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enable debug logs.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Computes the players equity.
    Equity {
        /// A player range like "AA, AKs, AKo" or "7h8h", repeat for each player.
        #[clap(long, short, required = true)]
        player: Vec<String>,
        /// The board cards like "Kh7d2c".
        #[clap(long, short, default_value = "")]
        board: String,
        /// The number of simulated hands.
        #[clap(long, short, default_value_t = 100_000)]
        iterations: u64,
        /// The random generator seed.
        #[clap(long, short)]
        seed: Option<u64>,
        /// How tied hands are credited.
        #[clap(long, value_enum, default_value_t = TieArg::Split)]
        tie_credit: TieArg,
        /// Print the results as JSON.
        #[clap(long)]
        json: bool,
    },
    /// Prints the strongest starting hands.
    Top {
        /// The percentage of hands.
        #[clap(long, short, default_value_t = 10.0)]
        percent: f64,
        /// Count the percentage on dealt hands instead of hand classes.
        #[clap(long, short)]
        combos: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieArg {
    /// A k-ways tie credits 1/k to each player.
    Split,
    /// A tie credits half pot to each player.
    Half,
}

impl From<TieArg> for TieCredit {
    fn from(arg: TieArg) -> Self {
        match arg {
            TieArg::Split => TieCredit::Split,
            TieArg::Half => TieCredit::Half,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Equity {
            player,
            board,
            iterations,
            seed,
            tie_credit,
            json,
        } => {
            let players = player
                .iter()
                .enumerate()
                .map(|(idx, range)| PlayerRange::parse(format!("P{}", idx + 1), range))
                .collect::<Result<Vec<_>, _>>()?;

            let board = Card::parse_list(&board)?;
            let config = Config {
                iterations,
                seed,
                tie_credit: tie_credit.into(),
            };

            info!(
                "Simulating {} hands for {} players",
                config.iterations,
                players.len()
            );

            let report = showdown_equity::run(&config, players, &board)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, &player);
            }
        }
        Command::Top { percent, combos } => {
            let ranking = ranking();
            let top = if combos {
                ranking.top_percent_combos(percent)?
            } else {
                ranking.top_percent(percent)?
            };

            if top.is_empty() {
                bail!("no hands in the top {percent}%");
            }

            let hands = top.iter().map(|c| c.combo_count()).sum::<usize>();
            let names = top.iter().map(|c| c.to_string()).collect::<Vec<_>>();
            println!("{}", names.join(","));
            println!("{} classes, {} hands", top.len(), hands);
        }
    }

    Ok(())
}

fn separator(widths: &[usize]) {
    print!("+");
    for w in widths {
        print!("{}+", "-".repeat(w + 2));
    }
    println!();
}

fn print_report(report: &Report, ranges: &[String]) {
    let board = report
        .board
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if !board.is_empty() {
        println!("Board: {board}");
    }

    let range_width = ranges.iter().map(|r| r.len()).max().unwrap_or(0).max(5);
    let widths = [6, range_width, 8, 10, 10, 10];

    separator(&widths);
    println!(
        "| {:<6} | {:<rw$} | {:>8} | {:>10} | {:>10} | {:>10} |",
        "Player",
        "Range",
        "Equity",
        "Wins",
        "Ties",
        "Total",
        rw = range_width
    );
    separator(&widths);

    for (result, range) in report.players.iter().zip(ranges) {
        println!(
            "| {:<6} | {:<rw$} | {:>7.2}% | {:>10} | {:>10} | {:>10} |",
            result.player_id,
            range,
            result.equity,
            result.wins,
            result.ties,
            result.total,
            rw = range_width
        );
    }

    separator(&widths);
    println!(
        "{} hands simulated, {} skipped on card conflicts",
        report.attempts, report.conflicts
    );
}
