// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the 13x13 starting hands chart with each class ranking position,
// classes in the top percent are marked with a star.
//
// ```bash
// $ cargo r --example chart -- --percent 15
// ```
use clap::{Parser, value_parser};

use showdown_cards::Rank;
use showdown_range::*;

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("------|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// Mark the classes in this top percent.
    #[clap(long, short, default_value_t = 20, value_parser = value_parser!(u8).range(0..=100))]
    percent: u8,
    /// Count the percent on dealt hands instead of classes.
    #[clap(long, short)]
    combos: bool,
}

fn main() {
    let cli = Cli::parse();
    let ranking = ranking();

    let percent = cli.percent as f64;
    let top = if cli.combos {
        ranking.top_percent_combos(percent)
    } else {
        ranking.top_percent(percent)
    };

    let top = match top {
        Ok(top) => top,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    separator();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut positions = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            // Suited above the diagonal, offsuit below.
            let class = if r1 == r2 {
                Some(HandClass::pair(r1))
            } else if r1 > r2 {
                HandClass::suited(r1, r2)
            } else {
                HandClass::offsuit(r1, r2)
            };

            let Some(class) = class else {
                continue;
            };

            let mark = if top.contains(&class) { '*' } else { ' ' };
            labels.push(format!("{:<3}{mark}", class.to_string()));
            positions.push(ranking.position(&class).map(|p| p + 1).unwrap_or_default());
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }
        println!();

        print!("|");
        for pos in positions {
            print!(" {pos:>4} |");
        }
        println!();

        separator();
    }

    let combos = top.iter().map(|c| c.combo_count()).sum::<usize>();
    println!(
        "Top {}%: {} classes, {} hands",
        cli.percent,
        top.len(),
        combos
    );
}
