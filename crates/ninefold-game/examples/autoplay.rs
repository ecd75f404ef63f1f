//! Example demonstrating a full engine session driven by hints.
//!
//! This example shows how to:
//! - Start a session at a chosen difficulty
//! - Ask the engine for hints until the board is full
//! - Judge the finished board with an explicit check
//!
//! # Usage
//!
//! ```sh
//! cargo run -p ninefold-game --example autoplay
//! ```
//!
//! Pick a difficulty (very-easy, easy, medium, hard):
//!
//! ```sh
//! cargo run -p ninefold-game --example autoplay -- --difficulty hard
//! ```
//!
//! Make the run reproducible with a seed:
//!
//! ```sh
//! cargo run -p ninefold-game --example autoplay -- --seed 42
//! ```
//!
//! Print the board after every hint:
//!
//! ```sh
//! cargo run -p ninefold-game --example autoplay -- --verbose
//! ```

use clap::{Parser, ValueEnum};
use ninefold_game::PuzzleEngine;
use ninefold_generator::Difficulty;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    VeryEasy,
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::VeryEasy => Difficulty::VeryEasy,
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level for the session.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed for deterministic output. Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Print the board after every hint.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);

    let mut rng = match args.seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(seed),
        None => Pcg64Mcg::from_rng(&mut rand::rng()),
    };

    let mut engine = PuzzleEngine::new_game_with_rng(difficulty, &mut rng);

    println!(
        "Starting a {} game with {} givens",
        difficulty.label(),
        engine.puzzle().given_count()
    );
    println!();
    print_board(&engine);
    println!();

    let mut hints = 0;
    while let Ok(hint) = engine.hint_with_rng(&mut rng) {
        hints += 1;
        if args.verbose {
            println!("Hint {hints}: {} at {}", hint.digit, hint.position);
            print_board(&engine);
            println!();
        }
    }

    println!("Hints used: {hints}");
    println!("Solved: {}", engine.check());
    if !args.verbose {
        println!();
        print_board(&engine);
    }
}

fn print_board(engine: &PuzzleEngine) {
    for (pos, state) in engine.cells() {
        match state.value() {
            Some(digit) => print!("{digit}"),
            None => print!("."),
        }
        if pos.col() == 8 {
            println!();
        } else if pos.col() % 3 == 2 {
            print!(" ");
        }
    }
}
