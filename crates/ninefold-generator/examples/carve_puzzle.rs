//! Example demonstrating puzzle carving.
//!
//! This example shows how to:
//! - Shuffle the built-in base grid into a fresh solution
//! - Carve a puzzle at a chosen difficulty
//! - Display the problem and solution strings
//!
//! # Usage
//!
//! ```sh
//! cargo run -p ninefold-generator --example carve_puzzle
//! ```
//!
//! Pick a difficulty (very-easy, easy, medium, hard):
//!
//! ```sh
//! cargo run -p ninefold-generator --example carve_puzzle -- --difficulty hard
//! ```
//!
//! Make the output reproducible with a seed:
//!
//! ```sh
//! cargo run -p ninefold-generator --example carve_puzzle -- --seed 42
//! ```
//!
//! Carve straight from the base grid without shuffling:
//!
//! ```sh
//! cargo run -p ninefold-generator --example carve_puzzle -- --no-shuffle
//! ```

use clap::{Parser, ValueEnum};
use ninefold_core::SolvedGrid;
use ninefold_generator::{Difficulty, PuzzleGenerator};
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
    /// Difficulty level for the carve.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Seed for deterministic output. Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Carve from the base grid as-is instead of shuffling it first.
    #[arg(long)]
    no_shuffle: bool,
}

fn main() {
    let args = Args::parse();
    let difficulty = Difficulty::from(args.difficulty);

    let mut rng = match args.seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(seed),
        None => Pcg64Mcg::from_rng(&mut rand::rng()),
    };

    let solution = if args.no_shuffle {
        SolvedGrid::base()
    } else {
        SolvedGrid::base().shuffled_with_rng(&mut rng)
    };
    let generator = PuzzleGenerator::new(solution);
    let puzzle = generator.generate_with_rng(difficulty, &mut rng);

    println!("Difficulty:");
    println!(
        "  {} ({} givens, {} blanks)",
        difficulty.label(),
        difficulty.given_cells(),
        difficulty.removed_cells()
    );
    println!();

    if let Some(seed) = args.seed {
        println!("Seed:");
        println!("  {seed}");
        println!();
    }

    println!("Problem:");
    println!("  {puzzle}");
    println!();
    println!("Solution:");
    println!("  {}", generator.solution());
}
