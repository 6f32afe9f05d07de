use std::fs;
use std::path::PathBuf;

use clap::Parser;
use seco::problems::sudoku::{parse_collection, solve_batch};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a grid collection: records of a header line followed by the
    /// grid's rows, like the published 50-puzzle set.
    #[arg(long)]
    puzzles: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.puzzles)?;
    let puzzles = parse_collection(&text)?;
    println!("Solving {} grids in parallel...", puzzles.len());

    let report = solve_batch(&puzzles)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
