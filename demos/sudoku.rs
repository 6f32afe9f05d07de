use clap::Parser;
use seco::problems::sudoku::{render_board, Puzzle, PuzzleError};
use seco::solver::search::{BacktrackSearcher, SearchMode};
use seco::solver::stats::render_stats_table;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Line-format puzzle: row-major cells, `.` or `0` for a blank,
    /// 16 cells for a 4x4 board or 81 for a 9x9 one.
    #[arg(
        long,
        default_value = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
    )]
    puzzle: String,

    /// Drive the search with the explicit work stack instead of recursion.
    #[arg(long, default_value_t = false)]
    iterative: bool,
}

fn main() -> Result<(), PuzzleError> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let puzzle = Puzzle::parse(&args.puzzle)?;
    let mut searcher = BacktrackSearcher::new(puzzle.model()?);
    if args.iterative {
        searcher.mode = SearchMode::Iterative;
    }

    println!("--- Puzzle ---");
    println!("{}", render_board(searcher.model(), puzzle.size()));

    let state = searcher.solve();

    println!("--- Solution ---");
    println!("{}", render_board(searcher.model(), puzzle.size()));
    println!("State: {state:?}");
    println!("{}", render_stats_table(searcher.statistics()));
    Ok(())
}
