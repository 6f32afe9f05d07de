//! Sudoku models for 4x4 and 9x9 grids, the puzzle text formats, and the
//! parallel batch runner.
//!
//! Two text forms are understood: a single line of 16 or 81 cells (digits
//! for clues, `.` or `0` for blanks), and the multi-grid collection format
//! of the published 50-puzzle set, where each record is a header line
//! followed by the grid's rows.

use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::ModelError;
use crate::solver::model::{Model, ModelBuilder};
use crate::solver::search::{BacktrackSearcher, SearchState};
use crate::solver::variable::VariableId;

/// Errors raised while reading puzzle text.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("puzzles are 16 or 81 cells, got {got}")]
    UnsupportedLength { got: usize },

    #[error("cell {index} holds {got:?}, expected a digit in 1..={max} or a blank")]
    BadCell { index: usize, got: char, max: usize },

    #[error("grid record {header:?} is truncated")]
    TruncatedRecord { header: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// A parsed grid: the board edge length and one clue slot per cell in
/// row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    size: usize,
    clues: Vec<Option<i32>>,
}

impl Puzzle {
    /// Reads the line format: row-major cells, `.` or `0` for a blank.
    /// 16 cells make a 4x4 board, 81 cells a 9x9 one.
    pub fn parse(line: &str) -> Result<Self, PuzzleError> {
        let cells: Vec<char> = line.trim().chars().collect();
        let size = match cells.len() {
            16 => 4,
            81 => 9,
            got => return Err(PuzzleError::UnsupportedLength { got }),
        };
        let mut clues = Vec::with_capacity(cells.len());
        for (index, &got) in cells.iter().enumerate() {
            let clue = match got {
                '.' | '0' => None,
                '1'..='9' => {
                    let value = got as i32 - '0' as i32;
                    if value as usize > size {
                        return Err(PuzzleError::BadCell { index, got, max: size });
                    }
                    Some(value)
                }
                _ => return Err(PuzzleError::BadCell { index, got, max: size }),
            };
            clues.push(clue);
        }
        Ok(Puzzle { size, clues })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// How many cells are given.
    pub fn clue_count(&self) -> usize {
        self.clues.iter().filter(|clue| clue.is_some()).count()
    }

    /// Builds the constraint model: one variable per cell, AllDifferent
    /// over every row, column, and block, clues pre-assigned.
    pub fn model(&self) -> Result<Model, PuzzleError> {
        let size = self.size;
        let block = if size == 4 { 2 } else { 3 };

        let mut builder = ModelBuilder::new();
        let digits = builder.create_domain(1..=size as i32)?;
        let cells: Vec<VariableId> = (0..size * size)
            .map(|i| {
                builder.create_variable(format!("r{}c{}", i / size + 1, i % size + 1), &digits)
            })
            .collect();

        for row in 0..size {
            let vars: Vec<VariableId> = (0..size).map(|col| cells[row * size + col]).collect();
            builder.create_all_different(&vars)?;
        }
        for col in 0..size {
            let vars: Vec<VariableId> = (0..size).map(|row| cells[row * size + col]).collect();
            builder.create_all_different(&vars)?;
        }
        for band in 0..size / block {
            for stack in 0..size / block {
                let mut vars = Vec::with_capacity(size);
                for row in 0..block {
                    for col in 0..block {
                        vars.push(cells[(band * block + row) * size + stack * block + col]);
                    }
                }
                builder.create_all_different(&vars)?;
            }
        }

        for (cell, clue) in cells.iter().zip(&self.clues) {
            if let Some(value) = *clue {
                builder.assign(*cell, value)?;
            }
        }
        Ok(builder.build())
    }
}

/// Parses the multi-grid collection format: records of a header line
/// followed by the grid's rows. Blank lines are skipped.
pub fn parse_collection(text: &str) -> Result<Vec<Puzzle>, PuzzleError> {
    let mut puzzles = Vec::new();
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    while let Some(header) = lines.next() {
        let first = lines.next().ok_or_else(|| PuzzleError::TruncatedRecord {
            header: header.to_owned(),
        })?;
        let size = first.chars().count();
        let mut grid = String::with_capacity(size * size);
        grid.push_str(first);
        for _ in 1..size {
            let row = lines.next().ok_or_else(|| PuzzleError::TruncatedRecord {
                header: header.to_owned(),
            })?;
            grid.push_str(row);
        }
        puzzles.push(Puzzle::parse(&grid)?);
    }
    Ok(puzzles)
}

/// Solves one line-format puzzle. `Some` carries the solved line; `None`
/// means the clues admit no solution.
pub fn solve_line(line: &str) -> Result<Option<String>, PuzzleError> {
    let puzzle = Puzzle::parse(line)?;
    let mut searcher = BacktrackSearcher::new(puzzle.model()?);
    match searcher.solve() {
        SearchState::Satisfied => Ok(Some(render_line(searcher.model()))),
        _ => Ok(None),
    }
}

/// The board as a line of digits, `.` for any open cell.
pub fn render_line(model: &Model) -> String {
    model
        .variables()
        .iter()
        .map(|v| match v.value() {
            Some(value) => char::from_digit(value as u32, 10).unwrap_or('?'),
            None => '.',
        })
        .collect()
}

/// The board as a grid with a rule between blocks, for terminal output.
pub fn render_board(model: &Model, size: usize) -> String {
    let block = if size == 4 { 2 } else { 3 };
    let width = size * 2 + (size / block - 1) * 2 - 1;
    let mut out = String::new();
    for row in 0..size {
        if row > 0 && row % block == 0 {
            out.push_str(&"-".repeat(width));
            out.push('\n');
        }
        let mut line = String::new();
        for col in 0..size {
            if col > 0 && col % block == 0 {
                line.push_str("| ");
            }
            match model.variable(row * size + col).value() {
                Some(value) => {
                    line.push_str(&value.to_string());
                    line.push(' ');
                }
                None => line.push_str(". "),
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Aggregate outcome of a batch run over a puzzle collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub solved: u32,
    pub unsolved: u32,
    /// Sum over the solved grids of the 3-digit number formed by each
    /// grid's top-left cells.
    pub corner_sum: u32,
}

/// Solves every puzzle in parallel. Each worker builds and searches a fully
/// private model; only the three aggregate counters are shared, and the
/// parallel iterator joins before they are read.
pub fn solve_batch(puzzles: &[Puzzle]) -> Result<BatchReport, PuzzleError> {
    let solved = AtomicU32::new(0);
    let unsolved = AtomicU32::new(0);
    let corner_sum = AtomicU32::new(0);

    puzzles.par_iter().try_for_each(|puzzle| {
        let mut searcher = BacktrackSearcher::new(puzzle.model()?);
        if searcher.solve() == SearchState::Satisfied {
            solved.fetch_add(1, Ordering::Relaxed);
            corner_sum.fetch_add(corner_number(searcher.model()), Ordering::Relaxed);
        } else {
            unsolved.fetch_add(1, Ordering::Relaxed);
        }
        Ok::<(), PuzzleError>(())
    })?;

    let report = BatchReport {
        solved: solved.load(Ordering::Relaxed),
        unsolved: unsolved.load(Ordering::Relaxed),
        corner_sum: corner_sum.load(Ordering::Relaxed),
    };
    debug!(
        "batch of {} grids: {} solved, {} unsolved",
        puzzles.len(),
        report.solved,
        report.unsolved
    );
    Ok(report)
}

/// The 3-digit number in the top-left corner of a solved board. Open cells
/// count as zero.
fn corner_number(model: &Model) -> u32 {
    (0..3).fold(0, |acc, cell| {
        acc * 10 + model.variable(cell).value().unwrap_or(0) as u32
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // The canonical easy 9x9 and its unique solution.
    const EASY_9X9: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    const EASY_9X9_SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn parse_reads_sizes_and_clues() {
        let small = Puzzle::parse("341..2....2..143").unwrap();
        assert_eq!(small.size(), 4);
        assert_eq!(small.clue_count(), 8);

        let large = Puzzle::parse(EASY_9X9).unwrap();
        assert_eq!(large.size(), 9);
        assert_eq!(large.clue_count(), 30);
    }

    #[test]
    fn parse_accepts_zero_as_a_blank() {
        let dotted = Puzzle::parse("341..2....2..143").unwrap();
        let zeroed = Puzzle::parse("3410020000200143").unwrap();
        assert_eq!(dotted, zeroed);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            Puzzle::parse("341..2"),
            Err(PuzzleError::UnsupportedLength { got: 6 })
        ));
        assert!(matches!(
            Puzzle::parse("x41..2....2..143"),
            Err(PuzzleError::BadCell { index: 0, got: 'x', .. })
        ));
        // 5 is a legal digit but not on a 4x4 board.
        assert!(matches!(
            Puzzle::parse("541..2....2..143"),
            Err(PuzzleError::BadCell { index: 0, got: '5', max: 4 })
        ));
    }

    #[test]
    fn the_small_grid_completes_uniquely() {
        let solved = solve_line("341..2....2..143").unwrap();
        assert_eq!(solved.as_deref(), Some("3412123443212143"));
    }

    #[test]
    fn a_full_grid_comes_back_unchanged() {
        let solved = solve_line("3412123443212143").unwrap();
        assert_eq!(solved.as_deref(), Some("3412123443212143"));
    }

    #[test]
    fn duplicate_clues_are_unsolvable() {
        // Two 3s in the first row.
        assert_eq!(solve_line("33............12").unwrap(), None);
    }

    #[test]
    fn the_easy_grid_solves_and_checks_out() {
        let _ = tracing_subscriber::fmt::try_init();

        let solved = solve_line(EASY_9X9).unwrap().unwrap();
        assert_eq!(solved, EASY_9X9_SOLVED);

        // Independent check of the sudoku rules.
        let board = sudoku::Sudoku::from_str_line(&solved).unwrap();
        assert!(board.is_solved());
    }

    #[test]
    fn boards_render_with_block_rules() {
        let puzzle = Puzzle::parse("341..2....2..143").unwrap();
        let model = puzzle.model().unwrap();
        let board = render_board(&model, puzzle.size());
        assert_eq!(
            board,
            "3 4 | 1 .\n\
             . 2 | . .\n\
             ---------\n\
             . . | 2 .\n\
             . 1 | 4 3\n"
        );
    }

    const COLLECTION: &str = "\
Grid 01
530070000
600195000
098000060
800060003
400803001
700020006
060000280
000419005
000080079
Grid 02
530070000
600195000
098000060
800060003
400803001
700020006
060000280
000419005
000080079
Grid 03
530070005
600195000
098000060
800060003
400803001
700020006
060000280
000419005
000080079
";

    #[test]
    fn collections_split_into_records() {
        let puzzles = parse_collection(COLLECTION).unwrap();
        assert_eq!(puzzles.len(), 3);
        assert_eq!(puzzles[0], Puzzle::parse(EASY_9X9).unwrap());
        assert_eq!(puzzles[0], puzzles[1]);
        assert_ne!(puzzles[0], puzzles[2]);
    }

    #[test]
    fn truncated_collections_name_the_record() {
        let err = parse_collection("Grid 01\n530070000\n").unwrap_err();
        match err {
            PuzzleError::TruncatedRecord { header } => assert_eq!(header, "Grid 01"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn the_batch_runner_totals_the_collection() {
        let _ = tracing_subscriber::fmt::try_init();

        // Grids 1 and 2 solve to a 534 corner; grid 3 repeats a 5 in its
        // first row and cannot be solved.
        let puzzles = parse_collection(COLLECTION).unwrap();
        let report = solve_batch(&puzzles).unwrap();
        assert_eq!(
            report,
            BatchReport {
                solved: 2,
                unsolved: 1,
                corner_sum: 1068,
            }
        );
    }

    mod prop_tests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            // Punching holes in a solved grid always leaves a solvable
            // puzzle, and every clue must survive into the solution.
            #[test]
            fn punched_grids_solve_back_to_valid_boards(
                holes in proptest::collection::hash_set(0usize..81, 20..=45),
            ) {
                let mut line: Vec<char> = EASY_9X9_SOLVED.chars().collect();
                for &hole in &holes {
                    line[hole] = '.';
                }
                let line: String = line.into_iter().collect();

                let solved = solve_line(&line).unwrap();
                prop_assert!(solved.is_some());
                let solved = solved.unwrap();

                for (index, clue) in line.chars().enumerate() {
                    if clue != '.' {
                        prop_assert_eq!(solved.as_bytes()[index], clue as u8);
                    }
                }
                let board = sudoku::Sudoku::from_str_line(&solved).unwrap();
                prop_assert!(board.is_solved());
            }
        }
    }
}
