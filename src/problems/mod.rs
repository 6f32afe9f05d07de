//! Ready-made models for classic problems, shared by the tests, the
//! benchmarks, and the demo binaries.

pub mod feature_model;
pub mod map;
pub mod sudoku;
