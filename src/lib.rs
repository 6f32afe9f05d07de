//! Seco is a finite-domain constraint satisfaction problem (CSP) solver
//! built around backtracking search with forward checking.
//!
//! Problems are expressed as integer variables, each with an explicit domain
//! of candidate values, related by a small closed set of constraint kinds.
//! Solving walks the variables depth-first; every tentative assignment is
//! propagated through the constraints touching that variable, pruning
//! now-impossible values from neighbouring domains, and every pruning is
//! recorded in a [`Propagation`] log so a dead end can be rolled back
//! exactly.
//!
//! # Core Concepts
//!
//! - **[`ModelBuilder`]**: declares domains, variables, and constraints, and
//!   freezes them into a [`Model`].
//! - **[`Constraint`]**: one of a fixed set of constraint kinds, from the
//!   general `AllDifferent` to the boolean feature-model kinds (`Mandatory`,
//!   `Optional`, `Alternative`, `Or`, `Required`, `Exclude`).
//! - **[`BacktrackSearcher`]**: owns a built model, runs the search, and
//!   reports [`SearchState`] plus statistics.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Two variables sharing a 2-colour palette must differ, and `b` is pinned
//! to colour `1`. The searcher has to conclude that `a` is `2`.
//!
//! ```
//! use seco::solver::model::ModelBuilder;
//! use seco::solver::search::{BacktrackSearcher, SearchState};
//!
//! # fn main() -> seco::error::Result<()> {
//! let mut builder = ModelBuilder::new();
//! let colours = builder.create_domain([1, 2])?;
//! let a = builder.create_variable("a", &colours);
//! let b = builder.create_variable("b", &colours);
//! builder.create_all_different(&[a, b])?;
//! builder.assign(b, 1)?;
//!
//! let mut searcher = BacktrackSearcher::new(builder.build());
//! assert_eq!(searcher.solve(), SearchState::Satisfied);
//! assert_eq!(searcher.model().variable(a).value(), Some(2));
//! # Ok(())
//! # }
//! ```
//!
//! [`Propagation`]: crate::solver::propagation::Propagation
//! [`ModelBuilder`]: crate::solver::model::ModelBuilder
//! [`Model`]: crate::solver::model::Model
//! [`Constraint`]: crate::solver::constraint::Constraint
//! [`BacktrackSearcher`]: crate::solver::search::BacktrackSearcher
//! [`SearchState`]: crate::solver::search::SearchState
pub mod error;
pub mod problems;
pub mod solver;
