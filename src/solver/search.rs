use std::time::Instant;

use serde::Serialize;
use tracing::{debug, trace};

use crate::solver::heuristics::value::{order_values, ValueOrder};
use crate::solver::heuristics::variable::{select_variable, VariableOrder};
use crate::solver::model::Model;
use crate::solver::propagation::Propagation;
use crate::solver::propagator::ConstraintPropagator;
use crate::solver::stats::SearchStatistics;
use crate::solver::variable::VariableId;

/// Outcome of a [`BacktrackSearcher::solve`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchState {
    /// An exhausted subtree. Internal to the search: `solve` maps a
    /// top-level `Undetermined` to [`Infeasible`](SearchState::Infeasible)
    /// before returning.
    Undetermined,
    /// No assignment satisfies the model.
    Infeasible,
    /// A satisfying assignment was found and left in place on the model.
    Satisfied,
}

/// Which driver runs the depth-first search.
///
/// The two are observably identical: same assignment order, same rollback
/// discipline, same outcome, same statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Plain recursion. The depth bound is the call stack, which is ample
    /// for models whose depth is the variable count of a puzzle.
    #[default]
    Recursive,
    /// An explicit work-stack equivalent for models deep enough to threaten
    /// the call stack.
    Iterative,
}

/// One pending step of the iterative driver.
#[derive(Debug, Clone, Copy)]
enum WorkItem {
    /// Assign `value` to `variable` and descend.
    Try { variable: VariableId, value: i32 },
    /// Roll back `variable`'s most recent propagation and unassign it.
    Undo { variable: VariableId },
}

/// Depth-first backtracking search with forward checking.
///
/// The searcher owns the [`Model`] for the duration of the search; on
/// [`SearchState::Satisfied`] the winning assignments are left in place and
/// can be read back through [`model`](BacktrackSearcher::model) or taken
/// out with [`into_model`](BacktrackSearcher::into_model).
pub struct BacktrackSearcher {
    model: Model,
    propagator: ConstraintPropagator,
    pub variable_order: VariableOrder,
    pub value_order: ValueOrder,
    pub mode: SearchMode,
    statistics: SearchStatistics,
}

impl BacktrackSearcher {
    pub fn new(model: Model) -> Self {
        BacktrackSearcher {
            model,
            propagator: ConstraintPropagator::new(),
            variable_order: VariableOrder::default(),
            value_order: ValueOrder::default(),
            mode: SearchMode::default(),
            statistics: SearchStatistics::default(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }

    /// Counters for the runs so far. Repeated `solve` calls accumulate.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Runs the search to completion.
    ///
    /// Pre-assigned variables are propagated first, in ascending id order;
    /// their reductions are permanent. A contradiction among them settles
    /// the model as [`SearchState::Infeasible`] without any search.
    pub fn solve(&mut self) -> SearchState {
        let started = Instant::now();
        debug!(
            "solving model with {} variables and {} constraints",
            self.model.variables().len(),
            self.model.constraints().len()
        );

        let state = if !self.propagate_assigned() {
            SearchState::Infeasible
        } else {
            let state = match self.mode {
                SearchMode::Recursive => self.search(),
                SearchMode::Iterative => self.search_iterative(),
            };
            match state {
                // Exhausting the whole tree without a solution settles it.
                SearchState::Undetermined => SearchState::Infeasible,
                other => other,
            }
        };

        self.statistics.elapsed += started.elapsed();
        debug!(
            "search finished {:?} after {} assignments and {} backtracks",
            state, self.statistics.total_assignments, self.statistics.backtracks
        );
        state
    }

    /// Propagates every currently assigned variable, ascending by id.
    /// Returns false on the first contradiction. The logs are dropped, not
    /// undone: these reductions are the permanent floor the search stands
    /// on.
    fn propagate_assigned(&mut self) -> bool {
        let assigned: Vec<(VariableId, i32)> = self
            .model
            .variables()
            .iter()
            .filter_map(|v| v.value().map(|value| (v.id(), value)))
            .collect();
        for (variable, value) in assigned {
            let propagation = self
                .propagator
                .propagate_assignment(&mut self.model, variable, value);
            if !propagation.is_valid() {
                debug!(
                    "pre-assigned {} = {} contradicts the model",
                    self.model.variable(variable).name(),
                    value
                );
                return false;
            }
        }
        true
    }

    /// Propagates to a fixpoint without branching: every assigned variable
    /// is propagated, then any variable whose domain has collapsed to a
    /// single candidate is bound and propagated in turn, until no singleton
    /// remains.
    ///
    /// Returns false when the model is proven infeasible on the way. All
    /// reductions and forced assignments are permanent, and the forced
    /// assignments count towards the statistics.
    pub fn make_arc_consistent(&mut self) -> bool {
        if !self.propagate_assigned() {
            return false;
        }
        loop {
            let forced = self.model.variables().iter().find_map(|v| {
                if v.is_assigned() {
                    return None;
                }
                let mut candidates = v.domain().iter();
                match (candidates.next(), candidates.next()) {
                    (Some(value), None) => Some((v.id(), value)),
                    _ => None,
                }
            });
            let Some((variable, value)) = forced else {
                return true;
            };
            trace!(
                "fixpoint binds {} = {}",
                self.model.variable(variable).name(),
                value
            );
            self.model.variable_mut(variable).assign(value);
            self.statistics.total_assignments += 1;
            let propagation = self
                .propagator
                .propagate_assignment(&mut self.model, variable, value);
            if !propagation.is_valid() {
                return false;
            }
        }
    }

    fn search(&mut self) -> SearchState {
        let Some(variable) = select_variable(&self.model, self.variable_order) else {
            return if self.model.is_consistent() {
                SearchState::Satisfied
            } else {
                SearchState::Undetermined
            };
        };

        for value in order_values(&self.model, variable, self.value_order) {
            trace!(
                "trying {} = {}",
                self.model.variable(variable).name(),
                value
            );
            self.model.variable_mut(variable).assign(value);
            self.statistics.total_assignments += 1;
            let propagation = self
                .propagator
                .propagate_assignment(&mut self.model, variable, value);

            if propagation.is_valid() && self.search() == SearchState::Satisfied {
                // The winning chain of assignments stays in place.
                return SearchState::Satisfied;
            }

            // Valid or not, the wave rolls back the same way.
            self.propagator.undo_propagation(&mut self.model, &propagation);
            self.model.variable_mut(variable).unassign();
            self.statistics.backtracks += 1;
        }
        SearchState::Undetermined
    }

    /// The explicit-stack twin of [`search`](Self::search).
    ///
    /// `work` holds the pending choices; every `Try` pushes an `Undo`
    /// marker above the variable's remaining choices, and `trail` keeps the
    /// matching propagation log for that marker. A dead branch simply falls
    /// through to its marker.
    fn search_iterative(&mut self) -> SearchState {
        let Some(first) = select_variable(&self.model, self.variable_order) else {
            return if self.model.is_consistent() {
                SearchState::Satisfied
            } else {
                SearchState::Undetermined
            };
        };

        let mut work: Vec<WorkItem> = Vec::new();
        let mut trail: Vec<Propagation> = Vec::new();
        self.push_choices(&mut work, first);

        while let Some(item) = work.pop() {
            match item {
                WorkItem::Undo { variable } => {
                    let propagation = trail
                        .pop()
                        .expect("every undo marker has a propagation on the trail");
                    self.propagator.undo_propagation(&mut self.model, &propagation);
                    self.model.variable_mut(variable).unassign();
                    self.statistics.backtracks += 1;
                }
                WorkItem::Try { variable, value } => {
                    trace!(
                        "trying {} = {}",
                        self.model.variable(variable).name(),
                        value
                    );
                    self.model.variable_mut(variable).assign(value);
                    self.statistics.total_assignments += 1;
                    let propagation = self
                        .propagator
                        .propagate_assignment(&mut self.model, variable, value);
                    let valid = propagation.is_valid();
                    trail.push(propagation);
                    work.push(WorkItem::Undo { variable });

                    if !valid {
                        // Fall through to the marker just pushed.
                        continue;
                    }
                    match select_variable(&self.model, self.variable_order) {
                        None => {
                            if self.model.is_consistent() {
                                return SearchState::Satisfied;
                            }
                            // A full but inconsistent assignment backtracks
                            // through the marker like any dead branch.
                        }
                        Some(next) => self.push_choices(&mut work, next),
                    }
                }
            }
        }
        SearchState::Undetermined
    }

    /// Pushes `variable`'s candidates in reverse heuristic order, so the
    /// heuristically first value is popped first.
    fn push_choices(&self, work: &mut Vec<WorkItem>, variable: VariableId) {
        let values = order_values(&self.model, variable, self.value_order);
        for value in values.into_iter().rev() {
            work.push(WorkItem::Try { variable, value });
        }
    }
}
