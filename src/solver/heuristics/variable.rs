//! Strategies for choosing which variable to bind next.

use crate::solver::model::Model;
use crate::solver::variable::VariableId;

/// Variable-ordering strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VariableOrder {
    /// Minimum remaining values: the unassigned variable with the smallest
    /// domain, ties broken by the lowest id.
    ///
    /// A "fail-first" strategy: tackling the most constrained variable
    /// early prunes the search space fastest, and the id tie-break keeps
    /// the choice fully deterministic.
    #[default]
    MinimumRemainingValues,
}

/// Picks the next variable to branch on, or `None` once every variable is
/// assigned.
pub fn select_variable(model: &Model, order: VariableOrder) -> Option<VariableId> {
    match order {
        VariableOrder::MinimumRemainingValues => model
            .variables()
            .iter()
            .filter(|v| !v.is_assigned())
            .min_by_key(|v| (v.domain().len(), v.id()))
            .map(|v| v.id()),
    }
}
