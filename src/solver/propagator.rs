use tracing::{debug, trace};

use crate::solver::model::Model;
use crate::solver::propagation::Propagation;
use crate::solver::variable::{Variable, VariableId};

/// The current wave hit a contradiction: a domain was emptied, or a value an
/// assigned variable is holding was ruled out.
pub(crate) struct Inconsistency;

/// Borrowed view handed to the constraint rules: the variable array plus the
/// active log. All pruning funnels through [`eliminate`], which is what
/// keeps "logged" and "removed" in lockstep.
///
/// [`eliminate`]: PropagationContext::eliminate
pub(crate) struct PropagationContext<'a> {
    variables: &'a mut [Variable],
    propagation: &'a mut Propagation,
}

impl PropagationContext<'_> {
    /// Rules `value` out for `target`.
    ///
    /// Unassigned target: the value is logged, then removed; an emptied
    /// domain is a contradiction. Assigned target: holding the value is a
    /// contradiction, holding anything else is a no-op. Nothing is ever
    /// logged without being removed, and vice versa.
    pub(crate) fn eliminate(
        &mut self,
        target: VariableId,
        value: i32,
    ) -> Result<(), Inconsistency> {
        let variable = &mut self.variables[target];
        if let Some(held) = variable.value() {
            if held == value {
                return Err(Inconsistency);
            }
            return Ok(());
        }
        if variable.domain().contains(value) {
            trace!("pruning {} from {}", value, variable.name());
            self.propagation.record(target, value);
            variable.remove_candidate(value);
            if variable.domain().is_empty() {
                return Err(Inconsistency);
            }
        }
        Ok(())
    }
}

/// Applies and reverts forward-checking waves over a model.
///
/// Stateless; all state lives in the model and the returned [`Propagation`]
/// logs. The searcher owns one and drives it, but it is equally usable on
/// its own for scripted what-if probing of a model.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintPropagator;

impl ConstraintPropagator {
    pub fn new() -> Self {
        ConstraintPropagator
    }

    /// Pushes the consequences of `variable = value` through every
    /// constraint referencing the variable, in ascending constraint order.
    ///
    /// The caller has already assigned the variable. The returned log holds
    /// whatever reductions were applied, whether or not the wave stayed
    /// valid; an invalid wave stops at the first contradiction and expects
    /// the caller to undo the partial log like any other.
    pub fn propagate_assignment(
        &self,
        model: &mut Model,
        variable: VariableId,
        value: i32,
    ) -> Propagation {
        let mut propagation = Propagation::new();
        let Model {
            variables,
            constraints,
            referencing,
        } = &mut *model;
        let mut ctx = PropagationContext {
            variables: variables.as_mut_slice(),
            propagation: &mut propagation,
        };
        for &cid in &referencing[variable] {
            if constraints[cid].propagate(variable, value, &mut ctx).is_err() {
                ctx.propagation.invalidate();
                break;
            }
        }
        if !propagation.is_valid() {
            debug!(
                "propagating {} = {} hit a contradiction",
                model.variable(variable).name(),
                value
            );
        }
        propagation
    }

    /// Restores every reduction in the log. Driven purely by the log, so
    /// valid and failed waves roll back identically.
    pub fn undo_propagation(&self, model: &mut Model, propagation: &Propagation) {
        for reduction in propagation.reductions() {
            model
                .variable_mut(reduction.variable)
                .restore_candidate(reduction.value);
        }
    }
}
