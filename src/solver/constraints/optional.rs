use crate::solver::domain::{OFF, ON};
use crate::solver::model::Model;
use crate::solver::propagator::{Inconsistency, PropagationContext};
use crate::solver::variable::VariableId;

/// The child feature may be selected only while its parent is selected.
///
/// An unselected parent with a selected child is the one forbidden state.
/// The rule fires in a single direction: a child switched on forces its
/// parent on. A parent switched off constrains nothing directly; a later
/// attempt to switch the child on is what trips the conflict.
#[derive(Debug, Clone)]
pub struct OptionalConstraint {
    vars: [VariableId; 2],
}

impl OptionalConstraint {
    pub(crate) fn new(parent: VariableId, child: VariableId) -> Self {
        Self {
            vars: [parent, child],
        }
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    pub fn parent(&self) -> VariableId {
        self.vars[0]
    }

    pub fn child(&self) -> VariableId {
        self.vars[1]
    }

    pub fn is_satisfied(&self, model: &Model) -> bool {
        match (
            model.variable(self.parent()).value(),
            model.variable(self.child()).value(),
        ) {
            (Some(parent), Some(child)) => !(parent == OFF && child == ON),
            _ => true,
        }
    }

    pub(crate) fn propagate(
        &self,
        assigned: VariableId,
        value: i32,
        ctx: &mut PropagationContext<'_>,
    ) -> Result<(), Inconsistency> {
        if assigned == self.child() && value == ON {
            ctx.eliminate(self.parent(), OFF)?;
        }
        Ok(())
    }
}
