use crate::solver::domain::{OFF, ON};
use crate::solver::model::Model;
use crate::solver::propagator::{Inconsistency, PropagationContext};
use crate::solver::variable::VariableId;

/// Parent and child features stand or fall together: both on or both off.
///
/// Binding either side propagates by ruling the opposite truth value out
/// for the partner.
#[derive(Debug, Clone)]
pub struct MandatoryConstraint {
    vars: [VariableId; 2],
}

impl MandatoryConstraint {
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
            (Some(parent), Some(child)) => parent == child,
            _ => true,
        }
    }

    pub(crate) fn propagate(
        &self,
        assigned: VariableId,
        value: i32,
        ctx: &mut PropagationContext<'_>,
    ) -> Result<(), Inconsistency> {
        let partner = if assigned == self.parent() {
            self.child()
        } else {
            self.parent()
        };
        let complement = if value == ON { OFF } else { ON };
        ctx.eliminate(partner, complement)
    }
}
