use crate::solver::domain::{OFF, ON};
use crate::solver::model::Model;
use crate::solver::propagator::{Inconsistency, PropagationContext};
use crate::solver::variable::VariableId;

/// Exactly-one-of: a selected parent selects precisely one child, an
/// unselected parent selects none.
///
/// Switching any child on both locks its siblings out and pulls the parent
/// in, so a single decision settles the whole group.
#[derive(Debug, Clone)]
pub struct AlternativeConstraint {
    /// Parent first, then the children.
    vars: Vec<VariableId>,
}

impl AlternativeConstraint {
    pub(crate) fn new(parent: VariableId, children: Vec<VariableId>) -> Self {
        let mut vars = Vec::with_capacity(children.len() + 1);
        vars.push(parent);
        vars.extend(children);
        Self { vars }
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    pub fn parent(&self) -> VariableId {
        self.vars[0]
    }

    pub fn children(&self) -> &[VariableId] {
        &self.vars[1..]
    }

    pub fn is_satisfied(&self, model: &Model) -> bool {
        let Some(parent) = model.variable(self.parent()).value() else {
            return true;
        };
        let mut selected = 0;
        for &child in self.children() {
            match model.variable(child).value() {
                Some(value) => {
                    if value == ON {
                        selected += 1;
                    }
                }
                None => return true,
            }
        }
        if parent == ON {
            selected == 1
        } else {
            selected == 0
        }
    }

    pub(crate) fn propagate(
        &self,
        assigned: VariableId,
        value: i32,
        ctx: &mut PropagationContext<'_>,
    ) -> Result<(), Inconsistency> {
        if value != ON || assigned == self.parent() {
            return Ok(());
        }
        for &sibling in self.children() {
            if sibling != assigned {
                ctx.eliminate(sibling, ON)?;
            }
        }
        ctx.eliminate(self.parent(), OFF)
    }
}
