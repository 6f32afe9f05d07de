use crate::solver::domain::ON;
use crate::solver::model::Model;
use crate::solver::variable::VariableId;

/// At-least-one-of: a selected parent selects one or more children, an
/// unselected parent selects none.
///
/// This kind deliberately carries no forward-checking rule. A single child
/// switching on or off decides nothing about its siblings, so the group is
/// judged only once it is fully bound, at the consistency check.
#[derive(Debug, Clone)]
pub struct OrConstraint {
    /// Parent first, then the children.
    vars: Vec<VariableId>,
}

impl OrConstraint {
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
        let mut any_selected = false;
        for &child in self.children() {
            match model.variable(child).value() {
                Some(value) => {
                    if value == ON {
                        any_selected = true;
                    }
                }
                None => return true,
            }
        }
        if parent == ON {
            any_selected
        } else {
            !any_selected
        }
    }
}
