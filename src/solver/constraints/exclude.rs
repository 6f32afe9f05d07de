use crate::solver::domain::ON;
use crate::solver::model::Model;
use crate::solver::propagator::{Inconsistency, PropagationContext};
use crate::solver::variable::VariableId;

/// Mutual exclusion: the two features can never be selected together.
///
/// Symmetric, and fires from either side: switching one on rules the other
/// out.
#[derive(Debug, Clone)]
pub struct ExcludeConstraint {
    vars: [VariableId; 2],
}

impl ExcludeConstraint {
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
            (Some(parent), Some(child)) => !(parent == ON && child == ON),
            _ => true,
        }
    }

    pub(crate) fn propagate(
        &self,
        assigned: VariableId,
        value: i32,
        ctx: &mut PropagationContext<'_>,
    ) -> Result<(), Inconsistency> {
        if value == ON {
            let other = if assigned == self.parent() {
                self.child()
            } else {
                self.parent()
            };
            ctx.eliminate(other, ON)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::solver::domain::{OFF, ON};
    use crate::solver::model::{Model, ModelBuilder};
    use crate::solver::propagator::ConstraintPropagator;

    fn model(parent: Option<i32>, child: Option<i32>) -> Model {
        let mut builder = ModelBuilder::new();
        let boolean = builder.create_boolean_domain();
        let p = builder.create_variable("parent", &boolean);
        let c = builder.create_variable("child", &boolean);
        builder.create_exclude(p, c).unwrap();
        if let Some(value) = parent {
            builder.assign(p, value).unwrap();
        }
        if let Some(value) = child {
            builder.assign(c, value).unwrap();
        }
        builder.build()
    }

    #[test]
    fn truth_table() {
        for parent in [OFF, ON] {
            for child in [OFF, ON] {
                let m = model(Some(parent), Some(child));
                assert_eq!(
                    m.constraints()[0].is_satisfied(&m),
                    !(parent == ON && child == ON),
                    "parent={parent} child={child}"
                );
            }
        }
    }

    #[test]
    fn switching_either_side_on_rules_the_other_out() {
        let mut m = model(Some(ON), None);
        let propagation = ConstraintPropagator::new().propagate_assignment(&mut m, 0, ON);
        assert!(propagation.is_valid());
        assert_eq!(m.variable(1).domain().sorted_values(), vec![OFF]);

        let mut m = model(None, Some(ON));
        let propagation = ConstraintPropagator::new().propagate_assignment(&mut m, 1, ON);
        assert!(propagation.is_valid());
        assert_eq!(m.variable(0).domain().sorted_values(), vec![OFF]);
    }

    #[test]
    fn switching_off_constrains_nothing() {
        let mut m = model(Some(OFF), None);
        let propagation = ConstraintPropagator::new().propagate_assignment(&mut m, 0, OFF);
        assert!(propagation.is_valid());
        assert!(propagation.reductions().is_empty());
    }

    #[test]
    fn both_on_is_rejected_in_propagation() {
        let mut m = model(Some(ON), Some(ON));
        let propagation = ConstraintPropagator::new().propagate_assignment(&mut m, 0, ON);
        assert!(!propagation.is_valid());
    }
}
