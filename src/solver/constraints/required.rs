use crate::solver::domain::{OFF, ON};
use crate::solver::model::Model;
use crate::solver::propagator::{Inconsistency, PropagationContext};
use crate::solver::variable::VariableId;

/// A selected parent requires the child: parent on forces child on.
///
/// Unlike [`MandatoryConstraint`](super::mandatory::MandatoryConstraint)
/// this is one-way; the child on its own says nothing about the parent, and
/// an unselected parent leaves the child free.
#[derive(Debug, Clone)]
pub struct RequiredConstraint {
    vars: [VariableId; 2],
}

impl RequiredConstraint {
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
            (Some(parent), Some(child)) => !(parent == ON && child == OFF),
            _ => true,
        }
    }

    pub(crate) fn propagate(
        &self,
        assigned: VariableId,
        value: i32,
        ctx: &mut PropagationContext<'_>,
    ) -> Result<(), Inconsistency> {
        if assigned == self.parent() && value == ON {
            ctx.eliminate(self.child(), OFF)?;
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
        builder.create_required(p, c).unwrap();
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
                    !(parent == ON && child == OFF),
                    "parent={parent} child={child}"
                );
            }
        }
    }

    #[test]
    fn parent_on_forces_the_child_on() {
        let mut m = model(Some(ON), None);
        let propagation = ConstraintPropagator::new().propagate_assignment(&mut m, 0, ON);
        assert!(propagation.is_valid());
        assert_eq!(m.variable(1).domain().sorted_values(), vec![ON]);
    }

    #[test]
    fn parent_off_leaves_the_child_free() {
        let mut m = model(Some(OFF), None);
        let propagation = ConstraintPropagator::new().propagate_assignment(&mut m, 0, OFF);
        assert!(propagation.is_valid());
        assert_eq!(m.variable(1).domain().len(), 2);
    }

    #[test]
    fn child_assignment_does_not_fire_the_rule() {
        let mut m = model(None, Some(ON));
        let propagation = ConstraintPropagator::new().propagate_assignment(&mut m, 1, ON);
        assert!(propagation.is_valid());
        assert!(propagation.reductions().is_empty());
    }

    #[test]
    fn parent_on_with_a_held_off_child_is_rejected() {
        let mut m = model(Some(ON), Some(OFF));
        let propagation = ConstraintPropagator::new().propagate_assignment(&mut m, 0, ON);
        assert!(!propagation.is_valid());
    }
}
