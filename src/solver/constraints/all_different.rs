use std::collections::HashSet;

use crate::solver::model::Model;
use crate::solver::propagator::{Inconsistency, PropagationContext};
use crate::solver::variable::VariableId;

/// Requires every referenced variable to take a distinct value.
///
/// The workhorse of grid puzzles and map colouring. Filtering is plain
/// forward checking: when one member is bound, its value is pruned from
/// every other member. Partial assignments are judged on the bound members
/// only, so the satisfaction test is usable mid-search.
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint {
    vars: Vec<VariableId>,
}

impl AllDifferentConstraint {
    pub(crate) fn new(vars: Vec<VariableId>) -> Self {
        Self { vars }
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    pub fn is_satisfied(&self, model: &Model) -> bool {
        let mut seen = HashSet::with_capacity(self.vars.len());
        for &id in &self.vars {
            if let Some(value) = model.variable(id).value() {
                if !seen.insert(value) {
                    return false;
                }
            }
        }
        true
    }

    pub(crate) fn propagate(
        &self,
        assigned: VariableId,
        value: i32,
        ctx: &mut PropagationContext<'_>,
    ) -> Result<(), Inconsistency> {
        for &other in &self.vars {
            if other != assigned {
                ctx.eliminate(other, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::solver::model::{Model, ModelBuilder};
    use crate::solver::propagator::ConstraintPropagator;

    fn three_variable_model() -> Model {
        let mut builder = ModelBuilder::new();
        let domain = builder.create_domain([1, 2, 3]).unwrap();
        let a = builder.create_variable("a", &domain);
        let b = builder.create_variable("b", &domain);
        let c = builder.create_variable("c", &domain);
        builder.create_all_different(&[a, b, c]).unwrap();
        builder.build()
    }

    #[test]
    fn distinct_bound_values_satisfy() {
        let mut model = three_variable_model();
        model.variable_mut(0).assign(1);
        model.variable_mut(1).assign(2);
        model.variable_mut(2).assign(3);
        assert!(model.constraints()[0].is_satisfied(&model));
    }

    #[test]
    fn equal_bound_values_violate_even_partially() {
        let mut model = three_variable_model();
        model.variable_mut(0).assign(2);
        model.variable_mut(2).assign(2);
        assert!(!model.constraints()[0].is_satisfied(&model));
    }

    #[test]
    fn unbound_variables_do_not_violate() {
        let model = three_variable_model();
        assert!(model.constraints()[0].is_satisfied(&model));
    }

    #[test]
    fn propagation_prunes_the_value_from_peers() {
        let mut model = three_variable_model();
        model.variable_mut(0).assign(2);
        let propagation =
            ConstraintPropagator::new().propagate_assignment(&mut model, 0, 2);

        assert!(propagation.is_valid());
        assert_eq!(propagation.reductions().len(), 2);
        assert!(!model.variable(1).domain().contains(2));
        assert!(!model.variable(2).domain().contains(2));
    }

    mod prop_tests {
        use proptest::prelude::*;

        use super::*;
        use crate::solver::model::ModelBuilder;

        proptest! {
            #[test]
            fn satisfaction_matches_distinctness(values in proptest::collection::vec(1i32..5, 2..5)) {
                let mut builder = ModelBuilder::new();
                let domain = builder.create_domain(1..=4).unwrap();
                let ids: Vec<_> = (0..values.len())
                    .map(|i| builder.create_variable(format!("v{i}"), &domain))
                    .collect();
                builder.create_all_different(&ids).unwrap();
                let mut model = builder.build();

                for (&id, &value) in ids.iter().zip(&values) {
                    model.variable_mut(id).assign(value);
                }

                let mut sorted = values.clone();
                sorted.sort_unstable();
                sorted.dedup();
                let all_distinct = sorted.len() == values.len();

                prop_assert_eq!(model.constraints()[0].is_satisfied(&model), all_distinct);
            }
        }
    }
}
