use crate::error::{ModelError, Result};
use crate::solver::constraint::{Constraint, ConstraintId};
use crate::solver::constraints::{
    all_different::AllDifferentConstraint, alternative::AlternativeConstraint,
    exclude::ExcludeConstraint, mandatory::MandatoryConstraint, optional::OptionalConstraint,
    or::OrConstraint, required::RequiredConstraint,
};
use crate::solver::domain::Domain;
use crate::solver::variable::{Variable, VariableId};

/// A frozen constraint network.
///
/// Variables and constraints live in dense arrays indexed by their ids, so
/// every lookup is O(1). After [`ModelBuilder::build`] the structure never
/// changes; only the variables' assignments and domains move, through
/// assign/unassign and propagation/undo.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) variables: Vec<Variable>,
    pub(crate) constraints: Vec<Constraint>,
    /// For each variable, the ids of the constraints referencing it, in
    /// ascending order. Built once; drives propagation and the
    /// least-constraining-value count.
    pub(crate) referencing: Vec<Vec<ConstraintId>>,
}

impl Model {
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn variable_mut(&mut self, id: VariableId) -> &mut Variable {
        &mut self.variables[id]
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id]
    }

    /// Ids of the constraints referencing `id`, ascending.
    pub fn constraints_on(&self, id: VariableId) -> &[ConstraintId] {
        &self.referencing[id]
    }

    /// Whether every constraint holds under the current assignments.
    pub fn is_consistent(&self) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied(self))
    }
}

/// Declares a model: domains, variables, constraints, pre-assignments.
///
/// The builder is the single construction path and front-loads all the
/// structural validation, so a successfully built [`Model`] cannot carry a
/// duplicate-valued domain, a boolean constraint over a non-boolean
/// variable, or a dangling variable id.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        ModelBuilder::default()
    }

    /// A domain template with the given candidates; fails on duplicates.
    pub fn create_domain(&self, values: impl IntoIterator<Item = i32>) -> Result<Domain> {
        Domain::new(values)
    }

    /// The `{0, 1}` template required by the boolean constraint kinds.
    pub fn create_boolean_domain(&self) -> Domain {
        Domain::boolean()
    }

    /// Adds a variable seeded with a copy of `domain` and returns its id.
    /// Ids are dense and issued in creation order.
    pub fn create_variable(&mut self, name: impl Into<String>, domain: &Domain) -> VariableId {
        let id = self.variables.len();
        self.variables.push(Variable::new(id, name.into(), domain.clone()));
        id
    }

    /// Pre-assigns a variable before the model is built, e.g. puzzle clues
    /// or a partial configuration under test.
    pub fn assign(&mut self, id: VariableId, value: i32) -> Result<()> {
        self.check_id(id)?;
        self.variables[id].assign(value);
        Ok(())
    }

    pub fn create_all_different(&mut self, vars: &[VariableId]) -> Result<ConstraintId> {
        for &id in vars {
            self.check_id(id)?;
        }
        Ok(self.push(Constraint::AllDifferent(AllDifferentConstraint::new(
            vars.to_vec(),
        ))))
    }

    pub fn create_mandatory(&mut self, parent: VariableId, child: VariableId) -> Result<ConstraintId> {
        self.check_boolean(parent, "Mandatory")?;
        self.check_boolean(child, "Mandatory")?;
        Ok(self.push(Constraint::Mandatory(MandatoryConstraint::new(parent, child))))
    }

    pub fn create_optional(&mut self, parent: VariableId, child: VariableId) -> Result<ConstraintId> {
        self.check_boolean(parent, "Optional")?;
        self.check_boolean(child, "Optional")?;
        Ok(self.push(Constraint::Optional(OptionalConstraint::new(parent, child))))
    }

    pub fn create_alternative(
        &mut self,
        parent: VariableId,
        children: &[VariableId],
    ) -> Result<ConstraintId> {
        self.check_boolean(parent, "Alternative")?;
        for &child in children {
            self.check_boolean(child, "Alternative")?;
        }
        Ok(self.push(Constraint::Alternative(AlternativeConstraint::new(
            parent,
            children.to_vec(),
        ))))
    }

    pub fn create_or(&mut self, parent: VariableId, children: &[VariableId]) -> Result<ConstraintId> {
        self.check_boolean(parent, "Or")?;
        for &child in children {
            self.check_boolean(child, "Or")?;
        }
        Ok(self.push(Constraint::Or(OrConstraint::new(parent, children.to_vec()))))
    }

    pub fn create_required(&mut self, parent: VariableId, child: VariableId) -> Result<ConstraintId> {
        self.check_boolean(parent, "Required")?;
        self.check_boolean(child, "Required")?;
        Ok(self.push(Constraint::Required(RequiredConstraint::new(parent, child))))
    }

    pub fn create_exclude(&mut self, parent: VariableId, child: VariableId) -> Result<ConstraintId> {
        self.check_boolean(parent, "Exclude")?;
        self.check_boolean(child, "Exclude")?;
        Ok(self.push(Constraint::Exclude(ExcludeConstraint::new(parent, child))))
    }

    /// Freezes the declarations into a [`Model`].
    pub fn build(self) -> Model {
        let mut referencing = vec![Vec::new(); self.variables.len()];
        for (cid, constraint) in self.constraints.iter().enumerate() {
            for &vid in constraint.variables() {
                let refs: &mut Vec<ConstraintId> = &mut referencing[vid];
                // A constraint listing a variable twice still gets one entry.
                if refs.last() != Some(&cid) {
                    refs.push(cid);
                }
            }
        }
        Model {
            variables: self.variables,
            constraints: self.constraints,
            referencing,
        }
    }

    fn push(&mut self, constraint: Constraint) -> ConstraintId {
        let id = self.constraints.len();
        self.constraints.push(constraint);
        id
    }

    fn check_id(&self, id: VariableId) -> Result<()> {
        if id < self.variables.len() {
            Ok(())
        } else {
            Err(ModelError::UnknownVariable { id })
        }
    }

    fn check_boolean(&self, id: VariableId, constraint: &'static str) -> Result<()> {
        self.check_id(id)?;
        let variable = &self.variables[id];
        if variable.domain().is_boolean() {
            Ok(())
        } else {
            Err(ModelError::NonBooleanDomain {
                name: variable.name().to_owned(),
                constraint,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ModelError;

    #[test]
    fn ids_are_dense_and_ordered() {
        let mut builder = ModelBuilder::new();
        let domain = builder.create_domain([1, 2]).unwrap();
        let a = builder.create_variable("a", &domain);
        let b = builder.create_variable("b", &domain);
        let c = builder.create_variable("c", &domain);
        assert_eq!((a, b, c), (0, 1, 2));

        let model = builder.build();
        assert_eq!(model.variable(1).name(), "b");
        assert_eq!(model.variables().len(), 3);
    }

    #[test]
    fn variables_copy_the_domain_template() {
        let mut builder = ModelBuilder::new();
        let domain = builder.create_domain([1, 2, 3]).unwrap();
        let a = builder.create_variable("a", &domain);
        let b = builder.create_variable("b", &domain);
        builder.assign(a, 2).unwrap();
        let model = builder.build();

        // a's own domain lost the held value; b's copy is untouched.
        assert_eq!(model.variable(a).domain().sorted_values(), vec![1, 3]);
        assert_eq!(model.variable(b).domain().sorted_values(), vec![1, 2, 3]);
    }

    #[test]
    fn boolean_creators_reject_plain_domains() {
        let mut builder = ModelBuilder::new();
        let plain = builder.create_domain([0, 1]).unwrap();
        let boolean = builder.create_boolean_domain();
        let p = builder.create_variable("p", &boolean);
        let c = builder.create_variable("c", &plain);

        let err = builder.create_mandatory(p, c).unwrap_err();
        match err {
            ModelError::NonBooleanDomain { name, constraint } => {
                assert_eq!(name, "c");
                assert_eq!(constraint, "Mandatory");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn creators_reject_unknown_ids() {
        let mut builder = ModelBuilder::new();
        let domain = builder.create_domain([1, 2]).unwrap();
        let a = builder.create_variable("a", &domain);

        assert!(matches!(
            builder.create_all_different(&[a, 9]),
            Err(ModelError::UnknownVariable { id: 9 })
        ));
        assert!(matches!(
            builder.assign(4, 1),
            Err(ModelError::UnknownVariable { id: 4 })
        ));
    }

    #[test]
    fn referencing_index_lists_constraints_in_order() {
        let mut builder = ModelBuilder::new();
        let domain = builder.create_domain([1, 2]).unwrap();
        let a = builder.create_variable("a", &domain);
        let b = builder.create_variable("b", &domain);
        let c = builder.create_variable("c", &domain);
        builder.create_all_different(&[a, b]).unwrap();
        builder.create_all_different(&[b, c]).unwrap();
        builder.create_all_different(&[a, b, c]).unwrap();
        let model = builder.build();

        assert_eq!(model.constraints_on(a), &[0, 2]);
        assert_eq!(model.constraints_on(b), &[0, 1, 2]);
        assert_eq!(model.constraints_on(c), &[1, 2]);
    }

    #[test]
    fn consistency_spans_all_constraints() {
        let mut builder = ModelBuilder::new();
        let domain = builder.create_domain([1, 2]).unwrap();
        let a = builder.create_variable("a", &domain);
        let b = builder.create_variable("b", &domain);
        let c = builder.create_variable("c", &domain);
        builder.create_all_different(&[a, b]).unwrap();
        builder.create_all_different(&[b, c]).unwrap();
        let mut model = builder.build();

        model.variable_mut(a).assign(1);
        model.variable_mut(b).assign(2);
        model.variable_mut(c).assign(2);
        assert!(!model.is_consistent());

        model.variable_mut(c).unassign();
        model.variable_mut(c).assign(1);
        assert!(model.is_consistent());
    }
}
