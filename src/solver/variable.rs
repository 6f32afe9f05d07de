use crate::solver::domain::Domain;

/// Dense 0-based handle issued by the builder in creation order, usable as a
/// direct index into the model's variable array.
pub type VariableId = usize;

/// One decision variable: an identity, a display name, an exclusively owned
/// [`Domain`] of remaining candidates, and the current assignment.
///
/// While a variable is assigned, the held value is absent from its own
/// domain; [`unassign`](Variable::unassign) puts it back. The two operations
/// are exact inverses for any value drawn from the domain.
#[derive(Debug, Clone)]
pub struct Variable {
    id: VariableId,
    name: String,
    domain: Domain,
    assignment: Option<i32>,
}

impl Variable {
    pub(crate) fn new(id: VariableId, name: String, domain: Domain) -> Self {
        Variable {
            id,
            name,
            domain,
            assignment: None,
        }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn value(&self) -> Option<i32> {
        self.assignment
    }

    pub fn is_assigned(&self) -> bool {
        self.assignment.is_some()
    }

    /// Binds the variable to `value` and withdraws that value from its own
    /// domain. `value` must be a remaining candidate or a pre-known fixed
    /// value; the caller only ever assigns unassigned variables.
    pub fn assign(&mut self, value: i32) {
        debug_assert!(
            self.assignment.is_none(),
            "variable `{}` is already assigned",
            self.name
        );
        self.domain.remove(value);
        self.assignment = Some(value);
    }

    /// Clears the assignment and restores the held value to the domain.
    /// A no-op on an unassigned variable.
    pub fn unassign(&mut self) {
        if let Some(value) = self.assignment.take() {
            self.domain.restore(value);
        }
    }

    pub(crate) fn remove_candidate(&mut self, value: i32) -> bool {
        self.domain.remove(value)
    }

    pub(crate) fn restore_candidate(&mut self, value: i32) {
        self.domain.restore(value);
    }
}
