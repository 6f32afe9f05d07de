use crate::solver::variable::VariableId;

pub type Result<T, E = ModelError> = core::result::Result<T, E>;

/// Fatal model-construction errors.
///
/// Everything here is raised while a model is being declared. Once
/// [`build`](crate::solver::model::ModelBuilder::build) has succeeded the
/// model is structurally sound; an unsolvable model is reported through
/// [`SearchState::Infeasible`](crate::solver::search::SearchState), not an
/// error.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("domain values must be unique, got duplicate {value}")]
    DuplicateDomainValue { value: i32 },

    #[error("variable `{name}` must have a boolean domain to take part in a {constraint} constraint")]
    NonBooleanDomain { name: String, constraint: &'static str },

    #[error("unknown variable id {id}")]
    UnknownVariable { id: VariableId },
}
