//! Variable- and value-ordering strategies for the searcher.
//!
//! Both strategy sets are closed enums dispatched with exhaustive matches,
//! so selecting a strategy can never fail at runtime and adding one forces
//! every dispatch site to handle it.

pub mod value;
pub mod variable;
