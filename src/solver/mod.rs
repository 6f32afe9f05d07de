pub mod constraint;
pub mod constraints;
pub mod domain;
pub mod heuristics;
pub mod model;
pub mod propagation;
pub mod propagator;
pub mod search;
pub mod stats;
pub mod variable;
