//! Literal substitution rules and the engine that applies them.

pub mod engine;
pub mod map;

pub use engine::substitute;
pub use map::{MappingViolation, Substitution, SubstitutionError, SubstitutionMap};
