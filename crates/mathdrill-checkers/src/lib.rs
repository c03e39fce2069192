//! mathdrill-checkers — answer-checking strategies and their registry.
//!
//! Implements the `Checker` trait for the arithmetic, fraction, and power
//! quiz families, and builds the quiz-name → checker bindings the catalog
//! consumes.

pub mod arithmetic;
pub mod fraction;
pub mod mock;
pub mod power;
pub mod registry;

pub use registry::{create_checker, CheckerKind, CheckerRegistry, RegistryError};
