pub mod blueprint;
pub mod diagnostic_types;
pub mod diagnostics;
pub mod dict;
pub mod expressions;
pub mod types;

pub use blueprint::{Blueprint, Module, ValidationLevel, Validator};
pub use dict::Dict;
pub use expressions::{Expression, GlobalReferences, Reference, ReferenceBuilder};
pub use types::Value;

#[cfg(test)]
mod tests;
