use std::fmt;

use super::types::Value;

/// A reference to a named value: either a global blueprint variable, or an
/// output of one of the blueprint's modules.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    pub name: String,
}

impl Reference {
    pub fn global(name: impl Into<String>) -> Self {
        Reference { module: None, name: name.into() }
    }

    pub fn module(module: impl Into<String>, name: impl Into<String>) -> Self {
        Reference { module: Some(module.into()), name: name.into() }
    }

    pub fn is_global(&self) -> bool {
        self.module.is_none()
    }

    pub fn as_expression(&self) -> Expression {
        Expression { source: self.to_string(), references: vec![self.clone()] }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "module.{}.{}", module, self.name),
            None => write!(f, "var.{}", self.name),
        }
    }
}

/// An expression whose evaluation is deferred until execution time.
///
/// The planning layer never inspects the inner representation: an expression
/// is carried along as a value and compared structurally. The only thing that
/// can be asked of it is which references it depends on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expression {
    source: String,
    references: Vec<Reference>,
}

impl Expression {
    pub fn global_references(&self) -> impl Iterator<Item = &str> {
        self.references.iter().filter(|r| r.is_global()).map(|r| r.name.as_str())
    }

    pub fn as_value(&self) -> Value {
        Value::Expression(self.clone())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(({}))", self.source)
    }
}

/// Builds the opaque values standing for "the value of global variable X,
/// resolved at run time".
pub trait ReferenceBuilder {
    fn global_reference(&self, name: &str) -> Value;
}

/// Default [`ReferenceBuilder`], producing `((var.<name>))` expressions.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalReferences;

impl ReferenceBuilder for GlobalReferences {
    fn global_reference(&self, name: &str) -> Value {
        Reference::global(name).as_expression().as_value()
    }
}
