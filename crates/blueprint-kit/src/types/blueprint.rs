use std::fmt;

use super::dict::Dict;
use super::types::Value;

/// How failing validators are treated by the executor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationLevel {
    /// Validators are not run at all
    Ignore,
    /// Failures are reported, deployment proceeds
    Warning,
    /// Failures abort the deployment
    #[default]
    Error,
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationLevel::Ignore => write!(f, "IGNORE"),
            ValidationLevel::Warning => write!(f, "WARNING"),
            ValidationLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A named validation check and the inputs handed to it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    pub validator: String,
    #[serde(default, skip_serializing_if = "Dict::is_empty")]
    pub inputs: Dict,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skip: bool,
}

impl Validator {
    pub fn new(validator: impl Into<String>) -> Self {
        Validator { validator: validator.into(), inputs: Dict::new(), skip: false }
    }

    pub fn with_inputs(mut self, inputs: Dict) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Dict::is_empty")]
    pub settings: Dict,
}

impl Module {
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Module { id: id.into(), source: source.into(), settings: Dict::new() }
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.settings.set(key, value);
        self
    }
}

/// A snapshot of a deployment configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(default)]
    pub blueprint_name: String,
    #[serde(default)]
    pub vars: Dict,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub validation_level: ValidationLevel,
}

impl Blueprint {
    pub fn new(blueprint_name: impl Into<String>) -> Self {
        Blueprint { blueprint_name: blueprint_name.into(), ..Default::default() }
    }

    pub fn has_var(&self, name: &str) -> bool {
        self.vars.has(name)
    }

    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }
}
