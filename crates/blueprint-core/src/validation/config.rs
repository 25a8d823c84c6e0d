use kit::types::{Blueprint, ValidationLevel, Validator};

/// Configuration for the preflight pass
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Overrides the level set by the blueprint
    pub validation_level: Option<ValidationLevel>,
    /// Validators to leave out of the plan, by name
    pub skip_validators: Vec<String>,
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validation_level(mut self, level: ValidationLevel) -> Self {
        self.validation_level = Some(level);
        self
    }

    pub fn skip_validator(mut self, name: impl Into<String>) -> Self {
        self.skip_validators.push(name.into());
        self
    }

    pub fn effective_level(&self, bp: &Blueprint) -> ValidationLevel {
        self.validation_level.unwrap_or(bp.validation_level)
    }

    pub fn is_skipped(&self, validator: &Validator) -> bool {
        validator.skip || self.skip_validators.iter().any(|name| name == &validator.validator)
    }
}
