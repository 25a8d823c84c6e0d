//! Error types for validator planning and preflight

use thiserror::Error;

/// The names supplied to a validator differ from the names it requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputMismatch {
    /// At least one required input is absent, whether or not extra names were supplied
    #[error(
        "not all required inputs were provided; exactly {} inputs {} are required",
        .required.len(),
        bracketed(.required)
    )]
    Missing { required: Vec<String> },

    /// Every required input is present, alongside inputs that are not accepted
    #[error("only {} inputs {} should be provided", .required.len(), bracketed(.required))]
    Unexpected { required: Vec<String> },
}

impl InputMismatch {
    pub fn required(&self) -> &[String] {
        match self {
            InputMismatch::Missing { required } | InputMismatch::Unexpected { required } => {
                required
            }
        }
    }
}

/// Errors raised while preparing a validator for dispatch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorError {
    #[error("unknown validator {0:?}")]
    UnknownValidator(String),

    #[error("validator {validator}: {source}")]
    InputMismatch {
        validator: String,
        #[source]
        source: InputMismatch,
    },

    #[error("validator {validator}: global variable {variable:?} is referenced but not defined")]
    UndefinedVariable { validator: String, variable: String },
}

impl ValidatorError {
    /// Short machine-readable identifier, used as the diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            ValidatorError::UnknownValidator(_) => "unknown_validator",
            ValidatorError::InputMismatch { .. } => "input_mismatch",
            ValidatorError::UndefinedVariable { .. } => "undefined_variable",
        }
    }
}

/// Renders names the way blueprint authors write lists: `[a b c]`.
fn bracketed(names: &[String]) -> String {
    format!("[{}]", names.join(" "))
}
