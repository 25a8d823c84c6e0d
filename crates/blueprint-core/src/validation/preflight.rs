//! Preflight checks run on validators before they are dispatched
//!
//! The default validators of a blueprint are followed by the validators it
//! lists explicitly. Every candidate that is not skipped must name a known
//! validator, receive exactly the inputs that validator requires, and only
//! reference global variables the blueprint defines. Candidates passing all
//! three checks make up the plan; the others are reported as diagnostics.
//! Skipped candidates are recorded as notes, and every diagnostic carries the
//! location of its candidate in the context field.

use std::str::FromStr;

use super::config::ValidationConfig;
use super::defaults::defaults;
use super::inputs::check_inputs;
use super::types::ValidationResult;
use super::validator_id::ValidatorId;
use crate::errors::ValidatorError;
use crate::Context;
use kit::types::diagnostics::Diagnostic;
use kit::types::{Blueprint, Dict, ValidationLevel, Validator};
use strum::IntoEnumIterator;

/// Diagnostic context for validators scheduled by default rather than listed in the blueprint
const DEFAULTS_LOCATION: &str = "default validators";

/// A validator cleared for execution
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedValidator {
    pub id: ValidatorId,
    pub inputs: Dict,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationPlan {
    /// Level the executor applies to failing validators
    pub level: ValidationLevel,
    /// Validators to dispatch, in order
    pub validators: Vec<PlannedValidator>,
    /// Names of the validators left out on request
    pub skipped: Vec<String>,
    pub result: ValidationResult,
}

impl ValidationPlan {
    fn new(level: ValidationLevel) -> Self {
        ValidationPlan {
            level,
            validators: vec![],
            skipped: vec![],
            result: ValidationResult::new(),
        }
    }

    /// Whether the plan can be handed to the executor
    pub fn is_ready(&self) -> bool {
        !self.result.has_errors()
    }

    pub fn validator_ids(&self) -> Vec<ValidatorId> {
        self.validators.iter().map(|v| v.id).collect()
    }
}

/// Assemble the validators to run against `bp`.
pub fn plan_validators(
    bp: &Blueprint,
    config: &ValidationConfig,
    ctx: &Context,
) -> ValidationPlan {
    let level = config.effective_level(bp);
    let mut plan = ValidationPlan::new(level);

    if level == ValidationLevel::Ignore {
        ctx.try_log(|logger| info!(logger, "Validation level is {}, no validator will run", level));
        return plan;
    }

    let scheduled = defaults(bp).into_iter().map(|v| (DEFAULTS_LOCATION.to_string(), v));
    let listed = bp
        .validators
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, v)| (format!("validators[{}]", index), v));

    for (location, validator) in scheduled.chain(listed) {
        if config.is_skipped(&validator) {
            ctx.try_log(|logger| debug!(logger, "Skipping validator {}", validator.validator));
            plan.result.push(
                Diagnostic::note(format!("validator {} skipped", validator.validator))
                    .with_context(location),
            );
            plan.skipped.push(validator.validator);
            continue;
        }

        match prepare(bp, &validator) {
            Ok(id) => plan.validators.push(PlannedValidator { id, inputs: validator.inputs }),
            Err(errors) => {
                for error in errors {
                    ctx.try_log(|logger| warn!(logger, "{}", error));
                    plan.result.push(to_diagnostic(&error, level).with_context(location.as_str()));
                }
            }
        }
    }

    ctx.try_log(|logger| {
        info!(
            logger,
            "{} validators planned, {} skipped, {} rejected",
            plan.validators.len(),
            plan.skipped.len(),
            plan.result.error_count() + plan.result.warning_count()
        )
    });
    plan
}

fn prepare(bp: &Blueprint, validator: &Validator) -> Result<ValidatorId, Vec<ValidatorError>> {
    let name = &validator.validator;
    let id = ValidatorId::from_str(name)
        .map_err(|_| vec![ValidatorError::UnknownValidator(name.clone())])?;

    check_inputs(&validator.inputs, id.required_inputs()).map_err(|source| {
        vec![ValidatorError::InputMismatch { validator: name.clone(), source }]
    })?;

    let mut undefined: Vec<&str> = vec![];
    for (_, value) in validator.inputs.iter() {
        for variable in value.global_references() {
            if !bp.has_var(variable) && !undefined.contains(&variable) {
                undefined.push(variable);
            }
        }
    }
    if !undefined.is_empty() {
        return Err(undefined
            .into_iter()
            .map(|variable| ValidatorError::UndefinedVariable {
                validator: name.clone(),
                variable: variable.to_string(),
            })
            .collect());
    }

    Ok(id)
}

fn to_diagnostic(error: &ValidatorError, level: ValidationLevel) -> Diagnostic {
    let diagnostic = match error {
        ValidatorError::UndefinedVariable { variable, validator }
            if level == ValidationLevel::Warning =>
        {
            Diagnostic::warning(error.to_string()).with_suggestion(format!(
                "define '{}' in the blueprint vars, or skip '{}'",
                variable, validator
            ))
        }
        ValidatorError::UndefinedVariable { variable, validator } => {
            Diagnostic::error(error.to_string()).with_suggestion(format!(
                "define '{}' in the blueprint vars, or skip '{}'",
                variable, validator
            ))
        }
        ValidatorError::UnknownValidator(_) => {
            let known = ValidatorId::iter().map(|id| id.as_str()).collect::<Vec<_>>();
            Diagnostic::error(error.to_string())
                .with_suggestion(format!("known validators are: {}", known.join(", ")))
        }
        ValidatorError::InputMismatch { validator, .. } => {
            let diagnostic = Diagnostic::error(error.to_string());
            match ValidatorId::from_str(validator) {
                Ok(id) => diagnostic.with_documentation(id.description()),
                Err(_) => diagnostic,
            }
        }
    };
    diagnostic.with_code(error.code())
}
