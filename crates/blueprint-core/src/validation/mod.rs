//! Validator planning for blueprints
//!
//! This module decides which validation checks run against a blueprint and
//! whether the inputs handed to each check are well-formed. It never runs the
//! checks themselves: the resulting [`ValidationPlan`] is handed to whatever
//! executes them.

pub mod config;
pub mod defaults;
pub mod inputs;
pub mod preflight;
pub mod types;
pub mod validator_id;

pub use config::ValidationConfig;
pub use defaults::{defaults, defaults_with, DefaultRule, Trigger, DEFAULT_RULES};
pub use inputs::check_inputs;
pub use preflight::{plan_validators, PlannedValidator, ValidationPlan};
pub use types::ValidationResult;
pub use validator_id::ValidatorId;
