//! Default validators
//!
//! Which validators run when a blueprint does not opt out of them. Each entry
//! of [`DEFAULT_RULES`] is evaluated independently and in table order, so the
//! position of a rule in the table is its position in the produced list.

use super::validator_id::ValidatorId;
use kit::types::{Blueprint, Dict, GlobalReferences, ReferenceBuilder, Validator};

/// Condition under which a default validator is scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Always,
    /// The named global variable is defined
    Defined(&'static str),
    /// Every named global variable is defined
    AllDefined(&'static [&'static str]),
}

impl Trigger {
    pub fn is_met(&self, bp: &Blueprint) -> bool {
        match self {
            Trigger::Always => true,
            Trigger::Defined(name) => bp.has_var(name),
            Trigger::AllDefined(names) => names.iter().all(|name| bp.has_var(name)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultRule {
    pub validator: ValidatorId,
    pub trigger: Trigger,
}

impl DefaultRule {
    pub const fn new(validator: ValidatorId, trigger: Trigger) -> Self {
        DefaultRule { validator, trigger }
    }

    /// Build the validator this rule schedules, referencing one global variable per required input.
    pub fn build(&self, references: &impl ReferenceBuilder) -> Validator {
        let inputs = self
            .validator
            .required_inputs()
            .iter()
            .map(|name| (*name, references.global_reference(name)))
            .collect::<Dict>();
        Validator::new(self.validator.as_str()).with_inputs(inputs)
    }
}

// Region and zone checks fire on their own variable only: `project_id` is
// referenced but not required to be defined. Undefined references are
// reported by the preflight pass instead.
pub const DEFAULT_RULES: &[DefaultRule] = &[
    DefaultRule::new(ValidatorId::TestModuleNotUsed, Trigger::Always),
    DefaultRule::new(ValidatorId::TestDeploymentVariableNotUsed, Trigger::Always),
    DefaultRule::new(ValidatorId::TestProjectExists, Trigger::Defined("project_id")),
    DefaultRule::new(ValidatorId::TestApisEnabled, Trigger::Always),
    DefaultRule::new(ValidatorId::TestRegionExists, Trigger::Defined("region")),
    DefaultRule::new(ValidatorId::TestZoneExists, Trigger::Defined("zone")),
    DefaultRule::new(ValidatorId::TestZoneInRegion, Trigger::AllDefined(&["region", "zone"])),
];

/// Validators scheduled by default for `bp`, in execution order.
pub fn defaults(bp: &Blueprint) -> Vec<Validator> {
    defaults_with(bp, &GlobalReferences)
}

/// Same as [`defaults`], building variable references with `references`.
pub fn defaults_with(bp: &Blueprint, references: &impl ReferenceBuilder) -> Vec<Validator> {
    DEFAULT_RULES
        .iter()
        .filter(|rule| rule.trigger.is_met(bp))
        .map(|rule| rule.build(references))
        .collect()
}
