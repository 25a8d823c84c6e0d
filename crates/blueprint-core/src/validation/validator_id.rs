//! Type-safe identification of the validators known to the toolkit
//!
//! Blueprints name validators with plain strings; this enum is the registry
//! those names are resolved against, together with the inputs each validator
//! accepts.

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,      // Provides as_ref() -> &str
    Display,       // Provides to_string()
    EnumString,    // Provides from_str()
    IntoStaticStr, // Provides into() -> &'static str
    EnumIter,      // Provides iter() over all variants
)]
#[strum(serialize_all = "snake_case")]
pub enum ValidatorId {
    // Structural hygiene
    TestModuleNotUsed,
    TestDeploymentVariableNotUsed,

    // Cloud project state
    TestProjectExists,
    TestApisEnabled,
    TestRegionExists,
    TestZoneExists,
    TestZoneInRegion,
}

impl ValidatorId {
    /// Names of the inputs this validator must receive, no more and no fewer
    pub const fn required_inputs(&self) -> &'static [&'static str] {
        use ValidatorId::*;
        match self {
            TestModuleNotUsed | TestDeploymentVariableNotUsed | TestApisEnabled => &[],
            TestProjectExists => &["project_id"],
            TestRegionExists => &["project_id", "region"],
            TestZoneExists => &["project_id", "zone"],
            TestZoneInRegion => &["project_id", "region", "zone"],
        }
    }

    /// Get a human-readable description of what the validator checks
    pub const fn description(&self) -> &'static str {
        use ValidatorId::*;
        match self {
            TestModuleNotUsed => "Checks that every module listed in `use` is consumed",
            TestDeploymentVariableNotUsed => "Checks that every deployment variable is referenced",
            TestProjectExists => "Checks that the project exists and is accessible",
            TestApisEnabled => "Checks that the services required by the modules are enabled",
            TestRegionExists => "Checks that the region exists within the project",
            TestZoneExists => "Checks that the zone exists within the project",
            TestZoneInRegion => "Checks that the zone belongs to the region",
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
