#[macro_use]
extern crate hiro_system_kit;

#[macro_use]
extern crate serde_derive;

pub extern crate blueprint_kit as kit;

pub mod errors;
pub mod validation;


use hiro_system_kit::Logger;

pub use validation::{check_inputs, defaults, plan_validators};

/// Ambient state threaded through the validation entry points.
#[derive(Clone)]
pub struct Context {
    pub logger: Option<Logger>,
    pub tracer: bool,
}

impl Context {
    pub fn empty() -> Context {
        Context { logger: None, tracer: false }
    }

    pub fn with_logger(logger: Logger) -> Context {
        Context { logger: Some(logger), tracer: false }
    }

    pub fn try_log<F>(&self, closure: F)
    where
        F: FnOnce(&Logger),
    {
        if let Some(ref logger) = self.logger {
            closure(logger)
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::empty()
    }
}
