#[macro_use]
extern crate serde_derive;

pub use indexmap;
pub use serde;
pub use serde_json;

pub mod types;
