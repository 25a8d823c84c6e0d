use crate::errors::InputMismatch;
use kit::types::Dict;

/// Verify that the names supplied to a validator are exactly `required`.
///
/// Order is irrelevant on both sides. `required` is expected to hold unique
/// names. A missing input takes precedence over an extra one, so partially
/// overlapping sets are reported as [`InputMismatch::Missing`].
pub fn check_inputs(supplied: &Dict, required: &[&str]) -> Result<(), InputMismatch> {
    let all_required_present = required.iter().all(|name| supplied.has(name));
    if !all_required_present {
        return Err(InputMismatch::Missing { required: to_owned(required) });
    }
    // Keys are unique and every required name is present, so equal sizes mean equal sets.
    if supplied.len() != required.len() {
        return Err(InputMismatch::Unexpected { required: to_owned(required) });
    }
    Ok(())
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
