use serde_json::json;
use serde_json::Value as JsonValue;
use test_case::test_case;

use super::diagnostics::{Diagnostic, DiagnosticLevel};
use super::{
    Blueprint, Dict, GlobalReferences, Module, Reference, ReferenceBuilder, ValidationLevel, Value,
};

#[test_case(Value::string("Test".to_string()))]
#[test_case(Value::integer(1))]
#[test_case(Value::integer(-10))]
#[test_case(Value::bool(true))]
#[test_case(Value::null())]
#[test_case(Value::array(vec![Value::string("test".to_string()), Value::integer(1)]))]
#[test_case(Reference::global("region").as_expression().as_value())]
#[test_case(Reference::module("network", "subnetwork_name").as_expression().as_value())]
fn it_serdes_values(value: Value) {
    let ser = serde_json::to_string(&value).unwrap();
    let de: Value = serde_json::from_str(&ser).unwrap();
    assert_eq!(de, value);
}

#[test_case(json!({"type": "integer", "value": 1 }))]
#[test_case(json!({"type": "bool", "value": false }))]
#[test_case(json!({"type": "null"}))]
#[test_case(json!({"type": "string", "value": "us-central1" }))]
fn it_deserializes_values(val: JsonValue) {
    let _: Value = serde_json::from_value(val.clone())
        .map_err(|e| format!("failed to deserialize value {}: {}", val, e))
        .unwrap();
}

#[test]
fn dict_equality_ignores_insertion_order() {
    let mut lhs = Dict::new();
    lhs.set("in0", Value::null()).set("in1", Value::null());
    let rhs = Dict::new().with("in1", Value::null()).with("in0", Value::null());
    assert_eq!(lhs, rhs);

    let other = Dict::new().with("in1", Value::null()).with("in0", Value::bool(true));
    assert_ne!(lhs, other);
}

#[test]
fn dict_set_replaces_existing_keys() {
    let mut vars = Dict::new();
    vars.set("zone", "us-central1-a".into()).set("zone", "us-central1-b".into());
    assert_eq!(vars.len(), 1);
    assert_eq!(vars.get("zone").and_then(|v| v.as_string()), Some("us-central1-b"));
}

#[test]
fn global_references_are_opaque_expressions() {
    let value = GlobalReferences.global_reference("project_id");
    let expression = value.as_expression().expect("reference should be an expression");
    assert_eq!(expression.to_string(), "((var.project_id))");
    assert_eq!(value.global_references(), vec!["project_id"]);
    assert_eq!(value, Reference::global("project_id").as_expression().as_value());
    assert_ne!(value, Value::string("project_id".to_string()));
}

#[test]
fn module_references_are_not_global() {
    let value = Reference::module("network", "vpc_id").as_expression().as_value();
    assert!(value.global_references().is_empty());
    assert_eq!(value.to_string(), "((module.network.vpc_id))");
}

#[test]
fn nested_values_report_global_references() {
    let value = Value::array(vec![
        GlobalReferences.global_reference("region"),
        Value::string("literal".to_string()),
        GlobalReferences.global_reference("zone"),
    ]);
    assert_eq!(value.global_references(), vec!["region", "zone"]);
}

#[test_case("\"IGNORE\"", ValidationLevel::Ignore)]
#[test_case("\"WARNING\"", ValidationLevel::Warning)]
#[test_case("\"ERROR\"", ValidationLevel::Error)]
fn it_deserializes_validation_levels(raw: &str, expected: ValidationLevel) {
    let level: ValidationLevel = serde_json::from_str(raw).unwrap();
    assert_eq!(level, expected);
    assert_eq!(format!("\"{}\"", level), raw);
}

#[test]
fn blueprint_defaults_are_applied_when_deserializing() {
    let bp: Blueprint = serde_json::from_value(json!({
        "blueprint_name": "hpc-slurm",
        "vars": {
            "project_id": {"type": "string", "value": "f00b"}
        },
        "validators": [
            {"validator": "test_apis_enabled", "skip": true}
        ]
    }))
    .unwrap();

    assert_eq!(bp.validation_level, ValidationLevel::Error);
    assert!(bp.has_var("project_id"));
    assert!(!bp.has_var("region"));
    assert!(bp.modules.is_empty());
    assert_eq!(bp.validators.len(), 1);
    assert!(bp.validators[0].skip);
    assert!(bp.validators[0].inputs.is_empty());
}

#[test]
fn diagnostic_display_includes_code_and_help() {
    let diag = Diagnostic::error("unknown validator \"test_nope\"")
        .with_code("unknown_validator")
        .with_suggestion("use one of the registered validators");
    assert_eq!(diag.level, DiagnosticLevel::Error);
    assert!(diag.is_error());
    assert_eq!(
        diag.to_string(),
        "error[unknown_validator]: unknown validator \"test_nope\"\n  help: use one of the registered validators"
    );
}

#[test]
fn modules_are_looked_up_by_id() {
    let mut bp = Blueprint::new("hpc-slurm");
    bp.modules.push(
        Module::new("network", "modules/network/vpc")
            .with_setting("region", GlobalReferences.global_reference("region")),
    );
    bp.modules.push(Module::new("homefs", "modules/file-system/filestore"));

    let network = bp.module("network").expect("network module should be present");
    assert_eq!(network.source, "modules/network/vpc");
    assert_eq!(network.settings.get("region").unwrap().global_references(), vec!["region"]);
    assert!(bp.module("compute").is_none());
}

#[test_case(Value::null(), "null")]
#[test_case(Value::float(0.5), "float")]
#[test_case(Value::object(indexmap::IndexMap::new()), "object")]
#[test_case(GlobalReferences.global_reference("zone"), "expression")]
fn it_names_value_types(value: Value, expected: &str) {
    assert_eq!(value.get_type_name(), expected);
    assert_eq!(value.is_null(), expected == "null");
}
