//! Rendering, serialization and configuration of reports.

use fieldrules::config::{ENV_LENGTH_MODE, ENV_TAG_UNEXPORTED};
use fieldrules::prelude::*;
use fieldrules::validate;
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Record)]
struct Order {
    #[validate("len:8")]
    pub reference: String,
    #[validate("max:x")]
    pub note: String,
    #[validate("min:1")]
    customer: String,
    #[validate("min:2 max:3")]
    pub currency: String,
}

fn order() -> Order {
    Order {
        reference: "ORD-1".into(),
        note: String::new(),
        customer: "acme".into(),
        currency: "EURO".into(),
    }
}

#[test]
fn report_has_one_line_per_violation_without_blank_lines() {
    let record = order();
    let report = validate(&record).unwrap_err().to_string();

    assert_eq!(
        report,
        "reference: invalid validator syntax\n\
         invalid validator syntax\n\
         validation for unexported field is not allowed\n\
         currency: invalid validator syntax"
    );
    assert!(!report.ends_with('\n'));
    assert!(report.lines().all(|line| !line.is_empty()));
    assert_eq!(record.customer, "acme");
}

#[test]
fn report_serializes_to_json() {
    let err = validate(&order()).unwrap_err();
    let errors = err.violations().unwrap();

    let value = serde_json::to_value(errors).unwrap();
    assert_eq!(value, errors.to_json());
    assert_eq!(
        value[0],
        json!({
            "code": "invalid_validator_syntax",
            "message": "invalid validator syntax",
            "field": "reference",
            "params": { "rule": "len", "limit": "8", "actual": "5" },
        })
    );
    assert_eq!(
        value[1],
        json!({
            "code": "invalid_validator_syntax",
            "message": "invalid validator syntax",
            "field": null,
            "params": { "rule": "max", "arg": "x" },
        })
    );
    assert_eq!(value[2]["code"], "unexported_field_validation");
}

#[test]
fn errors_can_be_grouped_by_kind() {
    let errors = validate(&order()).unwrap_err().into_violations().unwrap();

    assert_eq!(errors.by_kind(ErrorKind::InvalidValidatorSyntax).count(), 3);
    assert_eq!(errors.by_kind(ErrorKind::UnexportedFieldValidation).count(), 1);

    let constraint_fields: Vec<_> = errors
        .iter()
        .filter(|e| e.is_constraint_violation())
        .filter_map(ValidationError::field)
        .collect();
    assert_eq!(constraint_fields, ["reference", "currency"]);
}

#[test]
fn tagging_unexported_fields_is_opt_in() {
    let validator = Validator::new(ValidatorConfig::default().with_tag_unexported_fields(true));
    let err = validator.validate(&order()).unwrap_err();

    assert_eq!(
        err.violations().unwrap().messages()[2],
        "customer: validation for unexported field is not allowed"
    );
}

#[test]
fn config_from_json_switches_to_byte_length() {
    let config: ValidatorConfig =
        serde_json::from_value(json!({ "length_mode": "bytes" })).unwrap();
    let validator = Validator::new(config);

    let mut record = order();
    record.reference = "ÖRD-0001".into();
    record.currency = "€".into();

    // Chars: reference is 8, currency is 1. Bytes: reference is 9, currency is 3.
    let chars = validate(&record).unwrap_err().into_violations().unwrap();
    let bytes = validator.validate(&record).unwrap_err().into_violations().unwrap();

    assert_eq!(
        chars.iter().filter_map(ValidationError::field).collect::<Vec<_>>(),
        ["currency"]
    );
    assert_eq!(
        bytes.iter().filter_map(ValidationError::field).collect::<Vec<_>>(),
        ["reference"]
    );
}

#[test]
fn config_from_variables_drives_the_validator() {
    let config = ValidatorConfig::from_vars(|key| match key {
        ENV_LENGTH_MODE => Some("bytes".to_owned()),
        ENV_TAG_UNEXPORTED => Some("1".to_owned()),
        _ => None,
    });
    let validator = Validator::new(config);

    let mut record = order();
    record.reference = "ÖRD-0001".into();
    record.currency = "€".into();

    let errors = validator.validate(&record).unwrap_err().into_violations().unwrap();
    assert_eq!(
        errors.iter().filter_map(ValidationError::field).collect::<Vec<_>>(),
        ["reference", "customer"]
    );
}

#[test]
fn validator_from_env_reads_process_environment() {
    let validator = Validator::from_env();
    assert_eq!(*validator.config(), ValidatorConfig::from_env());
    assert!(validator.validate(&order()).is_err());
}
