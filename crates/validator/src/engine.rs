//! The rule engine
//!
//! A single pass over a record's field table:
//!
//! 1. non-struct values are rejected before anything else is looked at;
//! 2. a rule string on a non-`pub` field is reported once and the field is
//!    skipped without parsing its clauses;
//! 3. non-string fields are skipped whatever their rules say;
//! 4. each clause of a string field is resolved to a [`RuleName`], its
//!    argument parsed, and the length predicate evaluated.
//!
//! Every problem found in steps 2–4 is accumulated; the call only fails fast
//! in step 1.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::config::ValidatorConfig;
use crate::foundation::{
    Error, ErrorKind, FieldDescriptor, FieldType, Record, ValidationError, ValidationErrors,
};
use crate::rules::{Clause, LengthRule, RuleName, clauses};

/// Evaluates `#[validate(...)]` rules against records.
///
/// Stateless apart from its configuration, so one instance can be shared
/// freely between threads.
///
/// # Examples
///
/// ```rust
/// use fieldrules::{LengthMode, Record, Validator, ValidatorConfig};
///
/// #[derive(Record)]
/// struct Tag {
///     #[validate("max:4")]
///     pub label: String,
/// }
///
/// let bytes = Validator::new(ValidatorConfig::default().with_length_mode(LengthMode::Bytes));
/// let tag = Tag { label: "café".into() };
///
/// assert!(Validator::default().validate(&tag).is_ok());
/// assert!(bytes.validate(&tag).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Creates a validator configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ValidatorConfig::from_env())
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `record`, returning every violation found.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAStruct`] if `R` is not a struct kind.
    /// - [`Error::Invalid`] with violations in field declaration order, then
    ///   clause order within each field.
    pub fn validate<R: Record + ?Sized>(&self, record: &R) -> Result<(), Error> {
        let record_type = std::any::type_name::<R>();

        if !R::KIND.is_struct() {
            debug!(record = record_type, kind = %R::KIND, "rejecting non-struct value");
            return Err(Error::NotAStruct { kind: R::KIND });
        }

        let mut errors = ValidationErrors::new();
        for (index, field) in R::FIELDS.iter().enumerate() {
            self.check_field(record, index, field, &mut errors);
        }

        debug!(
            record = record_type,
            fields = R::FIELDS.len(),
            violations = errors.len(),
            "validated record"
        );

        errors.into_result(()).map_err(Error::Invalid)
    }

    fn check_field<R: Record + ?Sized>(
        &self,
        record: &R,
        index: usize,
        field: &FieldDescriptor,
        errors: &mut ValidationErrors,
    ) {
        if !field.has_rules() {
            return;
        }

        if !field.exported {
            trace!(field = field.name, "rules on unexported field");
            let mut error = ValidationError::new(ErrorKind::UnexportedFieldValidation);
            if self.config.tag_unexported_fields {
                error = error.with_field(field.name);
            }
            errors.add(error);
            return;
        }

        if field.field_type != FieldType::String {
            trace!(
                field = field.name,
                type_name = field.type_name,
                "skipping non-string field"
            );
            return;
        }

        let Some(value) = record.field_value(index).as_str() else {
            trace!(field = field.name, "string field has no readable value");
            return;
        };
        let length = self.config.length_mode.measure(value);

        for clause in clauses(field.rules) {
            let Some(name) = RuleName::recognize(clause.name) else {
                trace!(field = field.name, rule = clause.raw, "ignoring unrecognized rule");
                continue;
            };

            match LengthRule::parse(name, &clause) {
                Err(err) => {
                    trace!(field = field.name, rule = clause.raw, error = %err, "malformed rule");
                    errors.add(syntax_error(&clause, name));
                }
                Ok(rule) if !rule.is_satisfied_by(length) => {
                    trace!(field = field.name, rule = clause.raw, length, "constraint violated");
                    errors.add(constraint_error(field, rule, length));
                }
                Ok(_) => {
                    trace!(field = field.name, rule = clause.raw, length, "constraint satisfied");
                }
            }
        }
    }
}

/// Malformed argument: never tagged with the field name.
fn syntax_error(clause: &Clause<'_>, name: RuleName) -> ValidationError {
    let error =
        ValidationError::new(ErrorKind::InvalidValidatorSyntax).with_param("rule", name.as_str());
    match clause.argument {
        Some(argument) => error.with_param("arg", Cow::Owned(argument.to_owned())),
        None => error,
    }
}

/// Failed length predicate: tagged with the field name.
fn constraint_error(field: &FieldDescriptor, rule: LengthRule, length: usize) -> ValidationError {
    ValidationError::new(ErrorKind::InvalidValidatorSyntax)
        .with_field(field.name)
        .with_param("rule", rule.name.as_str())
        .with_param("limit", rule.limit.to_string())
        .with_param("actual", length.to_string())
}
