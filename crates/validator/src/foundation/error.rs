//! Error types for rule violations
//!
//! A single call to [`validate`](crate::validate) either fails fast with
//! [`Error::NotAStruct`] or collects every violation into a
//! [`ValidationErrors`] set. Each entry is a [`ValidationError`] carrying an
//! [`ErrorKind`], the offending field name when known, and a few key/value
//! params describing the failed rule.
//!
//! Field names and messages use `Cow<'static, str>`: names produced by
//! `#[derive(Record)]` are static, so the common path never allocates.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeStruct, Serializer};

use crate::foundation::Kind;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed set of failure kinds the engine reports.
///
/// Length-constraint failures share [`InvalidValidatorSyntax`] with
/// unparsable rule arguments. Use [`ValidationError::is_constraint_violation`]
/// to tell them apart.
///
/// [`InvalidValidatorSyntax`]: ErrorKind::InvalidValidatorSyntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The validated value is not a struct.
    NotAStruct,
    /// A rule string is attached to a field that is not `pub`.
    UnexportedFieldValidation,
    /// A rule argument did not parse, or a length constraint failed.
    InvalidValidatorSyntax,
}

impl ErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotAStruct => "not_a_struct",
            Self::UnexportedFieldValidation => "unexported_field_validation",
            Self::InvalidValidatorSyntax => "invalid_validator_syntax",
        }
    }

    /// Human-readable message, without any field prefix.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotAStruct => "wrong argument given, should be a struct",
            Self::UnexportedFieldValidation => "validation for unexported field is not allowed",
            Self::InvalidValidatorSyntax => "invalid validator syntax",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One rule violation.
///
/// # Examples
///
/// ```rust
/// use fieldrules::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(ErrorKind::InvalidValidatorSyntax)
///     .with_field("Name")
///     .with_param("rule", "min");
///
/// assert_eq!(error.to_string(), "Name: invalid validator syntax");
/// assert_eq!(error.param("rule"), Some("min"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What went wrong.
    pub kind: ErrorKind,

    /// Message without the field prefix. Defaults to the kind's message.
    pub message: Cow<'static, str>,

    /// Name of the field the violation belongs to, if attached.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key/value details, e.g. `[("rule", "min"), ("limit", "3")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates an untagged error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(kind.message()),
            field: None,
            params: Vec::new(),
        }
    }

    /// Attaches a field name. The rendered message becomes `"<field>: <message>"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Appends a detail parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// The field name this error is tagged with.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// True when a well-formed length rule failed against the field's value,
    /// as opposed to a malformed rule argument.
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        self.kind == ErrorKind::InvalidValidatorSyntax && self.param("limit").is_some()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Params<'a>(&'a [(Cow<'static, str>, Cow<'static, str>)]);

        impl Serialize for Params<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (k, v) in self.0 {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }

        let mut state = serializer.serialize_struct("ValidationError", 4)?;
        state.serialize_field("code", self.kind.code())?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("params", &Params(&self.params))?;
        state.end()
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Ordered collection of violations, in the order they were discovered.
///
/// `Display` renders one line per violation joined by `\n`, with no trailing
/// newline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends a violation.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All violations as a slice.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates violations in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Violations of a single kind.
    pub fn by_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    /// Rendered messages, one per violation.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// JSON array of `{code, message, field, params}` objects, as produced
    /// by the `Serialize` impl.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        // Keys are strings and values are plain data, so this cannot fail.
        serde_json::to_value(self).unwrap_or_default()
    }

    /// `Ok(ok_value)` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Result of a failed [`validate`](crate::validate) call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value is not a struct; nothing was inspected.
    #[error("{}", ErrorKind::NotAStruct.message())]
    NotAStruct {
        /// The shape the value reported instead.
        kind: Kind,
    },

    /// One or more fields violated their rules.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Error {
    /// The collected violations, if this is not a `NotAStruct` failure.
    #[must_use]
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotAStruct { .. } => None,
        }
    }

    /// Consumes the error, returning the violations if present.
    #[must_use]
    pub fn into_violations(self) -> Option<ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotAStruct { .. } => None,
        }
    }

    /// Returns true for the fail-fast non-struct case.
    #[must_use]
    pub fn is_not_a_struct(&self) -> bool {
        matches!(self, Self::NotAStruct { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================
