//! String length rules: `min`, `max`, `len`
//!
//! Length is measured in Unicode scalar values by default. Switch to
//! [`LengthMode::Bytes`] through
//! [`ValidatorConfig`](crate::config::ValidatorConfig) when byte length is
//! what downstream storage cares about.

use std::fmt;
use std::num::ParseIntError;

use serde::{Deserialize, Serialize};

use super::Clause;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count bytes of the UTF-8 encoding.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            Self::Bytes => input.len(),
            Self::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// RULE NAME
// ============================================================================

/// The recognized rule names. Everything else is ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    /// Length must be at least the argument.
    Min,
    /// Length must be at most the argument.
    Max,
    /// Length must equal the argument.
    Len,
}

impl RuleName {
    /// Resolves a clause name. `None` means "not a rule this engine knows".
    #[must_use]
    pub fn recognize(name: &str) -> Option<Self> {
        match name {
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "len" => Some(Self::Len),
            _ => None,
        }
    }

    /// Name as written in rule strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Len => "len",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SYNTAX ERRORS
// ============================================================================

/// Why a recognized clause could not be turned into a [`LengthRule`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleSyntaxError {
    /// `min`, `max` or `len` written without `:<n>`.
    #[error("rule `{rule}` requires an integer argument")]
    MissingArgument {
        /// The rule that lacked an argument.
        rule: RuleName,
    },

    /// The argument is not a base-10 integer.
    #[error("rule `{rule}` has non-integer argument `{argument}`")]
    InvalidArgument {
        /// The rule being parsed.
        rule: RuleName,
        /// The offending argument text.
        argument: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
}

// ============================================================================
// LENGTH RULE
// ============================================================================

/// A parsed length constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRule {
    /// Which comparison to apply.
    pub name: RuleName,
    /// The integer the length is compared against. May be negative.
    pub limit: i64,
}

impl LengthRule {
    /// Parses the argument of a clause whose name resolved to `name`.
    pub fn parse(name: RuleName, clause: &Clause<'_>) -> Result<Self, RuleSyntaxError> {
        let argument = clause
            .argument
            .ok_or(RuleSyntaxError::MissingArgument { rule: name })?;

        let limit = argument
            .parse::<i64>()
            .map_err(|source| RuleSyntaxError::InvalidArgument {
                rule: name,
                argument: argument.to_owned(),
                source,
            })?;

        Ok(Self { name, limit })
    }

    /// Returns true if a string of `length` satisfies this rule.
    #[must_use]
    pub fn is_satisfied_by(&self, length: usize) -> bool {
        let length = i64::try_from(length).unwrap_or(i64::MAX);
        match self.name {
            RuleName::Min => length >= self.limit,
            RuleName::Max => length <= self.limit,
            RuleName::Len => length == self.limit,
        }
    }
}
