//! Engine configuration
//!
//! Defaults reproduce the plain rule semantics: lengths in chars, and the
//! unexported-field violation left untagged. The struct deserializes from any
//! serde format with missing keys falling back to defaults.

use serde::{Deserialize, Serialize};

use crate::rules::LengthMode;

/// Environment variable selecting [`LengthMode`] (`chars` / `bytes`).
pub const ENV_LENGTH_MODE: &str = "FIELDRULES_LENGTH_MODE";

/// Environment variable enabling field tagging for unexported-field
/// violations (`1` / `true` / `yes` / `on`).
pub const ENV_TAG_UNEXPORTED: &str = "FIELDRULES_TAG_UNEXPORTED";

/// Options for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// How string length is measured for `min` / `max` / `len`.
    pub length_mode: LengthMode,

    /// Attach the field name to `UnexportedFieldValidation` violations.
    pub tag_unexported_fields: bool,
}

impl ValidatorConfig {
    /// Create configuration from environment variables.
    ///
    /// Unset or unrecognized values keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source, looked up by
    /// the same names as [`from_env`](Self::from_env).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldrules::{LengthMode, ValidatorConfig};
    /// use fieldrules::config::ENV_LENGTH_MODE;
    ///
    /// let config = ValidatorConfig::from_vars(|key| {
    ///     (key == ENV_LENGTH_MODE).then(|| "bytes".to_owned())
    /// });
    /// assert_eq!(config.length_mode, LengthMode::Bytes);
    /// ```
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(mode) = lookup(ENV_LENGTH_MODE) {
            match parse_length_mode(&mode) {
                Some(mode) => config.length_mode = mode,
                None => tracing::warn!(
                    value = %mode,
                    "ignoring unrecognized {ENV_LENGTH_MODE}"
                ),
            }
        }

        if let Some(flag) = lookup(ENV_TAG_UNEXPORTED) {
            config.tag_unexported_fields = parse_flag(&flag);
        }

        config
    }

    /// Sets the length mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Sets whether unexported-field violations carry the field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag_unexported_fields(mut self, enabled: bool) -> Self {
        self.tag_unexported_fields = enabled;
        self
    }
}

fn parse_length_mode(value: &str) -> Option<LengthMode> {
    match value.trim().to_lowercase().as_str() {
        "chars" | "char" => Some(LengthMode::Chars),
        "bytes" | "byte" => Some(LengthMode::Bytes),
        _ => None,
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
