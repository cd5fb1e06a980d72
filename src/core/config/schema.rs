//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing: the delimiter must be exactly one
//! character other than the escape character, and the representation must be
//! one of [`Representation::VALID_NAMES`].

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::name::any::Representation;
use crate::core::types::Delimiter;

/// Name configuration as written in TOML.
///
/// # Example
///
/// ```toml
/// delimiter = "/"
/// representation = "string"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NameConfigFile {
    /// Component delimiter (default: ".")
    pub delimiter: Option<String>,

    /// Backing representation, "array" or "string" (default: "array")
    pub representation: Option<String>,
}

impl NameConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_delimiter()?;
        self.parsed_representation()?;
        Ok(())
    }

    /// The configured delimiter, if any, as a validated [`Delimiter`].
    pub fn parsed_delimiter(&self) -> Result<Option<Delimiter>, ConfigError> {
        self.delimiter
            .as_deref()
            .map(|d| {
                Delimiter::new(d).map_err(|e| {
                    ConfigError::InvalidValue(format!("invalid delimiter {d:?}: {e}"))
                })
            })
            .transpose()
    }

    /// The configured representation, if any.
    pub fn parsed_representation(&self) -> Result<Option<Representation>, ConfigError> {
        self.representation
            .as_deref()
            .map(parse_representation)
            .transpose()
    }
}

/// Parse a representation name.
pub(crate) fn parse_representation(value: &str) -> Result<Representation, ConfigError> {
    match value {
        "array" => Ok(Representation::Array),
        "string" => Ok(Representation::String),
        other => Err(ConfigError::InvalidValue(format!(
            "invalid representation '{}', must be one of: {}",
            other,
            Representation::VALID_NAMES.join(", ")
        ))),
    }
}
