//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! A [`NameConfig`] fixes the delimiter and the representation used when
//! names are built from untyped input.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values (`.` delimiter, array representation)
//! 2. A TOML document ([`NameConfig::from_toml_str`] or [`NameConfig::load`])
//! 3. Environment overrides (`HIERNAME_DELIMITER`, `HIERNAME_REPRESENTATION`)
//!
//! # Example
//!
//! ```
//! use hiername::core::config::NameConfig;
//! use hiername::core::name::Name;
//!
//! let config = NameConfig::from_toml_str(r#"
//!     delimiter = "/"
//!     representation = "string"
//! "#).unwrap();
//!
//! let name = config.parse("usr/local/bin").unwrap();
//! assert_eq!(name.no_components(), 3);
//! assert_eq!(name.as_string_with(".").unwrap(), "usr.local.bin");
//! ```

pub mod schema;

pub use schema::NameConfigFile;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::contract::ContractError;
use crate::core::escape::split_components;
use crate::core::name::any::{AnyName, Representation};
use crate::core::name::{StringArrayName, StringName};
use crate::core::types::Delimiter;

/// Environment variable overriding the delimiter.
pub const DELIMITER_ENV: &str = "HIERNAME_DELIMITER";

/// Environment variable overriding the representation.
pub const REPRESENTATION_ENV: &str = "HIERNAME_REPRESENTATION";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error(transparent)]
    Contract(#[from] ContractError),
}

/// Resolved name configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameConfig {
    delimiter: Delimiter,
    representation: Representation,
}

impl NameConfig {
    pub fn new(delimiter: Delimiter, representation: Representation) -> Self {
        Self {
            delimiter,
            representation,
        }
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// `ParseError` on malformed TOML or unknown keys, `InvalidValue` on
    /// values that fail validation.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: NameConfigFile = toml::from_str(contents).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        Self::from_file(&file)
    }

    /// Load a TOML config file.
    ///
    /// # Errors
    ///
    /// `ReadError` if the file cannot be read, otherwise as
    /// [`NameConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("loading name config from {}", path.display());
        Self::from_toml_str(&contents)
    }

    /// Resolve a parsed schema on top of the defaults.
    pub fn from_file(file: &NameConfigFile) -> Result<Self, ConfigError> {
        file.validate()?;
        let defaults = Self::default();
        Ok(Self {
            delimiter: file.parsed_delimiter()?.unwrap_or(defaults.delimiter),
            representation: file
                .parsed_representation()?
                .unwrap_or(defaults.representation),
        })
    }

    /// Apply overrides looked up by variable name.
    ///
    /// `lookup` is usually `std::env::var`; tests pass a map instead.
    pub fn with_overrides<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = NameConfigFile {
            delimiter: lookup(DELIMITER_ENV),
            representation: lookup(REPRESENTATION_ENV),
        };
        file.validate()?;
        Ok(Self {
            delimiter: file.parsed_delimiter()?.unwrap_or(self.delimiter),
            representation: file
                .parsed_representation()?
                .unwrap_or(self.representation),
        })
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Build a name from a data string using the configured delimiter and
    /// representation.
    ///
    /// # Errors
    ///
    /// `Contract` if the data string is malformed.
    pub fn parse(&self, data: &str) -> Result<AnyName, ConfigError> {
        let name = match self.representation {
            Representation::Array => AnyName::Array(StringArrayName::with_delimiter(
                split_components(data, self.delimiter.as_char()),
                self.delimiter,
            )?),
            Representation::String => {
                AnyName::String(StringName::with_delimiter(data, self.delimiter)?)
            }
        };
        Ok(name)
    }

    /// Build a name from escaped components using the configured delimiter
    /// and representation.
    ///
    /// # Errors
    ///
    /// `Contract` if a component is malformed.
    pub fn from_components<I, S>(&self, components: I) -> Result<AnyName, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let array = StringArrayName::with_delimiter(components, self.delimiter)?;
        let name = match self.representation {
            Representation::Array => AnyName::Array(array),
            Representation::String => AnyName::String(StringName::from_name(&array)?),
        };
        Ok(name)
    }
}
