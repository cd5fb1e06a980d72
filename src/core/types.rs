//! core::types
//!
//! Strong types shared by every name representation.
//!
//! # Types
//!
//! - [`Delimiter`] - Validated single-character component separator
//!
//! # Constants
//!
//! - [`ESCAPE_CHARACTER`] - The fixed escape character (`\`)
//! - [`DEFAULT_DELIMITER`] - The delimiter used when none is given (`.`)
//!
//! # Validation
//!
//! A delimiter is checked once at construction time. Code holding a
//! [`Delimiter`] never has to re-check that it is exactly one character.
//!
//! # Examples
//!
//! ```
//! use hiername::core::types::Delimiter;
//!
//! let slash = Delimiter::new("/").unwrap();
//! assert_eq!(slash.as_char(), '/');
//!
//! assert!(Delimiter::new("").is_err());
//! assert!(Delimiter::new("::").is_err());
//! assert!(Delimiter::new("\\").is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::contract::{require, ContractError};

/// The escape character. Not configurable.
pub const ESCAPE_CHARACTER: char = '\\';

/// The delimiter used when none is supplied.
pub const DEFAULT_DELIMITER: char = '.';

/// A validated component delimiter.
///
/// A delimiter must be exactly one character and must not be the escape
/// character.
///
/// # Example
///
/// ```
/// use hiername::core::types::Delimiter;
///
/// let hash = Delimiter::new("#").unwrap();
/// assert_eq!(hash.to_string(), "#");
/// assert_eq!(Delimiter::default().as_char(), '.');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Delimiter(char);

impl Delimiter {
    /// Create a delimiter from a string that must hold exactly one character.
    ///
    /// # Errors
    ///
    /// Returns a precondition violation if `delimiter` is not exactly one
    /// character or is the escape character.
    pub fn new(delimiter: &str) -> Result<Self, ContractError> {
        let mut chars = delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Err(ContractError::precondition(format!(
                "delimiter must be exactly one character, got {delimiter:?}"
            ))),
        }
    }

    /// Create a delimiter from a single character.
    ///
    /// # Errors
    ///
    /// Returns a precondition violation if `c` is the escape character.
    pub fn from_char(c: char) -> Result<Self, ContractError> {
        require(
            c != ESCAPE_CHARACTER,
            "delimiter cannot be the escape character",
        )?;
        Ok(Self(c))
    }

    /// Get the delimiter character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER)
    }
}

impl TryFrom<String> for Delimiter {
    type Error = ContractError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl TryFrom<char> for Delimiter {
    type Error = ContractError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c)
    }
}

impl From<Delimiter> for String {
    fn from(delimiter: Delimiter) -> Self {
        delimiter.0.to_string()
    }
}

impl From<Delimiter> for char {
    fn from(delimiter: Delimiter) -> Self {
        delimiter.0
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
