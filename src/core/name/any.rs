//! core::name::any
//!
//! A tagged union over both name representations.
//!
//! Useful where the representation is picked at runtime, e.g. from
//! [`NameConfig`](crate::core::config::NameConfig).

use serde::{Deserialize, Serialize};

use super::{Name, StringArrayName, StringName};
use crate::core::contract::ContractError;
use crate::core::types::Delimiter;

/// Either an array-backed or a string-backed name.
///
/// # Example
///
/// ```
/// use hiername::core::name::{AnyName, Name, StringName};
///
/// let n = AnyName::from(StringName::new("oss.fau").unwrap());
/// let n = n.append("de").unwrap();
/// assert!(matches!(n, AnyName::String(_)));
/// assert_eq!(n.as_string(), "oss.fau.de");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "representation", rename_all = "snake_case")]
pub enum AnyName {
    Array(StringArrayName),
    String(StringName),
}

impl AnyName {
    /// Which representation backs this name.
    pub fn representation(&self) -> Representation {
        match self {
            AnyName::Array(_) => Representation::Array,
            AnyName::String(_) => Representation::String,
        }
    }

    /// Convert to the given representation, keeping components and delimiter.
    ///
    /// # Errors
    ///
    /// Propagates contract violations from construction.
    pub fn to_representation(&self, representation: Representation) -> Result<Self, ContractError> {
        Ok(match representation {
            Representation::Array => AnyName::Array(StringArrayName::from_name(self)?),
            Representation::String => AnyName::String(StringName::from_name(self)?),
        })
    }

    fn as_dyn(&self) -> &dyn Name {
        match self {
            AnyName::Array(n) => n as &dyn Name,
            AnyName::String(n) => n as &dyn Name,
        }
    }
}

/// The available name representations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    #[default]
    Array,
    String,
}

impl Representation {
    /// Valid representation names.
    pub const VALID_NAMES: &'static [&'static str] = &["array", "string"];
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Representation::Array => write!(f, "array"),
            Representation::String => write!(f, "string"),
        }
    }
}

impl Name for AnyName {
    fn delimiter(&self) -> Delimiter {
        self.as_dyn().delimiter()
    }

    fn no_components(&self) -> usize {
        self.as_dyn().no_components()
    }

    fn component(&self, i: usize) -> Result<String, ContractError> {
        self.as_dyn().component(i)
    }

    fn components(&self) -> Vec<String> {
        self.as_dyn().components()
    }

    fn set_component(&self, i: usize, c: &str) -> Result<Self, ContractError> {
        Ok(match self {
            AnyName::Array(n) => AnyName::Array(n.set_component(i, c)?),
            AnyName::String(n) => AnyName::String(n.set_component(i, c)?),
        })
    }

    fn insert(&self, i: usize, c: &str) -> Result<Self, ContractError> {
        Ok(match self {
            AnyName::Array(n) => AnyName::Array(n.insert(i, c)?),
            AnyName::String(n) => AnyName::String(n.insert(i, c)?),
        })
    }

    fn append(&self, c: &str) -> Result<Self, ContractError> {
        Ok(match self {
            AnyName::Array(n) => AnyName::Array(n.append(c)?),
            AnyName::String(n) => AnyName::String(n.append(c)?),
        })
    }

    fn remove(&self, i: usize) -> Result<Self, ContractError> {
        Ok(match self {
            AnyName::Array(n) => AnyName::Array(n.remove(i)?),
            AnyName::String(n) => AnyName::String(n.remove(i)?),
        })
    }

    fn deep_copy(&self) -> Result<Self, ContractError> {
        Ok(match self {
            AnyName::Array(n) => AnyName::Array(n.deep_copy()?),
            AnyName::String(n) => AnyName::String(n.deep_copy()?),
        })
    }

    fn check_invariant(&self) -> Result<(), ContractError> {
        self.as_dyn().check_invariant()
    }
}

impl From<StringArrayName> for AnyName {
    fn from(name: StringArrayName) -> Self {
        AnyName::Array(name)
    }
}

impl From<StringName> for AnyName {
    fn from(name: StringName) -> Self {
        AnyName::String(name)
    }
}

impl PartialEq for AnyName {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for AnyName {}

impl std::hash::Hash for AnyName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.hash_code(), state);
    }
}

impl std::fmt::Display for AnyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyName::Array(n) => std::fmt::Display::fmt(n, f),
            AnyName::String(n) => std::fmt::Display::fmt(n, f),
        }
    }
}
