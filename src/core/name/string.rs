//! core::name::string
//!
//! String-backed names.
//!
//! # Storage
//!
//! The name is kept as its data string plus a cached component count. Every
//! query and edit re-splits the string with [`split_components`], works on
//! the resulting list and joins it back, so each operation is O(n) in the
//! length of the name.
//!
//! # Empty names
//!
//! Parsing the empty string yields one empty component, not zero. A
//! string-backed name reaches zero components only by removing its last
//! component; its data string is then empty as well, and the cached count is
//! what tells the two apart.

use serde::{Deserialize, Serialize};

use super::{
    assert_component_appended, assert_component_inserted, assert_component_removed,
    assert_component_set, assert_valid_clone, assert_valid_component, assert_valid_index,
    assert_valid_insert_index, Name,
};
use crate::core::contract::{invariant, ContractError, ContractKind};
use crate::core::escape::{join_components, split_components};
use crate::core::types::Delimiter;

/// A name stored as one escaped, delimited string.
///
/// # Example
///
/// ```
/// use hiername::core::name::{Name, StringName};
/// use hiername::core::types::Delimiter;
///
/// let n = StringName::new(r"oss\.cs.fau.de").unwrap();
/// assert_eq!(n.no_components(), 3);
/// assert_eq!(n.as_string(), "oss.cs.fau.de");
///
/// let hash = Delimiter::new("#").unwrap();
/// let n = StringName::with_delimiter("oss#fau#de", hash).unwrap();
/// assert_eq!(n.insert(1, "cs").unwrap().as_string(), "oss#cs#fau#de");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StringNameRepr", into = "StringNameRepr")]
pub struct StringName {
    name: String,
    no_components: usize,
    delimiter: Delimiter,
}

impl StringName {
    /// Parse a data string with the default delimiter.
    ///
    /// # Errors
    ///
    /// Precondition violation if the string ends in a lone escape character.
    pub fn new(data: impl Into<String>) -> Result<Self, ContractError> {
        Self::with_delimiter(data, Delimiter::default())
    }

    /// Parse a data string with an explicit delimiter.
    ///
    /// # Errors
    ///
    /// Same as [`StringName::new`].
    pub fn with_delimiter(data: impl Into<String>, delimiter: Delimiter) -> Result<Self, ContractError> {
        let name = data.into();
        let components = split_components(&name, delimiter.as_char());
        for c in &components {
            assert_valid_component(c, delimiter.as_char())?;
        }

        let result = Self {
            name,
            no_components: components.len(),
            delimiter,
        };
        result.check_invariant()?;
        Ok(result)
    }

    /// Copy the components and delimiter of any other name.
    ///
    /// A zero-component source yields a zero-component result.
    ///
    /// # Errors
    ///
    /// Propagates contract violations from the copied components.
    pub fn from_name(other: &dyn Name) -> Result<Self, ContractError> {
        let delimiter = other.delimiter();
        let components = other.components();
        for c in &components {
            assert_valid_component(c, delimiter.as_char())?;
        }
        Self::from_parts(components, delimiter)
    }

    /// The raw data string.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    fn from_parts(parts: Vec<String>, delimiter: Delimiter) -> Result<Self, ContractError> {
        let result = Self {
            name: join_components(&parts, delimiter.as_char()),
            no_components: parts.len(),
            delimiter,
        };
        result.check_invariant()?;
        Ok(result)
    }

    fn parts(&self) -> Vec<String> {
        if self.no_components == 0 {
            return Vec::new();
        }
        split_components(&self.name, self.delimiter.as_char())
    }
}

impl Name for StringName {
    fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    fn no_components(&self) -> usize {
        self.no_components
    }

    fn component(&self, i: usize) -> Result<String, ContractError> {
        assert_valid_index(self, i)?;
        let mut parts = self.parts();
        Ok(parts.swap_remove(i))
    }

    fn components(&self) -> Vec<String> {
        self.parts()
    }

    fn set_component(&self, i: usize, c: &str) -> Result<Self, ContractError> {
        assert_valid_index(self, i)?;
        assert_valid_component(c, self.delimiter.as_char())?;

        let mut parts = self.parts();
        parts[i] = c.to_string();
        let result = Self::from_parts(parts, self.delimiter)?;

        assert_component_set(self, &result, i, c)?;
        Ok(result)
    }

    fn insert(&self, i: usize, c: &str) -> Result<Self, ContractError> {
        assert_valid_insert_index(self, i)?;
        assert_valid_component(c, self.delimiter.as_char())?;

        let mut parts = self.parts();
        parts.insert(i, c.to_string());
        let result = Self::from_parts(parts, self.delimiter)?;

        assert_component_inserted(self, &result, i, c)?;
        Ok(result)
    }

    fn append(&self, c: &str) -> Result<Self, ContractError> {
        assert_valid_component(c, self.delimiter.as_char())?;

        let mut parts = self.parts();
        parts.push(c.to_string());
        let result = Self::from_parts(parts, self.delimiter)?;

        assert_component_appended(self, &result, c)?;
        Ok(result)
    }

    fn remove(&self, i: usize) -> Result<Self, ContractError> {
        assert_valid_index(self, i)?;

        let mut parts = self.parts();
        parts.remove(i);
        let result = Self::from_parts(parts, self.delimiter)?;

        assert_component_removed(self, &result)?;
        Ok(result)
    }

    fn deep_copy(&self) -> Result<Self, ContractError> {
        let copy = Self {
            name: self.name.clone(),
            no_components: self.no_components,
            delimiter: self.delimiter,
        };
        copy.check_invariant()?;
        assert_valid_clone(self, &copy)?;
        Ok(copy)
    }

    fn check_invariant(&self) -> Result<(), ContractError> {
        if self.no_components == 0 {
            return invariant(
                self.name.is_empty(),
                "a name without components must have an empty data string",
            );
        }

        let components = split_components(&self.name, self.delimiter.as_char());
        invariant(
            components.len() == self.no_components,
            "data string does not split into the recorded number of components",
        )?;
        for c in &components {
            assert_valid_component(c, self.delimiter.as_char()).map_err(|e| {
                ContractError::wrap(ContractKind::Invariant, "a component has an invalid value", e)
            })?;
        }
        Ok(())
    }
}

impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for StringName {}

impl std::hash::Hash for StringName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.hash_code(), state);
    }
}

impl std::fmt::Display for StringName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Serialized shape of a [`StringName`].
///
/// Only the data string is stored, so a zero-component name comes back as
/// one empty component. The two compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StringNameRepr {
    pub name: String,
    #[serde(default)]
    pub delimiter: Delimiter,
}

impl TryFrom<StringNameRepr> for StringName {
    type Error = ContractError;

    fn try_from(repr: StringNameRepr) -> Result<Self, Self::Error> {
        Self::with_delimiter(repr.name, repr.delimiter)
    }
}

impl From<StringName> for StringNameRepr {
    fn from(name: StringName) -> Self {
        Self {
            name: name.name,
            delimiter: name.delimiter,
        }
    }
}
