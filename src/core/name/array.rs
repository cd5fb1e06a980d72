//! core::name::array
//!
//! Array-backed names.
//!
//! Components live in a `Vec<String>` in order, so reads and writes by index
//! are O(1) and insert/remove shift the tail.

use serde::{Deserialize, Serialize};

use super::{
    assert_component_appended, assert_component_inserted, assert_component_removed,
    assert_component_set, assert_valid_clone, assert_valid_component, assert_valid_index,
    assert_valid_insert_index, Name,
};
use crate::core::contract::{ContractError, ContractKind};
use crate::core::types::Delimiter;

/// A name stored as a list of escaped components.
///
/// This is the only representation that can be built with zero components.
///
/// # Example
///
/// ```
/// use hiername::core::name::{Name, StringArrayName};
///
/// let n = StringArrayName::new(["oss", "cs", "fau"]).unwrap();
/// let n = n.append("de").unwrap();
/// assert_eq!(n.as_string(), "oss.cs.fau.de");
///
/// let root = StringArrayName::new(Vec::<String>::new()).unwrap();
/// assert!(root.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StringArrayNameRepr", into = "StringArrayNameRepr")]
pub struct StringArrayName {
    components: Vec<String>,
    delimiter: Delimiter,
}

impl StringArrayName {
    /// Create a name with the default delimiter.
    ///
    /// # Errors
    ///
    /// Precondition violation if a component contains an unescaped delimiter
    /// or ends in a lone escape character.
    pub fn new<I, S>(components: I) -> Result<Self, ContractError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_delimiter(components, Delimiter::default())
    }

    /// Create a name with an explicit delimiter.
    ///
    /// # Errors
    ///
    /// Same as [`StringArrayName::new`].
    pub fn with_delimiter<I, S>(components: I, delimiter: Delimiter) -> Result<Self, ContractError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        for c in &components {
            assert_valid_component(c, delimiter.as_char())?;
        }

        let name = Self {
            components,
            delimiter,
        };
        name.check_invariant()?;
        Ok(name)
    }

    /// Copy the components and delimiter of any other name.
    ///
    /// # Errors
    ///
    /// Propagates contract violations from construction.
    pub fn from_name(other: &dyn Name) -> Result<Self, ContractError> {
        Self::with_delimiter(other.components(), other.delimiter())
    }

    /// Iterate over the escaped components without copying.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }

    /// Build the successor value and check it before handing it out.
    fn derive(&self, components: Vec<String>) -> Result<Self, ContractError> {
        let name = Self {
            components,
            delimiter: self.delimiter,
        };
        name.check_invariant()?;
        Ok(name)
    }
}

impl Name for StringArrayName {
    fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    fn no_components(&self) -> usize {
        self.components.len()
    }

    fn component(&self, i: usize) -> Result<String, ContractError> {
        assert_valid_index(self, i)?;
        Ok(self.components[i].clone())
    }

    fn components(&self) -> Vec<String> {
        self.components.clone()
    }

    fn set_component(&self, i: usize, c: &str) -> Result<Self, ContractError> {
        assert_valid_index(self, i)?;
        assert_valid_component(c, self.delimiter.as_char())?;

        let mut components = self.components.clone();
        components[i] = c.to_string();
        let result = self.derive(components)?;

        assert_component_set(self, &result, i, c)?;
        Ok(result)
    }

    fn insert(&self, i: usize, c: &str) -> Result<Self, ContractError> {
        assert_valid_insert_index(self, i)?;
        assert_valid_component(c, self.delimiter.as_char())?;

        let mut components = self.components.clone();
        components.insert(i, c.to_string());
        let result = self.derive(components)?;

        assert_component_inserted(self, &result, i, c)?;
        Ok(result)
    }

    fn append(&self, c: &str) -> Result<Self, ContractError> {
        assert_valid_component(c, self.delimiter.as_char())?;

        let mut components = self.components.clone();
        components.push(c.to_string());
        let result = self.derive(components)?;

        assert_component_appended(self, &result, c)?;
        Ok(result)
    }

    fn remove(&self, i: usize) -> Result<Self, ContractError> {
        assert_valid_index(self, i)?;

        let mut components = self.components.clone();
        components.remove(i);
        let result = self.derive(components)?;

        assert_component_removed(self, &result)?;
        Ok(result)
    }

    fn deep_copy(&self) -> Result<Self, ContractError> {
        let copy = self.derive(self.components.clone())?;
        assert_valid_clone(self, &copy)?;
        Ok(copy)
    }

    fn check_invariant(&self) -> Result<(), ContractError> {
        for c in &self.components {
            assert_valid_component(c, self.delimiter.as_char()).map_err(|e| {
                ContractError::wrap(ContractKind::Invariant, "a component has an invalid value", e)
            })?;
        }
        Ok(())
    }
}

impl PartialEq for StringArrayName {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for StringArrayName {}

impl std::hash::Hash for StringArrayName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.hash_code(), state);
    }
}

impl std::fmt::Display for StringArrayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_data_string())
    }
}

/// Serialized shape of a [`StringArrayName`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StringArrayNameRepr {
    pub components: Vec<String>,
    #[serde(default)]
    pub delimiter: Delimiter,
}

impl TryFrom<StringArrayNameRepr> for StringArrayName {
    type Error = ContractError;

    fn try_from(repr: StringArrayNameRepr) -> Result<Self, Self::Error> {
        Self::with_delimiter(repr.components, repr.delimiter)
    }
}

impl From<StringArrayName> for StringArrayNameRepr {
    fn from(name: StringArrayName) -> Self {
        Self {
            components: name.components,
            delimiter: name.delimiter,
        }
    }
}
