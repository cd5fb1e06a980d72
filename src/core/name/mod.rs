//! core::name
//!
//! The hierarchical name contract and its two representations.
//!
//! # Modules
//!
//! - [`array`] - [`StringArrayName`], components stored as a `Vec<String>`
//! - [`string`] - [`StringName`], components stored as one escaped string
//! - [`any`] - [`AnyName`], a tagged union over both
//!
//! # Contract
//!
//! Every representation supplies a handful of primitives (`no_components`,
//! `component` and the edits). Rendering, equality, hashing and
//! concatenation are provided by [`Name`] on top of those primitives.
//!
//! Names are persistent: edits take `&self` and return a new name, leaving
//! the receiver untouched. A failed edit therefore never changes anything
//! the caller can observe.
//!
//! # Example
//!
//! ```
//! use hiername::core::name::{Name, StringArrayName, StringName};
//!
//! let a = StringName::new("oss.fau.de").unwrap();
//! let b = a.insert(1, "cs").unwrap();
//! assert_eq!(b.as_string(), "oss.cs.fau.de");
//! assert_eq!(a.as_string(), "oss.fau.de");
//!
//! let c = StringArrayName::new(["oss", "cs", "fau", "de"]).unwrap();
//! assert!(b.is_equal(&c));
//! ```

pub mod any;
pub mod array;
pub mod string;

pub use any::AnyName;
pub use array::StringArrayName;
pub use string::StringName;

use std::fmt::Debug;

use super::contract::{ensure, require, ContractError};
use super::escape::{collapse_delimiter_escapes, is_well_formed, join_components};
use super::types::Delimiter;

/// The operations every name representation honors.
pub trait Name: Debug {
    /// The delimiter this name was built with.
    fn delimiter(&self) -> Delimiter;

    /// Number of components.
    fn no_components(&self) -> usize;

    /// The component at `i`, in escaped form.
    ///
    /// # Errors
    ///
    /// Precondition violation if `i >= no_components()`.
    fn component(&self, i: usize) -> Result<String, ContractError>;

    /// A copy with the component at `i` replaced by `c`.
    ///
    /// # Errors
    ///
    /// Precondition violation on an invalid index or malformed component.
    fn set_component(&self, i: usize, c: &str) -> Result<Self, ContractError>
    where
        Self: Sized;

    /// A copy with `c` inserted before position `i`. `i` may equal
    /// `no_components()`.
    ///
    /// # Errors
    ///
    /// Precondition violation on an invalid index or malformed component.
    fn insert(&self, i: usize, c: &str) -> Result<Self, ContractError>
    where
        Self: Sized;

    /// A copy with `c` added as the new last component.
    ///
    /// # Errors
    ///
    /// Precondition violation on a malformed component.
    fn append(&self, c: &str) -> Result<Self, ContractError>
    where
        Self: Sized;

    /// A copy without the component at `i`.
    ///
    /// # Errors
    ///
    /// Precondition violation on an invalid index.
    fn remove(&self, i: usize) -> Result<Self, ContractError>
    where
        Self: Sized;

    /// An independent copy that `is_equal` to `self`.
    fn deep_copy(&self) -> Result<Self, ContractError>
    where
        Self: Sized;

    /// Check the class invariant of this representation.
    ///
    /// # Errors
    ///
    /// Invariant violation describing the first broken rule.
    fn check_invariant(&self) -> Result<(), ContractError>;

    /// All components, in escaped form. Always `no_components()` long.
    fn components(&self) -> Vec<String>;

    /// Human-readable form using the name's own delimiter.
    fn as_string(&self) -> String {
        render(self, self.delimiter().as_char())
    }

    /// Human-readable form joined with `delimiter`.
    ///
    /// Escaped delimiters are collapsed, so the result may no longer tell
    /// component boundaries apart.
    ///
    /// # Errors
    ///
    /// Precondition violation if `delimiter` is not exactly one character.
    /// Unlike a name's own delimiter, `\` is accepted here.
    fn as_string_with(&self, delimiter: &str) -> Result<String, ContractError> {
        let mut chars = delimiter.chars();
        let first = chars.next();
        require(
            first.is_some() && chars.next().is_none(),
            &format!("display delimiter must be exactly one character, got {delimiter:?}"),
        )?;
        Ok(render(self, first.unwrap_or_default()))
    }

    /// Canonical form: escaped components joined by the own delimiter.
    fn as_data_string(&self) -> String {
        join_components(&self.components(), self.delimiter().as_char())
    }

    /// True iff both data strings are equal.
    fn is_equal(&self, other: &dyn Name) -> bool {
        self.as_data_string() == other.as_data_string()
    }

    /// `hash * 31 + unit` over the UTF-16 units of the data string, in
    /// wrapping `i32` arithmetic.
    fn hash_code(&self) -> i32 {
        self.as_data_string()
            .encode_utf16()
            .fold(0i32, |hash, unit| {
                hash.wrapping_mul(31).wrapping_add(i32::from(unit))
            })
    }

    fn is_empty(&self) -> bool {
        self.no_components() == 0
    }

    /// A copy of `self` with every component of `other` appended in order.
    ///
    /// # Errors
    ///
    /// Precondition violation if a component of `other` is malformed under
    /// `self`'s delimiter. Postcondition violation if the result does not
    /// hold exactly the components of both.
    fn concat(&self, other: &dyn Name) -> Result<Self, ContractError>
    where
        Self: Sized,
    {
        let delimiter = self.delimiter().as_char();
        let incoming = other.components();
        for c in &incoming {
            assert_valid_component(c, delimiter)?;
        }

        let mut result = self.deep_copy()?;
        for c in &incoming {
            result = result.append(c)?;
        }

        assert_concatenated(self, other, &result)?;
        Ok(result)
    }
}

fn render<N: Name + ?Sized>(name: &N, delimiter: char) -> String {
    let own = name.delimiter().as_char();
    let collapsed: Vec<String> = name
        .components()
        .iter()
        .map(|c| collapse_delimiter_escapes(c, own))
        .collect();
    join_components(&collapsed, delimiter)
}

// Preconditions

pub(crate) fn assert_valid_index(name: &dyn Name, i: usize) -> Result<(), ContractError> {
    if i < name.no_components() {
        return Ok(());
    }
    require(
        false,
        &format!(
            "index {i} out of bounds for {} components",
            name.no_components()
        ),
    )
}

pub(crate) fn assert_valid_insert_index(name: &dyn Name, i: usize) -> Result<(), ContractError> {
    if i <= name.no_components() {
        return Ok(());
    }
    require(
        false,
        &format!(
            "insert index {i} out of bounds for {} components",
            name.no_components()
        ),
    )
}

pub(crate) fn assert_valid_component(c: &str, delimiter: char) -> Result<(), ContractError> {
    if is_well_formed(c, delimiter) {
        return Ok(());
    }
    require(
        false,
        &format!("component {c:?} is not well-formed for delimiter {delimiter:?}"),
    )
}

// Postconditions

pub(crate) fn assert_valid_clone(original: &dyn Name, clone: &dyn Name) -> Result<(), ContractError> {
    ensure(original.is_equal(clone), "clone does not equal the original")
}

pub(crate) fn assert_component_set(
    before: &dyn Name,
    after: &dyn Name,
    i: usize,
    c: &str,
) -> Result<(), ContractError> {
    let set = after.component(i).is_ok_and(|got| got == c);
    ensure(
        set && after.no_components() == before.no_components(),
        "component was not set",
    )
}

pub(crate) fn assert_component_inserted(
    before: &dyn Name,
    after: &dyn Name,
    i: usize,
    c: &str,
) -> Result<(), ContractError> {
    let inserted = after.component(i).is_ok_and(|got| got == c);
    ensure(
        inserted && after.no_components() == before.no_components() + 1,
        "component was not inserted",
    )
}

pub(crate) fn assert_component_appended(
    before: &dyn Name,
    after: &dyn Name,
    c: &str,
) -> Result<(), ContractError> {
    let count = after.no_components();
    let appended = count > 0 && after.component(count - 1).is_ok_and(|got| got == c);
    ensure(
        appended && count == before.no_components() + 1,
        "component was not appended",
    )
}

pub(crate) fn assert_component_removed(
    before: &dyn Name,
    after: &dyn Name,
) -> Result<(), ContractError> {
    ensure(
        after.no_components() + 1 == before.no_components(),
        "component was not removed",
    )
}

pub(crate) fn assert_concatenated(
    first: &dyn Name,
    second: &dyn Name,
    result: &dyn Name,
) -> Result<(), ContractError> {
    ensure(
        result.no_components() == first.no_components() + second.no_components(),
        "name was not properly concatenated",
    )
}
