//! core::escape
//!
//! Escape-aware splitting and joining of data strings.
//!
//! # Rules
//!
//! Escape characters are consumed strictly pairwise, left to right: an escape
//! character and the character after it form one literal unit. A delimiter is
//! a separator only when it is not the second half of such a unit. So with
//! delimiter `.`:
//!
//! - `a\.b` is one component (`\.` is a literal dot)
//! - `a\\.b` is two components, `a\\` and `b` (`\\` is a literal escape)
//!
//! Components are kept in their escaped form everywhere in the crate; only
//! [`unescape_component`] and [`collapse_delimiter_escapes`] remove escapes.
//!
//! # Example
//!
//! ```
//! use hiername::core::escape::{join_components, split_components};
//!
//! let parts = split_components(r"oss\.cs.fau.de", '.');
//! assert_eq!(parts, vec![r"oss\.cs", "fau", "de"]);
//! assert_eq!(join_components(&parts, '.'), r"oss\.cs.fau.de");
//! ```

use super::types::ESCAPE_CHARACTER;

/// Split a data string on every delimiter not consumed by an escape.
///
/// The empty string yields exactly one empty component. A trailing lone
/// escape character is kept in the last component.
pub fn split_components(data: &str, delimiter: char) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    let mut chars = data.chars();

    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            current.push(c);
            if let Some(escaped) = chars.next() {
                current.push(escaped);
            }
        } else if c == delimiter {
            components.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    components.push(current);

    log::trace!(
        "split {:?} on {:?} into {} components",
        data,
        delimiter,
        components.len()
    );
    components
}

/// Join escaped components with the raw delimiter.
pub fn join_components<S: AsRef<str>>(components: &[S], delimiter: char) -> String {
    let mut data = String::new();
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            data.push(delimiter);
        }
        data.push_str(component.as_ref());
    }
    data
}

/// Check whether `component` can stand as a single component.
///
/// Well-formed means every escape character is followed by another character
/// and no delimiter appears outside an escape pair.
pub fn is_well_formed(component: &str, delimiter: char) -> bool {
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            if chars.next().is_none() {
                return false;
            }
        } else if c == delimiter {
            return false;
        }
    }
    true
}

/// Escape a raw string so it becomes one well-formed component.
///
/// # Example
///
/// ```
/// use hiername::core::escape::escape_component;
///
/// assert_eq!(escape_component("fau.de", '.'), r"fau\.de");
/// assert_eq!(escape_component(r"a\b", '.'), r"a\\b");
/// ```
pub fn escape_component(raw: &str, delimiter: char) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == ESCAPE_CHARACTER || c == delimiter {
            escaped.push(ESCAPE_CHARACTER);
        }
        escaped.push(c);
    }
    escaped
}

/// Remove every escape pair, yielding the raw component text.
///
/// Inverse of [`escape_component`] for well-formed input.
pub fn unescape_component(component: &str) -> String {
    let mut raw = String::with_capacity(component.len());
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHARACTER {
            match chars.next() {
                Some(escaped) => raw.push(escaped),
                None => raw.push(c),
            }
        } else {
            raw.push(c);
        }
    }
    raw
}

/// Replace each escaped delimiter with the bare delimiter.
///
/// Other escape pairs are left as they are. This is the per-component step of
/// human-readable rendering.
pub fn collapse_delimiter_escapes(component: &str, delimiter: char) -> String {
    let mut collapsed = String::with_capacity(component.len());
    let mut chars = component.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE_CHARACTER {
            collapsed.push(c);
            continue;
        }
        match chars.next() {
            Some(next) if next == delimiter => collapsed.push(delimiter),
            Some(next) => {
                collapsed.push(c);
                collapsed.push(next);
            }
            None => collapsed.push(c),
        }
    }
    collapsed
}
