//! Property-based tests for hierarchical names.
//!
//! These tests use proptest to check that both representations honor the
//! same contract across randomly generated components.

use proptest::prelude::*;

use hiername::core::escape::{escape_component, is_well_formed, unescape_component};
use hiername::core::name::{Name, StringArrayName, StringName};
use hiername::core::types::Delimiter;

/// Strategy for raw component characters, biased towards the tricky ones.
fn raw_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => prop::char::range('a', 'z'),
        1 => Just('.'),
        1 => Just('\\'),
        1 => Just('#'),
        1 => Just('/'),
    ]
}

/// Strategy for raw (unescaped) component text, possibly empty.
fn raw_component() -> impl Strategy<Value = String> {
    prop::collection::vec(raw_char(), 0..8).prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for a list of escaped components for delimiter `.`.
fn components(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(raw_component(), 0..max).prop_map(|raws| {
        raws.iter()
            .map(|raw| escape_component(raw, '.'))
            .collect()
    })
}

fn both(components: &[String]) -> (StringArrayName, StringName) {
    let array = StringArrayName::new(components.iter().cloned()).unwrap();
    let string = StringName::from_name(&array).unwrap();
    (array, string)
}

proptest! {
    /// Escaping a raw string always yields a well-formed component that
    /// unescapes back to the original.
    #[test]
    fn escape_is_reversible(raw in raw_component()) {
        let escaped = escape_component(&raw, '.');
        prop_assert!(is_well_formed(&escaped, '.'));
        prop_assert_eq!(unescape_component(&escaped), raw);
    }

    /// An escaped component survives re-parsing as a single component.
    #[test]
    fn escaped_component_parses_as_one(raw in raw_component()) {
        let escaped = escape_component(&raw, '.');
        let name = StringName::new(escaped.clone()).unwrap();
        prop_assert_eq!(name.no_components(), 1);
        prop_assert_eq!(name.component(0).unwrap(), escaped);
    }

    /// Parsing the data string of a non-empty name gives an equal name.
    #[test]
    fn data_string_round_trip(comps in components(6)) {
        prop_assume!(!comps.is_empty());
        let (array, string) = both(&comps);
        let reparsed = StringName::with_delimiter(array.as_data_string(), array.delimiter()).unwrap();
        prop_assert!(reparsed.is_equal(&array));
        prop_assert!(reparsed.is_equal(&string));
        prop_assert_eq!(reparsed.components(), comps);
    }

    /// Both representations agree on every observable.
    #[test]
    fn representations_agree(comps in components(6)) {
        let (array, string) = both(&comps);
        prop_assert_eq!(array.no_components(), string.no_components());
        prop_assert_eq!(array.components(), string.components());
        prop_assert_eq!(array.as_data_string(), string.as_data_string());
        prop_assert_eq!(array.as_string(), string.as_string());
        prop_assert_eq!(array.is_empty(), string.is_empty());
    }

    /// Equal names hash equally.
    #[test]
    fn hash_consistent_with_equality(comps in components(6)) {
        let (array, string) = both(&comps);
        prop_assert!(array.is_equal(&string));
        prop_assert_eq!(array.hash_code(), string.hash_code());
        prop_assert_eq!(array.deep_copy().unwrap().hash_code(), string.hash_code());
    }

    /// Emptiness is exactly zero components.
    #[test]
    fn empty_iff_no_components(comps in components(4)) {
        let (array, string) = both(&comps);
        prop_assert_eq!(array.is_empty(), comps.is_empty());
        prop_assert_eq!(string.is_empty(), comps.is_empty());
    }

    /// Append and insert add one component, remove takes one away.
    #[test]
    fn edits_change_count_by_one(
        comps in components(6),
        raw in raw_component(),
        index in 0usize..8,
    ) {
        let c = escape_component(&raw, '.');
        let (array, string) = both(&comps);
        let count = comps.len();

        prop_assert_eq!(array.append(&c).unwrap().no_components(), count + 1);
        prop_assert_eq!(string.append(&c).unwrap().no_components(), count + 1);

        let at = index % (count + 1);
        let inserted = string.insert(at, &c).unwrap();
        prop_assert_eq!(inserted.no_components(), count + 1);
        prop_assert_eq!(inserted.component(at).unwrap(), c.clone());
        prop_assert_eq!(array.insert(at, &c).unwrap().components(), inserted.components());

        if count > 0 {
            let at = index % count;
            prop_assert_eq!(array.remove(at).unwrap().no_components(), count - 1);
            prop_assert_eq!(string.remove(at).unwrap().no_components(), count - 1);
        }
    }

    /// Edits never change the receiver.
    #[test]
    fn edits_leave_receiver_untouched(comps in components(6), raw in raw_component()) {
        let c = escape_component(&raw, '.');
        let (array, string) = both(&comps);
        let before = string.as_data_string();

        let _ = string.append(&c);
        let _ = string.insert(0, &c);
        let _ = string.remove(0);
        let _ = array.append(&c);

        prop_assert_eq!(string.as_data_string(), before.clone());
        prop_assert_eq!(array.as_data_string(), before);
    }

    /// Out-of-range indices are precondition violations.
    #[test]
    fn index_bounds_checked(comps in components(6), extra in 0usize..4) {
        let (array, string) = both(&comps);
        let count = comps.len();

        prop_assert!(array.component(count + extra).unwrap_err().is_precondition());
        prop_assert!(string.component(count + extra).unwrap_err().is_precondition());
        prop_assert!(string.remove(count + extra).unwrap_err().is_precondition());
        prop_assert!(array.set_component(count + extra, "x").unwrap_err().is_precondition());
        prop_assert!(string.insert(count + extra + 1, "x").unwrap_err().is_precondition());
    }

    /// Concatenation yields the components of both, in order.
    #[test]
    fn concat_is_additive(left in components(5), right in components(5)) {
        let (a, s) = both(&left);
        let (b, t) = both(&right);

        let ab = a.concat(&t).unwrap();
        let st = s.concat(&b).unwrap();
        prop_assert_eq!(ab.no_components(), left.len() + right.len());

        let mut expected = left.clone();
        expected.extend(right.iter().cloned());
        prop_assert_eq!(ab.components(), expected.clone());
        prop_assert_eq!(st.components(), expected);
    }

    /// Any name round-trips through serde.
    #[test]
    fn serde_roundtrip(comps in components(6)) {
        let (array, string) = both(&comps);

        let json = serde_json::to_string(&array).unwrap();
        let parsed: StringArrayName = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, array);

        let json = serde_json::to_string(&string).unwrap();
        let parsed: StringName = serde_json::from_str(&json).unwrap();
        // A zero-component name comes back as one empty component.
        prop_assert_eq!(parsed, string);
    }

    /// Rendering with a delimiter no component holds keeps the component
    /// boundaries visible.
    #[test]
    fn as_string_with_other_delimiter(comps in components(6)) {
        let (array, _) = both(&comps);
        let rendered = array.as_string_with("|").unwrap();
        if !comps.is_empty() {
            prop_assert_eq!(rendered.matches('|').count(), comps.len() - 1);
        }
    }
}

proptest! {
    /// Delimiters are exactly one character other than the escape.
    #[test]
    fn delimiter_validation_consistent(s in ".{0,3}") {
        let valid = s.chars().count() == 1 && s != "\\";
        prop_assert_eq!(Delimiter::new(&s).is_ok(), valid);
    }
}
