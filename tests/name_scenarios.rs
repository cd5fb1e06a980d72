//! End-to-end scenarios for both name representations.
//!
//! Each scenario runs against `StringName` and `StringArrayName` and, where
//! it makes sense, across the two.

use hiername::core::config::NameConfig;
use hiername::core::contract::ContractKind;
use hiername::core::name::any::Representation;
use hiername::core::name::{AnyName, Name, StringArrayName, StringName};
use hiername::core::types::Delimiter;

fn hash() -> Delimiter {
    Delimiter::new("#").unwrap()
}

/// Build the same name in both representations.
fn both(data: &str, delimiter: Delimiter) -> [AnyName; 2] {
    let string = StringName::with_delimiter(data, delimiter).unwrap();
    let array = StringArrayName::from_name(&string).unwrap();
    [AnyName::from(string), AnyName::from(array)]
}

mod documented_scenarios {
    use super::*;

    #[test]
    fn insert_in_the_middle() {
        for n in both("oss.fau.de", Delimiter::default()) {
            let m = n.insert(1, "cs").unwrap();
            assert_eq!(m.as_string(), "oss.cs.fau.de");
            assert_eq!(m.no_components(), 4);
        }
    }

    #[test]
    fn append_at_the_end() {
        let n = StringArrayName::new(["oss", "cs", "fau"]).unwrap();
        assert_eq!(n.append("de").unwrap().as_string(), "oss.cs.fau.de");

        let n = StringName::new("oss.cs.fau").unwrap();
        assert_eq!(n.append("de").unwrap().as_string(), "oss.cs.fau.de");
    }

    #[test]
    fn remove_the_first() {
        for n in both("oss.cs.fau.de", Delimiter::default()) {
            assert_eq!(n.remove(0).unwrap().as_string(), "cs.fau.de");
        }
    }

    #[test]
    fn escaped_delimiter_stays_in_its_component() {
        for n in both(r"oss\.cs.fau.de", Delimiter::default()) {
            assert_eq!(n.no_components(), 3);
            assert_eq!(n.component(0).unwrap(), r"oss\.cs");
            assert_eq!(n.as_string(), "oss.cs.fau.de");
            assert_eq!(n.as_data_string(), r"oss\.cs.fau.de");
        }
    }

    #[test]
    fn custom_delimiter() {
        for n in both("oss#fau#de", hash()) {
            let m = n.insert(1, "cs").unwrap();
            assert_eq!(m.as_string(), "oss#cs#fau#de");
            assert_eq!(m.delimiter(), hash());
        }
    }

    #[test]
    fn concat_two_names() {
        let a = StringArrayName::new(["oss", "cs"]).unwrap();
        let b = StringArrayName::new(["fau", "de"]).unwrap();
        assert_eq!(a.concat(&b).unwrap().as_string(), "oss.cs.fau.de");

        let s = StringName::new("oss.cs").unwrap();
        assert_eq!(s.concat(&b).unwrap().as_string(), "oss.cs.fau.de");
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn empty_data_string_is_one_empty_component() {
        for n in both("", Delimiter::default()) {
            assert_eq!(n.no_components(), 1);
            assert_eq!(n.component(0).unwrap(), "");
            assert!(!n.is_empty());
        }
    }

    #[test]
    fn removing_the_last_component_empties_the_name() {
        for n in both("oss", Delimiter::default()) {
            let m = n.remove(0).unwrap();
            assert!(m.is_empty());
            assert_eq!(m.as_data_string(), "");
            let m = m.append("de").unwrap();
            assert_eq!(m.no_components(), 1);
            assert_eq!(m.as_string(), "de");
        }
    }

    #[test]
    fn empty_components_are_kept() {
        for n in both("a..b.", Delimiter::default()) {
            assert_eq!(n.no_components(), 4);
            assert_eq!(n.components(), vec!["a", "", "b", ""]);
        }
    }

    #[test]
    fn escaped_escape_before_delimiter_splits() {
        for n in both(r"a\\.b", Delimiter::default()) {
            assert_eq!(n.no_components(), 2);
            assert_eq!(n.component(0).unwrap(), r"a\\");
        }
    }

    #[test]
    fn insert_at_count_appends() {
        for n in both("oss.cs", Delimiter::default()) {
            let m = n.insert(2, "de").unwrap();
            assert_eq!(m.as_string(), "oss.cs.de");
        }
    }

    #[test]
    fn malformed_input_is_rejected_without_change() {
        for n in both("oss.cs", Delimiter::default()) {
            let err = n.append("fau.de").unwrap_err();
            assert_eq!(err.kind(), ContractKind::Precondition);

            let err = n.set_component(0, "trailing\\").unwrap_err();
            assert_eq!(err.kind(), ContractKind::Precondition);

            let err = n.insert(5, "x").unwrap_err();
            assert_eq!(err.kind(), ContractKind::Precondition);

            assert_eq!(n.as_data_string(), "oss.cs");
        }
    }

    #[test]
    fn lone_trailing_escape_rejected_when_parsing() {
        let err = StringName::new(r"oss.cs\").unwrap_err();
        assert!(err.is_precondition());
    }
}

mod equality_and_hashing {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_from_different_representations_collide_in_sets() {
        let [string, array] = both("oss.cs.fau.de", Delimiter::default());
        let mut set = HashSet::new();
        set.insert(string);
        assert!(!set.insert(array));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn same_components_different_delimiters_differ() {
        let dotted = StringArrayName::new(["oss", "de"]).unwrap();
        let hashed = StringArrayName::with_delimiter(["oss", "de"], hash()).unwrap();
        assert!(!dotted.is_equal(&hashed));
        assert_ne!(dotted.as_data_string(), hashed.as_data_string());
    }

    #[test]
    fn deep_copy_is_equal_and_independent() {
        let n = StringName::new("oss.fau").unwrap();
        let copy = n.deep_copy().unwrap();
        let edited = copy.append("de").unwrap();
        assert!(n.is_equal(&copy));
        assert!(!n.is_equal(&edited));
    }
}

mod configured {
    use super::*;

    #[test]
    fn config_picks_representation_and_delimiter() {
        let config = NameConfig::from_toml_str(
            r#"
            delimiter = "/"
            representation = "string"
            "#,
        )
        .unwrap();

        let n = config.parse("usr/local/bin").unwrap();
        assert_eq!(n.representation(), Representation::String);
        assert_eq!(n.no_components(), 3);

        let m = n.to_representation(Representation::Array).unwrap();
        assert_eq!(m, n);
        assert_eq!(m.as_string_with(".").unwrap(), "usr.local.bin");
    }

    #[test]
    fn anyname_serializes_with_tag() {
        let n = NameConfig::default().from_components(["oss", "de"]).unwrap();
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["representation"], "array");
        assert_eq!(json["components"], serde_json::json!(["oss", "de"]));
        assert_eq!(json["delimiter"], ".");
    }
}
