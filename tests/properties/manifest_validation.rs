//! Property tests for manifest path validation.

use proptest::prelude::*;

use sweep::{Manifest, ManifestEntry, SweepError};

fn relative_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}(\\.[a-z]{1,4})?").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics, whatever the input.
    #[test]
    fn property_validation_never_panics(path in ".{0,64}", is_dir in any::<bool>()) {
        let entry = if is_dir {
            ManifestEntry::directory(path)
        } else {
            ManifestEntry::file(path)
        };
        let _ = Manifest::new(vec![entry]);
    }

    /// PROPERTY: Plain relative paths are always accepted, in order.
    #[test]
    fn property_relative_paths_accepted(
        paths in proptest::collection::vec(
            proptest::collection::vec(relative_segment(), 1..=4).prop_map(|s| s.join("/")),
            0..=16,
        ),
    ) {
        let manifest = Manifest::from_lists(paths.clone(), Vec::<String>::new()).unwrap();
        let stored: Vec<&str> = manifest.entries().iter().map(|e| e.path.as_str()).collect();
        prop_assert_eq!(stored, paths.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// PROPERTY: Any `..` component is rejected as an escape.
    #[test]
    fn property_parent_components_rejected(
        prefix in proptest::collection::vec(relative_segment(), 0..=3),
        suffix in proptest::collection::vec(relative_segment(), 0..=3),
    ) {
        let mut parts = prefix;
        parts.push("..".to_string());
        parts.extend(suffix);
        let path = parts.join("/");

        let result = Manifest::new(vec![ManifestEntry::file(path)]);
        prop_assert!(
            matches!(result, Err(SweepError::PathEscape { .. })),
            "expected PathEscape, got {:?}",
            result
        );
    }
}
