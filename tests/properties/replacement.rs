//! Property tests for literal placeholder replacement.

use proptest::prelude::*;

use create_decent_app::{replace_in_file, LocalFs, ReplaceOutcome};

const SEARCH: &str = "Decent App";

fn text_around_placeholder() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just(SEARCH.to_string()),
            "[a-z .,\n]{0,12}",
        ],
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a second pass changes nothing when the replacement does not
    /// contain the search text.
    #[test]
    fn property_replacement_idempotent(
        content in text_around_placeholder(),
        replace in "[a-z0-9-]{1,16}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        std::fs::write(&path, &content).unwrap();
        let fs = LocalFs::new();

        replace_in_file(&fs, &path, SEARCH, &replace).unwrap();
        let once = std::fs::read_to_string(&path).unwrap();
        let second = replace_in_file(&fs, &path, SEARCH, &replace).unwrap();

        prop_assert_eq!(second, ReplaceOutcome::Unchanged);
        prop_assert_eq!(std::fs::read_to_string(&path).unwrap(), once);
    }

    /// PROPERTY: the result equals a literal replace-all of the input.
    #[test]
    fn property_matches_literal_replace_all(
        content in text_around_placeholder(),
        replace in "[A-Za-z0-9 $.*]{0,16}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, &content).unwrap();

        let outcome = replace_in_file(&LocalFs::new(), &path, SEARCH, &replace).unwrap();

        let expected = content.replace(SEARCH, &replace);
        prop_assert_eq!(std::fs::read_to_string(&path).unwrap(), expected);
        prop_assert_eq!(outcome == ReplaceOutcome::Updated, content.contains(SEARCH));
    }
}
