//! Property tests for project and display name validation.

use proptest::prelude::*;

use create_decent_app::{validate_display_name, validate_project_name, CreatorError, LocalFs};

fn with_char(c: char) -> impl Strategy<Value = String> {
    ("[A-Za-z0-9 _-]{0,16}", "[A-Za-z0-9 _-]{0,16}")
        .prop_map(move |(head, tail)| format!("{}{}{}", head, c, tail))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any name with a path separator is rejected as invalid input.
    #[test]
    fn property_path_separators_rejected(
        name in prop_oneof![with_char('/'), with_char('\\')]
    ) {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_project_name(&name, dir.path(), &LocalFs::new());
        prop_assert!(
            matches!(result, Err(CreatorError::InvalidInput { .. })),
            "accepted {:?}",
            name
        );
    }

    /// PROPERTY: any display name with `<` or `>` is flagged as an injection risk.
    #[test]
    fn property_markup_rejected(
        name in prop_oneof![with_char('<'), with_char('>')]
    ) {
        let result = validate_display_name(&name);
        prop_assert!(
            matches!(result, Err(CreatorError::InjectionRisk { .. })),
            "accepted {:?}",
            name
        );
    }

    /// PROPERTY: blank input is rejected by both validators.
    #[test]
    fn property_blank_rejected(name in "[ \t\n]{0,8}") {
        let dir = tempfile::tempdir().unwrap();
        let project = validate_project_name(&name, dir.path(), &LocalFs::new());
        prop_assert!(
            matches!(project, Err(CreatorError::InvalidInput { .. })),
            "project name {:?} accepted",
            name
        );
        let display = validate_display_name(&name);
        prop_assert!(
            matches!(display, Err(CreatorError::InvalidInput { .. })),
            "display name {:?} accepted",
            name
        );
    }

    /// PROPERTY: a plain name is accepted and stored trimmed.
    #[test]
    fn property_plain_names_accepted(name in "[A-Za-z0-9][A-Za-z0-9_-]{0,24}") {
        let dir = tempfile::tempdir().unwrap();
        let padded = format!("  {}  ", name);
        let project = validate_project_name(&padded, dir.path(), &LocalFs::new()).unwrap();
        prop_assert_eq!(project.as_str(), name.as_str());
        let display = validate_display_name(&padded).unwrap();
        prop_assert_eq!(display.as_str(), name.as_str());
    }
}
