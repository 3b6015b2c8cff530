//! Property tests for manifest parsing and env overrides.

use proptest::prelude::*;

use dashctl::{EnvOverrides, Manifest};

fn package_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary text never panics and never yields an empty name.
    #[test]
    fn property_parse_never_panics(content in "\\PC{0,200}") {
        let manifest = Manifest::parse("requirements.txt", &content);
        prop_assert!(manifest.requirements().iter().all(|r| !r.name.is_empty()));
        prop_assert!(manifest.fingerprint().starts_with("sha256:"));
    }

    /// PROPERTY: Comment and blank lines contribute nothing.
    #[test]
    fn property_comment_lines_are_ignored(
        comments in proptest::collection::vec("[ ]{0,4}#[^\n]{0,30}", 0..8),
    ) {
        let content = comments.join("\n\n");
        let manifest = Manifest::parse("requirements.txt", &content);
        prop_assert!(manifest.is_empty());
        prop_assert!(manifest.options().is_empty());
    }

    /// PROPERTY: Every `name==version` line is one pinned requirement, in order.
    #[test]
    fn property_pinned_lines_round_trip_names(
        names in proptest::collection::vec(package_name(), 1..10),
        major in 0u32..30,
    ) {
        let content: String = names
            .iter()
            .map(|n| format!("{}=={}.0\n", n, major))
            .collect();
        let manifest = Manifest::parse("requirements.txt", &content);

        let parsed: Vec<&str> = manifest.requirements().iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(parsed, expected);
        prop_assert!(manifest.unpinned().is_empty());
    }

    /// PROPERTY: `KEY=VALUE` keeps everything after the first `=` verbatim.
    #[test]
    fn property_env_pair_splits_on_first_equals(
        key in "[A-Z_][A-Z0-9_]{0,15}",
        value in "[^\n]{0,40}",
    ) {
        let raw = format!("{}={}", key, value);
        let parsed = EnvOverrides::parse_pair(&raw);
        prop_assert_eq!(parsed, Some((key, value)));
    }
}
