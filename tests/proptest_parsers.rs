//! Property-based tests for the version, manifest, feed and timestamp parsers
//!
//! Uses proptest to verify parsers handle arbitrary input without panicking.
//! Reference: https://lib.rs/crates/proptest

use proptest::prelude::*;

use cmlog::changelog::parse_feed;
use cmlog::device::{BuildVersion, extract_projects};
use cmlog::model::format_timestamp;

// =============================================================================
// Strategy generators for realistic-ish device values
// =============================================================================

/// CyanogenMod version number (e.g. `13.0`)
fn number_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,2}\\.[0-9]"
}

/// Release type token
fn release_type_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("NIGHTLY".to_string()),
        Just("SNAPSHOT".to_string()),
        Just("UNOFFICIAL".to_string()),
        "[A-Z]{3,10}",
    ]
}

/// Device name or snapshot code (dashes allowed after the release type)
fn extra_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,12}(-[a-z0-9]{1,6})?"
}

/// Manifest project name
fn project_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "CyanogenMod/android_[a-z_]{1,20}",
        "platform/[a-z_]{1,20}",
    ]
}

// =============================================================================
// Robustness tests: parsers should never panic on arbitrary input
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn version_parse_never_panics(input in "\\PC{0,80}") {
        let _ = BuildVersion::parse(&input);
    }

    #[test]
    fn manifest_never_panics(input in "\\PC{0,200}") {
        let _ = extract_projects(&input, "CyanogenMod/");
    }

    #[test]
    fn feed_never_panics(input in "\\PC{0,200}") {
        let _ = parse_feed(&input);
    }

    #[test]
    fn timestamp_never_panics(input in "\\PC{0,40}") {
        let _ = format_timestamp(&input);
    }
}

// =============================================================================
// Correctness tests: structured input parses to the expected values
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn version_fields_roundtrip(
        number in number_strategy(),
        date in "20[0-9]{6}",
        release_type in release_type_strategy(),
        extra in extra_strategy(),
    ) {
        let raw = format!("{}-{}-{}-{}", number, date, release_type, extra);
        let version = BuildVersion::parse(&raw);

        prop_assert_eq!(&version.raw, &raw);
        prop_assert_eq!(&version.number, &number);
        prop_assert_eq!(&version.date, &date);
        prop_assert_eq!(&version.release_type, &release_type);
        prop_assert_eq!(&version.extra, &extra);

        let expected_branch = if release_type == "SNAPSHOT" {
            format!("stable/cm-{}", extra.chars().take(4).collect::<String>())
        } else {
            format!("cm-{}", number)
        };
        prop_assert_eq!(version.branch, expected_branch);
    }

    #[test]
    fn manifest_keeps_only_marked_projects(
        names in proptest::collection::vec(project_name_strategy(), 0..20),
    ) {
        let mut xml = String::from("<manifest>\n");
        for name in &names {
            xml.push_str(&format!("  <project name=\"{}\" path=\"x\" />\n", name));
        }
        xml.push_str("</manifest>\n");

        let projects = extract_projects(&xml, "CyanogenMod/");
        let expected: std::collections::BTreeSet<String> = names
            .into_iter()
            .filter(|n| n.contains("CyanogenMod/"))
            .collect();
        prop_assert_eq!(projects, expected);
    }

    #[test]
    fn timestamp_normalized(
        year in 1970u32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        seconds in proptest::option::of(0u32..60),
    ) {
        let expected = format!("{:04}-{:02}-{:02} {:02}:{:02}", year, month, day, hour, minute);
        let raw = match seconds {
            Some(s) => format!("{}:{:02}", expected, s),
            None => expected.clone(),
        };
        prop_assert_eq!(format_timestamp(&raw).unwrap(), expected);
    }
}
