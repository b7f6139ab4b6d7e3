//! Properties of unit splitting, suppression scanning and resolution

use sqllint::ingest::api::{split_batch, split_units, ContentHandle, ContentReader};
use sqllint::suppression::api::{
    is_wholly_suppressed, scan, scan_lines, RuleSelector, SuppressionDirective, SuppressionSet,
};
use std::sync::Arc;

fn reader(text: &str) -> ContentReader {
    ContentReader::new(Arc::from(text.as_bytes()))
}

#[test]
fn test_splitting_is_associative_over_concatenation() {
    let pairs = [
        ("SELECT 1;", "SELECT 2;|SELECT 3;"),
        ("SELECT 1;|", "SELECT 2;"),
        ("", "SELECT 2;"),
    ];
    for (a, b) in pairs {
        let mut separate = split_units(a);
        separate.extend(split_units(b));
        assert_eq!(split_units(&format!("{}|{}", a, b)), separate);
    }
    assert_eq!(
        split_batch(&["SELECT 1;|SELECT 2;", "SELECT 3;"]),
        vec!["SELECT 1;", "SELECT 2;", "SELECT 3;"]
    );
}

#[test]
fn test_scanning_is_idempotent() {
    let text = "/* sqllint-disable select-star */\nSELECT *\n-- sqllint-enable\nPRINT 'x' -- sqllint-disable-line\n";
    let first = scan(&mut reader(text));
    let second = scan(&mut reader(text));

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_range_must_reach_the_last_line() {
    let handle = ContentHandle::from_literal("a\nb\nc\nd\ne");
    assert_eq!(handle.line_count(), 5);

    let whole: SuppressionSet = SuppressionDirective::range(RuleSelector::All, 1, 5)
        .into_iter()
        .collect();
    let short: SuppressionSet = SuppressionDirective::range(RuleSelector::All, 1, 4)
        .into_iter()
        .collect();

    assert!(is_wholly_suppressed(&handle, &whole));
    assert!(!is_wholly_suppressed(&handle, &short));
}

#[test]
fn test_no_directives_never_suppress() {
    for text in ["", "SELECT 1;", "SELECT 1;\nSELECT 2;\n"] {
        let handle = ContentHandle::from_literal(text);
        let suppressions = scan(&mut handle.reader());
        assert!(suppressions.is_empty());
        assert!(!is_wholly_suppressed(&handle, &suppressions));
    }
}

#[test]
fn test_line_directive_never_suppresses_whole_unit() {
    let lines = ["SELECT 1; -- sqllint-disable-line"];
    let suppressions = scan_lines(&lines);
    let handle = ContentHandle::from_literal(lines[0]);

    assert_eq!(suppressions.len(), 1);
    assert!(!is_wholly_suppressed(&handle, &suppressions));
}
