//! Whole invocations and their exit codes

use crate::common::{buffered_reporter, write_sql};
use clap::Parser;
use sqllint::app::cli::args::Args;
use sqllint::app::startup::{execute, EXIT_FAILURE, EXIT_SUCCESS};

fn args(argv: &[&str]) -> Args {
    let mut args = Args::try_parse_from(argv).unwrap();
    args.normalise();
    args
}

#[tokio::test]
async fn test_violations_do_not_fail_the_run() {
    let (reporter, output) = buffered_reporter();
    let code = execute(
        &args(&["sqllint", "SELECT * FROM t;|SELECT a FROM t;"]),
        None,
        reporter,
    )
    .await;

    assert_eq!(code, EXIT_SUCCESS);
    let text = output.contents();
    assert!(text.contains("SELECT * FROM t;(1,8): error select-star : Expected column names in SELECT."));
    assert!(text.contains("\nLinted 2 SQL Sections in "));
    assert!(text.contains("1 Errors.\n0 Warnings"));
}

#[tokio::test]
async fn test_wholly_suppressed_file_counts_but_reports_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sql(
        &dir,
        "legacy.sql",
        "/* sqllint-disable */\nSELECT *\nFROM t\n",
    );
    let (reporter, output) = buffered_reporter();

    let code = execute(&args(&["sqllint", &path]), None, reporter).await;

    assert_eq!(code, EXIT_SUCCESS);
    let text = output.contents();
    assert!(text.contains("Linted 1 SQL Sections"));
    assert!(text.contains("0 Errors.\n0 Warnings"));
}

#[tokio::test]
async fn test_rule_severity_from_config_applies() {
    let mut args = args(&["sqllint", "SELECT * FROM t;"]);
    args.rules.insert("select-star".to_string(), "warning".to_string());
    let (reporter, output) = buffered_reporter();

    assert_eq!(execute(&args, None, reporter).await, EXIT_SUCCESS);
    assert!(output.contents().contains("warning select-star"));
}

#[tokio::test]
async fn test_bad_rule_configuration_fails() {
    let mut args = args(&["sqllint", "SELECT 1;"]);
    args.rules.insert("select-star".to_string(), "fatal".to_string());
    let (reporter, output) = buffered_reporter();

    assert_eq!(execute(&args, None, reporter).await, EXIT_FAILURE);
    assert!(output.contents().contains("Invalid severity 'fatal'"));
    assert!(!output.contents().contains("Linted"));
}

#[tokio::test]
async fn test_unknown_plugin_fails() {
    let (reporter, _) = buffered_reporter();
    let code = execute(
        &args(&["sqllint", "--plugin", "no-such-plugin", "SELECT 1;"]),
        None,
        reporter,
    )
    .await;
    assert_eq!(code, EXIT_FAILURE);
}

#[tokio::test]
async fn test_informational_requests_succeed() {
    for argv in [vec!["sqllint", "-v"], vec!["sqllint", "-p"], vec!["sqllint"]] {
        let (reporter, output) = buffered_reporter();
        assert_eq!(execute(&args(&argv), None, reporter).await, EXIT_SUCCESS);
        assert!(!output.contents().is_empty());
    }
}

#[tokio::test]
async fn test_init_without_force_on_existing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sql(&dir, "lint.toml", "# existing\n");
    let (reporter, _) = buffered_reporter();

    let code = execute(&args(&["sqllint", "-i", "-c", &path]), None, reporter).await;

    assert_eq!(code, EXIT_FAILURE);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# existing\n");
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_input_fails_the_run() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = write_sql(&dir, "locked.sql", "SELECT 1;\n");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();
    if std::fs::read(&path).is_ok() {
        // Running with privileges that ignore file modes
        return;
    }
    let (reporter, output) = buffered_reporter();

    let code = execute(&args(&["sqllint", &path, "SELECT 1;"]), None, reporter).await;

    assert_eq!(code, EXIT_FAILURE);
    let text = output.contents();
    assert!(text.contains("processing failed"));
    assert!(text.contains("Linted 1 SQL Sections"));
}
