//! Argument parsing through the public API

use clap::Parser;
use sqllint::app::cli::args::Args;
use sqllint::app::cli::handler::Strategy;

#[test]
fn test_help_flag_is_reported_as_display_help() {
    let error = Args::try_parse_from(["sqllint", "--help"]).unwrap_err();
    assert_eq!(error.kind(), clap::error::ErrorKind::DisplayHelp);
    assert_eq!(error.exit_code(), 0);
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let error = Args::try_parse_from(["sqllint", "--frobnicate"]).unwrap_err();
    assert_ne!(error.exit_code(), 0);
}

#[test]
fn test_every_short_flag() {
    let args = Args::try_parse_from([
        "sqllint", "-c", "x.toml", "-i", "-f", "-p", "-l", "-v", "-j", "2", "q.sql",
    ])
    .unwrap();

    assert!(args.init && args.force && args.print_config && args.list_plugins && args.version);
    assert_eq!(args.max_parallel, Some(2));
    assert_eq!(Strategy::select(&args), Strategy::Version);
}

#[test]
fn test_inputs_keep_pipes_for_the_splitter() {
    let args = Args::try_parse_from(["sqllint", "SELECT 1;|SELECT 2;"]).unwrap();
    assert_eq!(args.inputs, vec!["SELECT 1;|SELECT 2;"]);
}
