//! Configuration files applied to parsed arguments

use clap::Parser;
use sqllint::app::cli::args::Args;
use sqllint::app::cli::config::{default_config, ConfigError};

#[tokio::test]
async fn test_config_file_rules_reach_args() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lint.toml");
    std::fs::write(
        &path,
        "plugins = \"dump\"\n[rules]\nselect-star = \"off\"\nsemicolon-termination = \"error\"\n",
    )
    .unwrap();

    let mut args = Args::try_parse_from(["sqllint", "-c", path.to_str().unwrap(), "q.sql"]).unwrap();
    args.normalise();
    assert_eq!(args.load_config().await.unwrap(), Some(path));

    assert_eq!(args.plugins, vec!["dump"]);
    assert_eq!(args.rules.get("select-star").map(String::as_str), Some("off"));
    assert_eq!(
        args.rules.get("semicolon-termination").map(String::as_str),
        Some("error")
    );
}

#[tokio::test]
async fn test_invalid_config_value_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lint.toml");
    std::fs::write(&path, "max-parallel = -2\n").unwrap();

    let mut args = Args::try_parse_from(["sqllint", "-c", path.to_str().unwrap()]).unwrap();
    let error = args.load_config().await.unwrap_err();

    assert!(matches!(error, ConfigError::Invalid { .. }));
    assert!(error.to_string().contains("lint.toml"));
    assert!(error.to_string().contains("max-parallel"));
}

#[test]
fn test_default_config_is_valid_toml() {
    let table = default_config().parse::<toml::Table>().unwrap();
    let rules = table.get("rules").and_then(|v| v.as_table()).unwrap();
    assert_eq!(rules.get("print-statement").and_then(|v| v.as_str()), Some("error"));
}
