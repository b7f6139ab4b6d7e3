//! Command line arguments

use crate::core::styles::palette_to_clap;
use crate::core::validation::{parse_comma_separated, validate_positive_int};
use clap::{ArgAction, Parser};
use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(name = "sqllint")]
#[command(about = "Lint SQL files and queries")]
#[command(disable_version_flag = true)]
#[command(styles = palette_to_clap(std::io::stdout().is_terminal()))]
#[command(after_help = " * can be specified multiple times or as a comma-separated list")]
pub struct Args {
    /// SQL files or literal queries ('|' separates queries)
    #[arg(value_name = "INPUTS")]
    pub inputs: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Write a default configuration file
    #[arg(short = 'i', long = "init")]
    pub init: bool,

    /// Overwrite an existing configuration file (with --init)
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Print the configuration file in use
    #[arg(short = 'p', long = "print-config")]
    pub print_config: bool,

    /// List discovered plugins
    #[arg(short = 'l', long = "list-plugins")]
    pub list_plugins: bool,

    /// Print version information
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Plugins to activate*
    #[arg(long = "plugin", value_name = "NAMES", action = ArgAction::Append)]
    pub plugins: Vec<String>,

    /// Plugins to exclude from discovery*
    #[arg(long = "exclude-plugin", value_name = "NAMES", action = ArgAction::Append)]
    pub plugin_exclusions: Vec<String>,

    /// Maximum number of units staged in parallel
    #[arg(short = 'j', long = "max-parallel", value_name = "N", value_parser = validate_positive_int)]
    pub max_parallel: Option<usize>,

    /// Log level
    #[arg(long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force coloured output
    #[arg(long = "color", overrides_with = "no_color")]
    pub force_color: bool,

    /// Disable coloured output
    #[arg(long = "no-color", overrides_with = "force_color")]
    pub no_color: bool,

    /// Colour preference from the configuration file
    #[arg(skip)]
    pub color: Option<bool>,

    /// Rule severities from the configuration file
    #[arg(skip)]
    pub rules: BTreeMap<String, String>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand comma separated plugin lists and drop duplicates
    pub fn normalise(&mut self) {
        self.plugins = parse_comma_separated(&self.plugins);
        self.plugin_exclusions = parse_comma_separated(&self.plugin_exclusions);
        if self
            .log_file
            .as_ref()
            .is_some_and(|path| path.as_os_str() == "-" || path.as_os_str().eq_ignore_ascii_case("none"))
        {
            self.log_file = None;
        }
    }

    /// Resolve colour: command line flags, then config, then terminal detection
    pub fn use_color(&self) -> bool {
        if self.no_color {
            false
        } else if self.force_color {
            true
        } else {
            self.color
                .unwrap_or_else(|| std::io::stdout().is_terminal())
        }
    }
}
