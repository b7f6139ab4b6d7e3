//! Request handling strategies
//!
//! Exactly one strategy handles an invocation; the first that applies wins:
//! version, print-config, init, list-plugins, lint, usage.

use crate::app::cli::args::Args;
use crate::app::cli::config::{default_config_path, write_default_config, ConfigError};
use crate::core::error_handling::{log_error_with_context, user_facing_message};
use crate::core::styles::StyleRole;
use crate::core::version::version_banner;
use crate::plugin::api::{PluginHandler, PluginInfo};
use crate::reporter::api::Reporter;
use clap::CommandFactory;
use prettytable::{format, Cell, Row, Table};
use std::path::PathBuf;

/// What the caller should do after a strategy ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerResponse {
    pub success: bool,
    pub should_lint: bool,
}

impl HandlerResponse {
    pub fn done(success: bool) -> Self {
        Self {
            success,
            should_lint: false,
        }
    }

    pub fn lint() -> Self {
        Self {
            success: true,
            should_lint: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Version,
    PrintConfig,
    Init,
    ListPlugins,
    Lint,
    Usage,
}

impl Strategy {
    pub fn select(args: &Args) -> Self {
        if args.version {
            Strategy::Version
        } else if args.print_config {
            Strategy::PrintConfig
        } else if args.init {
            Strategy::Init
        } else if args.list_plugins {
            Strategy::ListPlugins
        } else if !args.inputs.is_empty() {
            Strategy::Lint
        } else {
            Strategy::Usage
        }
    }
}

pub struct RequestHandler<'a> {
    args: &'a Args,
    config_path: Option<PathBuf>,
    plugins: &'a PluginHandler,
    reporter: &'a dyn Reporter,
}

impl<'a> RequestHandler<'a> {
    pub fn new(
        args: &'a Args,
        config_path: Option<PathBuf>,
        plugins: &'a PluginHandler,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            args,
            config_path,
            plugins,
            reporter,
        }
    }

    pub async fn handle(&self) -> HandlerResponse {
        let strategy = Strategy::select(self.args);
        log::debug!("Handling request with {:?}", strategy);
        match strategy {
            Strategy::Version => {
                self.reporter.report(&version_banner());
                HandlerResponse::done(true)
            }
            Strategy::PrintConfig => self.print_config(),
            Strategy::Init => self.init().await,
            Strategy::ListPlugins => self.list_plugins().await,
            Strategy::Lint => HandlerResponse::lint(),
            Strategy::Usage => {
                self.reporter
                    .report(&Args::command().render_help().to_string());
                HandlerResponse::done(true)
            }
        }
    }

    fn print_config(&self) -> HandlerResponse {
        match &self.config_path {
            Some(path) => self
                .reporter
                .report(&format!("Config file found at: {}", path.display())),
            None => self
                .reporter
                .report("Config file not found. Using default configuration"),
        }
        HandlerResponse::done(true)
    }

    async fn init(&self) -> HandlerResponse {
        let Some(path) = self.args.config_file.clone().or_else(default_config_path) else {
            let error = ConfigError::NoHomeDirectory;
            log_error_with_context(&error, "Configuration initialisation");
            self.reporter.report(&user_facing_message(&error, "Configuration initialisation"));
            return HandlerResponse::done(false);
        };

        match write_default_config(&path, self.args.force).await {
            Ok(()) => {
                self.reporter
                    .report(&format!("Created default config file at: {}", path.display()));
                HandlerResponse::done(true)
            }
            Err(e) => {
                log_error_with_context(&e, "Configuration initialisation");
                self.reporter.report(&e.to_string());
                HandlerResponse::done(false)
            }
        }
    }

    async fn list_plugins(&self) -> HandlerResponse {
        let plugins = self.plugins.list_plugins().await;
        if plugins.is_empty() {
            self.reporter.report("No plugins discovered.");
        } else {
            let active = self.plugins.active_plugin_names().await;
            let table = plugin_table(&plugins, &active, self.args.use_color());
            self.reporter.report(table.to_string().trim_end());
        }
        HandlerResponse::done(true)
    }
}

/// Name, version, state and description of each plugin
pub fn plugin_table(plugins: &[PluginInfo], active: &[String], use_color: bool) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);

    let header_cell = |title: &str| match StyleRole::Header.to_prettytable_spec() {
        Some(spec) if use_color => Cell::new(title).style_spec(&spec),
        _ => Cell::new(title),
    };
    table.set_titles(Row::new(vec![
        header_cell("Plugin"),
        header_cell("Version"),
        header_cell("Active"),
        header_cell("Description"),
    ]));

    for plugin in plugins {
        let is_active = active.iter().any(|name| name == &plugin.name);
        table.add_row(Row::new(vec![
            Cell::new(&StyleRole::Name.paint(&plugin.name, use_color)),
            Cell::new(&plugin.version),
            Cell::new(if is_active { "yes" } else { "no" }),
            Cell::new(&plugin.description),
        ]));
    }
    table
}
