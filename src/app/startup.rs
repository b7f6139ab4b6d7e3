//! Application startup: parse, configure, handle, lint

use crate::app::cli::args::Args;
use crate::app::cli::handler::RequestHandler;
use crate::core::error_handling::{log_error_with_context, user_facing_message};
use crate::core::logging::init_logging;
use crate::core::time::RunTimer;
use crate::ingest::api::SqlProcessor;
use crate::plugin::api::PluginHandler;
use crate::reporter::api::{ConsoleReporter, Reporter};
use crate::rules::api::SqlRuleVisitor;
use clap::Parser;
use std::ffi::OsString;
use std::sync::Arc;

/// Exit status for a completed, clean run
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for a failed request or run
pub const EXIT_FAILURE: i32 = 1;

/// Run the command line tool and return the process exit code
pub async fn run<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return e.exit_code();
        }
    };
    args.normalise();

    let config_path = match args.load_config().await {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}", e);
            return EXIT_FAILURE;
        }
    };

    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        args.log_file.as_deref(),
        args.use_color(),
    ) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }
    log::debug!("Final arguments: {:?}", args);

    let reporter = Arc::new(ConsoleReporter::new());
    execute(&args, config_path, reporter).await
}

/// Handle an already parsed and configured invocation
///
/// Returns 0 only when the request succeeded, any lint run completed and
/// every unit could be staged. Lint violations do not affect the result.
pub async fn execute(
    args: &Args,
    config_path: Option<std::path::PathBuf>,
    reporter: Arc<ConsoleReporter>,
) -> i32 {
    let plugins = Arc::new(PluginHandler::new());
    if let Err(e) = plugins.discover_builtins(&args.plugin_exclusions).await {
        log_error_with_context(&e, "Plugin discovery");
        return EXIT_FAILURE;
    }
    if let Err(e) = plugins.activate(&args.plugins).await {
        log_error_with_context(&e, "Plugin activation");
        reporter.report(&e.to_string());
        return EXIT_FAILURE;
    }

    let response = RequestHandler::new(args, config_path, &plugins, reporter.as_ref())
        .handle()
        .await;
    if !response.should_lint {
        return if response.success {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        };
    }

    let run_ok = lint(args, Arc::clone(&plugins), Arc::clone(&reporter)).await;
    if let Err(e) = plugins.cleanup().await {
        log_error_with_context(&e, "Plugin cleanup");
    }

    if response.success && run_ok {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}

async fn lint(args: &Args, plugins: Arc<PluginHandler>, reporter: Arc<ConsoleReporter>) -> bool {
    let visitor = match SqlRuleVisitor::from_config(&args.rules, reporter.clone()) {
        Ok(visitor) => visitor,
        Err(e) => {
            log_error_with_context(&e, "Rule configuration");
            reporter.report(&user_facing_message(&e, "Rule configuration"));
            return false;
        }
    };
    if let Err(e) = plugins.initialize_active().await {
        log_error_with_context(&e, "Plugin initialisation");
        return false;
    }

    let mut processor = SqlProcessor::new(Arc::new(visitor), plugins, reporter.clone());
    if let Some(max_parallel) = args.max_parallel {
        processor = processor.with_max_parallel(max_parallel);
    }

    let mut timer = RunTimer::new();
    timer.start();
    let result = processor.process_list(&args.inputs).await;
    let elapsed = timer.stop();

    match result {
        Ok(report) => {
            let unit_count = processor.file_count();
            if unit_count > 0 {
                reporter.report_results(elapsed, unit_count);
            }
            log::info!(
                "Linted {} unit(s): {} dispatched, {} skipped, {} failed",
                unit_count,
                report.dispatched,
                report.skipped,
                report.failures.len()
            );
            report.is_clean()
        }
        Err(e) => {
            log_error_with_context(&e, "Linting");
            reporter.report(&user_facing_message(&e, "Linting"));
            false
        }
    }
}
