//! Console reporter

use crate::core::sync::handle_mutex_poison;
use crate::reporter::traits::Reporter;
use crate::rules::violation::{RuleSeverity, RuleViolation};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// `{unit}({line},{column}): {severity} {rule} : {message}.`
pub fn format_violation(violation: &RuleViolation) -> String {
    format!(
        "{}({},{}): {} {} : {}.",
        violation.unit_id,
        violation.line,
        violation.column,
        violation.severity,
        violation.rule_name,
        violation.text
    )
}

/// Writes violations and the run summary to a text stream (stdout by default)
///
/// Keeps per-severity totals for the summary.
pub struct ConsoleReporter {
    out: Mutex<Box<dyn Write + Send>>,
    warning_count: AtomicUsize,
    error_count: AtomicUsize,
    failure_count: AtomicUsize,
}

impl std::fmt::Debug for ConsoleReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleReporter")
            .field("warning_count", &self.warning_count())
            .field("error_count", &self.error_count())
            .field("failure_count", &self.failure_count())
            .finish()
    }
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            warning_count: AtomicUsize::new(0),
            error_count: AtomicUsize::new(0),
            failure_count: AtomicUsize::new(0),
        }
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count.load(Ordering::Relaxed)
    }

    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    pub fn failure_count(&self) -> usize {
        self.failure_count.load(Ordering::Relaxed)
    }

    fn write_line(&self, line: &str) {
        match handle_mutex_poison(self.out.lock(), |message| message) {
            Ok(mut out) => {
                if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
                    log::warn!("Could not write report output: {}", e);
                }
            }
            Err(message) => log::error!("{}", message),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, message: &str) {
        self.write_line(message);
    }

    fn report_violation(&self, violation: &RuleViolation) {
        match violation.severity {
            RuleSeverity::Warning => self.warning_count.fetch_add(1, Ordering::Relaxed),
            RuleSeverity::Error => self.error_count.fetch_add(1, Ordering::Relaxed),
            RuleSeverity::Off => return,
        };
        self.write_line(&format_violation(violation));
    }

    fn report_failure(&self, unit_id: &str, error: &dyn std::error::Error) {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
        self.write_line(&format!("{}: processing failed: {}", unit_id, error));
    }

    fn report_results(&self, elapsed: Duration, unit_count: usize) {
        let mut summary = format!(
            "\nLinted {} SQL Sections in {} seconds\n\n{} Errors.\n{} Warnings",
            unit_count,
            elapsed.as_secs_f64(),
            self.error_count(),
            self.warning_count()
        );
        let failures = self.failure_count();
        if failures > 0 {
            summary.push_str(&format!("\n{} Failures", failures));
        }
        self.write_line(&summary);
    }
}
