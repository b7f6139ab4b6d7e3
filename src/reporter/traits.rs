//! Reporter contract

use crate::rules::violation::RuleViolation;
use std::time::Duration;

/// Receives everything the user gets to see about a lint run
pub trait Reporter: Send + Sync {
    /// Free-form message
    fn report(&self, message: &str);

    /// One rule finding
    fn report_violation(&self, violation: &RuleViolation);

    /// A unit that could not be processed; not a lint finding
    fn report_failure(&self, unit_id: &str, error: &dyn std::error::Error);

    /// Final summary once the run has completed
    fn report_results(&self, elapsed: Duration, unit_count: usize);
}
