//! Public API for reporting

pub use crate::reporter::console::{format_violation, ConsoleReporter};
pub use crate::reporter::traits::Reporter;
