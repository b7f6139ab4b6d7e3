//! Whole-Unit Suppression Resolver
//!
//! A unit is skipped entirely when a range directive covers it from its
//! first line to its last.

use crate::ingest::content::ContentHandle;
use crate::suppression::types::SuppressionSet;

/// True when some range directive spans the whole unit
///
/// The line count comes from an independent read of the handle, so readers
/// already handed out are not affected. The rule the directive names is not
/// considered.
pub fn is_wholly_suppressed(handle: &ContentHandle, suppressions: &SuppressionSet) -> bool {
    if suppressions.is_empty() {
        return false;
    }

    let end_lines: Vec<usize> = suppressions.range_ends_from(1).collect();
    if end_lines.is_empty() {
        return false;
    }

    let line_count = handle.line_count();
    let covered = end_lines.contains(&line_count);
    if covered {
        log::debug!(
            "Unit '{}' is suppressed on all {} line(s)",
            handle.unit_id(),
            line_count
        );
    }
    covered
}
