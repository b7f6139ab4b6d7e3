//! Suppression Scanner: finds inline suppression directives
//!
//! # Directive syntax
//!
//! Directives live in SQL comments (`/* … */` or `-- …`) and are matched
//! case-insensitively:
//!
//! - `sqllint-disable [rule, …]` opens a range at the current line
//! - `sqllint-enable [rule, …]` closes the matching open ranges at the current line
//! - `sqllint-disable-line [rule, …]` suppresses the current line only
//!
//! Leaving out the rule list (or writing `*`) means every rule. A range that
//! is never closed ends at the last line. An enable without a matching open
//! range is ignored.
//!
//! ```sql
//! /* sqllint-disable select-star */
//! SELECT * FROM t;
//! /* sqllint-enable select-star */
//! PRINT 'x' -- sqllint-disable-line print-statement
//! ```

use crate::ingest::content::ContentReader;
use crate::suppression::lexer::lex_lines;
use crate::suppression::types::{RuleSelector, SuppressionDirective, SuppressionSet};
use regex::Regex;
use std::sync::LazyLock;

// Matched against a comment body, never against raw line text
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*sqllint-(disable-line|disable|enable)\b(.*)$")
        .expect("directive pattern is valid")
});

/// Kind of directive keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectiveKind {
    Disable,
    Enable,
    DisableLine,
}

impl DirectiveKind {
    fn parse(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "disable" => Some(DirectiveKind::Disable),
            "enable" => Some(DirectiveKind::Enable),
            "disable-line" => Some(DirectiveKind::DisableLine),
            _ => None,
        }
    }
}

/// Parse the rule list following a directive keyword
///
/// An empty list or a `*` anywhere in it selects every rule.
fn parse_rule_selectors(rest: &str) -> Vec<RuleSelector> {
    let names: Vec<&str> = rest
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() || names.contains(&"*") {
        vec![RuleSelector::All]
    } else {
        names.into_iter().map(RuleSelector::named).collect()
    }
}

/// Scan a unit's content for suppression directives
///
/// Reads `reader` to its end; callers that need the content again must use
/// a fresh reader or rewind this one.
pub fn scan(reader: &mut ContentReader) -> SuppressionSet {
    scan_lines(&reader.read_lines())
}

/// Scan already split lines (line 1 is `lines[0]`)
pub fn scan_lines<S: AsRef<str>>(lines: &[S]) -> SuppressionSet {
    let mut directives = Vec::new();
    let mut open: Vec<(RuleSelector, usize)> = Vec::new();

    for (index, line) in lex_lines(lines).into_iter().enumerate() {
        let line_number = index + 1;

        for captures in line.comments.iter().filter_map(|body| DIRECTIVE.captures(body)) {
            let Some(kind) = DirectiveKind::parse(&captures[1]) else {
                continue;
            };
            let selectors = parse_rule_selectors(&captures[2]);

            match kind {
                DirectiveKind::DisableLine => {
                    directives.extend(
                        selectors
                            .into_iter()
                            .map(|rule| SuppressionDirective::line(rule, line_number)),
                    );
                }
                DirectiveKind::Disable => {
                    open.extend(selectors.into_iter().map(|rule| (rule, line_number)));
                }
                DirectiveKind::Enable => {
                    let close_all = selectors.contains(&RuleSelector::All);
                    let before = open.len();
                    let mut still_open = Vec::with_capacity(open.len());

                    for (rule, start_line) in open.drain(..) {
                        if close_all || selectors.contains(&rule) {
                            directives.extend(SuppressionDirective::range(
                                rule,
                                start_line,
                                line_number,
                            ));
                        } else {
                            still_open.push((rule, start_line));
                        }
                    }
                    if still_open.len() == before {
                        log::debug!(
                            "Ignoring enable directive on line {} with no matching disable",
                            line_number
                        );
                    }
                    open = still_open;
                }
            }
        }
    }

    let last_line = lines.len();
    for (rule, start_line) in open {
        directives.extend(SuppressionDirective::range(rule, start_line, last_line));
    }

    SuppressionSet::new(directives)
}
