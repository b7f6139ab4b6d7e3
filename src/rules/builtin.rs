//! Rules shipped with the built-in rule visitor

use crate::rules::traits::{Rule, RuleHit};
use crate::rules::violation::RuleSeverity;
use crate::suppression::api::lex_lines;
use regex::Regex;
use std::sync::LazyLock;

static SELECT_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bSELECT\s+(?:DISTINCT\s+|TOP\s+\(?\d+\)?\s+)?(\*)")
        .expect("select-star pattern is valid")
});

static PRINT_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(PRINT)\b").expect("print pattern is valid"));

/// Every built-in rule, in evaluation order
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(SelectStarRule),
        Box::new(SemicolonTerminationRule),
        Box::new(PrintStatementRule),
    ]
}

/// Blank out comments and string literals, keeping every column in place
pub fn code_only(lines: &[String]) -> Vec<String> {
    lex_lines(lines).into_iter().map(|line| line.code).collect()
}

/// `SELECT *` instead of an explicit column list
pub struct SelectStarRule;

impl Rule for SelectStarRule {
    fn name(&self) -> &'static str {
        "select-star"
    }

    fn default_severity(&self) -> RuleSeverity {
        RuleSeverity::Error
    }

    fn check(&self, lines: &[String]) -> Vec<RuleHit> {
        lines
            .iter()
            .enumerate()
            .flat_map(|(index, line)| {
                SELECT_STAR.captures_iter(line).filter_map(move |captures| {
                    captures.get(1).map(|star| RuleHit {
                        line: index + 1,
                        column: star.start() + 1,
                        message: "Expected column names in SELECT".to_string(),
                    })
                })
            })
            .collect()
    }
}

/// Last statement of the unit is not terminated with `;`
pub struct SemicolonTerminationRule;

impl Rule for SemicolonTerminationRule {
    fn name(&self) -> &'static str {
        "semicolon-termination"
    }

    fn default_severity(&self) -> RuleSeverity {
        RuleSeverity::Warning
    }

    fn check(&self, lines: &[String]) -> Vec<RuleHit> {
        let last = lines
            .iter()
            .enumerate()
            .rev()
            .find(|(_, line)| !line.trim().is_empty());

        match last {
            Some((index, line)) if !line.trim_end().ends_with(';') => vec![RuleHit {
                line: index + 1,
                column: line.trim_end().chars().count() + 1,
                message: "Expected semicolon at end of statement".to_string(),
            }],
            _ => Vec::new(),
        }
    }
}

/// Use of `PRINT`
pub struct PrintStatementRule;

impl Rule for PrintStatementRule {
    fn name(&self) -> &'static str {
        "print-statement"
    }

    fn default_severity(&self) -> RuleSeverity {
        RuleSeverity::Error
    }

    fn check(&self, lines: &[String]) -> Vec<RuleHit> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                PRINT_STATEMENT.captures(line).and_then(|captures| {
                    captures.get(1).map(|keyword| RuleHit {
                        line: index + 1,
                        column: keyword.start() + 1,
                        message: "PRINT statement found".to_string(),
                    })
                })
            })
            .collect()
    }
}
