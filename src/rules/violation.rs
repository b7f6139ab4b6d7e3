//! Rule violations and severities

use strum_macros::{Display, EnumIter, EnumString};

/// How a rule's findings are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RuleSeverity {
    /// Rule is not evaluated
    Off,
    Warning,
    Error,
}

/// One finding reported by the rule engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolation {
    pub unit_id: String,
    pub line: usize,
    pub column: usize,
    pub severity: RuleSeverity,
    pub rule_name: String,
    pub text: String,
}
