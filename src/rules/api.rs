//! Public API for the rule engine

pub use crate::rules::builtin::{builtin_rules, code_only};
pub use crate::rules::error::{RuleError, RuleResult};
pub use crate::rules::traits::{Rule, RuleHit, RuleVisitor};
pub use crate::rules::violation::{RuleSeverity, RuleViolation};
pub use crate::rules::visitor::SqlRuleVisitor;
