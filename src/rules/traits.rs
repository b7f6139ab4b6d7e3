//! Rule engine contracts

use crate::ingest::content::ContentReader;
use crate::rules::error::RuleResult;
use crate::rules::violation::RuleSeverity;
use crate::suppression::api::SuppressionSet;

/// Evaluates every enabled rule against one unit
///
/// Called once per dispatched unit. Violations are sent to the reporter by
/// the visitor itself; only failures of the evaluation come back as errors.
#[async_trait::async_trait]
pub trait RuleVisitor: Send + Sync {
    async fn visit_rules(
        &self,
        unit_id: &str,
        suppressions: &SuppressionSet,
        content: ContentReader,
    ) -> RuleResult<()>;
}

/// Location and text of a single rule finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// A line-oriented lint rule
///
/// `lines` holds the unit's code with comments and string literals blanked
/// out, so column positions match the original text.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    fn default_severity(&self) -> RuleSeverity;

    fn check(&self, lines: &[String]) -> Vec<RuleHit>;
}
