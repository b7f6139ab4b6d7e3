//! Built-in rule visitor

use crate::ingest::content::ContentReader;
use crate::reporter::api::Reporter;
use crate::rules::builtin::{builtin_rules, code_only};
use crate::rules::error::{RuleError, RuleResult};
use crate::rules::traits::{Rule, RuleVisitor};
use crate::rules::violation::{RuleSeverity, RuleViolation};
use crate::suppression::api::SuppressionSet;
use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

/// Runs the built-in rules against each unit and forwards the findings
pub struct SqlRuleVisitor {
    rules: Vec<(Box<dyn Rule>, RuleSeverity)>,
    reporter: Arc<dyn Reporter>,
}

impl SqlRuleVisitor {
    /// Every built-in rule at its default severity
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        let rules = builtin_rules()
            .into_iter()
            .map(|rule| {
                let severity = rule.default_severity();
                (rule, severity)
            })
            .collect();
        Self { rules, reporter }
    }

    /// Apply `rule name -> severity` overrides from the configuration
    ///
    /// Unknown rule names and unparseable severities are rejected.
    pub fn from_config(
        overrides: &BTreeMap<String, String>,
        reporter: Arc<dyn Reporter>,
    ) -> RuleResult<Self> {
        let mut visitor = Self::new(reporter);
        for (name, value) in overrides {
            let severity = RuleSeverity::from_str(value.trim())
                .map_err(|_| RuleError::invalid_severity(name, value))?;
            let entry = visitor
                .rules
                .iter_mut()
                .find(|(rule, _)| rule.name() == name.as_str())
                .ok_or_else(|| RuleError::unknown_rule(name))?;
            log::debug!("Rule '{}' set to {}", name, severity);
            entry.1 = severity;
        }
        Ok(visitor)
    }

    /// Effective severity of a rule, if it exists
    pub fn severity_of(&self, rule_name: &str) -> Option<RuleSeverity> {
        self.rules
            .iter()
            .find(|(rule, _)| rule.name() == rule_name)
            .map(|(_, severity)| *severity)
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|(rule, _)| rule.name()).collect()
    }
}

#[async_trait::async_trait]
impl RuleVisitor for SqlRuleVisitor {
    async fn visit_rules(
        &self,
        unit_id: &str,
        suppressions: &SuppressionSet,
        mut content: ContentReader,
    ) -> RuleResult<()> {
        let lines = code_only(&content.read_lines());

        for (rule, severity) in &self.rules {
            if *severity == RuleSeverity::Off {
                continue;
            }
            for hit in rule.check(&lines) {
                if suppressions.suppresses(rule.name(), hit.line) {
                    log::trace!("{}: {} suppressed on line {}", unit_id, rule.name(), hit.line);
                    continue;
                }
                self.reporter.report_violation(&RuleViolation {
                    unit_id: unit_id.to_string(),
                    line: hit.line,
                    column: hit.column,
                    severity: *severity,
                    rule_name: rule.name().to_string(),
                    text: hit.message,
                });
            }
        }
        Ok(())
    }
}
