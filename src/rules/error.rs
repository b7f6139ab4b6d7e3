//! Rule engine error types

use crate::core::error_handling::ContextualError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuleError {
    #[error("Unknown rule '{name}' in configuration")]
    UnknownRule { name: String, message: String },

    #[error("Invalid severity '{value}' for rule '{rule}' (expected off, warning or error)")]
    InvalidSeverity {
        rule: String,
        value: String,
        message: String,
    },

    #[error("Rule '{rule}' failed on '{unit_id}': {cause}")]
    Evaluation {
        rule: String,
        unit_id: String,
        cause: String,
    },
}

impl RuleError {
    pub fn unknown_rule(name: &str) -> Self {
        RuleError::UnknownRule {
            name: name.to_string(),
            message: format!("Unknown rule '{}' in configuration", name),
        }
    }

    pub fn invalid_severity(rule: &str, value: &str) -> Self {
        RuleError::InvalidSeverity {
            rule: rule.to_string(),
            value: value.to_string(),
            message: format!(
                "Invalid severity '{}' for rule '{}' (expected off, warning or error)",
                value, rule
            ),
        }
    }
}

impl ContextualError for RuleError {
    fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            RuleError::UnknownRule { .. } | RuleError::InvalidSeverity { .. }
        )
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            RuleError::UnknownRule { message, .. } | RuleError::InvalidSeverity { message, .. } => {
                Some(message)
            }
            RuleError::Evaluation { .. } => None,
        }
    }
}

pub type RuleResult<T> = Result<T, RuleError>;
