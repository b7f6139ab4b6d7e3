//! Validation helpers for user-supplied values

use crate::core::error_handling::ContextualError;

/// A user-supplied value was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

/// Validate positive integer value
pub fn validate_positive_int(value: &str) -> Result<usize, ValidationError> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err(ValidationError::new("Value must be greater than 0")),
        Ok(n) => Ok(n),
        Err(_) => Err(ValidationError::new(&format!(
            "'{}' is not a valid positive integer",
            value
        ))),
    }
}

/// Split comma separated values, trimming blanks and dropping duplicates
///
/// Order of first appearance is kept.
pub fn parse_comma_separated(values: &[String]) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for item in values.iter().flat_map(|value| value.split(',')) {
        let item = item.trim();
        if !item.is_empty() && !result.iter().any(|existing| existing == item) {
            result.push(item.to_string());
        }
    }
    result
}
