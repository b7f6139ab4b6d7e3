//! Plugin error types

use crate::core::error_handling::ContextualError;
use std::fmt;

pub type PluginResult<T> = std::result::Result<T, PluginError>;

/// Errors raised by the plugin subsystem
#[derive(Debug, Clone, PartialEq)]
pub enum PluginError {
    /// Plugin not found in registry
    PluginNotFound { plugin_name: String },

    /// Plugin API version incompatible with system
    VersionIncompatible { message: String },

    /// Plugin failed to load or initialize
    LoadError { plugin_name: String, cause: String },

    /// Plugin failed while handling a unit or during its lifecycle
    ExecutionError {
        plugin_name: String,
        operation: String,
        cause: String,
    },

    Generic { message: String },
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginError::PluginNotFound { plugin_name } => {
                write!(f, "Plugin not found: {}", plugin_name)
            }
            PluginError::VersionIncompatible { message } => {
                write!(f, "Version incompatible: {}", message)
            }
            PluginError::LoadError { plugin_name, cause } => {
                write!(f, "Failed to load plugin '{}': {}", plugin_name, cause)
            }
            PluginError::ExecutionError {
                plugin_name,
                operation,
                cause,
            } => {
                write!(
                    f,
                    "Plugin '{}' failed during '{}': {}",
                    plugin_name, operation, cause
                )
            }
            PluginError::Generic { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for PluginError {}

impl ContextualError for PluginError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, PluginError::VersionIncompatible { .. })
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            PluginError::VersionIncompatible { message } => Some(message),
            _ => None,
        }
    }
}
