//! Ingestion error types

use crate::core::error_handling::ContextualError;
use crate::plugin::api::PluginError;
use crate::rules::api::RuleError;
use std::path::PathBuf;

/// A unit could not be turned into content
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not register staged content: {message}")]
    Registration { message: String },

    #[error("staging task for '{unit_id}' did not complete: {message}")]
    TaskFailed { unit_id: String, message: String },
}

/// Downstream consumer that rejected a unit
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("rule evaluation failed")]
    Rules(#[from] RuleError),

    #[error("plugin activation failed")]
    Plugins(#[from] PluginError),
}

/// Errors that end a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("dispatch of '{unit_id}' failed: {source}")]
    Dispatch {
        unit_id: String,
        #[source]
        source: DispatchError,
    },

    #[error("{message}")]
    Synchronisation { message: String },
}

impl ContextualError for IngestError {
    fn is_user_actionable(&self) -> bool {
        false
    }

    fn user_message(&self) -> Option<&str> {
        None
    }
}

/// A unit that failed staging, kept for reporting
#[derive(Debug)]
pub struct UnitFailure {
    pub unit_id: String,
    pub error: StageError,
}

pub type IngestResult<T> = Result<T, IngestError>;
pub type StageResult<T> = Result<T, StageError>;
