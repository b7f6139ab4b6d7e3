//! Per-unit context handed to active plugins

use crate::ingest::content::ContentReader;
use crate::suppression::api::SuppressionSet;
use std::sync::Arc;

/// What a plugin sees of one dispatched unit
///
/// Cloning is cheap; the content bytes are shared. Every call to
/// [`PluginContext::reader`] starts at the first byte.
#[derive(Debug, Clone)]
pub struct PluginContext {
    unit_id: String,
    suppressions: SuppressionSet,
    content: Arc<[u8]>,
}

impl PluginContext {
    pub fn new(unit_id: impl Into<String>, suppressions: SuppressionSet, content: Arc<[u8]>) -> Self {
        Self {
            unit_id: unit_id.into(),
            suppressions,
            content,
        }
    }

    pub fn unit_id(&self) -> &str {
        &self.unit_id
    }

    pub fn suppressions(&self) -> &SuppressionSet {
        &self.suppressions
    }

    pub fn reader(&self) -> ContentReader {
        ContentReader::new(Arc::clone(&self.content))
    }
}
