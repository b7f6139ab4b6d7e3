//! Recording collaborators for pipeline tests

use crate::ingest::content::ContentReader;
use crate::ingest::processor::SqlProcessor;
use crate::plugin::api::PluginHandler;
use crate::plugin::tests::utils::RecordingPlugin;
use crate::reporter::api::ConsoleReporter;
use crate::reporter::console::testing::SharedBuffer;
use crate::rules::api::{RuleError, RuleResult, RuleVisitor};
use crate::suppression::api::SuppressionSet;
use std::sync::{Arc, Mutex};

/// One rule-visitor call
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub unit_id: String,
    pub content: String,
    pub directives: usize,
}

#[derive(Debug, Default)]
pub struct RecordingVisitor {
    pub visits: Mutex<Vec<Visit>>,
    fail_on: Option<String>,
}

impl RecordingVisitor {
    pub fn failing_on(unit_id: &str) -> Self {
        Self {
            visits: Mutex::new(Vec::new()),
            fail_on: Some(unit_id.to_string()),
        }
    }

    pub fn unit_ids(&self) -> Vec<String> {
        self.visits
            .lock()
            .unwrap()
            .iter()
            .map(|visit| visit.unit_id.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl RuleVisitor for RecordingVisitor {
    async fn visit_rules(
        &self,
        unit_id: &str,
        suppressions: &SuppressionSet,
        mut content: ContentReader,
    ) -> RuleResult<()> {
        self.visits.lock().unwrap().push(Visit {
            unit_id: unit_id.to_string(),
            content: content.read_text(),
            directives: suppressions.len(),
        });
        if self.fail_on.as_deref() == Some(unit_id) {
            return Err(RuleError::Evaluation {
                rule: "recording".to_string(),
                unit_id: unit_id.to_string(),
                cause: "rejected unit".to_string(),
            });
        }
        Ok(())
    }
}

/// Processor wired to a recording visitor, one recording plugin and a
/// console reporter writing into a buffer
pub struct Harness {
    pub processor: SqlProcessor,
    pub visitor: Arc<RecordingVisitor>,
    pub plugin: RecordingPlugin,
    pub output: SharedBuffer,
}

pub async fn harness_with(visitor: RecordingVisitor) -> Harness {
    let visitor = Arc::new(visitor);
    let plugin = RecordingPlugin::new("recorder");
    let plugins = Arc::new(PluginHandler::new());
    plugins.register_plugin(Box::new(plugin.clone())).await.unwrap();
    plugins.activate(&["recorder".to_string()]).await.unwrap();

    let output = SharedBuffer::default();
    let reporter = Arc::new(ConsoleReporter::with_writer(Box::new(output.clone())));
    let processor = SqlProcessor::new(visitor.clone(), plugins, reporter).with_max_parallel(4);

    Harness {
        processor,
        visitor,
        plugin,
        output,
    }
}

pub async fn harness() -> Harness {
    harness_with(RecordingVisitor::default()).await
}
