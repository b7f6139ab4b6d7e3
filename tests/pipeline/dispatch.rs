//! Full pipeline runs through the public API

use crate::common::{buffered_reporter, write_sql};
use sqllint::ingest::api::{IngestError, SqlProcessor};
use sqllint::plugin::api::{Plugin, PluginContext, PluginHandler, PluginInfo, PluginResult};
use sqllint::rules::api::SqlRuleVisitor;
use std::sync::{Arc, Mutex};

/// Counts lines of each unit it is activated for
#[derive(Clone, Default)]
struct LineCounter {
    seen: Arc<Mutex<Vec<(String, usize)>>>,
}

#[async_trait::async_trait]
impl Plugin for LineCounter {
    fn plugin_info(&self) -> PluginInfo {
        PluginInfo {
            name: "line-counter".to_string(),
            version: "0.1.0".to_string(),
            description: "Counts lines".to_string(),
            author: "tests".to_string(),
            api_version: sqllint::core::version::get_api_version(),
            auto_active: false,
        }
    }

    fn is_compatible(&self, system_api_version: u32) -> bool {
        sqllint::plugin::api::same_api_major(self.plugin_info().api_version, system_api_version)
    }

    async fn initialize(&mut self) -> PluginResult<()> {
        Ok(())
    }

    async fn activate(&mut self, context: PluginContext) -> PluginResult<()> {
        let lines = context.reader().read_lines().len();
        self.seen
            .lock()
            .unwrap()
            .push((context.unit_id().to_string(), lines));
        Ok(())
    }

    async fn cleanup(&mut self) -> PluginResult<()> {
        Ok(())
    }
}

async fn pipeline() -> (SqlProcessor, LineCounter, crate::common::SharedBuffer) {
    let (reporter, output) = buffered_reporter();
    let counter = LineCounter::default();
    let plugins = Arc::new(PluginHandler::new());
    plugins.register_plugin(Box::new(counter.clone())).await.unwrap();
    plugins
        .activate(&["line-counter".to_string()])
        .await
        .unwrap();
    let visitor = Arc::new(SqlRuleVisitor::new(reporter.clone()));
    (
        SqlProcessor::new(visitor, plugins, reporter).with_max_parallel(2),
        counter,
        output,
    )
}

#[tokio::test]
async fn test_two_queries_in_one_input() {
    let (processor, counter, output) = pipeline().await;

    let report = processor
        .process_sql_query("SELECT 2;|SELECT 3;")
        .await
        .unwrap();

    assert_eq!(processor.file_count(), 2);
    assert_eq!(report.dispatched, 2);
    assert_eq!(output.contents(), "");
    assert_eq!(
        *counter.seen.lock().unwrap(),
        vec![("SELECT 2;".to_string(), 1), ("SELECT 3;".to_string(), 1)]
    );
}

#[tokio::test]
async fn test_suppression_scope_for_files() {
    let dir = tempfile::tempdir().unwrap();
    let skipped = write_sql(
        &dir,
        "a_skipped.sql",
        "-- sqllint-disable\nSELECT *\nFROM t\nPRINT 'x'\n-- sqllint-enable\n",
    );
    let partial = write_sql(
        &dir,
        "b_partial.sql",
        "/* sqllint-disable select-star */\nSELECT *\nFROM t;\n/* sqllint-enable select-star */\nSELECT * FROM u;\n",
    );
    let (processor, counter, output) = pipeline().await;

    let report = processor
        .process_list(&[skipped.clone(), partial.clone()])
        .await
        .unwrap();

    assert_eq!(report.staged, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.dispatched, 1);
    assert_eq!(report.released, 2);

    let text = output.contents();
    assert!(!text.contains("a_skipped.sql"));
    assert_eq!(
        text,
        format!(
            "{}(5,8): error select-star : Expected column names in SELECT.\n",
            partial
        )
    );
    assert_eq!(*counter.seen.lock().unwrap(), vec![(partial, 5)]);
}

#[tokio::test]
async fn test_line_directive_hides_single_finding() {
    let (processor, _, output) = pipeline().await;

    processor
        .process_sql_query("PRINT 'a'; -- sqllint-disable-line print-statement\nPRINT 'b';")
        .await
        .unwrap();

    // The unit id is the two-line query itself, so count findings rather than lines
    let text = output.contents();
    assert_eq!(text.matches(": error print-statement").count(), 1);
    assert!(text.contains("(2,1): error print-statement : PRINT statement found."));
}

#[tokio::test]
async fn test_missing_file_is_linted_as_text() {
    let (processor, counter, output) = pipeline().await;

    let report = processor
        .process_list(&["no/such/file.sql"])
        .await
        .unwrap();

    assert!(report.is_clean());
    assert_eq!(report.dispatched, 1);
    assert!(output.contents().contains("no/such/file.sql(1,17): warning semicolon-termination"));
    assert_eq!(counter.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_rule_is_rejected_before_running() {
    let (reporter, _) = buffered_reporter();
    let overrides = [("no-such-rule".to_string(), "error".to_string())]
        .into_iter()
        .collect();
    assert!(SqlRuleVisitor::from_config(&overrides, reporter).is_err());
}

#[tokio::test]
async fn test_result_type_is_ingest_error() {
    let (processor, _, _) = pipeline().await;
    let result: Result<_, IngestError> = processor.process_sql_query("SELECT 1;").await;
    assert!(result.is_ok());
}
