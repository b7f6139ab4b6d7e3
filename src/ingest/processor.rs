//! Dispatch Coordinator
//!
//! One run goes through four phases:
//!
//! 1. split the raw inputs into units on `|`
//! 2. stage every unit in parallel (bounded by `max_parallel`)
//! 3. after every staging task has joined, drain the staging table in unit
//!    order: scan suppressions, skip wholly suppressed units, otherwise hand
//!    the unit to the rule visitor and then to the active plugins
//! 4. release every handle exactly once and return a [`RunReport`]

use crate::ingest::content::ContentHandle;
use crate::ingest::counter::RunCounter;
use crate::ingest::error::{DispatchError, IngestError, IngestResult, StageError, UnitFailure};
use crate::ingest::splitter::{split_batch, split_units};
use crate::ingest::stager::ContentStager;
use crate::ingest::table::StagingTable;
use crate::plugin::api::{PluginContext, PluginHandler};
use crate::reporter::api::Reporter;
use crate::rules::api::RuleVisitor;
use crate::suppression::api::{is_wholly_suppressed, scan, SuppressionSet};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Outcome of one completed run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Units staged, duplicates included
    pub staged: usize,
    /// Units handed to the rule visitor and plugins
    pub dispatched: usize,
    /// Units skipped because every line was suppressed
    pub skipped: usize,
    /// Handles released during the drain
    pub released: usize,
    /// Units that could not be staged
    pub failures: Vec<UnitFailure>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct SqlProcessor {
    rule_visitor: Arc<dyn RuleVisitor>,
    plugins: Arc<PluginHandler>,
    reporter: Arc<dyn Reporter>,
    counter: Arc<RunCounter>,
    max_parallel: usize,
}

impl SqlProcessor {
    pub fn new(
        rule_visitor: Arc<dyn RuleVisitor>,
        plugins: Arc<PluginHandler>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        let max_parallel = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        Self {
            rule_visitor,
            plugins,
            reporter,
            counter: Arc::new(RunCounter::new()),
            max_parallel,
        }
    }

    /// Upper bound on concurrently running staging tasks (at least 1)
    pub fn with_max_parallel(mut self, max_parallel: usize) -> Self {
        self.max_parallel = max_parallel.max(1);
        self
    }

    pub fn max_parallel(&self) -> usize {
        self.max_parallel
    }

    /// Units staged by the most recent run
    pub fn file_count(&self) -> usize {
        self.counter.get()
    }

    /// Lint every raw input of a batch
    pub async fn process_list<S: AsRef<str>>(&self, inputs: &[S]) -> IngestResult<RunReport> {
        self.run(split_batch(inputs)).await
    }

    /// Lint a single raw input
    pub async fn process_sql_query(&self, raw: &str) -> IngestResult<RunReport> {
        self.run(split_units(raw)).await
    }

    async fn run(&self, units: Vec<String>) -> IngestResult<RunReport> {
        self.counter.reset();
        log::debug!("Staging {} unit(s), max {} in parallel", units.len(), self.max_parallel);

        let table = Arc::new(StagingTable::new());
        let failures = self.stage_all(units, &table).await;
        for failure in &failures {
            log::error!("Could not stage '{}': {}", failure.unit_id, failure.error);
            self.reporter.report_failure(&failure.unit_id, &failure.error);
        }

        let mut report = RunReport {
            staged: self.counter.get(),
            failures,
            ..RunReport::default()
        };
        self.drain(&table, &mut report).await?;

        log::debug!(
            "Run complete: {} staged, {} dispatched, {} skipped, {} failed",
            report.staged,
            report.dispatched,
            report.skipped,
            report.failures.len()
        );
        Ok(report)
    }

    /// Stage all units concurrently and wait for every task to finish
    async fn stage_all(&self, units: Vec<String>, table: &Arc<StagingTable>) -> Vec<UnitFailure> {
        let stager = ContentStager::new(Arc::clone(table), Arc::clone(&self.counter));
        let semaphore = Arc::new(Semaphore::new(self.max_parallel));
        let mut pending: BTreeMap<String, usize> = BTreeMap::new();
        let mut tasks = JoinSet::new();

        for unit in units {
            *pending.entry(unit.clone()).or_default() += 1;
            let stager = stager.clone();
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                let result = match semaphore.acquire_owned().await {
                    Ok(_permit) => stager.stage(&unit).await,
                    Err(e) => Err(StageError::TaskFailed {
                        unit_id: unit.clone(),
                        message: e.to_string(),
                    }),
                };
                (unit, result)
            });
        }

        let mut failures = Vec::new();
        let mut join_errors = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((unit_id, result)) => {
                    if let Some(count) = pending.get_mut(&unit_id) {
                        *count -= 1;
                    }
                    if let Err(error) = result {
                        failures.push(UnitFailure { unit_id, error });
                    }
                }
                Err(e) => join_errors.push(e.to_string()),
            }
        }

        // A task that panicked never returned its unit; whatever is still pending failed
        let mut join_errors = join_errors.into_iter();
        for (unit_id, count) in pending {
            for _ in 0..count {
                let message = join_errors
                    .next()
                    .unwrap_or_else(|| "task did not complete".to_string());
                failures.push(UnitFailure {
                    unit_id: unit_id.clone(),
                    error: StageError::TaskFailed {
                        unit_id: unit_id.clone(),
                        message,
                    },
                });
            }
        }
        failures
    }

    /// Sequential drain; every handle taken from the table is released
    async fn drain(&self, table: &StagingTable, report: &mut RunReport) -> IngestResult<()> {
        let mut handles = table.take_all()?.into_iter();

        while let Some(handle) = handles.next() {
            let suppressions = scan(&mut handle.reader());

            if is_wholly_suppressed(&handle, &suppressions) {
                log::info!("Skipping '{}': every line is suppressed", handle.unit_id());
                report.skipped += 1;
            } else if let Err(source) = self.dispatch(&handle, suppressions).await {
                let unit_id = handle.unit_id().to_string();
                handle.close();
                report.released += 1;
                for remaining in handles {
                    remaining.close();
                    report.released += 1;
                }
                log::error!("Dispatch of '{}' failed: {}", unit_id, source);
                return Err(IngestError::Dispatch { unit_id, source });
            } else {
                report.dispatched += 1;
            }

            handle.close();
            report.released += 1;
        }
        Ok(())
    }

    async fn dispatch(
        &self,
        handle: &ContentHandle,
        suppressions: SuppressionSet,
    ) -> Result<(), DispatchError> {
        log::debug!(
            "Dispatching '{}' ({} suppression directives)",
            handle.unit_id(),
            suppressions.len()
        );
        self.rule_visitor
            .visit_rules(handle.unit_id(), &suppressions, handle.reader())
            .await?;
        self.plugins
            .activate_plugins(PluginContext::new(
                handle.unit_id(),
                suppressions,
                handle.shared_bytes(),
            ))
            .await?;
        Ok(())
    }
}
