//! sqllint: concurrent ingestion, suppression resolution and dispatch of SQL
//! units to a rule engine and plugins.

pub mod app;
pub mod core;
pub mod ingest;
pub mod plugin;
pub mod reporter;
pub mod rules;
pub mod suppression;
