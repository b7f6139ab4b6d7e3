//! Pipeline tests for the ingest subsystem

mod helpers;
