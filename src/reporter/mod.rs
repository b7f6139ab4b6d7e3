//! Reporting of violations, processing failures and the run summary

pub(crate) mod console;
pub(crate) mod traits;

pub mod api;
