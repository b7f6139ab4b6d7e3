//! Query ingestion: splitting, parallel staging and sequential dispatch

pub(crate) mod content;
pub(crate) mod counter;
pub(crate) mod error;
pub(crate) mod processor;
pub(crate) mod splitter;
pub(crate) mod stager;
pub(crate) mod table;

pub mod api;

#[cfg(test)]
mod tests;
