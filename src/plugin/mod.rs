//! Plugin subsystem
//!
//! Plugins are handed every unit that survives whole-unit suppression,
//! after the rule engine. Builtins register themselves via `inventory`.

// Internal modules - all access should go through api module
pub(crate) mod builtin;
pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod handler;
pub(crate) mod registry;
pub(crate) mod traits;
pub(crate) mod types;

pub mod api;

#[cfg(test)]
pub(crate) mod tests;
