//! Built-in plugins

pub mod api;
pub mod dump;
