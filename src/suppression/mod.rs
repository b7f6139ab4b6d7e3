//! Inline rule suppression
//!
//! Scans unit content for suppression directives and decides whether a unit
//! is suppressed as a whole.

pub(crate) mod lexer;
pub(crate) mod resolver;
pub(crate) mod scanner;
pub(crate) mod types;

pub mod api;
