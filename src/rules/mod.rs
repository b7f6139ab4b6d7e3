//! Rule evaluation for dispatched units

pub(crate) mod builtin;
pub(crate) mod error;
pub(crate) mod traits;
pub(crate) mod violation;
pub(crate) mod visitor;

pub mod api;
