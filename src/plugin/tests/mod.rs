//! Plugin subsystem tests

pub(crate) mod utils;
