//! Pipeline integration test modules

pub mod dispatch;
pub mod properties;
