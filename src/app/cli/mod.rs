//! Command line front end: arguments, configuration file, request handling

pub mod args;
pub mod config;
pub mod handler;

#[cfg(test)]
mod tests;
