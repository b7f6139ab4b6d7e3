//! Run Counter: units staged during the current run

use std::sync::atomic::{AtomicUsize, Ordering};

/// Thread-safe count of staged units
///
/// Written by staging workers, read after the run has joined.
#[derive(Debug, Default)]
pub struct RunCounter {
    count: AtomicUsize,
}

impl RunCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successfully staged unit
    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    /// Start a new run
    pub fn reset(&self) {
        self.count.store(0, Ordering::Release);
    }
}
