//! Run timing with an injectable clock

use std::time::{Duration, Instant};

/// Source of monotonic time
pub trait TimeProvider: Send + Sync {
    fn now(&self) -> Instant;
}

/// Production clock
#[derive(Default, Clone)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Measures how long a lint run took, for the final summary
pub struct RunTimer<P: TimeProvider = SystemTimeProvider> {
    provider: P,
    started: Option<Instant>,
}

impl RunTimer<SystemTimeProvider> {
    pub fn new() -> Self {
        Self::with_provider(SystemTimeProvider)
    }
}

impl Default for RunTimer<SystemTimeProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TimeProvider> RunTimer<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            started: None,
        }
    }

    pub fn start(&mut self) {
        self.started = Some(self.provider.now());
    }

    /// Elapsed time since `start`; zero if the timer was never started
    pub fn stop(&self) -> Duration {
        match self.started {
            Some(started) => self.provider.now().saturating_duration_since(started),
            None => Duration::ZERO,
        }
    }
}
