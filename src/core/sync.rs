//! Lock poisoning helpers
//!
//! A poisoned lock means another thread panicked while holding it. These
//! helpers turn that into the caller's own error type instead of a panic.

use std::sync::LockResult;

/// Map a poisoned `Mutex::lock()` result into an application error
///
/// ```
/// use std::sync::Mutex;
/// use sqllint::core::sync::handle_mutex_poison;
/// use sqllint::ingest::api::IngestError;
///
/// let table = Mutex::new(Vec::<String>::new());
/// let guard = handle_mutex_poison(table.lock(), |message| IngestError::Synchronisation { message })
///     .unwrap();
/// assert!(guard.is_empty());
/// ```
pub fn handle_mutex_poison<T, E>(
    result: LockResult<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<T, E> {
    result.map_err(|poison_err| {
        error_constructor(format!(
            "Internal synchronisation error (mutex poisoned). This indicates a panic occurred while holding a lock. PoisonError: {:?}",
            poison_err
        ))
    })
}
