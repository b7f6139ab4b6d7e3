//! Generic error handling utilities
//!
//! Lets each subsystem keep its own error enum while sharing one policy for
//! how a fatal error is presented to the user.

/// Errors that know whether their message is meant for the user
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; otherwise it returns `None`.
pub trait ContextualError: std::error::Error {
    /// True for errors the user can fix (bad arguments, bad config values)
    fn is_user_actionable(&self) -> bool;

    /// The message to show the user for actionable errors
    fn user_message(&self) -> Option<&str>;
}

/// Log a fatal error with a level of detail that depends on who can fix it
///
/// User-actionable errors print their own message; system errors print only
/// the operation context. The full error is always available at debug level.
///
/// ```rust,no_run
/// # use sqllint::core::error_handling::log_error_with_context;
/// # use sqllint::core::validation::ValidationError;
/// let err = ValidationError::new("max-parallel must be greater than 0");
/// log_error_with_context(&err, "Configuration loading");
/// // FATAL: max-parallel must be greater than 0
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => log::error!("FATAL: {}", user_msg),
        _ => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}

/// Text shown to the user for a fatal error, following the same policy as
/// [`log_error_with_context`]
pub fn user_facing_message<E: ContextualError>(error: &E, operation_context: &str) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => user_msg.to_string(),
        _ => format!("{} failed", operation_context),
    }
}
