//! Synchronisation utilities for robust lock handling
//!
//! Converts lock poison errors into application-specific errors so a panic in
//! one worker surfaces as a reportable error in the others instead of a
//! second opaque panic.

use std::sync::LockResult;

/// Map a poisoned lock result into an application-specific error.
///
/// Works for `Mutex::lock` and `Condvar::wait` alike, since both return the
/// same `LockResult` shape.
///
/// # Arguments
/// * `result` - The result from a lock or wait operation
/// * `error_constructor` - Function to create the appropriate error type
///
/// # Returns
/// The guard on success, or an application error if the lock was poisoned
pub fn handle_lock_poison<T, E>(
    result: LockResult<T>,
    error_constructor: impl FnOnce(String) -> E,
) -> Result<T, E> {
    result.map_err(|poison_err| {
        error_constructor(format!(
            "Internal synchronisation error (lock poisoned). A worker panicked while holding this lock. PoisonError: {:?}",
            poison_err
        ))
    })
}
