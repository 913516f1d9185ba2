use std::sync::{Mutex, MutexGuard};

/// Locks shared pipeline state. A panic while a page or map was locked leaves
/// it in a usable state, so poisoning is ignored.
pub(crate) fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
