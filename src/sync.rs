// SPDX-License-Identifier: MPL-2.0
//! Mutex access shared by the engines and the diagnostics log.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks `mutex`, recovering the guard if a previous holder panicked.
///
/// Every mutation behind these mutexes replaces whole values, so a poisoned
/// lock never exposes a half-written entry list.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
