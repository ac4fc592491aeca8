// SPDX-License-Identifier: MPL-2.0
//! Timer handles keyed by entry id.
//!
//! An entry owns at most one timer at a time: an expiry timer while visible,
//! or a cleanup fallback while hidden. Arming a new timer for an id aborts
//! the previous one, and every settlement path cancels before settling, so a
//! stale timer can never fire on an id that has been re-used.

use crate::domain::overlay::EntryId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::AbortHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerKind {
    Expiry,
    Cleanup,
}

#[derive(Debug)]
struct Armed {
    seq: u64,
    kind: TimerKind,
    abort: AbortHandle,
}

#[derive(Debug, Default)]
pub(crate) struct TimerRegistry {
    armed: HashMap<EntryId, Armed>,
}

impl TimerRegistry {
    /// Runs `on_fire` after `after` on the current tokio runtime.
    ///
    /// Returns `false` when there is no runtime to run the timer on; the
    /// caller then treats the entry as persistent.
    pub(crate) fn arm<F>(
        &mut self,
        id: &EntryId,
        seq: u64,
        kind: TimerKind,
        after: Duration,
        on_fire: F,
    ) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel(id);
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(%id, ?kind, "no tokio runtime, timer not armed");
            return false;
        };
        let task = runtime.spawn(async move {
            tokio::time::sleep(after).await;
            on_fire();
        });
        self.armed.insert(
            id.clone(),
            Armed {
                seq,
                kind,
                abort: task.abort_handle(),
            },
        );
        true
    }

    /// Aborts the timer armed for `id`, if any.
    pub(crate) fn cancel(&mut self, id: &EntryId) -> bool {
        match self.armed.remove(id) {
            Some(armed) => {
                armed.abort.abort();
                true
            }
            None => false,
        }
    }

    /// Forgets a timer that has just fired, unless a newer one replaced it.
    pub(crate) fn forget_fired(&mut self, id: &EntryId, seq: u64, kind: TimerKind) {
        if self
            .armed
            .get(id)
            .is_some_and(|armed| armed.seq == seq && armed.kind == kind)
        {
            self.armed.remove(id);
        }
    }

    pub(crate) fn armed_kind(&self, id: &EntryId) -> Option<TimerKind> {
        self.armed.get(id).map(|armed| armed.kind)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.armed.len()
    }
}

impl Drop for TimerRegistry {
    fn drop(&mut self) {
        for armed in self.armed.values() {
            armed.abort.abort();
        }
    }
}
