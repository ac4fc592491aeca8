// SPDX-License-Identifier: MPL-2.0
//! Shared overlay event history.

use super::{BufferCapacity, CircularBuffer, OverlayEvent, OverlayEventKind};
use crate::domain::overlay::EntryId;
use crate::sync::lock;
use std::sync::{Arc, Mutex};

/// Handle for recording and reading overlay events.
///
/// Cheap to clone; every clone writes into the same bounded history, so one
/// handle can be attached to the snackbar, banner and dialog engines at once.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    events: Arc<Mutex<CircularBuffer<OverlayEvent>>>,
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    pub fn record(&self, event: OverlayEvent) {
        lock(&self.events).push(event);
    }

    /// Copies out the retained history, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<OverlayEvent> {
        lock(&self.events).iter().cloned().collect()
    }

    /// Retained event kinds for one entry, oldest first.
    #[must_use]
    pub fn history_of(&self, entry: &EntryId) -> Vec<OverlayEventKind> {
        lock(&self.events)
            .iter()
            .filter(|event| &event.entry == entry)
            .map(|event| event.kind)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.events).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.events).is_empty()
    }

    pub fn clear(&self) {
        lock(&self.events).clear();
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
