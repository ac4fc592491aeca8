// SPDX-License-Identifier: MPL-2.0
//! Overlay lifecycle events captured for diagnostics.

use crate::domain::overlay::{EntryId, OverlayKind};
use crate::response::OutcomeKind;
use tokio::time::Instant;

/// One recorded lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayEvent {
    /// When the transition happened (tokio clock, so paused-time tests see
    /// simulated instants).
    pub at: Instant,
    /// Engine that performed it.
    pub engine: OverlayKind,
    pub entry: EntryId,
    pub kind: OverlayEventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEventKind {
    /// Admitted as visible straight away.
    Shown,
    /// Admitted into the queue because every slot was taken.
    Queued,
    /// Moved from the queue to visible when a slot opened.
    Promoted,
    /// The entry's response settled.
    Settled(OutcomeKind),
    /// A settlement arrived after the response had already settled.
    DoubleSettlement(OutcomeKind),
    /// Dropped from tracking because a new entry re-used its id.
    Replaced,
    /// Erased from tracking.
    Removed,
}

impl OverlayEvent {
    #[must_use]
    pub fn new(engine: OverlayKind, entry: EntryId, kind: OverlayEventKind) -> Self {
        Self {
            at: Instant::now(),
            engine,
            entry,
            kind,
        }
    }
}
