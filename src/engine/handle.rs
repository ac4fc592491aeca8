// SPDX-License-Identifier: MPL-2.0
//! Caller-side handles returned by `show`.

use super::QueueEngine;
use crate::domain::overlay::EntryId;
use crate::response::{Outcome, Response, ResponseFuture, Settlement};
use std::fmt;
use std::future::IntoFuture;

/// What `show` returns: the entry id, its pending response, and a way to
/// hide it.
///
/// Awaiting the handle waits for the response. Use [`Handle::split`] to keep
/// the hiding capability while another task awaits.
pub struct Handle<D = ()> {
    id: EntryId,
    response: ResponseFuture,
    hider: Hider<D>,
}

impl<D: Send + 'static> Handle<D> {
    pub(crate) fn new(id: EntryId, response: ResponseFuture, hider: Hider<D>) -> Self {
        Self {
            id,
            response,
            hider,
        }
    }

    #[must_use]
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    /// Hides this entry; see [`Hider::hide`].
    pub fn hide(&self) -> bool {
        self.hider.hide()
    }

    #[must_use]
    pub fn hider(&self) -> Hider<D> {
        self.hider.clone()
    }

    pub fn response_mut(&mut self) -> &mut ResponseFuture {
        &mut self.response
    }

    pub fn split(self) -> (ResponseFuture, Hider<D>) {
        (self.response, self.hider)
    }
}

impl<D> fmt::Debug for Handle<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").field("id", &self.id).finish()
    }
}

impl<D> IntoFuture for Handle<D> {
    type Output = Response;
    type IntoFuture = ResponseFuture;

    fn into_future(self) -> ResponseFuture {
        self.response
    }
}

/// Hides the one entry it was issued for.
///
/// Bound to that specific show request: once the id has been re-used by a
/// later `show`, hiding through an old hider leaves the new entry alone and
/// settles only the old, orphaned response.
pub struct Hider<D = ()> {
    id: EntryId,
    seq: u64,
    settlement: Settlement,
    engine: QueueEngine<D>,
}

impl<D> Clone for Hider<D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            seq: self.seq,
            settlement: self.settlement.clone(),
            engine: self.engine.clone(),
        }
    }
}

impl<D> fmt::Debug for Hider<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hider")
            .field("id", &self.id)
            .field("seq", &self.seq)
            .finish()
    }
}

impl<D: Send + 'static> Hider<D> {
    pub(crate) fn new(id: EntryId, seq: u64, settlement: Settlement, engine: QueueEngine<D>) -> Self {
        Self {
            id,
            seq,
            settlement,
            engine,
        }
    }

    #[must_use]
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    /// Settles the response with `HiddenByExternalCall` and hides the entry.
    ///
    /// Returns `false` if the response had already settled.
    pub fn hide(&self) -> bool {
        if self.engine.hide_issued(&self.id, self.seq) {
            return true;
        }
        if !self.settlement.is_pending() {
            return false;
        }
        // The entry was replaced by a later show with the same id.
        self.settlement.settle(Response {
            id: self.id.clone(),
            outcome: Outcome::HiddenByExternalCall,
            text: None,
        })
    }
}
