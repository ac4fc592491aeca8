// SPDX-License-Identifier: MPL-2.0
//! Single-settlement result cell.
//!
//! The settling half ([`Settlement`]) is shared between the engine's entry
//! and the caller's handle; the awaiting half ([`ResponseFuture`]) belongs to
//! the caller. The sender is taken out of the cell on first use, which is
//! what makes settlement exactly-once.

use super::{Outcome, Response};
use crate::domain::overlay::EntryId;
use crate::sync::lock;
use futures_util::FutureExt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub(crate) struct Settlement {
    sender: Arc<Mutex<Option<oneshot::Sender<Response>>>>,
}

impl Settlement {
    /// Creates a pending response for `id`.
    pub(crate) fn channel(id: &EntryId) -> (Self, ResponseFuture) {
        let (tx, rx) = oneshot::channel();
        let settlement = Self {
            sender: Arc::new(Mutex::new(Some(tx))),
        };
        let future = ResponseFuture {
            id: id.clone(),
            receiver: rx,
        };
        (settlement, future)
    }

    /// Settles the response. Returns `false`, and discards `response`, if it
    /// was already settled.
    pub(crate) fn settle(&self, response: Response) -> bool {
        let sender = lock(&self.sender).take();
        match sender {
            Some(tx) => {
                // The caller may have dropped its future; that still counts.
                let _ = tx.send(response);
                true
            }
            None => {
                tracing::warn!(
                    id = %response.id,
                    outcome = %response.outcome.kind(),
                    "response already settled, discarding late settlement"
                );
                false
            }
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        lock(&self.sender).is_some()
    }
}

/// Awaitable half of an entry's response.
///
/// Resolves with the first settlement. If every settling side is dropped
/// first, it resolves with [`Outcome::Abandoned`] instead of hanging.
#[derive(Debug)]
pub struct ResponseFuture {
    id: EntryId,
    receiver: oneshot::Receiver<Response>,
}

impl ResponseFuture {
    #[must_use]
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    /// Returns the response if it has already settled, without waiting.
    ///
    /// Once this returns `Some`, the future has been consumed and must not be
    /// polled again.
    pub fn try_take(&mut self) -> Option<Response> {
        self.now_or_never()
    }
}

impl Future for ResponseFuture {
    type Output = Response;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Response> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(response)) => Poll::Ready(response),
            Poll::Ready(Err(_)) => Poll::Ready(Response {
                id: self.id.clone(),
                outcome: Outcome::Abandoned,
                text: None,
            }),
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(id: &EntryId, outcome: Outcome) -> Response {
        Response {
            id: id.clone(),
            outcome,
            text: None,
        }
    }

    #[tokio::test]
    async fn first_settlement_wins() {
        let id = EntryId::new("a");
        let (settlement, future) = Settlement::channel(&id);

        assert!(settlement.settle(response(&id, Outcome::Timeout)));
        assert!(!settlement.settle(response(&id, Outcome::Dismissed)));
        assert!(!settlement.is_pending());

        assert_eq!(future.await.outcome, Outcome::Timeout);
    }

    #[tokio::test]
    async fn clones_share_one_settlement() {
        let id = EntryId::new("shared");
        let (settlement, future) = Settlement::channel(&id);
        let other = settlement.clone();

        assert!(other.settle(response(&id, Outcome::HiddenByExternalCall)));
        assert!(!settlement.settle(response(&id, Outcome::Timeout)));
        assert_eq!(future.await.outcome, Outcome::HiddenByExternalCall);
    }

    #[tokio::test]
    async fn dropped_settlement_resolves_abandoned() {
        let id = EntryId::new("orphan");
        let (settlement, future) = Settlement::channel(&id);
        drop(settlement);

        let response = future.await;
        assert_eq!(response.id, id);
        assert_eq!(response.outcome, Outcome::Abandoned);
    }

    #[test]
    fn try_take_reports_pending_then_settled() {
        let id = EntryId::new("poll");
        let (settlement, mut future) = Settlement::channel(&id);

        assert!(future.try_take().is_none());
        settlement.settle(response(&id, Outcome::Dismissed));
        assert_eq!(
            future.try_take().map(|r| r.outcome),
            Some(Outcome::Dismissed)
        );
    }

    #[test]
    fn settling_after_future_dropped_still_counts() {
        let id = EntryId::new("gone");
        let (settlement, future) = Settlement::channel(&id);
        drop(future);

        assert!(settlement.settle(response(&id, Outcome::Timeout)));
        assert!(!settlement.is_pending());
    }
}
