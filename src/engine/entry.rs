// SPDX-License-Identifier: MPL-2.0
//! Tracked overlay entries.

use crate::domain::overlay::{Button, EntryId, Placement, Status};
use crate::response::{Outcome, Response, Settlement};
use std::time::Duration;
use tokio::time::Instant;

/// One outstanding show request, owned by its engine.
#[derive(Debug)]
pub(crate) struct Entry<D> {
    pub(crate) id: EntryId,
    /// Distinguishes successive entries that re-use one id.
    pub(crate) seq: u64,
    pub(crate) title: String,
    pub(crate) timeout: Option<Duration>,
    pub(crate) buttons: Vec<Button>,
    pub(crate) status: Status,
    pub(crate) dismissable: bool,
    pub(crate) placement: Placement,
    pub(crate) description: Option<String>,
    pub(crate) icon: Option<String>,
    pub(crate) data: Option<D>,
    /// Prompt text capture; `None` for entries without a text field.
    pub(crate) input: Option<String>,
    pub(crate) measured_height: Option<f32>,
    pub(crate) hidden_at: Option<Instant>,
    pub(crate) settlement: Settlement,
}

impl<D> Entry<D> {
    pub(crate) fn response(&self, outcome: Outcome) -> Response {
        Response {
            id: self.id.clone(),
            outcome,
            text: self.input.clone(),
        }
    }
}

impl<D: Clone> Entry<D> {
    pub(crate) fn view(&self) -> EntryView<D> {
        EntryView {
            id: self.id.clone(),
            title: self.title.clone(),
            status: self.status,
            timeout: self.timeout,
            buttons: self.buttons.clone(),
            dismissable: self.dismissable,
            placement: self.placement,
            description: self.description.clone(),
            icon: self.icon.clone(),
            data: self.data.clone(),
            input: self.input.clone(),
            measured_height: self.measured_height,
            hidden_at: self.hidden_at,
        }
    }
}

/// Read-only copy of an entry, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView<D = ()> {
    pub id: EntryId,
    pub title: String,
    pub status: Status,
    pub timeout: Option<Duration>,
    pub buttons: Vec<Button>,
    pub dismissable: bool,
    pub placement: Placement,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub data: Option<D>,
    /// Current prompt text, for entries that capture input.
    pub input: Option<String>,
    pub measured_height: Option<f32>,
    /// When the entry started animating out.
    pub hidden_at: Option<Instant>,
}

impl<D> EntryView<D> {
    #[must_use]
    pub fn is_prompt(&self) -> bool {
        self.input.is_some()
    }
}
