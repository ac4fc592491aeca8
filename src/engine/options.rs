// SPDX-License-Identifier: MPL-2.0
//! Options accepted by `show`.

use crate::domain::overlay::{Button, EntryId, Placement};
use std::time::Duration;

/// Per-request options. Every field is optional so that presets can be
/// layered under per-call options (see [`ShowOptions::or`]).
///
/// `data` is carried through to the presentation layer untouched.
#[derive(Debug, Clone)]
pub struct ShowOptions<D = ()> {
    pub id: Option<EntryId>,
    pub timeout: Option<Duration>,
    pub persistent: Option<bool>,
    pub buttons: Option<Vec<Button>>,
    pub dismissable: Option<bool>,
    pub placement: Option<Placement>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub data: Option<D>,
    pub(crate) input: Option<String>,
}

impl<D> Default for ShowOptions<D> {
    fn default() -> Self {
        Self {
            id: None,
            timeout: None,
            persistent: None,
            buttons: None,
            dismissable: None,
            placement: None,
            description: None,
            icon: None,
            data: None,
            input: None,
        }
    }
}

impl<D> ShowOptions<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows under a caller-chosen id; re-showing the same id replaces the
    /// tracked entry.
    #[must_use]
    pub fn id(mut self, id: impl Into<EntryId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Never time out, whatever `timeout` says.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = Some(true);
        self
    }

    #[must_use]
    pub fn buttons(mut self, buttons: impl IntoIterator<Item = Button>) -> Self {
        self.buttons = Some(buttons.into_iter().collect());
        self
    }

    #[must_use]
    pub fn button(mut self, button: Button) -> Self {
        self.buttons.get_or_insert_with(Vec::new).push(button);
        self
    }

    #[must_use]
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = Some(dismissable);
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }

    pub(crate) fn input(mut self, initial: String) -> Self {
        self.input = Some(initial);
        self
    }
}

impl<D: Clone> ShowOptions<D> {
    /// Fills every unset field from `defaults`.
    #[must_use]
    pub fn or(self, defaults: &ShowOptions<D>) -> Self {
        Self {
            id: self.id.or_else(|| defaults.id.clone()),
            timeout: self.timeout.or(defaults.timeout),
            persistent: self.persistent.or(defaults.persistent),
            buttons: self.buttons.or_else(|| defaults.buttons.clone()),
            dismissable: self.dismissable.or(defaults.dismissable),
            placement: self.placement.or(defaults.placement),
            description: self.description.or_else(|| defaults.description.clone()),
            icon: self.icon.or_else(|| defaults.icon.clone()),
            data: self.data.or_else(|| defaults.data.clone()),
            input: self.input.or_else(|| defaults.input.clone()),
        }
    }
}
