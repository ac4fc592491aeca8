// SPDX-License-Identifier: MPL-2.0
//! Singleton dialog engine.
//!
//! A queue engine fixed to one visible entry, because only one modal may own
//! input focus. Dialogs get an "Ok" button when none are given, honor
//! outside-tap and back dismissal for dismissable entries, and have a
//! text-capturing prompt variant (see [`DialogEngine::prompt`]).

mod prompt;

use crate::config::DialogConfig;
use crate::domain::overlay::{
    Button, EntryId, Lanes, MaxSimultaneousItems, OverlayKind, Placement, Vacancy,
};
use crate::engine::{EngineSettings, EntryView, FallbackButtons, Handle, QueueEngine, ShowOptions};
use crate::presentation::{AdapterEvent, Presenter};

/// Engine settings for dialogs with the given configuration.
#[must_use]
pub fn settings(config: &DialogConfig) -> EngineSettings {
    EngineSettings {
        kind: OverlayKind::Dialog,
        max_simultaneous_items: MaxSimultaneousItems::ONE,
        lanes: Lanes::Single(Placement::default()),
        vacancy: Vacancy::OnRemoval,
        default_timeout: None,
        cleanup_fallback: config.cleanup_fallback(),
        fallback_buttons: FallbackButtons::Always(Button::ok()),
        accepts_dismissal: true,
    }
}

/// Modal dialog engine. Cheap to clone; clones share one queue.
#[derive(Debug)]
pub struct DialogEngine<D = ()> {
    engine: QueueEngine<D>,
}

impl<D> Clone for DialogEngine<D> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}

impl<D: Send + 'static> Default for DialogEngine<D> {
    fn default() -> Self {
        Self::new(&DialogConfig::default())
    }
}

impl<D: Send + 'static> DialogEngine<D> {
    #[must_use]
    pub fn new(config: &DialogConfig) -> Self {
        Self {
            engine: QueueEngine::new(settings(config)),
        }
    }

    /// The underlying queue engine, for reads and adapter wiring.
    #[must_use]
    pub fn engine(&self) -> &QueueEngine<D> {
        &self.engine
    }

    /// Shows a dialog, or queues it behind the current one.
    pub fn show(&self, title: impl Into<String>, options: ShowOptions<D>) -> Handle<D> {
        self.engine.show(title, options)
    }

    /// Hides `id`, settling it with `HiddenByExternalCall`.
    pub fn hide(&self, id: &EntryId) -> bool {
        self.engine.hide(id)
    }

    /// Hides the dialog on screen; a no-op when none is.
    pub fn hide_current(&self) -> bool {
        self.engine.hide_current()
    }

    /// Outside tap or back gesture on `id`. Non-dismissable dialogs ignore it.
    pub fn report_dismiss(&self, id: &EntryId) -> bool {
        self.engine.dismiss(id)
    }

    /// Number of tracked dialogs, including queued and fading ones.
    #[must_use]
    pub fn count(&self) -> usize {
        self.engine.count()
    }

    #[must_use]
    pub fn has_active(&self) -> bool {
        self.engine.has_active()
    }
}

impl<D: Clone> DialogEngine<D> {
    /// The dialog currently on screen, or fading out.
    #[must_use]
    pub fn current(&self) -> Option<EntryView<D>> {
        self.engine.rendered().into_iter().next()
    }
}

impl<D: Send + 'static> Presenter for DialogEngine<D> {
    fn report(&self, event: AdapterEvent) -> bool {
        self.engine.report(event)
    }
}

/// Convenience for the common yes/no question.
#[must_use]
pub fn confirm_buttons(confirm: impl Into<String>, cancel: impl Into<String>) -> Vec<Button> {
    vec![
        Button::cancel(cancel, "cancel"),
        Button::new(confirm, "confirm"),
    ]
}
