// SPDX-License-Identifier: MPL-2.0
//! Interface between the engines and whatever draws their entries.
//!
//! A presentation adapter reads [`QueueEngine::rendered`] after every
//! revision change, draws those entries, and feeds user interaction and
//! animation progress back as [`AdapterEvent`]s through [`Presenter::report`].

use crate::domain::overlay::{ButtonId, EntryId, Placement};
use crate::engine::QueueEngine;

/// Something the presentation layer observed.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterEvent {
    ButtonPressed { entry: EntryId, button: ButtonId },
    /// Exit animation finished; the entry can be erased.
    AnimationComplete(EntryId),
    /// Outside tap or back gesture.
    Dismiss(EntryId),
    TextChanged { entry: EntryId, text: String },
    /// Text field submitted (enter key).
    Submit(EntryId),
    MeasuredHeight { entry: EntryId, height: f32 },
}

impl AdapterEvent {
    #[must_use]
    pub fn entry(&self) -> &EntryId {
        match self {
            AdapterEvent::ButtonPressed { entry, .. }
            | AdapterEvent::TextChanged { entry, .. }
            | AdapterEvent::MeasuredHeight { entry, .. } => entry,
            AdapterEvent::AnimationComplete(entry)
            | AdapterEvent::Dismiss(entry)
            | AdapterEvent::Submit(entry) => entry,
        }
    }
}

/// Receives adapter reports. Returns whether the report changed anything.
pub trait Presenter {
    fn report(&self, event: AdapterEvent) -> bool;
}

impl<D: Send + 'static> QueueEngine<D> {
    /// Routes one adapter report to the matching engine operation.
    pub fn report(&self, event: AdapterEvent) -> bool {
        match event {
            AdapterEvent::ButtonPressed { entry, button } => {
                self.report_button_press(&entry, &button)
            }
            AdapterEvent::AnimationComplete(entry) => self.cleanup_after_animation(&entry),
            AdapterEvent::Dismiss(entry) => self.dismiss(&entry),
            AdapterEvent::TextChanged { entry, text } => self.capture_text(&entry, text),
            AdapterEvent::Submit(entry) => self.submit_text(&entry),
            AdapterEvent::MeasuredHeight { entry, height } => {
                self.report_measured_height(&entry, height)
            }
        }
    }
}

impl<D: Send + 'static> Presenter for QueueEngine<D> {
    fn report(&self, event: AdapterEvent) -> bool {
        QueueEngine::report(self, event)
    }
}

/// Safe-area insets, in logical pixels, added to the stacked height of the
/// entries rendered against each edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    #[must_use]
    pub fn edge(&self, placement: Placement) -> f32 {
        match placement {
            Placement::Top => self.top,
            Placement::Bottom => self.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overlay::{Button, Status};
    use crate::engine::{EngineSettings, ShowOptions};
    use crate::response::Outcome;

    fn engine() -> QueueEngine {
        QueueEngine::new(EngineSettings::with_capacity(1))
    }

    #[test]
    fn reports_route_to_engine_operations() {
        let engine = engine();
        let mut handle = engine.show(
            "Saved",
            ShowOptions::new().id("a").button(Button::new("Undo", "undo")),
        );
        let id = EntryId::new("a");

        assert!(engine.report(AdapterEvent::MeasuredHeight {
            entry: id.clone(),
            height: 48.0,
        }));
        assert!(engine.report(AdapterEvent::ButtonPressed {
            entry: id.clone(),
            button: ButtonId::new("undo"),
        }));
        assert!(matches!(
            handle.response_mut().try_take().map(|r| r.outcome),
            Some(Outcome::ButtonPressed { .. })
        ));
        assert_eq!(engine.status(&id), Some(Status::Hidden));

        assert!(engine.report(AdapterEvent::AnimationComplete(id.clone())));
        assert_eq!(engine.status(&id), None);
    }

    #[test]
    fn plain_engine_ignores_dismissal_and_text() {
        let engine = engine();
        let mut handle = engine.show("a", ShowOptions::new().id("a"));
        let id = EntryId::new("a");

        assert!(!engine.report(AdapterEvent::Dismiss(id.clone())));
        assert!(!engine.report(AdapterEvent::TextChanged {
            entry: id.clone(),
            text: "typed".into(),
        }));
        assert!(!engine.report(AdapterEvent::Submit(id)));
        assert!(handle.response_mut().try_take().is_none());
    }

    #[test]
    fn presenter_trait_object_delegates() {
        let engine = engine();
        engine.show("a", ShowOptions::new().id("a"));
        let presenter: &dyn Presenter = &engine;

        assert!(!presenter.report(AdapterEvent::AnimationComplete(EntryId::new("a"))));
        assert_eq!(
            AdapterEvent::Submit(EntryId::new("a")).entry(),
            &EntryId::new("a")
        );
    }

    #[test]
    fn insets_pick_edge() {
        let insets = Insets {
            top: 24.0,
            bottom: 12.0,
        };
        assert_eq!(insets.edge(Placement::Top), 24.0);
        assert_eq!(insets.edge(Placement::Bottom), 12.0);
    }
}
