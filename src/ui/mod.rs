// SPDX-License-Identifier: MPL-2.0
//! Default iced presentation adapter.
//!
//! [`OverlayLayer`] draws what the engines of an [`Overlays`] bundle mark as
//! rendered and turns clicks, text edits and a periodic tick into engine
//! reports. Hosts embed it by mapping [`Message`] into their own message type:
//!
//! ```ignore
//! fn view(&self) -> Element<'_, AppMessage> {
//!     Stack::new()
//!         .push(self.content())
//!         .push(self.overlays.view().map(AppMessage::Overlay))
//!         .into()
//! }
//! ```

mod cards;
mod dialog;
mod style;

use crate::config::Config;
use crate::domain::overlay::Placement;
use crate::overlays::Overlays;
use crate::presentation::{AdapterEvent, Presenter};
use iced::widget::Stack;
use iced::{Element, Length, Subscription};
use std::time::Duration;

/// How often exit animations are advanced while any overlay is tracked.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub enum Message {
    Snackbar(AdapterEvent),
    Banner(AdapterEvent),
    Dialog(AdapterEvent),
    /// Periodic tick driving exit animations to completion.
    Tick,
}

/// Exit animation lengths, one per overlay kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDurations {
    pub snackbar: Duration,
    pub banner: Duration,
    pub dialog: Duration,
}

impl AnimationDurations {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            snackbar: config.snackbar.animation_duration(),
            banner: config.banner.animation_duration(),
            dialog: config.dialog.animation_duration(),
        }
    }
}

impl Default for AnimationDurations {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub struct OverlayLayer<D = ()> {
    overlays: Overlays<D>,
    animations: AnimationDurations,
}

impl<D: Clone + Send + 'static> OverlayLayer<D> {
    #[must_use]
    pub fn new(overlays: Overlays<D>, animations: AnimationDurations) -> Self {
        Self {
            overlays,
            animations,
        }
    }

    #[must_use]
    pub fn overlays(&self) -> &Overlays<D> {
        &self.overlays
    }

    /// Applies one message. Returns whether any engine state changed.
    pub fn update(&self, message: Message) -> bool {
        match message {
            Message::Snackbar(event) => self.overlays.snackbars.report(event),
            Message::Banner(event) => self.overlays.banners.report(event),
            Message::Dialog(event) => Presenter::report(&self.overlays.dialogs, event),
            Message::Tick => {
                let finished = self
                    .overlays
                    .snackbars
                    .finish_exit_animations(self.animations.snackbar)
                    + self
                        .overlays
                        .banners
                        .finish_exit_animations(self.animations.banner)
                    + self
                        .overlays
                        .dialogs
                        .engine()
                        .finish_exit_animations(self.animations.dialog);
                finished > 0
            }
        }
    }

    /// Ticks only while something is on screen or queued.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.overlays.has_active() {
            iced::time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Banners on top, snackbars along both edges, the dialog above all.
    pub fn view(&self) -> Element<'_, Message> {
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(cards::banner_area(
                self.overlays.banners.rendered(),
                self.animations.banner,
            ))
            .push(cards::snackbar_area(
                self.overlays.snackbars.rendered(),
                Placement::Top,
                self.animations.snackbar,
            ))
            .push(cards::snackbar_area(
                self.overlays.snackbars.rendered(),
                Placement::Bottom,
                self.animations.snackbar,
            ))
            .push(dialog::view(
                self.overlays.dialogs.current(),
                self.animations.dialog,
            ))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overlay::{ButtonId, EntryId, Status};
    use crate::engine::ShowOptions;

    #[test]
    fn messages_route_to_their_engine() {
        let layer: OverlayLayer = OverlayLayer::new(Overlays::default(), AnimationDurations::default());
        let overlays = layer.overlays().clone();
        overlays.dialogs.show("Quit?", ShowOptions::new().id("quit"));

        assert!(!layer.update(Message::Snackbar(AdapterEvent::Dismiss(EntryId::new("quit")))));
        assert!(layer.update(Message::Dialog(AdapterEvent::ButtonPressed {
            entry: EntryId::new("quit"),
            button: ButtonId::new(ButtonId::OK),
        })));
        assert_eq!(
            overlays.dialogs.engine().status(&EntryId::new("quit")),
            Some(Status::Hidden)
        );
    }

    #[test]
    fn tick_finishes_zero_length_animations() {
        let animations = AnimationDurations {
            snackbar: Duration::ZERO,
            banner: Duration::ZERO,
            dialog: Duration::ZERO,
        };
        let layer: OverlayLayer = OverlayLayer::new(Overlays::default(), animations);
        let overlays = layer.overlays().clone();
        overlays.banners.show("b", ShowOptions::new().id("b"));
        overlays.banners.hide(&EntryId::new("b"));

        assert!(layer.update(Message::Tick));
        assert!(!overlays.has_active());
        assert!(!layer.update(Message::Tick));
    }
}
