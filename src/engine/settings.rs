// SPDX-License-Identifier: MPL-2.0
//! Per-engine settings fixed at construction.

use crate::domain::overlay::{Button, Lanes, MaxSimultaneousItems, OverlayKind, Vacancy};
use std::time::Duration;

/// Buttons given to an entry whose options did not list any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FallbackButtons {
    #[default]
    None,
    /// A "Hide" button, only for persistent entries (snackbars).
    HideIfPersistent,
    /// A "Hide" button, only for entries without a timeout (banners).
    HideIfUntimed,
    /// This button, always (dialogs use "Ok").
    Always(Button),
}

impl FallbackButtons {
    pub(crate) fn resolve(&self, persistent: bool, timeout: Option<Duration>) -> Vec<Button> {
        match self {
            FallbackButtons::None => Vec::new(),
            FallbackButtons::HideIfPersistent if persistent => vec![Button::hide()],
            FallbackButtons::HideIfUntimed if timeout.is_none() => vec![Button::hide()],
            FallbackButtons::HideIfPersistent | FallbackButtons::HideIfUntimed => Vec::new(),
            FallbackButtons::Always(button) => vec![button.clone()],
        }
    }
}

/// Behavior of one engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub kind: OverlayKind,
    /// Cap on visible entries, per lane.
    pub max_simultaneous_items: MaxSimultaneousItems,
    pub lanes: Lanes,
    pub vacancy: Vacancy,
    /// Timeout for entries that set neither `timeout` nor `persistent`.
    pub default_timeout: Option<Duration>,
    /// Erase hidden entries after this long even if the presentation layer
    /// never reports the end of the exit animation.
    pub cleanup_fallback: Option<Duration>,
    pub fallback_buttons: FallbackButtons,
    /// Whether outside-tap / back-gesture reports are honored.
    pub accepts_dismissal: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            kind: OverlayKind::Custom,
            max_simultaneous_items: MaxSimultaneousItems::default(),
            lanes: Lanes::PerPlacement,
            vacancy: Vacancy::default(),
            default_timeout: None,
            cleanup_fallback: None,
            fallback_buttons: FallbackButtons::None,
            accepts_dismissal: false,
        }
    }
}

impl EngineSettings {
    /// Plain settings with the given cap, used by tests and custom engines.
    #[must_use]
    pub fn with_capacity(max_simultaneous_items: usize) -> Self {
        Self {
            max_simultaneous_items: MaxSimultaneousItems::new(max_simultaneous_items),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overlay::ButtonId;

    #[test]
    fn hide_if_persistent_only_for_persistent() {
        let policy = FallbackButtons::HideIfPersistent;
        assert_eq!(policy.resolve(true, None)[0].id, ButtonId::new("hide"));
        assert!(policy.resolve(false, Some(Duration::from_secs(5))).is_empty());
    }

    #[test]
    fn hide_if_untimed_only_without_timeout() {
        let policy = FallbackButtons::HideIfUntimed;
        assert_eq!(policy.resolve(false, None).len(), 1);
        assert!(policy.resolve(false, Some(Duration::from_secs(1))).is_empty());
    }

    #[test]
    fn always_clones_button() {
        let policy = FallbackButtons::Always(Button::ok());
        assert_eq!(policy.resolve(false, None), vec![Button::ok()]);
    }

    #[test]
    fn with_capacity_clamps() {
        assert_eq!(
            EngineSettings::with_capacity(0).max_simultaneous_items.value(),
            1
        );
    }
}
