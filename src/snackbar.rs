// SPDX-License-Identifier: MPL-2.0
//! Snackbars: short messages along the top or bottom edge.
//!
//! Snackbars time out after the configured default unless shown
//! `persistent`, in which case they get a "Hide" button when no buttons are
//! given. The cap applies per placement, and a hidden snackbar keeps its
//! slot until its slide-out finishes.

use crate::config::SnackbarConfig;
use crate::domain::overlay::{Lanes, MaxSimultaneousItems, OverlayKind, Vacancy};
use crate::engine::{EngineSettings, FallbackButtons, QueueEngine};

/// Snackbar queue; cheap to clone.
pub type SnackbarEngine<D = ()> = QueueEngine<D>;

#[must_use]
pub fn settings(config: &SnackbarConfig) -> EngineSettings {
    EngineSettings {
        kind: OverlayKind::Snackbar,
        max_simultaneous_items: MaxSimultaneousItems::new(config.max_simultaneous_items),
        lanes: Lanes::PerPlacement,
        vacancy: Vacancy::OnRemoval,
        default_timeout: config.default_timeout(),
        cleanup_fallback: None,
        fallback_buttons: FallbackButtons::HideIfPersistent,
        accepts_dismissal: false,
    }
}

#[must_use]
pub fn engine<D: Send + 'static>(config: &SnackbarConfig) -> SnackbarEngine<D> {
    QueueEngine::new(settings(config))
}
