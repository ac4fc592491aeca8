// SPDX-License-Identifier: MPL-2.0
//! Banners: messages pinned to the top edge.
//!
//! All banners share one lane and one cap, whatever placement their options
//! request.
//!
//! A banner without a timeout and without buttons gets a "Hide" button.
//! Hidden banners stop counting against the cap at once, so the next banner
//! cross-fades in while the old one fades out; a fallback timer erases the
//! old one if the fade-out is never reported.

use crate::config::BannerConfig;
use crate::domain::overlay::{Lanes, MaxSimultaneousItems, OverlayKind, Placement, Vacancy};
use crate::engine::{EngineSettings, FallbackButtons, QueueEngine, ShowOptions};

/// Banner queue; cheap to clone.
pub type BannerEngine<D = ()> = QueueEngine<D>;

#[must_use]
pub fn settings(config: &BannerConfig) -> EngineSettings {
    EngineSettings {
        kind: OverlayKind::Banner,
        max_simultaneous_items: MaxSimultaneousItems::new(config.max_simultaneous_items),
        lanes: Lanes::Single(Placement::Top),
        vacancy: Vacancy::OnHide,
        default_timeout: None,
        cleanup_fallback: config.cleanup_fallback(),
        fallback_buttons: FallbackButtons::HideIfUntimed,
        accepts_dismissal: false,
    }
}

#[must_use]
pub fn engine<D: Send + 'static>(config: &BannerConfig) -> BannerEngine<D> {
    QueueEngine::new(settings(config))
}

/// Options placing a banner at the top edge.
#[must_use]
pub fn options<D>() -> ShowOptions<D> {
    ShowOptions::new().placement(Placement::Top)
}
