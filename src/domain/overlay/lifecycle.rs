// SPDX-License-Identifier: MPL-2.0
//! Lifecycle vocabulary for tracked entries.

use std::fmt;

/// Admission state of a tracked entry.
///
/// Entries move `Queued -> Visible -> Hidden` and are then erased once the
/// presentation layer confirms the exit animation. A queued entry is never
/// rendered, so it is never moved to `Hidden`: hiding it erases it at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Queued,
    Visible,
    /// Settled and animating out; still rendered until cleanup.
    Hidden,
}

impl Status {
    /// Whether the presentation layer should draw an entry in this state.
    #[must_use]
    pub fn is_rendered(self) -> bool {
        matches!(self, Status::Visible | Status::Hidden)
    }
}

/// Screen edge an entry is stacked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    Top,
    #[default]
    Bottom,
}

/// How the placements of one engine share its concurrency cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lanes {
    /// Each placement has its own cap and its own FIFO order.
    #[default]
    PerPlacement,
    /// One cap and one FIFO order for the whole engine. Every entry is pinned
    /// to this placement whatever its options ask for.
    Single(Placement),
}

impl Lanes {
    /// Placement an entry ends up with, given what its options requested.
    #[must_use]
    pub fn resolve(self, requested: Option<Placement>) -> Placement {
        match self {
            Lanes::PerPlacement => requested.unwrap_or_default(),
            Lanes::Single(pinned) => pinned,
        }
    }
}

/// When a departing entry frees its slot for the next queued one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vacancy {
    /// The slot opens only after the exit animation completes and the entry
    /// is erased.
    #[default]
    OnRemoval,
    /// The slot opens as soon as the entry is hidden, so the outgoing and
    /// incoming entries render together during the cross-fade.
    OnHide,
}

/// Which overlay family an engine instance serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Snackbar,
    Banner,
    Dialog,
    /// An engine built from hand-written settings.
    Custom,
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverlayKind::Snackbar => "snackbar",
            OverlayKind::Banner => "banner",
            OverlayKind::Dialog => "dialog",
            OverlayKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_visible_and_hidden_are_rendered() {
        assert!(Status::Visible.is_rendered());
        assert!(Status::Hidden.is_rendered());
        assert!(!Status::Queued.is_rendered());
    }

    #[test]
    fn defaults_match_snackbar_conventions() {
        assert_eq!(Placement::default(), Placement::Bottom);
        assert_eq!(Vacancy::default(), Vacancy::OnRemoval);
        assert_eq!(Lanes::default(), Lanes::PerPlacement);
    }

    #[test]
    fn single_lane_pins_every_request() {
        let lanes = Lanes::Single(Placement::Top);
        assert_eq!(lanes.resolve(None), Placement::Top);
        assert_eq!(lanes.resolve(Some(Placement::Bottom)), Placement::Top);
        assert_eq!(Lanes::PerPlacement.resolve(Some(Placement::Top)), Placement::Top);
        assert_eq!(Lanes::PerPlacement.resolve(None), Placement::Bottom);
    }
}
