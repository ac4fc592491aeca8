// SPDX-License-Identifier: MPL-2.0
//! Styles shared by the overlay widgets.

use iced::widget::{container, text};
use iced::{Border, Color, Shadow, Theme, Vector};
use std::time::Duration;
use tokio::time::Instant;

pub(super) const SPACING: f32 = 8.0;
pub(super) const PADDING: f32 = 12.0;
pub(super) const RADIUS: f32 = 8.0;
pub(super) const TITLE_SIZE: f32 = 14.0;
pub(super) const DIALOG_TITLE_SIZE: f32 = 18.0;
pub(super) const SNACKBAR_WIDTH: f32 = 360.0;
pub(super) const DIALOG_WIDTH: f32 = 420.0;

/// Opacity of an entry: 1.0 until hidden, then falling linearly to 0.0 over
/// the exit animation.
pub(super) fn fade(hidden_at: Option<Instant>, now: Instant, animation: Duration) -> f32 {
    let Some(hidden_at) = hidden_at else {
        return 1.0;
    };
    if animation.is_zero() {
        return 0.0;
    }
    let elapsed = now.saturating_duration_since(hidden_at);
    (1.0 - elapsed.as_secs_f32() / animation.as_secs_f32()).clamp(0.0, 1.0)
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Inverted surface used by snackbars.
pub(super) fn snackbar_card(theme: &Theme, alpha: f32) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(with_alpha(
            palette.background.strong.color,
            alpha,
        ))),
        border: Border {
            radius: RADIUS.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.3 * alpha),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        text_color: Some(with_alpha(palette.background.strong.text, alpha)),
        ..container::Style::default()
    }
}

/// Full-width strip used by banners.
pub(super) fn banner_strip(theme: &Theme, alpha: f32) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(with_alpha(
            palette.primary.weak.color,
            alpha,
        ))),
        text_color: Some(with_alpha(palette.primary.weak.text, alpha)),
        ..container::Style::default()
    }
}

pub(super) fn dialog_card(theme: &Theme, alpha: f32) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(with_alpha(
            palette.background.base.color,
            alpha,
        ))),
        border: Border {
            color: with_alpha(palette.background.strong.color, alpha),
            width: 1.0,
            radius: RADIUS.into(),
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.4 * alpha),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        text_color: Some(with_alpha(palette.background.base.text, alpha)),
        ..container::Style::default()
    }
}

/// Dimmed backdrop behind a dialog.
pub(super) fn backdrop(_theme: &Theme, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(with_alpha(
            Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            alpha,
        ))),
        ..container::Style::default()
    }
}

pub(super) fn secondary_text(theme: &Theme, alpha: f32) -> text::Style {
    text::Style {
        color: Some(with_alpha(
            theme.extended_palette().background.weak.text,
            alpha,
        )),
    }
}
