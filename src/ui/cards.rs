// SPDX-License-Identifier: MPL-2.0
//! Snackbar cards and banner strips.

use super::style;
use super::Message;
use crate::domain::overlay::{Button, EntryId, Placement};
use crate::engine::EntryView;
use crate::presentation::AdapterEvent;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Duration;
use tokio::time::Instant;

/// Buttons of one entry, each reporting its own id back through `wrap`.
fn action_row<'a>(
    entry: &EntryId,
    buttons: &[Button],
    wrap: fn(AdapterEvent) -> Message,
) -> Row<'a, Message> {
    buttons.iter().fold(Row::new().spacing(style::SPACING), |row, action| {
        row.push(
            button(text(action.label.clone()).size(style::TITLE_SIZE))
                .on_press(wrap(AdapterEvent::ButtonPressed {
                    entry: entry.clone(),
                    button: action.id.clone(),
                }))
                .style(button::text),
        )
    })
}

fn card<'a, D>(entry: &EntryView<D>, now: Instant, animation: Duration) -> Element<'a, Message> {
    let alpha = style::fade(entry.hidden_at, now, animation);
    let content = Row::new()
        .spacing(style::SPACING)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(entry.title.clone()).size(style::TITLE_SIZE))
                .width(Length::Fill),
        )
        .push(action_row(&entry.id, &entry.buttons, Message::Snackbar));

    Container::new(content)
        .width(Length::Fixed(style::SNACKBAR_WIDTH))
        .padding(style::PADDING)
        .style(move |theme: &Theme| style::snackbar_card(theme, alpha))
        .into()
}

/// Rendered snackbars of one placement, stacked against that edge.
pub(super) fn snackbar_area<'a, D>(
    entries: Vec<EntryView<D>>,
    placement: Placement,
    animation: Duration,
) -> Element<'a, Message> {
    let now = Instant::now();
    let cards: Vec<Element<'a, Message>> = entries
        .iter()
        .filter(|entry| entry.placement == placement)
        .map(|entry| card(entry, now, animation))
        .collect();

    let vertical = match placement {
        Placement::Top => alignment::Vertical::Top,
        Placement::Bottom => alignment::Vertical::Bottom,
    };
    Container::new(
        Column::with_children(cards)
            .spacing(style::SPACING)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(vertical)
    .padding(style::PADDING)
    .into()
}

fn strip<'a, D>(entry: &EntryView<D>, now: Instant, animation: Duration) -> Element<'a, Message> {
    let alpha = style::fade(entry.hidden_at, now, animation);
    let mut content = Row::new()
        .spacing(style::SPACING)
        .align_y(alignment::Vertical::Center);
    if let Some(icon) = &entry.icon {
        content = content.push(Text::new(icon.clone()).size(style::TITLE_SIZE));
    }
    let content = content
        .push(
            Container::new(Text::new(entry.title.clone()).size(style::TITLE_SIZE))
                .width(Length::Fill),
        )
        .push(action_row(&entry.id, &entry.buttons, Message::Banner));

    Container::new(content)
        .width(Length::Fill)
        .padding(style::PADDING)
        .style(move |theme: &Theme| style::banner_strip(theme, alpha))
        .into()
}

/// Rendered banners. Fading and incoming banners overlap in one slot.
pub(super) fn banner_area<'a, D>(entries: Vec<EntryView<D>>, animation: Duration) -> Element<'a, Message> {
    let now = Instant::now();
    let strips = entries.iter().map(|entry| strip(entry, now, animation));

    Container::new(iced::widget::Stack::with_children(strips).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Top)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overlay::Status;

    fn view(id: &str, placement: Placement) -> EntryView<()> {
        EntryView {
            id: EntryId::new(id),
            title: id.to_string(),
            status: Status::Visible,
            timeout: None,
            buttons: vec![Button::new("Undo", "undo")],
            dismissable: true,
            placement,
            description: None,
            icon: Some("info".to_string()),
            data: None,
            input: None,
            measured_height: None,
            hidden_at: None,
        }
    }

    #[test]
    fn areas_build_for_mixed_placements() {
        let entries = vec![view("a", Placement::Top), view("b", Placement::Bottom)];
        let _top = snackbar_area(entries.clone(), Placement::Top, Duration::from_millis(300));
        let _bottom = snackbar_area(entries.clone(), Placement::Bottom, Duration::from_millis(300));
        let _banners = banner_area(entries, Duration::from_millis(300));
    }

    #[test]
    fn empty_areas_build() {
        let _ = snackbar_area::<()>(Vec::new(), Placement::Bottom, Duration::ZERO);
        let _ = banner_area::<()>(Vec::new(), Duration::ZERO);
    }
}
