// SPDX-License-Identifier: MPL-2.0
//! Modal dialog view.

use super::style;
use super::Message;
use crate::engine::EntryView;
use crate::presentation::AdapterEvent;
use iced::widget::{button, mouse_area, text, text_input, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Duration;
use tokio::time::Instant;

/// The current dialog over a dimmed backdrop, or nothing.
///
/// Clicking the backdrop reports a dismissal for dismissable dialogs only.
pub(super) fn view<'a, D>(current: Option<EntryView<D>>, animation: Duration) -> Element<'a, Message> {
    let Some(entry) = current else {
        return Space::new().into();
    };
    let alpha = style::fade(entry.hidden_at, Instant::now(), animation);

    let backdrop = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &Theme| style::backdrop(theme, alpha));
    let backdrop = if entry.dismissable {
        mouse_area(backdrop).on_press(Message::Dialog(AdapterEvent::Dismiss(entry.id.clone())))
    } else {
        mouse_area(backdrop)
    };

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(
            Container::new(card(&entry, alpha))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .into()
}

fn card<'a, D>(entry: &EntryView<D>, alpha: f32) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(style::SPACING)
        .push(Text::new(entry.title.clone()).size(style::DIALOG_TITLE_SIZE));

    if let Some(description) = &entry.description {
        body = body.push(
            Text::new(description.clone())
                .size(style::TITLE_SIZE)
                .style(move |theme: &Theme| style::secondary_text(theme, alpha)),
        );
    }

    if let Some(value) = &entry.input {
        let on_change = entry.id.clone();
        body = body.push(
            text_input("", value)
                .on_input(move |text| {
                    Message::Dialog(AdapterEvent::TextChanged {
                        entry: on_change.clone(),
                        text,
                    })
                })
                .on_submit(Message::Dialog(AdapterEvent::Submit(entry.id.clone())))
                .padding(style::SPACING),
        );
    }

    let actions = entry.buttons.iter().fold(
        Row::new().spacing(style::SPACING),
        |row, action| {
            row.push(
                button(text(action.label.clone()).size(style::TITLE_SIZE)).on_press(
                    Message::Dialog(AdapterEvent::ButtonPressed {
                        entry: entry.id.clone(),
                        button: action.id.clone(),
                    }),
                ),
            )
        },
    );
    body = body.push(
        Container::new(actions)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
    );

    Container::new(body)
        .width(Length::Fixed(style::DIALOG_WIDTH))
        .padding(style::PADDING * 2.0)
        .style(move |theme: &Theme| style::dialog_card(theme, alpha))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overlay::{Button, EntryId, Placement, Status};

    fn prompt() -> EntryView<()> {
        EntryView {
            id: EntryId::new("p"),
            title: "Rename".to_string(),
            status: Status::Visible,
            timeout: None,
            buttons: vec![Button::cancel("Cancel", "cancel"), Button::new("Save", "save")],
            dismissable: false,
            placement: Placement::Bottom,
            description: Some("Pick a new name".to_string()),
            icon: None,
            data: None,
            input: Some("draft".to_string()),
            measured_height: None,
            hidden_at: None,
        }
    }

    #[test]
    fn view_builds_for_prompt_and_for_nothing() {
        let _some = view(Some(prompt()), Duration::from_millis(300));
        let _none = view::<()>(None, Duration::from_millis(300));
    }
}
