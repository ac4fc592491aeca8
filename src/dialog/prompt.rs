// SPDX-License-Identifier: MPL-2.0
//! Text-capturing dialogs.
//!
//! A prompt is a dialog with a text field. The engine never parses the text:
//! the presentation layer reports every change, and whatever was captured
//! last travels in [`Response::text`](crate::response::Response::text) when
//! the prompt settles, however it settles.

use super::DialogEngine;
use crate::domain::overlay::{Button, EntryId};
use crate::engine::{Handle, ShowOptions};

impl<D: Send + 'static> DialogEngine<D> {
    /// Shows a prompt whose text field starts with `initial`.
    ///
    /// Without explicit buttons the prompt gets a single "Submit" button.
    /// Dismissal settles with `Dismissed` like any dialog; callers check
    /// [`Response::is_cancelled`](crate::response::Response::is_cancelled).
    pub fn prompt(
        &self,
        title: impl Into<String>,
        initial: impl Into<String>,
        options: ShowOptions<D>,
    ) -> Handle<D> {
        let mut options = options.input(initial.into());
        if options.buttons.is_none() {
            options.buttons = Some(vec![Button::submit()]);
        }
        self.engine.show(title, options)
    }

    /// Stores the latest text of prompt `id`. Ignored for plain dialogs and
    /// once the prompt has settled.
    pub fn report_text_change(&self, id: &EntryId, text: impl Into<String>) -> bool {
        self.engine.capture_text(id, text.into())
    }

    /// Settles prompt `id` with `InputSubmitted` and its current text.
    pub fn report_submit(&self, id: &EntryId) -> bool {
        self.engine.submit_text(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::dialog::DialogEngine;
    use crate::domain::overlay::{Button, ButtonId, EntryId};
    use crate::engine::ShowOptions;
    use crate::response::Outcome;

    #[test]
    fn prompt_defaults_to_submit_button() {
        let dialogs: DialogEngine = DialogEngine::default();
        dialogs.prompt("Name?", "", ShowOptions::new().id("p"));

        let current = dialogs.current().expect("visible");
        assert!(current.is_prompt());
        assert_eq!(current.buttons, vec![Button::submit()]);
    }

    #[test]
    fn button_press_carries_captured_text() {
        let dialogs: DialogEngine = DialogEngine::default();
        let mut handle = dialogs.prompt("Rename", "draft", ShowOptions::new().id("p"));
        let id = EntryId::new("p");

        assert!(dialogs.report_text_change(&id, "final name"));
        assert!(dialogs
            .engine()
            .report_button_press(&id, &ButtonId::new(ButtonId::SUBMIT)));

        let response = handle.response_mut().try_take().expect("settled");
        assert_eq!(response.text.as_deref(), Some("final name"));
        assert_eq!(response.value(), Some("final name"));
    }

    #[test]
    fn keyboard_submit_settles_with_input() {
        let dialogs: DialogEngine = DialogEngine::default();
        let mut handle = dialogs.prompt("Tag", "", ShowOptions::new().id("p"));
        let id = EntryId::new("p");

        dialogs.report_text_change(&id, "urgent");
        assert!(dialogs.report_submit(&id));
        assert!(!dialogs.report_submit(&id));
        assert!(!dialogs.report_text_change(&id, "late"));

        let response = handle.response_mut().try_take().expect("settled");
        assert_eq!(response.outcome, Outcome::InputSubmitted("urgent".into()));
    }

    #[test]
    fn dismissed_prompt_is_cancelled_but_keeps_text() {
        let dialogs: DialogEngine = DialogEngine::default();
        let mut handle = dialogs.prompt("Comment", "", ShowOptions::new().id("p"));
        let id = EntryId::new("p");

        dialogs.report_text_change(&id, "half typed");
        assert!(dialogs.report_dismiss(&id));

        let response = handle.response_mut().try_take().expect("settled");
        assert!(response.is_cancelled());
        assert_eq!(response.text.as_deref(), Some("half typed"));
        assert_eq!(response.value(), None);
    }

    #[test]
    fn text_changes_are_ignored_for_plain_dialogs() {
        let dialogs: DialogEngine = DialogEngine::default();
        dialogs.show("Plain", ShowOptions::new().id("d"));
        assert!(!dialogs.report_text_change(&EntryId::new("d"), "x"));
        assert!(!dialogs.report_submit(&EntryId::new("d")));
    }
}
