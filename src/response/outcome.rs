// SPDX-License-Identifier: MPL-2.0
//! Settled response values.

use crate::domain::overlay::{ButtonId, ButtonRole, EntryId};
use std::fmt;

/// How an entry's response was settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The entry stayed visible for its whole timeout.
    Timeout,
    /// The user pressed one of the entry's buttons.
    ButtonPressed { button: ButtonId, role: ButtonRole },
    /// `hide` was called for the entry.
    HiddenByExternalCall,
    /// A dismissable dialog was closed by an outside tap or back gesture.
    Dismissed,
    /// A prompt's text was submitted from the keyboard.
    InputSubmitted(String),
    /// The settling side went away without settling: the engine was dropped,
    /// or the entry was replaced by a re-show and its handle discarded.
    Abandoned,
}

impl Outcome {
    #[must_use]
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Timeout => OutcomeKind::Timeout,
            Outcome::ButtonPressed { .. } => OutcomeKind::ButtonPressed,
            Outcome::HiddenByExternalCall => OutcomeKind::HiddenByExternalCall,
            Outcome::Dismissed => OutcomeKind::Dismissed,
            Outcome::InputSubmitted(_) => OutcomeKind::InputSubmitted,
            Outcome::Abandoned => OutcomeKind::Abandoned,
        }
    }
}

/// Fieldless mirror of [`Outcome`], used in logs and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Timeout,
    ButtonPressed,
    HiddenByExternalCall,
    Dismissed,
    InputSubmitted,
    Abandoned,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutcomeKind::Timeout => "timeout",
            OutcomeKind::ButtonPressed => "button-pressed",
            OutcomeKind::HiddenByExternalCall => "hidden-by-external-call",
            OutcomeKind::Dismissed => "dismissed",
            OutcomeKind::InputSubmitted => "input-submitted",
            OutcomeKind::Abandoned => "abandoned",
        };
        f.write_str(name)
    }
}

/// Final result delivered to the caller of `show`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub id: EntryId,
    pub outcome: Outcome,
    /// Last text captured by a prompt at settlement time.
    pub text: Option<String>,
}

impl Response {
    /// The pressed button, if the response came from a button press.
    #[must_use]
    pub fn button(&self) -> Option<&ButtonId> {
        match &self.outcome {
            Outcome::ButtonPressed { button, .. } => Some(button),
            _ => None,
        }
    }

    /// True when the user backed out: a dismissal or a cancel-role button.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Dismissed
                | Outcome::ButtonPressed {
                    role: ButtonRole::Cancel,
                    ..
                }
        )
    }

    /// The value a prompt produced, unless the user cancelled.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::InputSubmitted(text) => Some(text),
            Outcome::ButtonPressed {
                role: ButtonRole::Accept,
                ..
            } => self.text.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(outcome: Outcome, text: Option<&str>) -> Response {
        Response {
            id: EntryId::new("prompt"),
            outcome,
            text: text.map(str::to_string),
        }
    }

    #[test]
    fn cancel_button_counts_as_cancelled() {
        let pressed = response(
            Outcome::ButtonPressed {
                button: ButtonId::new("cancel"),
                role: ButtonRole::Cancel,
            },
            Some("draft"),
        );
        assert!(pressed.is_cancelled());
        assert_eq!(pressed.value(), None);
        assert_eq!(pressed.button(), Some(&ButtonId::new("cancel")));
    }

    #[test]
    fn accept_button_yields_captured_text() {
        let pressed = response(
            Outcome::ButtonPressed {
                button: ButtonId::new(ButtonId::SUBMIT),
                role: ButtonRole::Accept,
            },
            Some("hello"),
        );
        assert!(!pressed.is_cancelled());
        assert_eq!(pressed.value(), Some("hello"));
    }

    #[test]
    fn dismissal_has_no_button_and_no_value() {
        let dismissed = response(Outcome::Dismissed, Some("typed"));
        assert!(dismissed.is_cancelled());
        assert!(dismissed.button().is_none());
        assert!(dismissed.value().is_none());
    }

    #[test]
    fn outcome_kind_names_are_kebab_case() {
        assert_eq!(
            Outcome::HiddenByExternalCall.kind().to_string(),
            "hidden-by-external-call"
        );
        assert_eq!(
            Outcome::InputSubmitted("x".into()).kind(),
            OutcomeKind::InputSubmitted
        );
    }
}
