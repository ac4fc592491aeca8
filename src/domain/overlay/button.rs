// SPDX-License-Identifier: MPL-2.0
//! Buttons attached to an overlay entry.
//!
//! The engine never runs button behavior. It only routes the pressed
//! [`ButtonId`] back to whoever awaits the entry's response.

use super::ButtonId;

/// Meaning of a button for the caller awaiting the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonRole {
    #[default]
    Accept,
    /// Pressing it counts as a cancellation, like dismissing the overlay.
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub id: ButtonId,
    pub role: ButtonRole,
}

impl Button {
    pub fn new(label: impl Into<String>, id: impl Into<ButtonId>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
            role: ButtonRole::Accept,
        }
    }

    /// A button whose press cancels the request.
    pub fn cancel(label: impl Into<String>, id: impl Into<ButtonId>) -> Self {
        Self {
            role: ButtonRole::Cancel,
            ..Self::new(label, id)
        }
    }

    pub(crate) fn hide() -> Self {
        Self::new("Hide", ButtonId::HIDE)
    }

    pub(crate) fn ok() -> Self {
        Self::new("Ok", ButtonId::OK)
    }

    pub(crate) fn submit() -> Self {
        Self::new("Submit", ButtonId::SUBMIT)
    }
}
