// SPDX-License-Identifier: MPL-2.0
//! Reports failures from caller code as dialogs.
//!
//! Errors raised by the work a button press triggers are not the engine's
//! concern; an outer layer catches them and reports them through the same
//! dialog engine, titled with the error message and described with its
//! source chain.

use crate::dialog::DialogEngine;
use crate::engine::{Handle, ShowOptions};
use std::error::Error as StdError;

#[derive(Debug)]
pub struct ErrorBoundary<D = ()> {
    dialogs: DialogEngine<D>,
}

impl<D> Clone for ErrorBoundary<D> {
    fn clone(&self) -> Self {
        Self {
            dialogs: self.dialogs.clone(),
        }
    }
}

impl<D: Send + 'static> ErrorBoundary<D> {
    #[must_use]
    pub fn new(dialogs: DialogEngine<D>) -> Self {
        Self { dialogs }
    }

    /// Logs `err` and shows it in a dialog.
    pub fn report(&self, err: &(dyn StdError + 'static)) -> Handle<D> {
        tracing::error!(error = %err, "operation failed");
        let mut options = ShowOptions::new();
        if let Some(chain) = source_chain(err) {
            options = options.description(chain);
        }
        self.dialogs.show(err.to_string(), options)
    }

    /// Passes `Ok` values through; reports errors and yields `None`.
    pub fn guard<T, E>(&self, result: Result<T, E>) -> Option<T>
    where
        E: StdError + 'static,
    {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                // Nobody awaits the answer; the dialog stays until the user
                // closes it.
                drop(self.report(&err));
                None
            }
        }
    }
}

/// One line per underlying cause, outermost first.
fn source_chain(err: &(dyn StdError + 'static)) -> Option<String> {
    let mut causes = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    (!causes.is_empty()).then(|| causes.join("\n"))
}
