// SPDX-License-Identifier: MPL-2.0
//! One engine per overlay kind, built together from one configuration.
//!
//! Construct an [`Overlays`] once near the root of the application and clone
//! it (or the individual engines) into whatever needs to show something.

use crate::banner::{self, BannerEngine};
use crate::config::Config;
use crate::diagnostics::DiagnosticsHandle;
use crate::dialog::DialogEngine;
use crate::domain::diagnostics::BufferCapacity;
use crate::error_boundary::ErrorBoundary;
use crate::snackbar::{self, SnackbarEngine};

#[derive(Debug)]
pub struct Overlays<D = ()> {
    pub snackbars: SnackbarEngine<D>,
    pub banners: BannerEngine<D>,
    pub dialogs: DialogEngine<D>,
    diagnostics: DiagnosticsHandle,
}

impl<D> Clone for Overlays<D> {
    fn clone(&self) -> Self {
        Self {
            snackbars: self.snackbars.clone(),
            banners: self.banners.clone(),
            dialogs: self.dialogs.clone(),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

impl<D: Send + 'static> Default for Overlays<D> {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl<D: Send + 'static> Overlays<D> {
    /// Builds the three engines, all recording into one diagnostics history.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let diagnostics =
            DiagnosticsHandle::new(BufferCapacity::new(config.diagnostics.buffer_capacity));

        let snackbars = snackbar::engine(&config.snackbar);
        let banners = banner::engine(&config.banner);
        let dialogs = DialogEngine::new(&config.dialog);
        snackbars.set_diagnostics(diagnostics.clone());
        banners.set_diagnostics(diagnostics.clone());
        dialogs.engine().set_diagnostics(diagnostics.clone());

        Self {
            snackbars,
            banners,
            dialogs,
            diagnostics,
        }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        &self.diagnostics
    }

    /// An error boundary reporting through this bundle's dialogs.
    #[must_use]
    pub fn error_boundary(&self) -> ErrorBoundary<D> {
        ErrorBoundary::new(self.dialogs.clone())
    }

    /// Whether any overlay of any kind is tracked.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.snackbars.has_active() || self.banners.has_active() || self.dialogs.has_active()
    }
}
