// SPDX-License-Identifier: MPL-2.0
//! `telegraph` queues and resolves transient overlays: snackbars, banners and
//! modal dialogs.
//!
//! Application code asks an engine to show something and gets back a handle
//! whose response settles exactly once: on timeout, button press,
//! programmatic hide or dismissal. The engine decides what is visible, queues
//! what is not, and promotes queued entries first-in first-out. Drawing is
//! left to a presentation adapter (an iced one ships behind the `widgets`
//! feature).
//!
//! ```no_run
//! use telegraph::engine::ShowOptions;
//! use telegraph::overlays::Overlays;
//!
//! # async fn demo() {
//! let overlays: Overlays = Overlays::default();
//! let response = overlays
//!     .dialogs
//!     .show("Discard draft?", ShowOptions::new())
//!     .await;
//! if !response.is_cancelled() {
//!     // discard
//! }
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/telegraph/0.1.0")]

pub mod banner;
pub mod config;
pub mod diagnostics;
pub mod dialog;
pub mod domain;
pub mod engine;
pub mod error;
pub mod error_boundary;
pub mod overlays;
pub mod presentation;
pub mod response;
pub mod snackbar;
mod sync;
#[cfg(feature = "widgets")]
pub mod ui;
