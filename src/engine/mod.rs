// SPDX-License-Identifier: MPL-2.0
//! Generic overlay queue engine shared by snackbars, banners and dialogs.
//!
//! A [`QueueEngine`] owns the ordered list of entries for one overlay family.
//! Callers request entries with [`QueueEngine::show`] and get back a
//! [`Handle`] resolving to a [`Response`](crate::response::Response); the
//! presentation layer reads [`QueueEngine::rendered`] and reports user
//! interaction and animation completion back.
//!
//! # Lifecycle
//!
//! ```text
//! show ──▶ Queued ──promote──▶ Visible ──settle──▶ Hidden ──cleanup──▶ (removed)
//!            │                                                  ▲
//!            └──────────── settle (never rendered) ─────────────┘
//! ```

mod entry;
mod handle;
mod options;
mod preset;
mod queue;
mod settings;
mod timers;

pub use entry::EntryView;
pub use handle::{Handle, Hider};
pub use options::ShowOptions;
pub use preset::Preset;
pub use queue::QueueEngine;
pub use settings::{EngineSettings, FallbackButtons};
