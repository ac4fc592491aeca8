// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for overlay engines.
//!
//! Engines record each lifecycle transition (admission, promotion,
//! settlement, late settlement, removal) into a memory-bounded history when a
//! [`DiagnosticsHandle`] is attached. This complements the `tracing` output:
//! the history can be inspected at runtime, for instance by a debug overlay
//! or by tests asserting the order of transitions.
//!
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//! - [`OverlayEvent`]: one recorded transition
//! - [`BufferCapacity`]: validated history size

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsHandle;
pub use events::{OverlayEvent, OverlayEventKind};
