// SPDX-License-Identifier: MPL-2.0
//! Domain layer - overlay value objects with no dependencies beyond `std`.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`overlay`]: Overlay identity, capacity and lifecycle types
//!   ([`EntryId`](overlay::EntryId), [`MaxSimultaneousItems`](overlay::MaxSimultaneousItems),
//!   [`Status`](overlay::Status), [`Button`](overlay::Button))

pub mod diagnostics;
pub mod overlay;
