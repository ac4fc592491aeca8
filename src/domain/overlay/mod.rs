// SPDX-License-Identifier: MPL-2.0
//! Overlay domain types.
//!
//! Identity ([`EntryId`], [`ButtonId`]), admission capacity
//! ([`MaxSimultaneousItems`]) and the lifecycle vocabulary shared by every
//! engine instance ([`Status`], [`Placement`], [`Lanes`], [`Vacancy`], [`OverlayKind`]).

mod button;
mod lifecycle;
mod newtypes;

pub use button::{Button, ButtonRole};
pub use lifecycle::{Lanes, OverlayKind, Placement, Status, Vacancy};
pub use newtypes::{max_items_bounds, ButtonId, EntryId, MaxSimultaneousItems};
