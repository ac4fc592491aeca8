// SPDX-License-Identifier: MPL-2.0
//! Overlay newtypes.
//!
//! This module provides type-safe wrappers for overlay identity and
//! admission capacity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// EntryId
// =============================================================================

/// Identity of one tracked overlay entry.
///
/// Ids are unique among the entries currently tracked by one engine, not
/// globally. Callers may supply their own (to update an entry in place by
/// re-showing it) or let the engine generate one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl EntryId {
    /// Wraps a caller-supplied id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Produces a fresh id from a process-wide counter.
    ///
    /// Generated ids carry a `_` prefix; engines still check them against
    /// caller-supplied ids before use.
    #[must_use]
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("_{n:x}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// ButtonId
// =============================================================================

/// Identity of a button within one entry, routed back when it is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ButtonId(String);

impl ButtonId {
    /// Id of the implicit "Hide" button added to persistent snackbars and
    /// untimed banners.
    pub const HIDE: &'static str = "hide";
    /// Id of the implicit "Ok" button added to dialogs.
    pub const OK: &'static str = "ok";
    /// Id of the implicit "Submit" button added to prompts.
    pub const SUBMIT: &'static str = "submit";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ButtonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<&str> for ButtonId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// MaxSimultaneousItems
// =============================================================================

/// Concurrency cap bounds (1 to 16 visible entries per lane).
pub mod max_items_bounds {
    /// Minimum number of simultaneously visible entries.
    pub const MIN: usize = 1;
    /// Maximum number of simultaneously visible entries.
    pub const MAX: usize = 16;
    /// Default number of simultaneously visible entries.
    pub const DEFAULT: usize = 1;
}

/// How many entries may hold `Status::Visible` at once.
///
/// A cap of zero would starve the queue forever, so values are clamped
/// into `1..=16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSimultaneousItems(usize);

impl MaxSimultaneousItems {
    /// The singleton cap used by modal dialogs.
    pub const ONE: Self = Self(1);

    /// Creates a new cap, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_items_bounds::MIN, max_items_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxSimultaneousItems {
    fn default() -> Self {
        Self(max_items_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with('_'));
    }

    #[test]
    fn caller_ids_compare_by_value() {
        assert_eq!(EntryId::from("upload"), EntryId::new("upload".to_string()));
        assert_eq!(EntryId::from("upload").to_string(), "upload");
    }

    #[test]
    fn button_id_compares_with_str() {
        assert!(ButtonId::new(ButtonId::HIDE) == "hide");
    }

    #[test]
    fn max_items_clamps_to_valid_range() {
        assert_eq!(MaxSimultaneousItems::new(0).value(), max_items_bounds::MIN);
        assert_eq!(MaxSimultaneousItems::new(99).value(), max_items_bounds::MAX);
        assert_eq!(MaxSimultaneousItems::new(3).value(), 3);
    }

    #[test]
    fn max_items_default_is_one() {
        assert_eq!(MaxSimultaneousItems::default(), MaxSimultaneousItems::ONE);
    }
}
