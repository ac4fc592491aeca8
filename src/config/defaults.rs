// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by overlay kind.
//!
//! # Categories
//!
//! - **Snackbar**: Cap, auto-hide timeout and exit animation
//! - **Banner**: Cap, exit animation and cleanup fallback
//! - **Dialog**: Exit animation and cleanup fallback
//! - **Diagnostics**: Event history size

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::overlay::max_items_bounds;

// ==========================================================================
// Snackbar Defaults
// ==========================================================================

/// Default number of snackbars visible at once per placement.
pub const DEFAULT_SNACKBAR_MAX_ITEMS: usize = max_items_bounds::DEFAULT;

/// Auto-hide timeout for snackbars that set neither a timeout nor
/// `persistent` (in milliseconds).
pub const DEFAULT_SNACKBAR_TIMEOUT_MS: u64 = 5000;

/// Snackbar slide-out duration (in milliseconds).
pub const DEFAULT_SNACKBAR_ANIMATION_MS: u64 = 300;

// ==========================================================================
// Banner Defaults
// ==========================================================================

/// Default number of banners visible at once.
pub const DEFAULT_BANNER_MAX_ITEMS: usize = max_items_bounds::DEFAULT;

/// Banner cross-fade duration (in milliseconds).
pub const DEFAULT_BANNER_ANIMATION_MS: u64 = 300;

/// Removal deadline for hidden banners whose exit animation is never
/// reported (in milliseconds).
pub const DEFAULT_BANNER_CLEANUP_FALLBACK_MS: u64 = 500;

// ==========================================================================
// Dialog Defaults
// ==========================================================================

/// Dialog fade-out duration (in milliseconds).
pub const DEFAULT_DIALOG_ANIMATION_MS: u64 = 300;

/// Removal deadline for hidden dialogs (in milliseconds).
pub const DEFAULT_DIALOG_CLEANUP_FALLBACK_MS: u64 = 300;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of overlay events kept in the diagnostics history.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SNACKBAR_MAX_ITEMS >= max_items_bounds::MIN);
    assert!(DEFAULT_SNACKBAR_MAX_ITEMS <= max_items_bounds::MAX);
    assert!(DEFAULT_BANNER_MAX_ITEMS >= max_items_bounds::MIN);
    assert!(DEFAULT_BANNER_MAX_ITEMS <= max_items_bounds::MAX);

    // A snackbar must outlive its own exit animation.
    assert!(DEFAULT_SNACKBAR_TIMEOUT_MS > DEFAULT_SNACKBAR_ANIMATION_MS);

    // Fallbacks must not cut a normal exit animation short.
    assert!(DEFAULT_BANNER_CLEANUP_FALLBACK_MS >= DEFAULT_BANNER_ANIMATION_MS);
    assert!(DEFAULT_DIALOG_CLEANUP_FALLBACK_MS >= DEFAULT_DIALOG_ANIMATION_MS);

    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= buffer_capacity_bounds::MIN);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= buffer_capacity_bounds::MAX);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snackbar_defaults_are_valid() {
        assert_eq!(DEFAULT_SNACKBAR_MAX_ITEMS, 1);
        assert_eq!(DEFAULT_SNACKBAR_TIMEOUT_MS, 5000);
    }

    #[test]
    fn cleanup_fallbacks_cover_animations() {
        assert_eq!(DEFAULT_BANNER_CLEANUP_FALLBACK_MS, 500);
        assert_eq!(DEFAULT_DIALOG_CLEANUP_FALLBACK_MS, 300);
        assert!(DEFAULT_BANNER_CLEANUP_FALLBACK_MS >= DEFAULT_BANNER_ANIMATION_MS);
    }

    #[test]
    fn diagnostics_defaults_are_valid() {
        assert_eq!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, 256);
    }
}
