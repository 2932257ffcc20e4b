// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toasts**: Notification capacity and removal delay
//! - **Layout**: Initial shell layout

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default maximum number of toasts kept at once.
pub const DEFAULT_TOAST_LIMIT: usize = 1;

/// Minimum toast limit.
pub const MIN_TOAST_LIMIT: usize = 1;

/// Maximum toast limit.
pub const MAX_TOAST_LIMIT: usize = 20;

/// Default delay between dismissing a toast and removing it (in milliseconds).
pub const DEFAULT_TOAST_REMOVE_DELAY_MS: u64 = 5_000;

/// Maximum removal delay (in milliseconds).
pub const MAX_TOAST_REMOVE_DELAY_MS: u64 = 600_000;

/// Interval at which pending removals are checked (in milliseconds).
pub const TOAST_TICK_INTERVAL_MS: u64 = 250;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Whether the sidebar is open at startup.
pub const DEFAULT_SIDEBAR_OPEN: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_LIMIT >= 1);
    assert!(DEFAULT_TOAST_LIMIT >= MIN_TOAST_LIMIT);
    assert!(DEFAULT_TOAST_LIMIT <= MAX_TOAST_LIMIT);
    assert!(DEFAULT_TOAST_REMOVE_DELAY_MS <= MAX_TOAST_REMOVE_DELAY_MS);
    assert!(TOAST_TICK_INTERVAL_MS > 0);
};
