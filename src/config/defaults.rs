// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Durations are expressed in milliseconds and
//! offsets in surface units.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifespan of a notification, counted from its creation.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 4000;

/// Delay between inserting a notification and switching it to active style.
///
/// The node must be on the surface for at least one frame before the switch
/// so the entry transition can play.
pub const DEFAULT_ACTIVATION_DELAY_MS: u64 = 10;

/// Maximum number of notifications stacked at once.
pub const DEFAULT_MAX_NOTIFICATIONS: usize = 6;

/// Lower bound applied to `max_notifications`.
pub const MIN_MAX_NOTIFICATIONS: usize = 1;

/// Distance between two stacked notifications.
pub const DEFAULT_STACK_SPACING: u32 = 80;

/// Notification messages are cut to this many characters.
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 120;

// ==========================================================================
// Modal Defaults
// ==========================================================================

/// Label of the accept control.
pub const ACCEPT_LABEL: &str = "ok";

/// Label of the refuse control.
pub const REFUSE_LABEL: &str = "cancel";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_NOTIFICATION_DURATION_MS > DEFAULT_ACTIVATION_DELAY_MS);
    assert!(DEFAULT_MAX_NOTIFICATIONS >= MIN_MAX_NOTIFICATIONS);
    assert!(DEFAULT_MAX_MESSAGE_CHARS > 0);
};
