// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications are non-interactive messages that slide in, stack on top
//! of each other and expire on their own.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with its node and pending timers
//! - [`manager`] - `Manager` owning the stack, eviction and offsets
//!
//! # Lifecycle
//!
//! A notification starts `Pending` with its node in the inactive style, turns
//! `Active` when its activation timer fires, and is destroyed when its expiry
//! timer fires or when a newer notification evicts it from a full stack.

mod manager;
mod notification;

pub use manager::Manager;
pub use notification::{truncate, Notification, NotificationId, State};
