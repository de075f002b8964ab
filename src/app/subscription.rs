// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick interval while notification timers are pending (about one frame).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates a periodic tick subscription that drives notification timers.
///
/// Nothing is scheduled while no timer is pending.
pub fn create_tick_subscription(timers_pending: bool) -> Subscription<Message> {
    if timers_pending {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
