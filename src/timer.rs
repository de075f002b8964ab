// SPDX-License-Identifier: MPL-2.0
//! One-shot timers for the notification lifecycle.
//!
//! Components never hold callbacks. They schedule a [`TimerEvent`] and keep
//! the returned [`TimerHandle`] so they can cancel it later. The host feeds
//! fired events back into [`Herald::handle_timer`](crate::Herald::handle_timer).
//!
//! [`TimerQueue`] is a deterministic implementation driven by elapsed time,
//! suited to tick-based event loops such as an iced subscription.

use crate::notifications::NotificationId;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Identifies a scheduled timer so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Which lifecycle step a timer triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Switch the notification to its active style.
    Activate,
    /// Destroy the notification.
    Expire,
}

/// Payload delivered when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerEvent {
    pub notification: NotificationId,
    pub phase: Phase,
}

impl TimerEvent {
    #[must_use]
    pub fn activate(notification: NotificationId) -> Self {
        Self {
            notification,
            phase: Phase::Activate,
        }
    }

    #[must_use]
    pub fn expire(notification: NotificationId) -> Self {
        Self {
            notification,
            phase: Phase::Expire,
        }
    }
}

/// Capability to fire an event once after a delay.
pub trait Timers {
    /// Schedules `event` to fire once after `delay`.
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle;

    /// Cancels a pending timer. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Virtual-clock timer queue.
///
/// Time only moves through [`advance`](Self::advance). Due events are then
/// drained one by one with [`pop_due`](Self::pop_due), earliest deadline
/// first and in scheduling order for equal deadlines.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_handle: u64,
    pending: BTreeMap<(Duration, TimerHandle), TimerEvent>,
    deadlines: HashMap<TimerHandle, Duration>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the queue was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time left until the next deadline, if any timer is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .keys()
            .next()
            .map(|(deadline, _)| deadline.saturating_sub(self.now))
    }

    /// Moves the clock forward.
    pub fn advance(&mut self, elapsed: Duration) {
        self.now += elapsed;
    }

    /// Removes and returns the earliest event whose deadline has passed.
    pub fn pop_due(&mut self) -> Option<TimerEvent> {
        let (&key, _) = self.pending.first_key_value()?;
        if key.0 > self.now {
            return None;
        }
        self.deadlines.remove(&key.1);
        self.pending.remove(&key)
    }
}

impl Timers for TimerQueue {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        let deadline = self.now + delay;
        self.pending.insert((deadline, handle), event);
        self.deadlines.insert(handle, deadline);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(deadline) = self.deadlines.remove(&handle) {
            self.pending.remove(&(deadline, handle));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> NotificationId {
        NotificationId::from_raw(raw)
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::from_millis(10), TimerEvent::activate(id(0)));

        queue.advance(Duration::from_millis(9));
        assert_eq!(queue.pop_due(), None);
        assert_eq!(queue.next_deadline(), Some(Duration::from_millis(1)));

        queue.advance(Duration::from_millis(1));
        assert_eq!(queue.pop_due(), Some(TimerEvent::activate(id(0))));
        assert!(queue.is_idle());
    }

    #[test]
    fn events_fire_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::from_millis(4000), TimerEvent::expire(id(0)));
        queue.schedule(Duration::from_millis(10), TimerEvent::activate(id(0)));

        queue.advance(Duration::from_secs(5));
        assert_eq!(queue.pop_due(), Some(TimerEvent::activate(id(0))));
        assert_eq!(queue.pop_due(), Some(TimerEvent::expire(id(0))));
        assert_eq!(queue.pop_due(), None);
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::from_millis(5), TimerEvent::expire(id(1)));
        queue.schedule(Duration::from_millis(5), TimerEvent::expire(id(2)));

        queue.advance(Duration::from_millis(5));
        assert_eq!(queue.pop_due(), Some(TimerEvent::expire(id(1))));
        assert_eq!(queue.pop_due(), Some(TimerEvent::expire(id(2))));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(Duration::from_millis(10), TimerEvent::activate(id(0)));
        queue.cancel(handle);
        // Cancelling twice is harmless.
        queue.cancel(handle);

        queue.advance(Duration::from_secs(1));
        assert_eq!(queue.pop_due(), None);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn deadlines_are_relative_to_current_time() {
        let mut queue = TimerQueue::new();
        queue.advance(Duration::from_millis(100));
        queue.schedule(Duration::from_millis(10), TimerEvent::activate(id(0)));

        assert_eq!(queue.now(), Duration::from_millis(100));
        assert_eq!(queue.next_deadline(), Some(Duration::from_millis(10)));
    }
}
