// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered stack of live notifications, newest first.
//! It enforces the eviction ceiling, keeps every node's stacking offset in
//! sync with its position, and applies timer-driven transitions.

use super::notification::{Notification, NotificationId, State};
use crate::config::Config;
use crate::surface::Surface;
use crate::timer::{Phase, TimerEvent, Timers};
use std::collections::VecDeque;

/// Manages the stack of visible notifications.
#[derive(Debug)]
pub struct Manager {
    /// Live notifications (newest first).
    visible: VecDeque<Notification>,
    next_id: u64,
    config: Config,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Manager {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            visible: VecDeque::new(),
            next_id: 0,
            config,
        }
    }

    /// Pushes a new notification on top of the stack.
    ///
    /// When the stack is full, the oldest notification is destroyed first.
    /// Never fails.
    pub fn push<S, T>(&mut self, message: &str, surface: &mut S, timers: &mut T) -> NotificationId
    where
        S: Surface + ?Sized,
        T: Timers + ?Sized,
    {
        if self.visible.len() >= self.config.max_notifications() {
            let oldest = self.visible.len() - 1;
            tracing::debug!(
                evicted = ?self.visible[oldest].id(),
                "notification stack full, evicting oldest"
            );
            self.kill(oldest, surface, timers);
        }

        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let notification = Notification::create(id, message, &self.config, surface, timers);
        let node = notification.node();
        self.visible.push_front(notification);
        self.restack(surface);
        surface.attach(node);

        tracing::debug!(?id, stacked = self.visible.len(), "notification pushed");
        id
    }

    /// Switches a pending notification to its active style.
    ///
    /// Returns `false` if the notification is unknown or already active.
    pub fn activate<S, T>(&mut self, id: NotificationId, surface: &mut S, timers: &mut T) -> bool
    where
        S: Surface + ?Sized,
        T: Timers + ?Sized,
    {
        match self.visible.iter_mut().find(|n| n.id() == id) {
            Some(notification) => {
                let activated = notification.activate(surface, timers);
                if activated {
                    tracing::trace!(?id, "notification activated");
                }
                activated
            }
            None => false,
        }
    }

    /// Destroys a notification whose lifespan ran out.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn expire<S, T>(&mut self, id: NotificationId, surface: &mut S, timers: &mut T) -> bool
    where
        S: Surface + ?Sized,
        T: Timers + ?Sized,
    {
        let expired = self.dismiss(id, surface, timers);
        if expired {
            tracing::trace!(?id, "notification expired");
        }
        expired
    }

    /// Destroys a notification before its lifespan ends.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss<S, T>(&mut self, id: NotificationId, surface: &mut S, timers: &mut T) -> bool
    where
        S: Surface + ?Sized,
        T: Timers + ?Sized,
    {
        match self.position(id) {
            Some(index) => {
                self.kill(index, surface, timers);
                true
            }
            None => false,
        }
    }

    /// Applies a fired timer. Events for notifications that are gone are ignored.
    pub fn handle_timer<S, T>(&mut self, event: TimerEvent, surface: &mut S, timers: &mut T) -> bool
    where
        S: Surface + ?Sized,
        T: Timers + ?Sized,
    {
        match event.phase {
            Phase::Activate => self.activate(event.notification, surface, timers),
            Phase::Expire => self.expire(event.notification, surface, timers),
        }
    }

    /// Destroys every notification.
    pub fn clear<S, T>(&mut self, surface: &mut S, timers: &mut T)
    where
        S: Surface + ?Sized,
        T: Timers + ?Sized,
    {
        for mut notification in self.visible.drain(..) {
            notification.destroy(surface, timers);
        }
    }

    /// Returns the live notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible.iter().find(|n| n.id() == id)
    }

    /// Position of a notification counted from the top of the stack.
    #[must_use]
    pub fn position(&self, id: NotificationId) -> Option<usize> {
        self.visible.iter().position(|n| n.id() == id)
    }

    /// Stacking offset assigned to the notification at `index`.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.config.stack_spacing)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn kill<S, T>(&mut self, index: usize, surface: &mut S, timers: &mut T)
    where
        S: Surface + ?Sized,
        T: Timers + ?Sized,
    {
        if let Some(mut notification) = self.visible.remove(index) {
            notification.destroy(surface, timers);
            debug_assert_eq!(notification.state(), State::Dead);
        }
        self.restack(surface);
    }

    fn restack<S>(&self, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        for (index, notification) in self.visible.iter().enumerate() {
            surface.set_offset(notification.node(), self.offset_of(index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Class, Tree, Visibility};
    use crate::timer::TimerQueue;
    use std::time::Duration;

    fn setup(max_notifications: usize) -> (Manager, Tree, TimerQueue) {
        let config = Config {
            max_notifications,
            ..Config::default()
        };
        (Manager::new(config), Tree::new(), TimerQueue::new())
    }

    fn messages(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::message).collect()
    }

    fn offsets(manager: &Manager, tree: &Tree) -> Vec<u32> {
        manager
            .visible()
            .map(|n| tree.node(n.node()).unwrap().offset())
            .collect()
    }

    fn run(manager: &mut Manager, tree: &mut Tree, timers: &mut TimerQueue, elapsed: Duration) {
        timers.advance(elapsed);
        while let Some(event) = timers.pop_due() {
            manager.handle_timer(event, tree, timers);
        }
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::default();
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
    }

    #[test]
    fn push_stacks_newest_first_with_offsets() {
        let (mut manager, mut tree, mut timers) = setup(6);

        manager.push("A", &mut tree, &mut timers);
        manager.push("B", &mut tree, &mut timers);
        manager.push("C", &mut tree, &mut timers);

        assert_eq!(messages(&manager), vec!["C", "B", "A"]);
        assert_eq!(offsets(&manager, &tree), vec![0, 80, 160]);
    }

    #[test]
    fn push_attaches_node_to_surface() {
        let (mut manager, mut tree, mut timers) = setup(6);
        let id = manager.push("A", &mut tree, &mut timers);

        let node = manager.get(id).unwrap().node();
        assert!(tree.is_attached(node));
        assert_eq!(tree.roots(), &[node]);
    }

    #[test]
    fn expiring_middle_notification_compacts_stack() {
        let (mut manager, mut tree, mut timers) = setup(6);
        manager.push("A", &mut tree, &mut timers);
        let b = manager.push("B", &mut tree, &mut timers);
        manager.push("C", &mut tree, &mut timers);

        let b_node = manager.get(b).unwrap().node();
        assert!(manager.expire(b, &mut tree, &mut timers));

        assert_eq!(messages(&manager), vec!["C", "A"]);
        assert_eq!(offsets(&manager, &tree), vec![0, 80]);
        assert!(tree.node(b_node).is_none());
    }

    #[test]
    fn push_at_capacity_evicts_exactly_the_oldest() {
        let (mut manager, mut tree, mut timers) = setup(3);
        let oldest = manager.push("A", &mut tree, &mut timers);
        manager.push("B", &mut tree, &mut timers);
        manager.push("C", &mut tree, &mut timers);
        let oldest_node = manager.get(oldest).unwrap().node();

        manager.push("D", &mut tree, &mut timers);

        assert_eq!(messages(&manager), vec!["D", "C", "B"]);
        assert_eq!(offsets(&manager, &tree), vec![0, 80, 160]);
        assert!(manager.get(oldest).is_none());
        assert!(tree.node(oldest_node).is_none());
        // Evicted timers are cancelled; three notifications with two timers each remain.
        assert_eq!(timers.pending(), 6);
    }

    #[test]
    fn length_never_exceeds_ceiling() {
        let (mut manager, mut tree, mut timers) = setup(6);
        for i in 0..50 {
            let id = manager.push(&format!("n{i}"), &mut tree, &mut timers);
            assert!(manager.len() <= 6);
            assert_eq!(manager.position(id), Some(0));
        }
        assert_eq!(tree.roots().len(), 6);
    }

    #[test]
    fn timers_activate_then_expire() {
        let (mut manager, mut tree, mut timers) = setup(6);
        let id = manager.push("A", &mut tree, &mut timers);

        run(&mut manager, &mut tree, &mut timers, Duration::from_millis(10));
        let notification = manager.get(id).unwrap();
        assert!(notification.is_active());
        assert_eq!(
            tree.node(notification.node()).unwrap().class(),
            Class::Notification(Visibility::Active)
        );

        run(&mut manager, &mut tree, &mut timers, Duration::from_millis(3990));
        assert!(manager.is_empty());
        assert!(tree.is_empty());
        assert!(timers.is_idle());
    }

    #[test]
    fn stale_timer_events_are_ignored() {
        let (mut manager, mut tree, mut timers) = setup(6);
        let id = manager.push("A", &mut tree, &mut timers);
        assert!(manager.dismiss(id, &mut tree, &mut timers));

        assert!(!manager.handle_timer(TimerEvent::activate(id), &mut tree, &mut timers));
        assert!(!manager.handle_timer(TimerEvent::expire(id), &mut tree, &mut timers));
        assert!(!manager.dismiss(id, &mut tree, &mut timers));
    }

    #[test]
    fn expiry_shorter_than_activation_never_activates() {
        let config = Config {
            notification_duration_ms: 5,
            activation_delay_ms: 10,
            ..Config::default()
        };
        let mut manager = Manager::new(config);
        let mut tree = Tree::new();
        let mut timers = TimerQueue::new();
        manager.push("A", &mut tree, &mut timers);

        run(&mut manager, &mut tree, &mut timers, Duration::from_millis(5));
        assert!(manager.is_empty());
        assert!(timers.is_idle());
    }

    #[test]
    fn clear_destroys_everything() {
        let (mut manager, mut tree, mut timers) = setup(6);
        for i in 0..4 {
            manager.push(&format!("n{i}"), &mut tree, &mut timers);
        }

        manager.clear(&mut tree, &mut timers);

        assert!(manager.is_empty());
        assert!(tree.is_empty());
        assert!(timers.is_idle());
    }

    #[test]
    fn single_slot_stack_replaces_notification() {
        let (mut manager, mut tree, mut timers) = setup(0);
        manager.push("A", &mut tree, &mut timers);
        manager.push("B", &mut tree, &mut timers);

        assert_eq!(messages(&manager), vec!["B"]);
    }
}
