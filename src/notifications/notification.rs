// SPDX-License-Identifier: MPL-2.0
//! A single transient notification.
//!
//! Each notification owns one surface node and up to two pending timers:
//! the activation timer switches the node to its active style shortly after
//! insertion, and the expiry timer destroys it.

use crate::config::Config;
use crate::surface::{Class, NodeId, Surface, Visibility};
use crate::timer::{TimerEvent, TimerHandle, Timers};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Lifecycle state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// On the surface, waiting for its activation timer.
    #[default]
    Pending,
    Active,
    /// Destroyed. Never observable through the manager.
    Dead,
}

/// A non-interactive, self-expiring message.
#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    node: NodeId,
    message: String,
    state: State,
    activation: Option<TimerHandle>,
    expiry: Option<TimerHandle>,
}

impl Notification {
    /// Allocates the node in its inactive style and schedules both timers.
    ///
    /// The node is not attached here; the manager attaches it once the
    /// notification has its place in the stack.
    pub(crate) fn create<S, T>(
        id: NotificationId,
        message: &str,
        config: &Config,
        surface: &mut S,
        timers: &mut T,
    ) -> Self
    where
        S: Surface + ?Sized,
        T: Timers + ?Sized,
    {
        let message = truncate(message, config.max_message_chars);

        let node = surface.create_node(Class::Notification(Visibility::Inactive));
        surface.set_text(node, &message);

        let expiry = timers.schedule(config.notification_duration(), TimerEvent::expire(id));
        let activation = timers.schedule(config.activation_delay(), TimerEvent::activate(id));

        Self {
            id,
            node,
            message,
            state: State::Pending,
            activation: Some(activation),
            expiry: Some(expiry),
        }
    }

    /// Switches to the active style. Returns `false` if not pending.
    pub(crate) fn activate<S, T>(&mut self, surface: &mut S, timers: &mut T) -> bool
    where
        S: Surface + ?Sized,
        T: Timers + ?Sized,
    {
        if self.state != State::Pending {
            return false;
        }
        self.state = State::Active;
        surface.set_class(self.node, Class::Notification(Visibility::Active));
        if let Some(handle) = self.activation.take() {
            timers.cancel(handle);
        }
        true
    }

    /// Cancels remaining timers and takes the node off the surface.
    pub(crate) fn destroy<S, T>(&mut self, surface: &mut S, timers: &mut T)
    where
        S: Surface + ?Sized,
        T: Timers + ?Sized,
    {
        if self.state == State::Dead {
            return;
        }
        for handle in [self.expiry.take(), self.activation.take()].into_iter().flatten() {
            timers.cancel(handle);
        }
        self.state = State::Dead;
        surface.detach(self.node);
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The displayed message, already truncated.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == State::Active
    }
}

/// Cuts `message` to at most `max_chars` characters.
#[must_use]
pub fn truncate(message: &str, max_chars: usize) -> String {
    match message.char_indices().nth(max_chars) {
        Some((end, _)) => message[..end].to_owned(),
        None => message.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Tree;
    use crate::timer::TimerQueue;
    use std::time::Duration;

    fn create(message: &str) -> (Notification, Tree, TimerQueue) {
        let mut tree = Tree::new();
        let mut timers = TimerQueue::new();
        let notification = Notification::create(
            NotificationId::from_raw(7),
            message,
            &Config::default(),
            &mut tree,
            &mut timers,
        );
        (notification, tree, timers)
    }

    #[test]
    fn new_notification_is_pending_and_inactive() {
        let (notification, tree, timers) = create("saved");

        assert_eq!(notification.state(), State::Pending);
        let node = tree.node(notification.node()).unwrap();
        assert_eq!(node.class(), Class::Notification(Visibility::Inactive));
        assert_eq!(node.text(), "saved");
        assert_eq!(timers.pending(), 2);
    }

    #[test]
    fn activation_timer_fires_first() {
        let (notification, _tree, mut timers) = create("saved");

        timers.advance(Duration::from_secs(10));
        assert_eq!(timers.pop_due(), Some(TimerEvent::activate(notification.id())));
        assert_eq!(timers.pop_due(), Some(TimerEvent::expire(notification.id())));
    }

    #[test]
    fn activate_is_idempotent_and_cancels_its_timer() {
        let (mut notification, mut tree, mut timers) = create("saved");

        assert!(notification.activate(&mut tree, &mut timers));
        assert_eq!(timers.pending(), 1);
        assert!(!notification.activate(&mut tree, &mut timers));

        let node = tree.node(notification.node()).unwrap();
        assert_eq!(node.class(), Class::Notification(Visibility::Active));
    }

    #[test]
    fn destroy_cancels_timers_and_releases_node() {
        let (mut notification, mut tree, mut timers) = create("saved");
        tree.attach(notification.node());

        notification.destroy(&mut tree, &mut timers);

        assert_eq!(notification.state(), State::Dead);
        assert!(timers.is_idle());
        assert!(tree.node(notification.node()).is_none());
        assert!(!notification.activate(&mut tree, &mut timers));
    }

    #[test]
    fn long_messages_are_truncated_to_limit() {
        let long = "x".repeat(200);
        let (notification, tree, _timers) = create(&long);

        assert_eq!(notification.message().chars().count(), 120);
        assert_eq!(tree.node(notification.node()).unwrap().text().len(), 120);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("short", 120), "short");
        assert_eq!(truncate("", 3), "");
    }
}
