// SPDX-License-Identifier: MPL-2.0
//! The notification center.
//!
//! [`Herald`] is the context object callers hold. It owns the drawing
//! surface, the timers, the notification stack and the modal gate, and is
//! the only way to mutate them. All methods return immediately; lifecycle
//! transitions happen later when the host reports fired timers through
//! [`Herald::handle_timer`] (or [`Herald::advance`] with a [`TimerQueue`]).

use crate::config::Config;
use crate::modal::{Gate, Variant};
use crate::notifications::Manager;
use crate::surface::{Interaction, NodeId, Status, Surface};
use crate::timer::{TimerEvent, TimerQueue, Timers};
use std::time::Duration;

/// Notification center bound to a surface and a timer service.
#[derive(Debug)]
pub struct Herald<S, T> {
    surface: S,
    timers: T,
    notifications: Manager,
    modal: Gate,
}

impl<S: Surface, T: Timers> Herald<S, T> {
    pub fn new(config: Config, surface: S, timers: T) -> Self {
        Self {
            surface,
            timers,
            notifications: Manager::new(config),
            modal: Gate::new(),
        }
    }

    /// Stacks a transient notification.
    pub fn notify(&mut self, message: &str) {
        self.notifications
            .push(message, &mut self.surface, &mut self.timers);
    }

    /// Shows a single-action dialog if no other dialog is open.
    ///
    /// The callback only ever receives `true`.
    pub fn alert(
        &mut self,
        message: impl Into<String>,
        callback: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.modal.open(
            Variant::Alert,
            message,
            Box::new(callback),
            &mut self.surface,
        )
    }

    /// Shows an accept/refuse dialog if no other dialog is open.
    pub fn confirm(
        &mut self,
        message: impl Into<String>,
        callback: impl FnOnce(bool) + 'static,
    ) -> bool {
        self.modal.open(
            Variant::Confirm,
            message,
            Box::new(callback),
            &mut self.surface,
        )
    }

    /// Applies a fired timer.
    pub fn handle_timer(&mut self, event: TimerEvent) {
        self.notifications
            .handle_timer(event, &mut self.surface, &mut self.timers);
    }

    /// Delivers a user interaction on `target`.
    ///
    /// Returns [`Status::Captured`] when the open dialog consumed it.
    pub fn interact(&mut self, target: NodeId) -> Status {
        match self.surface.listener_for(target) {
            Some(listener) => self
                .modal
                .route(Interaction { listener, target }, &mut self.surface),
            None => Status::Ignored,
        }
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    #[must_use]
    pub fn modal(&self) -> &Gate {
        &self.modal
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn timers(&self) -> &T {
        &self.timers
    }
}

impl<S: Surface> Herald<S, TimerQueue> {
    /// Moves the clock forward and applies every timer that came due.
    pub fn advance(&mut self, elapsed: Duration) {
        self.timers.advance(elapsed);
        while let Some(event) = self.timers.pop_due() {
            self.handle_timer(event);
        }
    }
}
