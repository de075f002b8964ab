// SPDX-License-Identifier: MPL-2.0
//! Single-slot holder for the active modal window.

use super::window::{Callback, Variant, Window};
use crate::surface::{Interaction, Surface, Status};

/// Guarantees at most one modal window exists at a time.
///
/// A request made while a window is open is rejected, not queued.
#[derive(Debug, Default)]
pub struct Gate {
    slot: Option<Window>,
}

impl Gate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a window if the slot is free.
    ///
    /// Returns `false` without touching the surface or the callback when a
    /// window is already open.
    pub fn open<S>(
        &mut self,
        variant: Variant,
        message: impl Into<String>,
        callback: Callback,
        surface: &mut S,
    ) -> bool
    where
        S: Surface + ?Sized,
    {
        if self.slot.is_some() {
            tracing::debug!(?variant, "modal already open, request rejected");
            return false;
        }

        let window = Window::build(variant, message.into(), callback, surface);
        window.render(surface);
        tracing::debug!(?variant, container = ?window.container(), "modal opened");
        self.slot = Some(window);
        true
    }

    /// Routes an interaction caught by a capturing listener.
    ///
    /// Interactions inside the window stop there. Only the accept and
    /// refuse controls resolve it; anything else inside is a no-op.
    pub fn route<S>(&mut self, interaction: Interaction, surface: &mut S) -> Status
    where
        S: Surface + ?Sized,
    {
        let Some(window) = self.slot.as_ref() else {
            return Status::Ignored;
        };
        if interaction.listener != window.container() {
            return Status::Ignored;
        }

        if let Some(accepted) = window.outcome(interaction.target) {
            if let Some(window) = self.slot.take() {
                tracing::debug!(variant = ?window.variant(), accepted, "modal resolved");
                window.resolve(accepted, surface);
            }
        }
        Status::Captured
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.slot.is_some()
    }

    #[must_use]
    pub fn window(&self) -> Option<&Window> {
        self.slot.as_ref()
    }
}
