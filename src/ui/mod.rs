// SPDX-License-Identifier: MPL-2.0
//! iced rendering of a [`Tree`] surface.
//!
//! The notification center writes to the tree; this module only reads it.
//! Presses on dialog nodes come back as [`Message::Pressed`] and should be
//! handed to [`Herald::interact`](crate::Herald::interact).
//!
//! - [`toast`] - Notification cards stacked in the bottom-right corner
//! - [`dialog`] - Modal overlay with its window and action controls
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod dialog;
pub mod toast;

pub use toast::Toast;

use crate::surface::{NodeId, Tree};
use iced::widget::Stack;
use iced::{Element, Length};

/// Interactions reported by rendered nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed(NodeId),
}

/// Renders every attached node as layers meant to sit above the app content.
///
/// Toasts come first so an open dialog covers them.
pub fn view(tree: &Tree) -> Element<'_, Message> {
    Toast::layers(tree)
        .into_iter()
        .chain(dialog::layers(tree))
        .fold(
            Stack::new().width(Length::Fill).height(Length::Fill),
            |stack, layer| stack.push(layer),
        )
        .into()
}
