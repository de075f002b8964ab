// SPDX-License-Identifier: MPL-2.0
//! Blocking dialog windows.
//!
//! A window is one structure whose action controls are described by an
//! [`Actions`] capability set. A confirm window is an alert window plus a
//! refuse control.

use crate::config::{ACCEPT_LABEL, REFUSE_LABEL};
use crate::surface::{Class, NodeId, Surface};
use std::fmt;

/// Resolution callback, invoked once with `true` for accept and `false` for refuse.
pub type Callback = Box<dyn FnOnce(bool)>;

/// Set of action controls a window exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Actions {
    accept: bool,
    refuse: bool,
}

impl Actions {
    pub const NONE: Self = Self {
        accept: false,
        refuse: false,
    };

    pub const ACCEPT: Self = Self {
        accept: true,
        refuse: false,
    };

    #[must_use]
    pub const fn with_refuse(self) -> Self {
        Self {
            refuse: true,
            ..self
        }
    }

    #[must_use]
    pub const fn has_accept(self) -> bool {
        self.accept
    }

    #[must_use]
    pub const fn has_refuse(self) -> bool {
        self.refuse
    }
}

/// Kind of window to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// No action controls. Interactions never resolve it.
    Plain,
    Alert,
    Confirm,
}

impl Variant {
    #[must_use]
    pub const fn actions(self) -> Actions {
        match self {
            Variant::Plain => Actions::NONE,
            Variant::Alert => Actions::ACCEPT,
            Variant::Confirm => Variant::Alert.actions().with_refuse(),
        }
    }
}

/// A modal window and the nodes it is made of.
pub struct Window {
    variant: Variant,
    message: String,
    overlay: NodeId,
    container: NodeId,
    content: NodeId,
    action_bar: NodeId,
    accept: Option<NodeId>,
    refuse: Option<NodeId>,
    callback: Callback,
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("variant", &self.variant)
            .field("message", &self.message)
            .field("container", &self.container)
            .field("accept", &self.accept)
            .field("refuse", &self.refuse)
            .finish_non_exhaustive()
    }
}

impl Window {
    /// Creates the window nodes and labels them. Nothing is attached yet.
    pub(crate) fn build<S>(variant: Variant, message: String, callback: Callback, surface: &mut S) -> Self
    where
        S: Surface + ?Sized,
    {
        let overlay = surface.create_node(Class::Overlay);
        let container = surface.create_node(Class::Window);
        let content = surface.create_node(Class::Content);
        let action_bar = surface.create_node(Class::ActionBar);
        surface.set_text(content, &message);

        let actions = variant.actions();
        let accept = actions
            .has_accept()
            .then(|| labelled_button(surface, ACCEPT_LABEL));
        let refuse = actions
            .has_refuse()
            .then(|| labelled_button(surface, REFUSE_LABEL));

        Self {
            variant,
            message,
            overlay,
            container,
            content,
            action_bar,
            accept,
            refuse,
            callback,
        }
    }

    /// Assembles the nodes, installs the capturing listener and attaches the overlay.
    pub(crate) fn render<S>(&self, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        // Refuse sits before accept.
        for button in [self.refuse, self.accept].into_iter().flatten() {
            surface.append_child(self.action_bar, button);
        }
        surface.append_child(self.container, self.content);
        surface.append_child(self.container, self.action_bar);
        surface.append_child(self.overlay, self.container);

        surface.listen(self.container);
        surface.attach(self.overlay);
    }

    /// Maps an interaction target to an outcome, if it is an action control.
    #[must_use]
    pub fn outcome(&self, target: NodeId) -> Option<bool> {
        if Some(target) == self.accept {
            Some(true)
        } else if Some(target) == self.refuse {
            Some(false)
        } else {
            None
        }
    }

    /// Invokes the callback and takes the window off the surface.
    pub(crate) fn resolve<S>(self, accepted: bool, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        (self.callback)(accepted);
        surface.unlisten(self.container);
        surface.detach(self.overlay);
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn overlay(&self) -> NodeId {
        self.overlay
    }

    #[must_use]
    pub fn container(&self) -> NodeId {
        self.container
    }

    #[must_use]
    pub fn content(&self) -> NodeId {
        self.content
    }

    #[must_use]
    pub fn accept(&self) -> Option<NodeId> {
        self.accept
    }

    #[must_use]
    pub fn refuse(&self) -> Option<NodeId> {
        self.refuse
    }
}

fn labelled_button<S>(surface: &mut S, label: &str) -> NodeId
where
    S: Surface + ?Sized,
{
    let button = surface.create_node(Class::Button);
    surface.set_text(button, label);
    button
}
