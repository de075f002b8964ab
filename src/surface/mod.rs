// SPDX-License-Identifier: MPL-2.0
//! Drawing surface abstraction.
//!
//! The notification stack and the modal gate only need a handful of
//! capabilities from the host: create nodes, style them, put them on or take
//! them off the visible tree, and observe interactions. [`Surface`] captures
//! exactly that. [`Tree`] is a retained in-memory implementation that the
//! iced renderer in [`crate::ui`] draws from.

mod tree;

pub use tree::{Node, Tree};

/// Opaque handle to a drawable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// Visual state of a notification node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Inactive,
    Active,
}

/// Styling class of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Notification(Visibility),
    /// Full-viewport layer wrapping a modal window.
    Overlay,
    /// Modal window container.
    Window,
    /// Message area of a modal window.
    Content,
    /// Row holding the action controls.
    ActionBar,
    /// Accept or refuse control.
    Button,
}

impl Class {
    /// Class name for hosts styled with stylesheets.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Class::Notification(Visibility::Inactive) => "herald-toast is-inactive",
            Class::Notification(Visibility::Active) => "herald-toast is-active",
            Class::Overlay => "herald-overlay",
            Class::Window => "herald-window",
            Class::Content => "herald-window-content",
            Class::ActionBar => "herald-window-actions",
            Class::Button => "herald-button",
        }
    }
}

/// An interaction caught by a capturing listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    /// Node the listener is installed on.
    pub listener: NodeId,
    /// Node the user actually interacted with.
    pub target: NodeId,
}

/// Whether an interaction was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Propagation stopped at a listener.
    Captured,
    Ignored,
}

/// Minimal node-tree capability required from the host.
pub trait Surface {
    fn create_node(&mut self, class: Class) -> NodeId;

    fn set_class(&mut self, node: NodeId, class: Class);

    fn set_text(&mut self, node: NodeId, text: &str);

    /// Sets the vertical stacking offset of a node.
    fn set_offset(&mut self, node: NodeId, offset: u32);

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Puts a node on the visible tree, after every node already there.
    fn attach(&mut self, node: NodeId);

    /// Takes a node off the visible tree, releasing it with its subtree.
    fn detach(&mut self, node: NodeId);

    /// Installs a capturing interaction listener on `node`.
    fn listen(&mut self, node: NodeId);

    fn unlisten(&mut self, node: NodeId);

    /// Finds the closest node at or above `target` with a listener.
    fn listener_for(&self, target: NodeId) -> Option<NodeId>;
}
