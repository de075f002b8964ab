// SPDX-License-Identifier: MPL-2.0
//! Retained node tree backing the iced renderer and the test suite.

use super::{Class, NodeId, Surface};
use std::collections::HashMap;

/// A node stored in a [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    class: Class,
    text: String,
    offset: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    listening: bool,
}

impl Node {
    fn new(class: Class) -> Self {
        Self {
            class,
            text: String::new(),
            offset: 0,
            parent: None,
            children: Vec::new(),
            listening: false,
        }
    }

    #[must_use]
    pub fn class(&self) -> Class {
        self.class
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

/// In-memory [`Surface`].
///
/// Nodes live in the tree from creation until they (or an ancestor) are
/// detached. Only nodes reachable from a root are visible.
#[derive(Debug, Default)]
pub struct Tree {
    nodes: HashMap<NodeId, Node>,
    roots: Vec<NodeId>,
    next_id: u64,
}

impl Tree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Nodes attached at the top level, in attachment order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of live nodes, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` is reachable from a root.
    #[must_use]
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if self.roots.contains(&node_id) {
                return true;
            }
            current = self.nodes.get(&node_id).and_then(Node::parent);
        }
        false
    }

    /// Attached root nodes of the given class.
    pub fn roots_of(&self, class: fn(Class) -> bool) -> impl Iterator<Item = NodeId> + '_ {
        self.roots
            .iter()
            .copied()
            .filter(move |id| self.nodes.get(id).is_some_and(|n| class(n.class)))
    }

    fn unlink(&mut self, id: NodeId) {
        let parent = self.nodes.get_mut(&id).and_then(|node| node.parent.take());
        match parent {
            Some(parent) => {
                if let Some(parent) = self.nodes.get_mut(&parent) {
                    parent.children.retain(|&child| child != id);
                }
            }
            None => self.roots.retain(|&root| root != id),
        }
    }

    fn release(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            if let Some(node) = self.nodes.remove(&node_id) {
                stack.extend(node.children);
            }
        }
    }
}

impl Surface for Tree {
    fn create_node(&mut self, class: Class) -> NodeId {
        let id = NodeId::from_raw(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(class));
        id
    }

    fn set_class(&mut self, node: NodeId, class: Class) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.class = class;
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(&node) {
            text.clone_into(&mut node.text);
        }
    }

    fn set_offset(&mut self, node: NodeId, offset: u32) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.offset = offset;
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&child)
        {
            return;
        }
        self.unlink(child);
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
    }

    fn attach(&mut self, node: NodeId) {
        if !self.nodes.contains_key(&node) {
            return;
        }
        self.unlink(node);
        self.roots.push(node);
    }

    fn detach(&mut self, node: NodeId) {
        self.unlink(node);
        self.release(node);
    }

    fn listen(&mut self, node: NodeId) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.listening = true;
        }
    }

    fn unlisten(&mut self, node: NodeId) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.listening = false;
        }
    }

    fn listener_for(&self, target: NodeId) -> Option<NodeId> {
        let mut current = Some(target);
        while let Some(id) = current {
            let node = self.nodes.get(&id)?;
            if node.listening {
                return Some(id);
            }
            current = node.parent;
        }
        None
    }
}
