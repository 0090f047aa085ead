//! Document tree arena.

use super::{Element, Node, NodeData, NodeId};

/// A mutable markup tree.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]. Replaced
/// subtrees are unlinked but stay in the arena until the document is
/// dropped; every query starts from the root, so unlinked nodes are never
/// visited.
///
/// Nothing is reclaimed during a conversion. Each substitution allocates
/// the reparsed replacement next to the subtree it replaces, and a center
/// element reparses its whole subtree, so the arena grows by roughly the
/// total size of all replaced subtrees. [`Document::arena_len`] reports it.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Id of the root node.
    pub const ROOT: NodeId = 0;

    /// Create a document containing only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Root)],
        }
    }

    /// Get the root node id.
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Get a node.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Get a mutable node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Get the element payload of a node.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes[id].as_element()
    }

    /// Get the mutable element payload of a node.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes[id].as_element_mut()
    }

    /// Get the tag name of an element node.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.name.as_str())
    }

    /// Allocate a detached node.
    pub fn create(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(Node::new(data));
        self.nodes.len() - 1
    }

    /// Append a detached node to a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    /// Get the children of a node.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Get the parent of a node.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Iterate over the element children of a node.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .filter(move |&c| self.nodes[c].is_element())
    }

    /// Detach and return all children of a node.
    pub fn take_children(&mut self, id: NodeId) -> Vec<NodeId> {
        let children = std::mem::take(&mut self.nodes[id].children);
        for &child in &children {
            self.nodes[child].parent = None;
        }
        children
    }

    /// Replace a node with a sequence of detached nodes, in place.
    ///
    /// Returns false when the node has no parent.
    pub fn replace_with(&mut self, id: NodeId, replacement: Vec<NodeId>) -> bool {
        let Some(parent) = self.nodes[id].parent else {
            return false;
        };
        let Some(index) = self.nodes[parent].children.iter().position(|&c| c == id) else {
            return false;
        };
        for &new in &replacement {
            self.nodes[new].parent = Some(parent);
        }
        self.nodes[parent].children.splice(index..=index, replacement);
        self.nodes[id].parent = None;
        true
    }

    /// Element siblings before a node, nearest first.
    pub fn preceding_element_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let (siblings, index) = self.sibling_slice(id);
        siblings[..index]
            .iter()
            .rev()
            .copied()
            .filter(|&s| self.nodes[s].is_element())
            .collect()
    }

    /// Element siblings after a node, nearest first.
    pub fn following_element_siblings(&self, id: NodeId) -> Vec<NodeId> {
        let (siblings, index) = self.sibling_slice(id);
        if siblings.is_empty() {
            return Vec::new();
        }
        siblings[index + 1..]
            .iter()
            .copied()
            .filter(|&s| self.nodes[s].is_element())
            .collect()
    }

    fn sibling_slice(&self, id: NodeId) -> (&[NodeId], usize) {
        match self.nodes[id].parent {
            Some(parent) => {
                let siblings = self.nodes[parent].children.as_slice();
                let index = siblings.iter().position(|&c| c == id).unwrap_or(0);
                (siblings, index)
            }
            None => (&[], 0),
        }
    }

    /// Iterate over the descendants of a node in document order.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.nodes[id].children.clone();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    /// Find the first descendant element (document order) matching a predicate.
    pub fn find_element<F>(&self, id: NodeId, mut predicate: F) -> Option<NodeId>
    where
        F: FnMut(NodeId, &Element) -> bool,
    {
        self.descendants(id)
            .find(|&d| self.element(d).is_some_and(|e| predicate(d, e)))
    }

    /// Collect all descendant elements matching a predicate.
    pub fn find_all_elements<F>(&self, id: NodeId, mut predicate: F) -> Vec<NodeId>
    where
        F: FnMut(&Element) -> bool,
    {
        self.descendants(id)
            .filter(|&d| self.element(d).is_some_and(&mut predicate))
            .collect()
    }

    /// Check whether the node has any element children.
    pub fn has_element_children(&self, id: NodeId) -> bool {
        self.element_children(id).next().is_some()
    }

    /// Number of nodes allocated in the arena, linked or not.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.nodes[id].children.iter().rev().copied());
        Some(id)
    }
}
