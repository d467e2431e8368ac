//! Constraint-based layout producing a tree of global frames.

mod measure;

use smallvec::SmallVec;
use visuals_graphics::{Point, Rect, Size};
use visuals_layout::Constraints;

use crate::modifier::Modifier;
use crate::node::{Node, NodeId, NodeKind};

/// One laid-out node.
#[derive(Clone, Debug)]
pub struct LayoutBox {
    pub node_id: NodeId,
    pub key: Option<String>,
    /// Outer bounds in root coordinates.
    pub rect: Rect,
    /// Bounds seen by each modifier element, in node-local coordinates.
    /// `layers[i]` is what element `i` wraps; the final entry is the content.
    pub layers: SmallVec<[Rect; 4]>,
    pub kind: NodeKind,
    pub modifier: Modifier,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    /// Global bounds seen by the modifier element at `depth`.
    pub fn layer_rect(&self, depth: usize) -> Rect {
        self.layers[depth].offset_by(self.rect.origin())
    }

    /// Global bounds of the node's own content, inside all modifiers.
    pub fn content_rect(&self) -> Rect {
        self.layer_rect(self.layers.len() - 1)
    }

    pub fn find(&self, node_id: NodeId) -> Option<&LayoutBox> {
        if self.node_id == node_id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(node_id))
    }

    /// First node in pre-order carrying `key`.
    pub fn find_by_key(&self, key: &str) -> Option<&LayoutBox> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_key(key))
    }

    /// Text of a text node.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct LayoutTree {
    root: LayoutBox,
}

impl LayoutTree {
    pub fn new(root: LayoutBox) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &LayoutBox {
        &self.root
    }

    pub fn find(&self, node_id: NodeId) -> Option<&LayoutBox> {
        self.root.find(node_id)
    }

    pub fn find_by_key(&self, key: &str) -> Option<&LayoutBox> {
        self.root.find_by_key(key)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn new() -> Self {
        Self
    }

    /// Lays `root` out to exactly fill `viewport`.
    pub fn compute_layout(&self, root: &Node, viewport: Size) -> LayoutTree {
        let constraints = Constraints::tight(viewport.width, viewport.height);
        let measured = measure::measure_node(root, NodeId::root(), constraints);
        LayoutTree::new(measured.place(Point::ZERO))
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
