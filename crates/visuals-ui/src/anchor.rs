//! Deferred geometry references and their post-layout resolution.
//!
//! Phase one ([`GeometryIndex::build`]) records the final global frame of
//! every laid-out node. Phase two resolves an [`Anchor`] through a
//! [`GeometryProxy`] into the local space of whichever node asks.

use rustc_hash::FxHashMap;
use visuals_graphics::{Point, Rect, Size};

use crate::layout::{LayoutBox, LayoutTree};
use crate::node::NodeId;

/// Reference to a region of a node, resolvable once layout is final.
///
/// Holds no geometry of its own beyond the region's offset inside the
/// node, so it stays valid however the node is later moved or nested.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    node: NodeId,
    bounds: Rect,
}

impl Anchor {
    /// `bounds` is expressed in the node's own coordinate space.
    pub fn new(node: NodeId, bounds: Rect) -> Self {
        Self { node, bounds }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn local_bounds(&self) -> Rect {
        self.bounds
    }
}

/// Map from node identity to its global frame.
#[derive(Debug, Default)]
pub struct GeometryIndex {
    frames: FxHashMap<NodeId, Rect>,
}

impl GeometryIndex {
    /// Walks the tree in pre-order. When two nodes share an id the later
    /// one wins.
    pub fn build(tree: &LayoutTree) -> Self {
        let mut index = Self::default();
        index.insert(tree.root());
        index
    }

    fn insert(&mut self, layout: &LayoutBox) {
        if let Some(previous) = self.frames.insert(layout.node_id, layout.rect) {
            log::warn!(
                "duplicate node identity {:?}: {:?} replaced by {:?}",
                layout.node_id,
                previous,
                layout.rect
            );
        }
        for child in &layout.children {
            self.insert(child);
        }
    }

    pub fn frame(&self, node: NodeId) -> Option<Rect> {
        self.frames.get(&node).copied()
    }

    /// Global rect of the anchored region, if its node was laid out.
    pub fn resolve(&self, anchor: &Anchor) -> Option<Rect> {
        self.frame(anchor.node)
            .map(|frame| anchor.bounds.offset_by(frame.origin()))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Proxy for a node whose global frame is `frame`.
    pub fn proxy(&self, frame: Rect) -> GeometryProxy<'_> {
        GeometryProxy { frame, index: self }
    }
}

/// Geometry seen from one node after layout.
#[derive(Clone, Copy, Debug)]
pub struct GeometryProxy<'a> {
    frame: Rect,
    index: &'a GeometryIndex,
}

impl<'a> GeometryProxy<'a> {
    pub fn size(&self) -> Size {
        self.frame.size()
    }

    /// The node's own frame in its local space (origin at zero).
    pub fn frame_in_local(&self) -> Rect {
        Rect::from_size(self.frame.size())
    }

    /// The anchored region in this node's local space, or `None` when the
    /// anchored node is not part of the laid-out tree.
    pub fn resolve(&self, anchor: &Anchor) -> Option<Rect> {
        self.index
            .resolve(anchor)
            .map(|global| global.relative_to(self.frame.origin()))
    }

    /// Like [`resolve`](Self::resolve) but degenerates to a zero-size rect
    /// at the local origin for missing nodes.
    pub fn rect(&self, anchor: &Anchor) -> Rect {
        self.resolve(anchor)
            .unwrap_or_else(|| Rect::from_origin_size(Point::ZERO, Size::ZERO))
    }
}

#[cfg(test)]
#[path = "tests/anchor_tests.rs"]
mod tests;
