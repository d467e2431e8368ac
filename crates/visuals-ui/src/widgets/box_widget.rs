//! Box widget implementation

use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use visuals_layout::Alignment;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSpec {
    pub alignment: Alignment,
}

impl BoxSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            alignment: Alignment::CENTER,
        }
    }
}

/// Stacks `children` on top of each other; later children paint above.
pub fn Box(modifier: Modifier, spec: BoxSpec, children: Vec<Node>) -> Node {
    Node::new(NodeKind::Box(spec), modifier, children)
}
