//! Row widget implementation

use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use visuals_layout::{LinearArrangement, VerticalAlignment};

/// Specification for Row layout behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSpec {
    pub horizontal_arrangement: LinearArrangement,
    pub vertical_alignment: VerticalAlignment,
}

impl RowSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn horizontal_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.horizontal_arrangement = arrangement;
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }
}

impl Default for RowSpec {
    fn default() -> Self {
        Self {
            horizontal_arrangement: LinearArrangement::SpacedBy(8.0),
            vertical_alignment: VerticalAlignment::CenterVertically,
        }
    }
}

/// Lays `children` out left to right.
pub fn Row(modifier: Modifier, spec: RowSpec, children: Vec<Node>) -> Node {
    Node::new(NodeKind::Row(spec), modifier, children)
}
