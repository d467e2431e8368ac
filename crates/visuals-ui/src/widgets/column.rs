//! Column widget implementation

use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use visuals_layout::{HorizontalAlignment, LinearArrangement};

/// Specification for Column layout behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSpec {
    pub vertical_arrangement: LinearArrangement,
    pub horizontal_alignment: HorizontalAlignment,
}

impl ColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical_arrangement(mut self, arrangement: LinearArrangement) -> Self {
        self.vertical_arrangement = arrangement;
        self
    }

    pub fn horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            vertical_arrangement: LinearArrangement::SpacedBy(8.0),
            horizontal_alignment: HorizontalAlignment::CenterHorizontally,
        }
    }
}

/// Lays `children` out top to bottom.
pub fn Column(modifier: Modifier, spec: ColumnSpec, children: Vec<Node>) -> Node {
    Node::new(NodeKind::Column(spec), modifier, children)
}
