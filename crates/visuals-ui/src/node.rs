//! Immutable node tree rebuilt on every pass.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use rustc_hash::FxHasher;
use visuals_layout::Axis;

use crate::anchor::GeometryProxy;
use crate::environment::Environment;
use crate::modifier::{Modifier, ModifierElement};
use crate::style::ShapeStyle;
use crate::widgets::{BoxSpec, ColumnSpec, RowSpec};
use visuals_graphics::DrawScope;

/// Stable identity of a node across rebuilds.
///
/// Derived from the parent's id and the child's key, or its position
/// among siblings when it has no key. Two siblings with the same key share
/// an id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub fn root() -> Self {
        let mut hasher = FxHasher::default();
        "root".hash(&mut hasher);
        NodeId(hasher.finish())
    }

    pub(crate) fn child(self, key: Option<&str>, index: usize) -> Self {
        let mut hasher = FxHasher::default();
        self.0.hash(&mut hasher);
        match key {
            Some(key) => {
                1u8.hash(&mut hasher);
                key.hash(&mut hasher);
            }
            None => {
                0u8.hash(&mut hasher);
                index.hash(&mut hasher);
            }
        }
        NodeId(hasher.finish())
    }
}

/// Post-layout draw callback of a [`NodeKind::Canvas`].
pub type CanvasDraw = Rc<dyn Fn(&GeometryProxy<'_>, &Environment, &mut dyn DrawScope)>;

#[derive(Clone)]
pub enum NodeKind {
    Row(RowSpec),
    Column(ColumnSpec),
    Box(BoxSpec),
    Text(String),
    /// Rectangle filled with a style, taking all offered space.
    Fill(ShapeStyle),
    Circle(ShapeStyle),
    /// Geometry reader: takes all offered space and draws after layout.
    Canvas(CanvasDraw),
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Row(spec) => f.debug_tuple("Row").field(spec).finish(),
            NodeKind::Column(spec) => f.debug_tuple("Column").field(spec).finish(),
            NodeKind::Box(spec) => f.debug_tuple("Box").field(spec).finish(),
            NodeKind::Text(text) => f.debug_tuple("Text").field(text).finish(),
            NodeKind::Fill(style) => f.debug_tuple("Fill").field(style).finish(),
            NodeKind::Circle(style) => f.debug_tuple("Circle").field(style).finish(),
            NodeKind::Canvas(_) => f.write_str("Canvas"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) modifier: Modifier,
    pub(crate) key: Option<String>,
    pub(crate) children: Vec<Node>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, modifier: Modifier, children: Vec<Node>) -> Self {
        Self {
            kind,
            modifier,
            key: None,
            children,
        }
    }

    /// Gives this node a stable identity among its siblings.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether this node soaks up leftover main-axis space in a linear layout.
    pub fn is_flexible(&self, axis: Axis) -> bool {
        let pinned = self.modifier.elements().iter().any(|element| match element {
            ModifierElement::Size { width, height } => match axis {
                Axis::Horizontal => width.is_some(),
                Axis::Vertical => height.is_some(),
            },
            _ => false,
        });
        if pinned {
            return false;
        }
        match &self.kind {
            NodeKind::Fill(_) | NodeKind::Circle(_) | NodeKind::Canvas(_) => true,
            NodeKind::Text(_) => false,
            NodeKind::Row(_) | NodeKind::Column(_) | NodeKind::Box(_) => {
                self.children.iter().any(|child| child.is_flexible(axis))
            }
        }
    }
}
