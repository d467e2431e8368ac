use std::rc::Rc;

use visuals_graphics::DrawScope;

use crate::anchor::GeometryProxy;
use crate::environment::Environment;
use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use crate::style::ShapeStyle;

pub fn Text(modifier: Modifier, text: impl Into<String>) -> Node {
    Node::new(NodeKind::Text(text.into()), modifier, Vec::new())
}

/// Rectangle painted with `style`, expanding to the space it is offered.
pub fn Fill(modifier: Modifier, style: impl Into<ShapeStyle>) -> Node {
    Node::new(NodeKind::Fill(style.into()), modifier, Vec::new())
}

pub fn Circle(modifier: Modifier, style: impl Into<ShapeStyle>) -> Node {
    Node::new(NodeKind::Circle(style.into()), modifier, Vec::new())
}

/// Draws once the whole tree is laid out. `draw` records into a scope
/// sized to the canvas and may resolve anchors through the proxy.
pub fn Canvas<F>(modifier: Modifier, draw: F) -> Node
where
    F: Fn(&GeometryProxy<'_>, &Environment, &mut dyn DrawScope) + 'static,
{
    Node::new(NodeKind::Canvas(Rc::new(draw)), modifier, Vec::new())
}
