//! Declarative node tree, layout, anchors and legend annotations.
//!
//! A frame is produced in two phases. The [`Composition`] builds the node
//! tree from its root view and lays it out into a [`LayoutTree`]; any
//! [`PreferenceKey`] values are then reduced bottom-up and handed back to
//! the root, which may ask for another pass when its state changed. Once
//! the tree is final, renderers build a [`GeometryIndex`] and resolve
//! [`Anchor`]s from inside [`Canvas`] nodes.

#![allow(non_snake_case)]

mod anchor;
mod composition;
mod environment;
pub mod layout;
pub mod legend;
pub mod modifier;
mod node;
mod preference;
mod stripes;
mod style;
mod text;
pub mod widgets;

pub use anchor::*;
pub use composition::*;
pub use environment::*;
pub use layout::{LayoutBox, LayoutEngine, LayoutTree};
pub use legend::{
    AnnotationCollector, AnnotationRecord, LegendHost, LegendItems, LegendKey, LegendState,
};
pub use modifier::{Modifier, ModifierElement};
pub use node::*;
pub use preference::*;
pub use stripes::*;
pub use style::*;
pub use text::*;
pub use widgets::*;

pub use visuals_graphics::{
    Brush, Color, DrawPrimitive, DrawScope, EdgeInsets, ImageBitmap, Point, Rect, Size,
};
pub use visuals_layout::{
    Alignment, Axis, Constraints, HorizontalAlignment, LinearArrangement, VerticalAlignment,
};

pub mod prelude {
    pub use crate::composition::{Composition, RootView, View};
    pub use crate::environment::{ColorScheme, Environment};
    pub use crate::legend::LegendHost;
    pub use crate::modifier::Modifier;
    pub use crate::node::Node;
    pub use crate::stripes::DiagonalStripes;
    pub use crate::style::ShapeStyle;
    pub use crate::widgets::*;
}
