//! Modifier chains.
//!
//! Elements are stored outermost first: in
//! `Modifier::empty().padding(8.0).background(style)` the padding wraps the
//! background, so the background paints the inner (unpadded) bounds.

mod background;
mod offset;
mod padding;
mod size;

use visuals_graphics::{EdgeInsets, Point};

use crate::legend::LegendTag;
use crate::style::ShapeStyle;

#[derive(Clone, Debug, PartialEq)]
pub enum ModifierElement {
    Padding(EdgeInsets),
    /// Fixed frame on either axis; content is centered inside it.
    Size {
        width: Option<f32>,
        height: Option<f32>,
    },
    /// Shifts the wrapped content without affecting the node's own bounds.
    Offset(Point),
    Background(ShapeStyle),
    /// Stroke drawn inside the bounds, on top of the content.
    Border { style: ShapeStyle, width: f32 },
    /// Emits one legend annotation anchored to the bounds at this position.
    Legend(LegendTag),
}

impl ModifierElement {
    /// Whether the element changes measurement or placement.
    pub fn affects_layout(&self) -> bool {
        matches!(
            self,
            ModifierElement::Padding(_) | ModifierElement::Size { .. } | ModifierElement::Offset(_)
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    elements: Vec<ModifierElement>,
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_element(element: ModifierElement) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Appends `next` inside this chain.
    pub fn then(mut self, next: Modifier) -> Self {
        self.elements.extend(next.elements);
        self
    }

    pub fn elements(&self) -> &[ModifierElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
