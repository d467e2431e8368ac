use super::{Modifier, ModifierElement};
use crate::style::ShapeStyle;

impl Modifier {
    pub fn background(self, style: impl Into<ShapeStyle>) -> Self {
        self.then(Self::with_element(ModifierElement::Background(style.into())))
    }

    /// Strokes the bounds with `width` points, inset so nothing leaks outside.
    pub fn border(self, style: impl Into<ShapeStyle>, width: f32) -> Self {
        self.then(Self::with_element(ModifierElement::Border {
            style: style.into(),
            width,
        }))
    }
}
