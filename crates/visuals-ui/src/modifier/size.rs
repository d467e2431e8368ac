use super::{Modifier, ModifierElement};
use visuals_graphics::Size;

impl Modifier {
    /// Fixes both width and height.
    pub fn size(self, size: Size) -> Self {
        self.frame(Some(size.width), Some(size.height))
    }

    pub fn width(self, width: f32) -> Self {
        self.frame(Some(width), None)
    }

    pub fn height(self, height: f32) -> Self {
        self.frame(None, Some(height))
    }

    /// Fixes any combination of axes; `None` leaves the axis to the content.
    pub fn frame(self, width: Option<f32>, height: Option<f32>) -> Self {
        self.then(Self::with_element(ModifierElement::Size { width, height }))
    }
}
