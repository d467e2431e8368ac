use super::{Modifier, ModifierElement};
use visuals_graphics::Point;

impl Modifier {
    /// Shifts drawing of the wrapped content by `(x, y)` without moving
    /// the node's bounds.
    pub fn offset(self, x: f32, y: f32) -> Self {
        self.then(Self::with_element(ModifierElement::Offset(Point::new(x, y))))
    }
}
