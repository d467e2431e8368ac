use super::{Modifier, ModifierElement};
use visuals_graphics::EdgeInsets;

impl Modifier {
    /// Add uniform padding to all sides.
    ///
    /// Example: `Modifier::empty().padding(16.0)`
    pub fn padding(self, p: f32) -> Self {
        self.padding_insets(EdgeInsets::uniform(p))
    }

    /// Add symmetric padding (horizontal and vertical).
    pub fn padding_symmetric(self, horizontal: f32, vertical: f32) -> Self {
        self.padding_insets(EdgeInsets::symmetric(horizontal, vertical))
    }

    /// Add padding to each side individually.
    ///
    /// Example: `Modifier::empty().padding_each(20.0, 0.0, 0.0, 0.0)`
    pub fn padding_each(self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.padding_insets(EdgeInsets::from_components(left, top, right, bottom))
    }

    pub fn padding_insets(self, insets: EdgeInsets) -> Self {
        self.then(Self::with_element(ModifierElement::Padding(insets)))
    }
}
