//! Brush definitions for painting (solid colors and repeating image patterns)

use std::sync::Arc;

use crate::bitmap::ImageBitmap;
use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Tiles `tile` edge-to-edge starting at the painted rect's origin.
    Pattern { tile: Arc<ImageBitmap> },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn pattern(tile: Arc<ImageBitmap>) -> Self {
        Brush::Pattern { tile }
    }
}
