//! Procedural diagonal-stripe tiles.
//!
//! A tile of side `size` holds one line along its anti-diagonal plus two
//! parallel lines offset by `size / 2` on both axes, which only clip the
//! top-left and bottom-right corners. Repeated edge to edge, every line
//! leaving one tile re-enters the neighbor exactly where that neighbor's
//! own line continues, so the pattern has no seam.

use std::f32::consts::FRAC_1_SQRT_2;

use visuals_graphics::{Brush, Color, DrawPrimitive, Dp, ImageBitmap, Point, Size};

use crate::environment::Environment;

/// Shape style painting evenly spaced −45° lines in the foreground color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagonalStripes {
    /// Side of one repeating tile, in points.
    pub size: f32,
}

impl Default for DiagonalStripes {
    fn default() -> Self {
        Self { size: 16.0 }
    }
}

impl DiagonalStripes {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    pub fn tile_spec(&self, environment: &Environment) -> StripeTileSpec {
        StripeTileSpec {
            size: self.size,
            scale: environment.display_scale,
        }
    }
}

/// Value describing one tile: side in points and device pixels per point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripeTileSpec {
    pub size: f32,
    pub scale: f32,
}

impl StripeTileSpec {
    /// Side of the rasterized tile in device pixels.
    pub fn pixel_size(&self) -> u32 {
        Dp(self.size).to_px(self.scale).ceil() as u32
    }
}

/// Rasterizes a list of primitives (in points) into a bitmap of
/// `ceil(size * scale)` device pixels.
pub trait ImageRasterizer {
    fn rasterize(&self, primitives: &[DrawPrimitive], size: Size, scale: f32) -> ImageBitmap;
}

pub struct StripeTexture;

impl StripeTexture {
    /// The three stripe segments for `spec`, each `2 * size` long and one
    /// device pixel thick.
    pub fn primitives(spec: StripeTileSpec, foreground: Color) -> Vec<DrawPrimitive> {
        let size = spec.size;
        let thickness = 1.0 / spec.scale;
        // Half of a 2 * size segment, projected on each axis at −45°.
        let reach = size * FRAC_1_SQRT_2;
        let direction = Point::new(reach, -reach);
        let shift = size / 2.0;

        [-shift, 0.0, shift]
            .into_iter()
            .map(|offset| {
                let center = Point::new(size / 2.0 + offset, size / 2.0 + offset);
                DrawPrimitive::Line {
                    start: center - direction,
                    end: center + direction,
                    width: thickness,
                    brush: Brush::solid(foreground),
                }
            })
            .collect()
    }

    /// Renders one tile.
    ///
    /// # Panics
    ///
    /// Must not be called with a non-positive size or scale.
    pub fn render(
        spec: StripeTileSpec,
        foreground: Color,
        rasterizer: &dyn ImageRasterizer,
    ) -> ImageBitmap {
        assert!(
            spec.size > 0.0 && spec.scale > 0.0,
            "stripe tile needs a positive size and scale, got {spec:?}"
        );
        let primitives = Self::primitives(spec, foreground);
        rasterizer.rasterize(&primitives, Size::new(spec.size, spec.size), spec.scale)
    }
}

#[cfg(test)]
#[path = "tests/stripes_tests.rs"]
mod tests;
