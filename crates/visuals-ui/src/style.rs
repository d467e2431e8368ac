//! Shape styles resolved against the environment at paint time.

use std::sync::Arc;

use visuals_graphics::{Brush, Color, ImageBitmap};

use crate::environment::Environment;
use crate::stripes::{DiagonalStripes, StripeTileSpec};

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeStyle {
    Color(Color),
    /// The environment's foreground color.
    Primary,
    DiagonalStripes(DiagonalStripes),
}

impl From<Color> for ShapeStyle {
    fn from(color: Color) -> Self {
        ShapeStyle::Color(color)
    }
}

impl From<DiagonalStripes> for ShapeStyle {
    fn from(stripes: DiagonalStripes) -> Self {
        ShapeStyle::DiagonalStripes(stripes)
    }
}

/// Supplies rasterized pattern tiles while resolving styles.
pub trait TextureSource {
    fn stripe_tile(&mut self, spec: StripeTileSpec, foreground: Color) -> Arc<ImageBitmap>;
}

impl ShapeStyle {
    pub fn resolve(&self, environment: &Environment, textures: &mut dyn TextureSource) -> Brush {
        match self {
            ShapeStyle::Color(color) => Brush::solid(*color),
            ShapeStyle::Primary => Brush::solid(environment.primary()),
            ShapeStyle::DiagonalStripes(stripes) => {
                let spec = stripes.tile_spec(environment);
                Brush::pattern(textures.stripe_tile(spec, environment.primary()))
            }
        }
    }
}
