//! Pure math/data for drawing & units in HStack Visuals
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! bitmaps and the draw primitive list shared by the layout, legend and
//! renderer crates.

mod bitmap;
mod brush;
mod color;
mod draw;
mod geometry;
mod unit;

pub use bitmap::*;
pub use brush::*;
pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::bitmap::ImageBitmap;
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::draw::{DrawPrimitive, DrawScope};
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::unit::Dp;
}
