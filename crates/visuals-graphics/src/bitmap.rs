//! Owned RGBA bitmaps produced by rasterization.

use crate::geometry::Size;

/// Straight-alpha RGBA8 pixels at a given display scale.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBitmap {
    width: u32,
    height: u32,
    scale: f32,
    pixels: Vec<u8>,
}

impl ImageBitmap {
    /// Creates a fully transparent bitmap.
    pub fn new(width: u32, height: u32, scale: f32) -> Self {
        Self {
            width,
            height,
            scale,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wraps existing pixel data. Returns `None` when `pixels` does not hold
    /// exactly `width * height` RGBA quadruplets.
    pub fn from_rgba(width: u32, height: u32, scale: f32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            scale,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Size in logical points (pixels divided by scale).
    pub fn logical_size(&self) -> Size {
        Size::new(
            self.width as f32 / self.scale,
            self.height as f32 / self.scale,
        )
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
