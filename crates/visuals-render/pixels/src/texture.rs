use std::num::NonZeroUsize;
use std::sync::Arc;

use log::debug;
use lru::LruCache;
use visuals_graphics::{Color, ImageBitmap};
use visuals_ui::{StripeTexture, StripeTileSpec, TextureSource};

use crate::draw::PixelsRasterizer;

/// Everything a stripe tile depends on. Floats are compared by bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TileKey {
    size: u32,
    scale: u32,
    foreground: [u8; 4],
}

impl TileKey {
    fn new(spec: StripeTileSpec, foreground: Color) -> Self {
        Self {
            size: spec.size.to_bits(),
            scale: spec.scale.to_bits(),
            foreground: foreground.to_rgba_u8(),
        }
    }
}

/// Recently rendered stripe tiles.
pub struct TextureCache {
    tiles: LruCache<TileKey, Arc<ImageBitmap>>,
    rasterizer: PixelsRasterizer,
    misses: usize,
}

impl TextureCache {
    pub const DEFAULT_CAPACITY: usize = 16;

    pub fn new(capacity: usize) -> Self {
        Self {
            tiles: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            rasterizer: PixelsRasterizer,
            misses: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles rendered so far.
    pub fn misses(&self) -> usize {
        self.misses
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl TextureSource for TextureCache {
    fn stripe_tile(&mut self, spec: StripeTileSpec, foreground: Color) -> Arc<ImageBitmap> {
        let key = TileKey::new(spec, foreground);
        if let Some(tile) = self.tiles.get(&key) {
            return Arc::clone(tile);
        }
        self.misses += 1;
        debug!("rendering stripe tile {spec:?} in {foreground:?}");
        let tile = Arc::new(StripeTexture::render(spec, foreground, &self.rasterizer));
        self.tiles.put(key, Arc::clone(&tile));
        tile
    }
}

#[cfg(test)]
#[path = "tests/texture_tests.rs"]
mod tests;
