//! Software renderer: turns a settled [`LayoutTree`] into RGBA pixels.

mod draw;
mod font;
mod pipeline;
pub mod scene;
mod text;
mod texture;

use std::path::PathBuf;

use visuals_graphics::{Dp, ImageBitmap, Size};
use visuals_render_common::{RenderScene, Renderer};
use visuals_ui::{set_text_measurer, Environment, LayoutTree};

pub use draw::{draw_scene, PixelsRasterizer};
pub use font::{find_system_font, load_font, FontError, Typeface};
pub use scene::Scene;
pub use text::RusttypeTextMeasurer;
pub use texture::TextureCache;

#[derive(Debug, thiserror::Error)]
pub enum PixelsRendererError {
    #[error("frame buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    Font(#[from] FontError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RendererOptions {
    /// Font file to use; system locations are searched when unset.
    pub font_path: Option<PathBuf>,
    /// Text size in points.
    pub text_size: f32,
    pub text_cache_capacity: usize,
    pub texture_cache_capacity: usize,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            font_path: None,
            text_size: 14.0,
            text_cache_capacity: 64,
            texture_cache_capacity: TextureCache::DEFAULT_CAPACITY,
        }
    }
}

impl RendererOptions {
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn with_text_size(mut self, text_size: f32) -> Self {
        self.text_size = text_size;
        self
    }
}

pub struct PixelsRenderer {
    scene: Scene,
    textures: TextureCache,
    typeface: Typeface,
}

impl PixelsRenderer {
    /// Loads the configured font and installs a matching text measurer
    /// for layout.
    pub fn new(options: RendererOptions) -> Result<Self, PixelsRendererError> {
        let font = match &options.font_path {
            Some(path) => Some(load_font(path)?),
            None => find_system_font(),
        };
        let typeface = Typeface::new(font, options.text_size);
        set_text_measurer(RusttypeTextMeasurer::new(
            typeface.clone(),
            options.text_cache_capacity,
        ));
        Ok(Self {
            scene: Scene::new(),
            textures: TextureCache::new(options.texture_cache_capacity),
            typeface,
        })
    }

    pub fn typeface(&self) -> &Typeface {
        &self.typeface
    }

    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    pub fn draw(&self, frame: &mut [u8], width: u32, height: u32) -> Result<(), PixelsRendererError> {
        draw::draw_scene(frame, width, height, &self.scene, &self.typeface)
    }

    /// Rebuilds the scene and rasterizes it at the environment's scale.
    pub fn render(
        &mut self,
        layout_tree: &LayoutTree,
        environment: &Environment,
        viewport: Size,
    ) -> Result<ImageBitmap, PixelsRendererError> {
        self.rebuild_scene(layout_tree, environment)?;
        let scale = environment.display_scale;
        let width = Dp(viewport.width).to_px(scale).ceil() as u32;
        let height = Dp(viewport.height).to_px(scale).ceil() as u32;
        let mut bitmap = ImageBitmap::new(width, height, scale);
        self.draw(bitmap.pixels_mut(), width, height)?;
        Ok(bitmap)
    }
}

impl Renderer for PixelsRenderer {
    type Scene = Scene;
    type Error = PixelsRendererError;

    fn scene(&self) -> &Self::Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Self::Scene {
        &mut self.scene
    }

    fn rebuild_scene(
        &mut self,
        layout_tree: &LayoutTree,
        environment: &Environment,
    ) -> Result<(), Self::Error> {
        self.scene.clear();
        pipeline::render_layout_tree(layout_tree, environment, &mut self.textures, &mut self.scene);
        log::debug!(
            "scene rebuilt with {} operations at scale {}",
            self.scene.len(),
            environment.display_scale
        );
        Ok(())
    }
}
