use std::path::PathBuf;

use visuals_render_pixels::RendererOptions;
use visuals_ui::{ColorScheme, Environment, Size};

#[derive(Clone, Debug, PartialEq)]
pub struct DemoSettings {
    /// Viewport in points.
    pub size: Size,
    pub scale: f32,
    pub color_scheme: ColorScheme,
    pub output: PathBuf,
    pub font_path: Option<PathBuf>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            size: Size::new(400.0, 300.0),
            scale: 2.0,
            color_scheme: ColorScheme::Light,
            output: PathBuf::from("hstack-demo.png"),
            font_path: None,
        }
    }
}

impl DemoSettings {
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_font_path(mut self, path: Option<PathBuf>) -> Self {
        self.font_path = path;
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.scale.is_finite() && self.scale > 0.0,
            "display scale must be positive, got {}",
            self.scale
        );
        anyhow::ensure!(
            self.size.width > 0.0 && self.size.height > 0.0,
            "viewport must not be empty, got {}x{}",
            self.size.width,
            self.size.height
        );
        Ok(())
    }

    pub fn viewport(&self) -> Size {
        self.size
    }

    pub fn environment(&self) -> Environment {
        Environment::default()
            .with_color_scheme(self.color_scheme)
            .with_display_scale(self.scale)
    }

    pub fn renderer_options(&self) -> RendererOptions {
        match &self.font_path {
            Some(path) => RendererOptions::default().with_font_path(path),
            None => RendererOptions::default(),
        }
    }
}
