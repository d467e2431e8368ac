//! Ambient values threaded explicitly through layout and rendering.

use visuals_graphics::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// Read-only rendering context: color scheme and device pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub color_scheme: ColorScheme,
    /// Device pixels per logical point.
    pub display_scale: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Light,
            display_scale: 1.0,
        }
    }
}

impl Environment {
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale;
        self
    }

    /// Foreground color for text, strokes and patterns.
    pub fn primary(&self) -> Color {
        match self.color_scheme {
            ColorScheme::Light => Color::BLACK,
            ColorScheme::Dark => Color::WHITE,
        }
    }

    pub fn background(&self) -> Color {
        match self.color_scheme {
            ColorScheme::Light => Color::WHITE,
            ColorScheme::Dark => Color::BLACK,
        }
    }
}
