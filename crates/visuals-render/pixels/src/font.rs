//! Font discovery and the typeface shared by measurement and drawing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};
use once_cell::sync::Lazy;
use rusttype::{point, Font, Scale};
use visuals_ui::{MonospacedTextMeasurer, TextMeasurer, TextMetrics};

/// Common system font locations tried when no font path is configured.
static FONT_SEARCH_PATHS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    [
        // macOS
        "/System/Library/Fonts/Helvetica.ttc",
        "/System/Library/Fonts/SFNS.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        // Linux
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        // Windows
        "C:\\Windows\\Fonts\\arial.ttf",
        "C:\\Windows\\Fonts\\segoeui.ttf",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
});

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read font {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a usable TrueType/OpenType font", path.display())]
    Parse { path: PathBuf },
}

/// Reads and parses the font at `path`.
pub fn load_font(path: &Path) -> Result<Font<'static>, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(bytes).ok_or_else(|| FontError::Parse {
        path: path.to_path_buf(),
    })
}

/// First parseable font among the system search paths.
pub fn find_system_font() -> Option<Font<'static>> {
    let found = FONT_SEARCH_PATHS.iter().find_map(|path| {
        let font = load_font(path).ok()?;
        info!("using system font {}", path.display());
        Some(font)
    });
    if found.is_none() {
        warn!(
            "no system font found in {} locations; text will be measured but not drawn",
            FONT_SEARCH_PATHS.len()
        );
    }
    found
}

/// A font at a fixed point size. Without a font, text is measured with
/// monospaced metrics and not drawn.
#[derive(Clone)]
pub struct Typeface {
    font: Option<Arc<Font<'static>>>,
    size: f32,
}

impl Typeface {
    pub fn new(font: Option<Font<'static>>, size: f32) -> Self {
        Self {
            font: font.map(Arc::new),
            size,
        }
    }

    pub fn font(&self) -> Option<&Font<'static>> {
        self.font.as_deref()
    }

    /// Point size used for layout.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn has_glyphs(&self) -> bool {
        self.font.is_some()
    }

    pub fn measure(&self, text: &str) -> TextMetrics {
        let Some(font) = self.font() else {
            return MonospacedTextMeasurer.measure(text);
        };
        let scale = Scale::uniform(self.size);
        let v_metrics = font.v_metrics(scale);
        let line_height = (v_metrics.ascent - v_metrics.descent + v_metrics.line_gap).ceil();
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines
            .iter()
            .map(|line| line_width(font, scale, line))
            .fold(0.0_f32, f32::max);
        TextMetrics {
            width: width.ceil(),
            height: line_height * lines.len() as f32,
            line_height,
            line_count: lines.len(),
        }
    }
}

fn line_width(font: &Font<'static>, scale: Scale, line: &str) -> f32 {
    font.layout(line, scale, point(0.0, 0.0))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

#[cfg(test)]
#[path = "tests/font_tests.rs"]
mod tests;
