//! A row of colored, striped and text panels, each tagged for the legend
//! drawn underneath it.

pub mod settings;

use std::path::Path;

use anyhow::Context;
use log::info;
use visuals_render_pixels::PixelsRenderer;
use visuals_ui::prelude::*;
use visuals_ui::{Color, ImageBitmap, LinearArrangement};

pub use settings::DemoSettings;

pub const GREETING: &str = "Hello, world";

/// Narrow striped panel with a hairline border.
fn spacer(modifier: Modifier) -> Node {
    Fill(
        modifier.border(ShapeStyle::Primary, 1.0).width(8.0),
        DiagonalStripes::default(),
    )
}

/// The annotated row, without the legend.
pub fn content_view() -> Node {
    Row(
        Modifier::empty().legend("HStack", 2),
        RowSpec::default().horizontal_arrangement(LinearArrangement::spaced_by(0.0)),
        vec![
            Fill(Modifier::empty().legend("Blue Rectangle", 0), Color::BLUE),
            spacer(Modifier::empty().legend("Spacer", 1)),
            Text(Modifier::empty(), GREETING),
            spacer(Modifier::empty()),
            Fill(Modifier::empty(), Color::GREEN),
        ],
    )
}

pub type DemoRoot = LegendHost<fn() -> Node>;

/// [`content_view`] with its legend, padded away from the edges.
pub fn demo_root() -> DemoRoot {
    LegendHost::new(content_view as fn() -> Node).with_modifier(Modifier::empty().padding(16.0))
}

/// Lays the demo out and rasterizes it.
pub fn render_demo(settings: &DemoSettings) -> anyhow::Result<ImageBitmap> {
    settings.validate()?;
    let mut renderer =
        PixelsRenderer::new(settings.renderer_options()).context("creating the renderer")?;
    let viewport = settings.viewport();
    let mut composition = Composition::new(demo_root());
    let tree = composition.compute_frame(viewport);
    info!(
        "legend lists {} annotations",
        composition.root().items().len()
    );
    renderer
        .render(&tree, &settings.environment(), viewport)
        .context("rasterizing the frame")
}

pub fn save_png(bitmap: &ImageBitmap, path: &Path) -> anyhow::Result<()> {
    let image = image::RgbaImage::from_raw(bitmap.width(), bitmap.height(), bitmap.pixels().to_vec())
        .context("bitmap does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}
