use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hstack_demo::{render_demo, save_png, DemoSettings};
use visuals_ui::ColorScheme;

#[derive(Parser, Debug)]
#[command(name = "hstack-demo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Where to write the rendered PNG
    #[arg(short, long, value_name = "FILE", default_value = "hstack-demo.png")]
    output: PathBuf,

    /// Viewport width in points
    #[arg(long, default_value = "400")]
    width: f32,

    /// Viewport height in points
    #[arg(long, default_value = "300")]
    height: f32,

    /// Device pixels per point
    #[arg(long, default_value = "2")]
    scale: f32,

    /// Render with the dark color scheme
    #[arg(long)]
    dark: bool,

    /// TrueType/OpenType font for labels (system fonts are searched otherwise)
    #[arg(long, value_name = "FILE")]
    font: Option<PathBuf>,
}

impl Args {
    fn into_settings(self) -> DemoSettings {
        let color_scheme = if self.dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        };
        DemoSettings::default()
            .with_size(self.width, self.height)
            .with_scale(self.scale)
            .with_color_scheme(color_scheme)
            .with_output(self.output)
            .with_font_path(self.font)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = Args::parse().into_settings();
    let bitmap = render_demo(&settings).context("rendering the demo")?;
    save_png(&bitmap, &settings.output)?;
    log::info!(
        "wrote {}x{} px to {}",
        bitmap.width(),
        bitmap.height(),
        settings.output.display()
    );
    Ok(())
}
