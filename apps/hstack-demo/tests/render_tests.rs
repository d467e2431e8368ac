//! Full renders. Creating a renderer installs a process-wide text
//! measurer, so these live apart from the layout assertions.

use hstack_demo::{render_demo, save_png, DemoSettings};
use visuals_ui::ColorScheme;

#[test]
fn renders_at_device_resolution_and_saves_png() {
    let settings = DemoSettings::default().with_size(200.0, 150.0).with_scale(2.0);
    let bitmap = render_demo(&settings).expect("demo renders");
    assert_eq!((bitmap.width(), bitmap.height()), (400, 300));

    let dir = std::env::temp_dir().join(format!("hstack-demo-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("frame.png");
    save_png(&bitmap, &path).expect("png written");
    let decoded = image::open(&path).expect("png decodes").to_rgba8();
    assert_eq!(decoded.dimensions(), (400, 300));
    assert_eq!(decoded.as_raw().as_slice(), bitmap.pixels());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rejects_non_positive_scale() {
    let settings = DemoSettings::default().with_scale(0.0);
    let error = render_demo(&settings).expect_err("zero scale is invalid");
    assert!(error.to_string().contains("scale"));
}

#[test]
fn dark_scheme_flips_the_background() {
    let light = render_demo(&DemoSettings::default().with_size(50.0, 50.0).with_scale(1.0))
        .expect("light renders");
    let dark = render_demo(
        &DemoSettings::default()
            .with_size(50.0, 50.0)
            .with_scale(1.0)
            .with_color_scheme(ColorScheme::Dark),
    )
    .expect("dark renders");
    assert_ne!(light.pixel(0, 0), dark.pixel(0, 0));
}
