use super::*;
use visuals_ui::{ColorScheme, DiagonalStripes, Environment};

fn spec(size: f32, scale: f32) -> StripeTileSpec {
    StripeTileSpec { size, scale }
}

/// Alpha of the tile at `(x, y)`.
fn coverage(tile: &ImageBitmap, x: u32, y: u32) -> i32 {
    tile.pixel(x, y)[3] as i32
}

#[test]
fn tiles_are_reused_for_equal_keys() {
    let mut cache = TextureCache::default();
    let first = cache.stripe_tile(spec(16.0, 1.0), Color::BLACK);
    let second = cache.stripe_tile(spec(16.0, 1.0), Color::BLACK);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.misses(), 1);
}

#[test]
fn theme_flip_renders_a_new_tile() {
    let mut cache = TextureCache::default();
    let stripes = DiagonalStripes::default();
    let light = Environment::default();
    let dark = Environment::default().with_color_scheme(ColorScheme::Dark);

    let light_tile = cache.stripe_tile(stripes.tile_spec(&light), light.primary());
    let dark_tile = cache.stripe_tile(stripes.tile_spec(&dark), dark.primary());
    assert_eq!(cache.misses(), 2);
    assert!(!Arc::ptr_eq(&light_tile, &dark_tile));

    let lit = (0..16)
        .flat_map(|y| (0..16).map(move |x| (x, y)))
        .find(|&(x, y)| coverage(&light_tile, x, y) == 255)
        .expect("a fully covered stripe pixel");
    assert_eq!(light_tile.pixel(lit.0, lit.1), [0, 0, 0, 255]);
    assert_eq!(dark_tile.pixel(lit.0, lit.1), [255, 255, 255, 255]);
}

#[test]
fn doubling_scale_doubles_pixel_dimensions() {
    let mut cache = TextureCache::default();
    let one = cache.stripe_tile(spec(16.0, 1.0), Color::BLACK);
    let two = cache.stripe_tile(spec(16.0, 2.0), Color::BLACK);
    assert_eq!((one.width(), one.height()), (16, 16));
    assert_eq!((two.width(), two.height()), (32, 32));
    assert_eq!(two.logical_size(), one.logical_size());

    // Same pattern: the stripe through the tile center is present at both.
    assert_eq!(coverage(&one, 8, 7), coverage(&one, 7, 8));
    assert!(coverage(&two, 16, 15) > 0);
    assert!(coverage(&one, 7, 8) > 0);
}

#[test]
fn adjacent_tiles_continue_each_stripe() {
    let mut cache = TextureCache::default();
    let specs = [
        spec(16.0, 1.0),
        spec(16.0, 2.0),
        spec(16.0, 3.0),
        // 17.6 and 12.5 device pixels, rounded up to 18 and 13.
        spec(16.0, 1.1),
        spec(10.0, 1.25),
    ];
    for tile_spec in specs {
        let tile = cache.stripe_tile(tile_spec, Color::BLACK);
        let n = tile.width();
        assert_eq!(n, tile_spec.pixel_size());
        // Stepping one pixel along a stripe (+x, −y) and wrapping into the
        // neighboring tile must land on the same coverage.
        for y in 0..n {
            for x in 0..n {
                let next = ((x + 1) % n, (y + n - 1) % n);
                let delta = coverage(&tile, x, y) - coverage(&tile, next.0, next.1);
                assert!(
                    delta.abs() <= 1,
                    "seam for {tile_spec:?}: ({x}, {y}) vs {next:?} differ by {delta}"
                );
            }
        }
    }
}

#[test]
fn lru_evicts_the_oldest_tile() {
    let mut cache = TextureCache::new(1);
    cache.stripe_tile(spec(8.0, 1.0), Color::BLACK);
    cache.stripe_tile(spec(12.0, 1.0), Color::BLACK);
    cache.stripe_tile(spec(8.0, 1.0), Color::BLACK);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.misses(), 3);
}
