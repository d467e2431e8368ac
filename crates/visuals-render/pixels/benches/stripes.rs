use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use visuals_render_pixels::{PixelsRasterizer, TextureCache};
use visuals_ui::{Color, StripeTexture, StripeTileSpec, TextureSource};

const SCALES: &[f32] = &[1.0, 2.0, 3.0];

fn bench_render_tile(c: &mut Criterion) {
    let mut group = c.benchmark_group("stripe_tile_render");
    for &scale in SCALES {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            let spec = StripeTileSpec { size: 16.0, scale };
            b.iter(|| StripeTexture::render(black_box(spec), Color::BLACK, &PixelsRasterizer));
        });
    }
    group.finish();
}

fn bench_cached_tile(c: &mut Criterion) {
    let mut cache = TextureCache::default();
    let spec = StripeTileSpec {
        size: 16.0,
        scale: 2.0,
    };
    c.bench_function("stripe_tile_cached", |b| {
        b.iter(|| cache.stripe_tile(black_box(spec), Color::BLACK));
    });
}

criterion_group!(benches, bench_render_tile, bench_cached_tile);
criterion_main!(benches);
