//! Software rasterization of scenes and primitive lists.

use std::ops::Range;

use rusttype::{point, Scale};
use visuals_graphics::{Brush, Color, DrawPrimitive, Dp, ImageBitmap, Point, Rect, Size};
use visuals_ui::ImageRasterizer;

use crate::font::Typeface;
use crate::scene::{DrawShape, Scene, ShapeKind, TextDraw};
use crate::PixelsRendererError;

/// Straight-alpha RGBA8 buffer being painted.
struct PixelTarget<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelTarget<'a> {
    fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba_u8();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    fn span_x(&self, min: f32, max: f32) -> Range<i32> {
        span(min, max, self.width)
    }

    fn span_y(&self, min: f32, max: f32) -> Range<i32> {
        span(min, max, self.height)
    }

    /// Source-over with `color` scaled by `coverage`.
    fn blend(&mut self, px: i32, py: i32, color: [f32; 4], coverage: f32) {
        if px < 0 || py < 0 || px as u32 >= self.width || py as u32 >= self.height {
            return;
        }
        let alpha = color[3] * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let idx = ((py as u32 * self.width + px as u32) * 4) as usize;
        let existing = &mut self.pixels[idx..idx + 4];
        let dst_alpha = existing[3] as f32 / 255.0;
        let out_alpha = alpha + dst_alpha * (1.0 - alpha);
        if out_alpha <= 0.0 {
            return;
        }
        for channel in 0..3 {
            let dst = existing[channel] as f32 / 255.0;
            let out = (color[channel] * alpha + dst * dst_alpha * (1.0 - alpha)) / out_alpha;
            existing[channel] = to_u8(out);
        }
        existing[3] = to_u8(out_alpha);
    }
}

fn span(min: f32, max: f32, limit: u32) -> Range<i32> {
    let start = min.floor().max(0.0) as i32;
    let end = (max.ceil().max(0.0) as i32).min(limit as i32);
    start..end.max(start)
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Paints `scene` over its background color into `frame`.
pub fn draw_scene(
    frame: &mut [u8],
    width: u32,
    height: u32,
    scene: &Scene,
    typeface: &Typeface,
) -> Result<(), PixelsRendererError> {
    let expected = width as usize * height as usize * 4;
    if frame.len() != expected {
        return Err(PixelsRendererError::FrameSize {
            width,
            height,
            expected,
            actual: frame.len(),
        });
    }
    let mut target = PixelTarget::new(frame, width, height);
    target.fill(scene.background);

    enum Op<'s> {
        Shape(&'s DrawShape),
        Text(&'s TextDraw),
    }
    let mut ops: Vec<(usize, Op<'_>)> = scene
        .shapes
        .iter()
        .map(|shape| (shape.z_index, Op::Shape(shape)))
        .chain(scene.texts.iter().map(|text| (text.z_index, Op::Text(text))))
        .collect();
    ops.sort_by_key(|(z_index, _)| *z_index);

    for (_, op) in ops {
        match op {
            Op::Shape(shape) => draw_shape(&mut target, &shape.kind, &shape.brush),
            Op::Text(text) => draw_text(&mut target, typeface, text),
        }
    }
    Ok(())
}

fn draw_shape(target: &mut PixelTarget<'_>, kind: &ShapeKind, brush: &Brush) {
    match kind {
        ShapeKind::Rect(rect) => fill_rect(target, rect.normalized(), brush),
        ShapeKind::Ellipse(rect) => fill_ellipse(target, rect.normalized(), brush),
        ShapeKind::Line { start, end, width } => stroke_line(target, *start, *end, *width, brush),
    }
}

fn fill_rect(target: &mut PixelTarget<'_>, rect: Rect, brush: &Brush) {
    for py in target.span_y(rect.min_y(), rect.max_y()) {
        let center_y = py as f32 + 0.5;
        if center_y < rect.min_y() || center_y >= rect.max_y() {
            continue;
        }
        for px in target.span_x(rect.min_x(), rect.max_x()) {
            let center_x = px as f32 + 0.5;
            if center_x < rect.min_x() || center_x >= rect.max_x() {
                continue;
            }
            let sample = sample_brush(brush, rect, center_x, center_y);
            target.blend(px, py, sample, 1.0);
        }
    }
}

fn fill_ellipse(target: &mut PixelTarget<'_>, rect: Rect, brush: &Brush) {
    let radius_x = rect.width / 2.0;
    let radius_y = rect.height / 2.0;
    if radius_x <= 0.0 || radius_y <= 0.0 {
        return;
    }
    for py in target.span_y(rect.min_y(), rect.max_y()) {
        let dy = (py as f32 + 0.5 - rect.mid_y()) / radius_y;
        for px in target.span_x(rect.min_x(), rect.max_x()) {
            let dx = (px as f32 + 0.5 - rect.mid_x()) / radius_x;
            if dx * dx + dy * dy > 1.0 {
                continue;
            }
            let sample = sample_brush(brush, rect, px as f32 + 0.5, py as f32 + 0.5);
            target.blend(px, py, sample, 1.0);
        }
    }
}

/// Anti-aliased stroke centered on the segment. Coverage falls off over
/// one pixel past the stroke's half width.
fn stroke_line(target: &mut PixelTarget<'_>, start: Point, end: Point, width: f32, brush: &Brush) {
    if width <= 0.0 {
        return;
    }
    let reach = width / 2.0 + 1.0;
    let bounds = Rect::new(
        start.x.min(end.x) - reach,
        start.y.min(end.y) - reach,
        (end.x - start.x).abs() + 2.0 * reach,
        (end.y - start.y).abs() + 2.0 * reach,
    );
    for py in target.span_y(bounds.min_y(), bounds.max_y()) {
        for px in target.span_x(bounds.min_x(), bounds.max_x()) {
            let center = Point::new(px as f32 + 0.5, py as f32 + 0.5);
            let distance = distance_to_segment(center, start, end);
            let coverage = (width / 2.0 + 0.5 - distance).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }
            let sample = sample_brush(brush, bounds, center.x, center.y);
            target.blend(px, py, sample, coverage);
        }
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let length_sq = ab.x * ab.x + ab.y * ab.y;
    let t = if length_sq <= f32::EPSILON {
        0.0
    } else {
        ((ap.x * ab.x + ap.y * ab.y) / length_sq).clamp(0.0, 1.0)
    };
    let closest = Point::new(a.x + ab.x * t, a.y + ab.y * t);
    let dx = p.x - closest.x;
    let dy = p.y - closest.y;
    (dx * dx + dy * dy).sqrt()
}

/// Color of `brush` at device position `(x, y)` inside `rect`. Patterns
/// repeat from the rect's origin.
fn sample_brush(brush: &Brush, rect: Rect, x: f32, y: f32) -> [f32; 4] {
    match brush {
        Brush::Solid(color) => color.to_unit_rgba(),
        Brush::Pattern { tile } => {
            if tile.width() == 0 || tile.height() == 0 {
                return [0.0; 4];
            }
            let tx = ((x - rect.x).floor() as i64).rem_euclid(tile.width() as i64) as u32;
            let ty = ((y - rect.y).floor() as i64).rem_euclid(tile.height() as i64) as u32;
            tile.pixel(tx, ty).map(|channel| channel as f32 / 255.0)
        }
    }
}

fn draw_text(target: &mut PixelTarget<'_>, typeface: &Typeface, draw: &TextDraw) {
    let Some(font) = typeface.font() else {
        return;
    };
    let text_scale = draw.scale.max(0.0);
    if text_scale == 0.0 {
        return;
    }
    let color = draw.color.to_unit_rgba();
    let scale = Scale::uniform(typeface.size() * text_scale);
    let v_metrics = font.v_metrics(scale);
    let line_height = (v_metrics.ascent - v_metrics.descent + v_metrics.line_gap).ceil();
    for (line_index, line) in draw.text.split('\n').enumerate() {
        let baseline = draw.rect.y + v_metrics.ascent + line_index as f32 * line_height;
        for glyph in font.layout(line, scale, point(draw.rect.x, baseline)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                target.blend(bb.min.x + gx as i32, bb.min.y + gy as i32, color, coverage);
            });
        }
    }
}

/// [`ImageRasterizer`] backed by this crate's software rasterizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct PixelsRasterizer;

impl ImageRasterizer for PixelsRasterizer {
    /// Primitives are drawn at the scale that maps `size.width` onto the
    /// rounded-up bitmap width, so content repeating every `size` points
    /// repeats exactly at the bitmap edge.
    fn rasterize(&self, primitives: &[DrawPrimitive], size: Size, scale: f32) -> ImageBitmap {
        let width = Dp(size.width).to_px(scale).ceil().max(0.0) as u32;
        let height = Dp(size.height).to_px(scale).ceil().max(0.0) as u32;
        let effective = if size.width > 0.0 {
            width as f32 / size.width
        } else {
            scale
        };
        let mut bitmap = ImageBitmap::new(width, height, effective);
        {
            let mut target = PixelTarget::new(bitmap.pixels_mut(), width, height);
            for primitive in primitives {
                let primitive = primitive.clone().scale(effective);
                match &primitive {
                    DrawPrimitive::Rect { rect, brush } => {
                        fill_rect(&mut target, rect.normalized(), brush)
                    }
                    DrawPrimitive::Ellipse { rect, brush } => {
                        fill_ellipse(&mut target, rect.normalized(), brush)
                    }
                    DrawPrimitive::Line {
                        start,
                        end,
                        width,
                        brush,
                    } => stroke_line(&mut target, *start, *end, *width, brush),
                }
            }
        }
        bitmap
    }
}

#[cfg(test)]
#[path = "tests/draw_tests.rs"]
mod tests;
