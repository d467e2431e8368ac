//! Draw list in device pixels.

use visuals_graphics::{Brush, Color, DrawPrimitive, Point, Rect};
use visuals_render_common::RenderScene;

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Rect(Rect),
    Ellipse(Rect),
    Line { start: Point, end: Point, width: f32 },
}

#[derive(Clone, Debug)]
pub struct DrawShape {
    pub kind: ShapeKind,
    pub brush: Brush,
    pub z_index: usize,
}

#[derive(Clone, Debug)]
pub struct TextDraw {
    pub rect: Rect,
    pub text: String,
    pub color: Color,
    /// Device pixels per point; multiplies the typeface size.
    pub scale: f32,
    pub z_index: usize,
}

pub struct Scene {
    pub shapes: Vec<DrawShape>,
    pub texts: Vec<TextDraw>,
    pub background: Color,
    next_z: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            texts: Vec::new(),
            background: Color::WHITE,
            next_z: 0,
        }
    }

    fn next_z(&mut self) -> usize {
        let z_index = self.next_z;
        self.next_z += 1;
        z_index
    }

    pub fn push_shape(&mut self, kind: ShapeKind, brush: Brush) {
        let z_index = self.next_z();
        self.shapes.push(DrawShape {
            kind,
            brush,
            z_index,
        });
    }

    /// `primitive` must already be in device pixels.
    pub fn push_primitive(&mut self, primitive: DrawPrimitive) {
        match primitive {
            DrawPrimitive::Rect { rect, brush } => self.push_shape(ShapeKind::Rect(rect), brush),
            DrawPrimitive::Ellipse { rect, brush } => {
                self.push_shape(ShapeKind::Ellipse(rect), brush)
            }
            DrawPrimitive::Line {
                start,
                end,
                width,
                brush,
            } => self.push_shape(ShapeKind::Line { start, end, width }, brush),
        }
    }

    pub fn push_text(&mut self, rect: Rect, text: String, color: Color, scale: f32) {
        let z_index = self.next_z();
        self.texts.push(TextDraw {
            rect,
            text,
            color,
            scale,
            z_index,
        });
    }

    /// Lines in paint order, for inspection.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, f32)> + '_ {
        self.shapes.iter().filter_map(|shape| match shape.kind {
            ShapeKind::Line { start, end, width } => Some((start, end, width)),
            _ => None,
        })
    }
}

impl RenderScene for Scene {
    fn clear(&mut self) {
        self.shapes.clear();
        self.texts.clear();
        self.next_z = 0;
    }

    fn len(&self) -> usize {
        self.shapes.len() + self.texts.len()
    }
}
