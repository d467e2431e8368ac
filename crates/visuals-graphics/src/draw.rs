//! Draw primitives and the scope used to record them.

use crate::brush::Brush;
use crate::geometry::{Point, Rect, Size};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        brush: Brush,
    },
    Ellipse {
        rect: Rect,
        brush: Brush,
    },
    /// Straight segment with a stroke `width`, centered on the segment.
    Line {
        start: Point,
        end: Point,
        width: f32,
        brush: Brush,
    },
}

impl DrawPrimitive {
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        let offset = Point::new(dx, dy);
        match self {
            DrawPrimitive::Rect { rect, brush } => DrawPrimitive::Rect {
                rect: rect.translate(dx, dy),
                brush,
            },
            DrawPrimitive::Ellipse { rect, brush } => DrawPrimitive::Ellipse {
                rect: rect.translate(dx, dy),
                brush,
            },
            DrawPrimitive::Line {
                start,
                end,
                width,
                brush,
            } => DrawPrimitive::Line {
                start: start + offset,
                end: end + offset,
                width,
                brush,
            },
        }
    }

    /// Converts logical coordinates into device pixels.
    pub fn scale(self, factor: f32) -> Self {
        match self {
            DrawPrimitive::Rect { rect, brush } => DrawPrimitive::Rect {
                rect: rect.scale(factor),
                brush,
            },
            DrawPrimitive::Ellipse { rect, brush } => DrawPrimitive::Ellipse {
                rect: rect.scale(factor),
                brush,
            },
            DrawPrimitive::Line {
                start,
                end,
                width,
                brush,
            } => DrawPrimitive::Line {
                start: start.scale(factor),
                end: end.scale(factor),
                width: width * factor,
                brush,
            },
        }
    }
}

pub trait DrawScope {
    fn size(&self) -> Size;
    fn draw_rect(&mut self, brush: Brush);
    /// Draws a rectangle at the specified position and size.
    fn draw_rect_at(&mut self, rect: Rect, brush: Brush);
    fn draw_ellipse(&mut self, brush: Brush);
    fn draw_line(&mut self, start: Point, end: Point, width: f32, brush: Brush);
    fn into_primitives(self) -> Vec<DrawPrimitive>
    where
        Self: Sized;
}

#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_rect(&mut self, brush: Brush) {
        self.primitives.push(DrawPrimitive::Rect {
            rect: Rect::from_size(self.size),
            brush,
        });
    }

    fn draw_rect_at(&mut self, rect: Rect, brush: Brush) {
        self.primitives.push(DrawPrimitive::Rect { rect, brush });
    }

    fn draw_ellipse(&mut self, brush: Brush) {
        self.primitives.push(DrawPrimitive::Ellipse {
            rect: Rect::from_size(self.size),
            brush,
        });
    }

    fn draw_line(&mut self, start: Point, end: Point, width: f32, brush: Brush) {
        self.primitives.push(DrawPrimitive::Line {
            start,
            end,
            width,
            brush,
        });
    }

    fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}
