//! Layout constraints system

use crate::axis::Axis;
use visuals_graphics::Size;

/// Constraints used during layout measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with exact width and height.
    pub fn tight(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Constrains the provided size to fit within these constraints.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// The largest size allowed, falling back to the minimum on unbounded axes.
    pub fn largest(&self) -> Size {
        let width = if self.max_width.is_finite() {
            self.max_width
        } else {
            self.min_width
        };
        let height = if self.max_height.is_finite() {
            self.max_height
        } else {
            self.min_height
        };
        Size::new(width, height)
    }

    /// Maximum extent along `axis`.
    pub fn max_along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.max_width,
            Axis::Vertical => self.max_height,
        }
    }

    /// Pins `axis` to exactly `extent`, clamped into the current bounds.
    pub fn tighten_along(self, axis: Axis, extent: f32) -> Self {
        match axis {
            Axis::Horizontal => {
                let width = extent.clamp(self.min_width, self.max_width);
                Self {
                    min_width: width,
                    max_width: width,
                    ..self
                }
            }
            Axis::Vertical => {
                let height = extent.clamp(self.min_height, self.max_height);
                Self {
                    min_height: height,
                    max_height: height,
                    ..self
                }
            }
        }
    }

    /// Replaces the bounds along `axis` with `0..=max`.
    pub fn loosen_along(self, axis: Axis, max: f32) -> Self {
        match axis {
            Axis::Horizontal => Self {
                min_width: 0.0,
                max_width: max,
                ..self
            },
            Axis::Vertical => Self {
                min_height: 0.0,
                max_height: max,
                ..self
            },
        }
    }

    /// Deflates constraints by the given amount on all sides.
    /// This is useful for applying padding before measuring children.
    pub fn deflate(self, horizontal: f32, vertical: f32) -> Self {
        Self {
            min_width: (self.min_width - horizontal).max(0.0),
            max_width: (self.max_width - horizontal).max(0.0),
            min_height: (self.min_height - vertical).max(0.0),
            max_height: (self.max_height - vertical).max(0.0),
        }
    }

    /// Creates new constraints with loosened minimums (min = 0).
    pub fn loosen(self) -> Self {
        Self {
            min_width: 0.0,
            min_height: 0.0,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
