//! Alignment utilities for positioning content

/// Alignment across both axes used for positioning content within a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const TOP_START: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Top);

    pub const CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::CenterVertically,
    );
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Leading edge.
    Start,
    CenterHorizontally,
    /// Trailing edge.
    End,
}

impl HorizontalAlignment {
    /// Computes the horizontal offset of a child of width `child` inside `available`.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            HorizontalAlignment::Start => 0.0,
            HorizontalAlignment::CenterHorizontally => (available - child) / 2.0,
            HorizontalAlignment::End => available - child,
        }
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    CenterVertically,
    Bottom,
}

impl VerticalAlignment {
    /// Computes the vertical offset of a child of height `child` inside `available`.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::CenterVertically => (available - child) / 2.0,
            VerticalAlignment::Bottom => available - child,
        }
    }
}

#[cfg(test)]
#[path = "tests/alignment_tests.rs"]
mod tests;
