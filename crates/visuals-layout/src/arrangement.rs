//! Arrangement strategies for distributing children along an axis

/// Strategy that positions children one after another on the main axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinearArrangement {
    /// Children packed against the leading edge.
    Start,
    /// Children packed as a centered block.
    Center,
    /// Children packed against the leading edge with a fixed gap between them.
    SpacedBy(f32),
}

impl LinearArrangement {
    pub fn spaced_by(spacing: f32) -> Self {
        Self::SpacedBy(spacing)
    }

    /// Gap inserted between two consecutive children.
    pub fn spacing(&self) -> f32 {
        match *self {
            LinearArrangement::SpacedBy(spacing) => spacing,
            LinearArrangement::Start | LinearArrangement::Center => 0.0,
        }
    }

    /// Main-axis space taken by `sizes` once gaps are added.
    pub fn occupied(&self, sizes: &[f32]) -> f32 {
        let gaps = sizes.len().saturating_sub(1) as f32 * self.spacing();
        sizes.iter().copied().sum::<f32>() + gaps
    }

    /// Writes the leading position of every child into `out_positions`.
    pub fn arrange(&self, total_size: f32, sizes: &[f32], out_positions: &mut [f32]) {
        debug_assert_eq!(sizes.len(), out_positions.len());
        let start = match *self {
            LinearArrangement::Center => (total_size - self.occupied(sizes)) / 2.0,
            LinearArrangement::Start | LinearArrangement::SpacedBy(_) => 0.0,
        };
        let gap = self.spacing();
        let mut cursor = start;
        for (size, position) in sizes.iter().zip(out_positions.iter_mut()) {
            *position = cursor;
            cursor += size + gap;
        }
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
