//! Legend annotations: regions tag themselves with a label, the tags are
//! collected upward after layout, and a legend host lists them with a
//! connector pointing back at each tagged region.

mod collector;
mod host;
mod state;

pub use collector::{AnnotationCollector, AnnotationRecord, LegendKey};
pub use host::{connector_height, Connector, LegendHost, CONTENT_KEY, LABELS_KEY};
pub use state::{LegendItems, LegendState};

use crate::modifier::{Modifier, ModifierElement};

/// Horizontal indent per stacking level.
pub const LEGEND_INDENT: f32 = 20.0;
/// Side of the circular row marker.
pub const MARKER_SIZE: f32 = 3.0;
pub const CONNECTOR_WIDTH: f32 = 1.0;

/// Payload of a [`ModifierElement::Legend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendTag {
    pub label: String,
    pub index: usize,
}

impl Modifier {
    /// Tags the bounds at this point of the chain with a legend entry.
    ///
    /// `index` sets the row's indentation; it need not be unique.
    pub fn legend(self, label: impl Into<String>, index: usize) -> Self {
        self.then(Self::with_element(ModifierElement::Legend(LegendTag {
            label: label.into(),
            index,
        })))
    }
}
