use crate::anchor::Anchor;
use crate::layout::LayoutBox;
use crate::modifier::ModifierElement;
use crate::preference::{reduce_preference, PreferenceKey};

/// One legend entry: what to show, where it points, how far to indent.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationRecord {
    anchor: Anchor,
    label: String,
    stack_index: usize,
}

impl AnnotationRecord {
    pub fn new(label: impl Into<String>, anchor: Anchor, stack_index: usize) -> Self {
        Self {
            anchor,
            label: label.into(),
            stack_index,
        }
    }

    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn stack_index(&self) -> usize {
        self.stack_index
    }
}

/// Preference carrying legend records, concatenated without reordering
/// or deduplication.
pub struct LegendKey;

impl PreferenceKey for LegendKey {
    type Value = Vec<AnnotationRecord>;

    fn default_value() -> Self::Value {
        Vec::new()
    }

    fn reduce(value: &mut Self::Value, next: Self::Value) {
        value.extend(next);
    }

    /// Tags are read innermost first, so an outer tag on the same node
    /// follows the inner one.
    fn emitted(layout: &LayoutBox) -> Option<Self::Value> {
        let records: Vec<AnnotationRecord> = layout
            .modifier
            .elements()
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(depth, element)| match element {
                ModifierElement::Legend(tag) => Some(AnnotationRecord::new(
                    tag.label.clone(),
                    Anchor::new(layout.node_id, layout.layers[depth]),
                    tag.index,
                )),
                _ => None,
            })
            .collect();
        (!records.is_empty()).then_some(records)
    }
}

/// Builder over [`LegendKey`] values.
#[derive(Debug, Default)]
pub struct AnnotationCollector {
    records: Vec<AnnotationRecord>,
}

impl AnnotationCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single record.
    pub fn emit(&mut self, record: AnnotationRecord) {
        LegendKey::reduce(&mut self.records, vec![record]);
    }

    /// Appends an already merged sequence.
    pub fn absorb(&mut self, records: Vec<AnnotationRecord>) {
        LegendKey::reduce(&mut self.records, records);
    }

    pub fn finish(self) -> Vec<AnnotationRecord> {
        self.records
    }

    /// Concatenates child sequences in order.
    pub fn merge<I>(children: I) -> Vec<AnnotationRecord>
    where
        I: IntoIterator<Item = Vec<AnnotationRecord>>,
    {
        let mut collector = Self::new();
        for child in children {
            collector.absorb(child);
        }
        collector.finish()
    }

    /// Every record emitted inside `layout`, in emission order.
    pub fn collect(layout: &LayoutBox) -> Vec<AnnotationRecord> {
        reduce_preference::<LegendKey>(layout)
    }
}

#[cfg(test)]
#[path = "tests/collector_tests.rs"]
mod tests;
