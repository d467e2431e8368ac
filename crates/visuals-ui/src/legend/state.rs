use log::{debug, warn};
use rustc_hash::FxHashMap;

use super::collector::AnnotationRecord;

/// The merged records in emission order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendItems {
    records: Vec<AnnotationRecord>,
}

impl LegendItems {
    pub fn new(records: Vec<AnnotationRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AnnotationRecord] {
        &self.records
    }

    /// Records in display order: last emitted first.
    pub fn display_rows(&self) -> impl Iterator<Item = &AnnotationRecord> + '_ {
        self.records.iter().rev()
    }

    /// Stacking indices used by more than one record, ascending.
    ///
    /// Rows are keyed by stacking index, so these rows share an identity.
    pub fn duplicate_indices(&self) -> Vec<usize> {
        let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
        for record in &self.records {
            *counts.entry(record.stack_index()).or_default() += 1;
        }
        let mut duplicates: Vec<usize> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(index, _)| index)
            .collect();
        duplicates.sort_unstable();
        duplicates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Legend items owned by one host, replaced wholesale after each layout.
#[derive(Debug, Default)]
pub struct LegendState {
    items: LegendItems,
}

impl LegendState {
    pub fn items(&self) -> &LegendItems {
        &self.items
    }

    /// Returns whether the items changed.
    pub fn replace(&mut self, records: Vec<AnnotationRecord>) -> bool {
        if self.items.records == records {
            return false;
        }
        let items = LegendItems::new(records);
        let duplicates = items.duplicate_indices();
        if !duplicates.is_empty() {
            warn!(
                "legend rows share stacking indices {:?}; the last row wins their identity",
                duplicates
            );
        }
        debug!(
            "legend items replaced: {} -> {}",
            self.items.len(),
            items.len()
        );
        self.items = items;
        true
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
