//! Upward reduction of values emitted by laid-out nodes.

use crate::layout::LayoutBox;

/// A value flowing from descendants toward the root after layout.
///
/// Each node's value is its children's values reduced in declaration
/// order, followed by whatever the node emits itself.
pub trait PreferenceKey {
    type Value: Clone + PartialEq;

    fn default_value() -> Self::Value;

    /// Folds `next` into `value`. Must be associative.
    fn reduce(value: &mut Self::Value, next: Self::Value);

    /// The value `layout` contributes on its own, if any.
    fn emitted(_layout: &LayoutBox) -> Option<Self::Value> {
        None
    }
}

/// Post-order walk computing `K`'s value for the subtree at `layout`.
pub fn reduce_preference<K: PreferenceKey>(layout: &LayoutBox) -> K::Value {
    let mut value = K::default_value();
    for child in &layout.children {
        K::reduce(&mut value, reduce_preference::<K>(child));
    }
    if let Some(own) = K::emitted(layout) {
        K::reduce(&mut value, own);
    }
    value
}

#[cfg(test)]
#[path = "tests/preference_tests.rs"]
mod tests;
