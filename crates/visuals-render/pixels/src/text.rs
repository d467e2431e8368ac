use std::borrow::Borrow;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use lru::LruCache;
use visuals_ui::{TextMeasurer, TextMetrics};

use crate::font::Typeface;

#[derive(Clone, PartialEq, Eq, Hash)]
struct TextKey(Arc<str>);

impl Borrow<str> for TextKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Measures with a [`Typeface`], remembering recent strings.
pub struct RusttypeTextMeasurer {
    typeface: Typeface,
    cache: Mutex<LruCache<TextKey, TextMetrics>>,
}

impl RusttypeTextMeasurer {
    pub fn new(typeface: Typeface, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            typeface,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl TextMeasurer for RusttypeTextMeasurer {
    fn measure(&self, text: &str) -> TextMetrics {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(metrics) = cache.get(text) {
            return *metrics;
        }
        let metrics = self.typeface.measure(text);
        cache.put(TextKey(Arc::from(text)), metrics);
        metrics
    }
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
