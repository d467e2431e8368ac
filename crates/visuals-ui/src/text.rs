use std::sync::{OnceLock, PoisonError, RwLock};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    /// Height of a single line of text
    pub line_height: f32,
    /// Number of lines in the text
    pub line_count: usize,
}

pub trait TextMeasurer: Send + Sync + 'static {
    /// Measures `text` in logical points.
    fn measure(&self, text: &str) -> TextMetrics;
}

#[derive(Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    pub const CHAR_WIDTH: f32 = 8.0;
    pub const LINE_HEIGHT: f32 = 20.0;
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str) -> TextMetrics {
        let lines: Vec<&str> = text.split('\n').collect();
        let line_count = lines.len().max(1);

        let width = lines
            .iter()
            .map(|line| line.chars().count() as f32 * Self::CHAR_WIDTH)
            .fold(0.0_f32, f32::max);

        TextMetrics {
            width,
            height: line_count as f32 * Self::LINE_HEIGHT,
            line_height: Self::LINE_HEIGHT,
            line_count,
        }
    }
}

fn global_text_measurer() -> &'static RwLock<Box<dyn TextMeasurer>> {
    static TEXT_MEASURER: OnceLock<RwLock<Box<dyn TextMeasurer>>> = OnceLock::new();
    TEXT_MEASURER.get_or_init(|| RwLock::new(Box::new(MonospacedTextMeasurer)))
}

pub fn set_text_measurer<M: TextMeasurer>(measurer: M) {
    let mut guard = global_text_measurer()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Box::new(measurer);
}

pub fn measure_text(text: &str) -> TextMetrics {
    global_text_measurer()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .measure(text)
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
