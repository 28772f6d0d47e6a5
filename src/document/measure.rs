//! Display metrics for the preview layer.

use unicode_width::UnicodeWidthStr;

/// Row count and widest-row display width of a text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextMetrics {
    /// Number of newline-separated rows (0 for empty text).
    pub rows: usize,
    /// Display width of the widest row, in terminal-style columns.
    pub max_width: usize,
}

/// Measure `text` for preview layout (centering, initial scale).
///
/// Widths are wcwidth-style column counts: CJK and most emoji count 2,
/// combining marks 0. A trailing newline contributes an empty final row.
#[must_use]
pub fn measure(text: &str) -> TextMetrics {
    if text.is_empty() {
        return TextMetrics::default();
    }
    let mut rows = 0;
    let mut max_width = 0;
    for line in text.split('\n') {
        rows += 1;
        max_width = max_width.max(line.width());
    }
    TextMetrics { rows, max_width }
}
