//! Run compaction: flat style sequence to minimal rendering segments.

use crate::document::chars::CharStyle;
use crate::style::StyleTag;

/// A maximal run of same-styled text, derived for rendering.
///
/// Segments are ephemeral: recomputed whenever the sequence or text
/// changes, never stored in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSegment {
    /// The run's text (non-empty).
    pub text: String,
    /// Tag shared by every character of the run.
    pub style: StyleTag,
}

impl TextSegment {
    /// Create a segment.
    #[must_use]
    pub fn new(text: impl Into<String>, style: StyleTag) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Compact the style sequence into maximal same-style runs.
///
/// Single left-to-right scan: characters accumulate into the current run
/// until the tag changes, at which point the run is flushed. Guarantees:
/// every emitted run is non-empty, concatenating the runs reproduces the
/// sequence's text exactly, and no two adjacent runs share a tag.
///
/// `source_text` backs the desync fallback: an empty sequence alongside
/// non-empty text yields one untinted segment covering all of it, so the
/// renderer always has something sane to draw. Empty sequence and empty
/// text yield no segments (the host shows its placeholder).
#[must_use]
pub fn compact(styles: &[CharStyle], source_text: &str) -> Vec<TextSegment> {
    if styles.is_empty() {
        if source_text.is_empty() {
            return Vec::new();
        }
        return vec![TextSegment::new(source_text, StyleTag::None)];
    }

    let mut segments = Vec::new();
    let mut run = String::new();
    let mut run_style = styles[0].style;

    for entry in styles {
        if entry.style == run_style {
            run.push_str(&entry.ch);
        } else {
            segments.push(TextSegment::new(std::mem::take(&mut run), run_style));
            run.push_str(&entry.ch);
            run_style = entry.style;
        }
    }
    if !run.is_empty() {
        segments.push(TextSegment::new(run, run_style));
    }
    segments
}
