//! Per-character style sequence and its reconciliation.
//!
//! The sequence invariant: its length always equals the grapheme count of
//! the current text, and entry `i` holds the text's i-th cluster. Every
//! text edit must restore this synchronously via [`reconcile`] before
//! anything derives from the sequence.

use crate::style::StyleTag;
use unicode_segmentation::UnicodeSegmentation;

/// One styled character of the document.
///
/// `ch` is a single grapheme cluster as produced by the host text widget;
/// cluster segmentation is taken at face value here, not re-validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharStyle {
    /// The character (one extended grapheme cluster).
    pub ch: String,
    /// Tint tag applied to it.
    pub style: StyleTag,
}

impl CharStyle {
    /// Create a styled character.
    #[must_use]
    pub fn new(ch: impl Into<String>, style: StyleTag) -> Self {
        Self {
            ch: ch.into(),
            style,
        }
    }

    /// Create an untinted character.
    #[must_use]
    pub fn plain(ch: impl Into<String>) -> Self {
        Self::new(ch, StyleTag::None)
    }
}

/// Rebuild the style sequence after a full-text replacement.
///
/// Styles carry over by position, not by character identity: entry `i` of
/// the result keeps `prev[i]`'s tag whenever `i` is within the old length,
/// and defaults to [`StyleTag::None`] beyond it. A shorter text truncates
/// the sequence. Mid-string insertions therefore shift styles onto
/// different characters; that positional policy is the contract, since the
/// host only reports whole-text replacements, never diffs.
///
/// Total over all inputs, including the empty string.
#[must_use]
pub fn reconcile(new_text: &str, prev: &[CharStyle]) -> Vec<CharStyle> {
    new_text
        .graphemes(true)
        .enumerate()
        .map(|(i, cluster)| CharStyle {
            ch: cluster.to_string(),
            style: prev.get(i).map_or(StyleTag::None, |c| c.style),
        })
        .collect()
}

/// Apply `tag` to the half-open grapheme range `[start, end)`.
///
/// An empty selection is a no-op and returns the input unchanged. Entries
/// outside the range keep their tag but have `ch` refreshed from `text`
/// (resync guard; `text` is the source of truth for characters). Pure: the
/// caller commits the result.
#[must_use]
pub fn apply_style(
    styles: &[CharStyle],
    text: &str,
    start: usize,
    end: usize,
    tag: StyleTag,
) -> Vec<CharStyle> {
    if start == end {
        return styles.to_vec();
    }

    let mut clusters = text.graphemes(true);
    styles
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let ch = clusters
                .next()
                .map_or_else(|| entry.ch.clone(), str::to_string);
            let style = if i >= start && i < end {
                tag
            } else {
                entry.style
            };
            CharStyle { ch, style }
        })
        .collect()
}
