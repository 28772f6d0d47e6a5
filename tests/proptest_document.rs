//! Property-based tests for the styled document model.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use proptest::prelude::*;
use tintcap::{CharStyle, StyleTag, apply_style, compact, reconcile};
use unicode_segmentation::UnicodeSegmentation;

// ============================================================================
// Strategies
// ============================================================================

/// Generate arbitrary UTF-8 strings (proptest default).
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,80}"
}

/// Generate an arbitrary style tag.
fn style_tag() -> impl Strategy<Value = StyleTag> {
    prop::sample::select(vec![
        StyleTag::None,
        StyleTag::Red,
        StyleTag::Yellow,
        StyleTag::Blue,
    ])
}

/// Generate a text together with a matching styled sequence.
fn styled_text() -> impl Strategy<Value = (String, Vec<CharStyle>)> {
    utf8_string().prop_flat_map(|text| {
        let len = text.graphemes(true).count();
        let tags = prop::collection::vec(style_tag(), len);
        (Just(text), tags).prop_map(|(text, tags)| {
            let styles = text
                .graphemes(true)
                .zip(tags)
                .map(|(g, tag)| CharStyle::new(g, tag))
                .collect();
            (text, styles)
        })
    })
}

// ============================================================================
// Reconciliation Properties
// ============================================================================

proptest! {
    /// After reconcile, the sequence mirrors the new text exactly.
    #[test]
    fn reconcile_restores_length_invariant(
        (_, old_styles) in styled_text(),
        new_text in utf8_string(),
    ) {
        let styles = reconcile(&new_text, &old_styles);
        let clusters: Vec<&str> = new_text.graphemes(true).collect();
        prop_assert_eq!(styles.len(), clusters.len());
        for (entry, cluster) in styles.iter().zip(clusters) {
            prop_assert_eq!(entry.ch.as_str(), cluster);
        }
    }

    /// Styles carry over strictly by position up to the shorter length and
    /// default to none beyond it.
    #[test]
    fn reconcile_carries_styles_positionally(
        (_, old_styles) in styled_text(),
        new_text in utf8_string(),
    ) {
        let styles = reconcile(&new_text, &old_styles);
        for (i, entry) in styles.iter().enumerate() {
            let expected = old_styles.get(i).map_or(StyleTag::None, |c| c.style);
            prop_assert_eq!(entry.style, expected);
        }
    }

    /// Shrinking the text truncates the sequence with no trailing entries.
    #[test]
    fn reconcile_truncates_to_new_text((text, styles) in styled_text()) {
        let clusters: Vec<&str> = text.graphemes(true).collect();
        let half: String = clusters[..clusters.len() / 2].concat();
        let truncated = reconcile(&half, &styles);
        prop_assert_eq!(truncated.len(), clusters.len() / 2);
    }
}

// ============================================================================
// Style Application Properties
// ============================================================================

proptest! {
    /// An empty selection never changes anything.
    #[test]
    fn apply_style_empty_selection_is_noop(
        (text, styles) in styled_text(),
        pivot in 0usize..100,
        tag in style_tag(),
    ) {
        let out = apply_style(&styles, &text, pivot, pivot, tag);
        prop_assert_eq!(out, styles);
    }

    /// Application changes exactly the selected range and preserves length.
    #[test]
    fn apply_style_touches_only_selection(
        (text, styles) in styled_text(),
        range in (0usize..40, 0usize..40),
        tag in style_tag(),
    ) {
        let (a, b) = range;
        let (start, end) = (a.min(b), a.max(b));
        let out = apply_style(&styles, &text, start, end, tag);
        prop_assert_eq!(out.len(), styles.len());
        for (i, (before, after)) in styles.iter().zip(&out).enumerate() {
            if i >= start && i < end {
                prop_assert_eq!(after.style, tag);
            } else {
                prop_assert_eq!(after.style, before.style);
            }
        }
    }
}

// ============================================================================
// Compaction Properties
// ============================================================================

proptest! {
    /// Concatenating all runs reproduces the document text exactly.
    #[test]
    fn compact_round_trips_text((text, styles) in styled_text()) {
        let joined: String = compact(&styles, &text).into_iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, text);
    }

    /// Runs are maximal: no two adjacent runs share a style, none is empty.
    #[test]
    fn compact_produces_maximal_nonempty_runs((text, styles) in styled_text()) {
        let segments = compact(&styles, &text);
        for segment in &segments {
            prop_assert!(!segment.text.is_empty());
        }
        for pair in segments.windows(2) {
            prop_assert_ne!(pair[0].style, pair[1].style);
        }
    }

    /// Compacting twice-reconciled input equals compacting once: the
    /// derivation is a pure function of the sequence.
    #[test]
    fn compact_is_deterministic((text, styles) in styled_text()) {
        prop_assert_eq!(compact(&styles, &text), compact(&styles, &text));
    }
}
