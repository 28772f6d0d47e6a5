//! Editor facade tying the document, fonts, and preview transform together.
//!
//! [`Editor`] is the single entry point a host UI drives: it forwards
//! full-text replacements, selection updates, style actions, font choices,
//! and pointer gestures, then reads back compacted segments and the
//! resolved font family. All mutations are synchronous and run to
//! completion on the caller's thread, so reconciliation and style
//! application never interleave.

use crate::document::{
    CharStyle, SAMPLE_TEXT, TextMetrics, TextSegment, apply_style, compact, measure, reconcile,
    sample_document,
};
use crate::error::Result;
use crate::event::{Notice, emit_notice};
use crate::font::FontRegistry;
use crate::style::StyleTag;
use crate::transform::TransformController;
use std::cell::RefCell;
use std::path::Path;

/// A transient half-open selection `[start, end)` in grapheme indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get normalized (start <= end) selection.
    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.start <= self.end {
            *self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }
}

/// The caption editor's full in-memory state.
#[derive(Debug, Default)]
pub struct Editor {
    text: String,
    styles: Vec<CharStyle>,
    selection: Selection,
    fonts: FontRegistry,
    transform: TransformController,
    /// Bumped on every document mutation; keys the segment cache.
    revision: u64,
    segment_cache: RefCell<Option<(u64, Vec<TextSegment>)>>,
}

impl Editor {
    /// Create an empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor with initial text, all characters untinted.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.text = text.to_string();
        editor.styles = reconcile(text, &[]);
        editor
    }

    /// The seeded startup state: the sample caption with its hand-authored
    /// styling.
    #[must_use]
    pub fn sample() -> Self {
        let mut editor = Self::new();
        editor.text = SAMPLE_TEXT.to_string();
        editor.styles = sample_document();
        editor
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of grapheme clusters in the document.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.styles.len()
    }

    /// The per-character style sequence.
    #[must_use]
    pub fn styles(&self) -> &[CharStyle] {
        &self.styles
    }

    /// Document revision; bumps on every text or style mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole text (the host reports edits as full
    /// replacements). Reconciles the style sequence synchronously, so the
    /// length invariant holds again before this returns.
    pub fn replace_text(&mut self, new_text: &str) {
        self.styles = reconcile(new_text, &self.styles);
        self.text = new_text.to_string();
        self.selection = Selection::default();
        self.revision += 1;
        emit_notice(&Notice::TextReplaced {
            chars: self.styles.len(),
        });
    }

    /// Update the selection, clamping to the document and normalizing
    /// order. Out-of-range indices from the host end up clamped here, so
    /// the style model never sees them.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.styles.len();
        self.selection = Selection::new(start.min(len), end.min(len)).normalized();
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Apply one of the four fixed style actions to the current selection.
    /// No-op when the selection is empty.
    pub fn apply_style(&mut self, tag: StyleTag) {
        let Selection { start, end } = self.selection;
        if start == end {
            return;
        }
        self.styles = apply_style(&self.styles, &self.text, start, end, tag);
        self.revision += 1;
        emit_notice(&Notice::StyleApplied { tag, start, end });
    }

    /// Compacted segments for rendering, memoized on the document
    /// revision. Font and transform changes do not invalidate the cache.
    #[must_use]
    pub fn segments(&self) -> Vec<TextSegment> {
        let mut cache = self.segment_cache.borrow_mut();
        match cache.as_ref() {
            Some((revision, segments)) if *revision == self.revision => segments.clone(),
            _ => {
                let segments = compact(&self.styles, &self.text);
                *cache = Some((self.revision, segments.clone()));
                segments
            }
        }
    }

    /// Row/width metrics of the current text for preview layout.
    #[must_use]
    pub fn metrics(&self) -> TextMetrics {
        measure(&self.text)
    }

    /// Font state.
    #[must_use]
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Load and register a custom font file.
    pub fn upload_font(&mut self, path: &Path) -> Result<()> {
        self.fonts.load_custom(path)
    }

    /// Register a custom font from bytes the host already read.
    pub fn upload_font_bytes(&mut self, file_name: &str, data: Vec<u8>) -> Result<()> {
        self.fonts.register_custom_bytes(file_name, data)
    }

    /// Select a system font stack (empty value selects the default).
    pub fn select_system_font(&mut self, value: &str) {
        self.fonts.select_system(value);
    }

    /// Drop custom font and system selection.
    pub fn revert_font(&mut self) {
        self.fonts.revert_to_default();
    }

    /// Effective font-family chain for the preview.
    #[must_use]
    pub fn font_family(&self) -> String {
        self.fonts.resolve_family()
    }

    /// Preview transform and gesture state.
    #[must_use]
    pub fn transform(&self) -> &TransformController {
        &self.transform
    }

    /// Mutable access for pointer event forwarding.
    pub fn transform_mut(&mut self) -> &mut TransformController {
        &mut self.transform
    }

    /// Flip layout-edit mode; turning it off cancels any active gesture.
    pub fn toggle_layout_edit(&mut self) {
        let next = !self.transform.edit_mode();
        self.transform.set_edit_mode(next);
    }
}
