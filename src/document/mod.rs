//! Styled document model: per-character tags and derived runs.
//!
//! The document is a flat sequence of [`CharStyle`] entries, one per
//! grapheme cluster of the current text, kept in lockstep with free-form
//! edits by [`reconcile`]. Rendering never consumes the flat sequence
//! directly; [`compact`] derives minimal maximal-run [`TextSegment`]s on
//! demand.
//!
//! Storage is a plain parallel array rather than an interval structure.
//! Every keystroke rewrites it in O(n), which is fine at caption sizes; an
//! offset-keyed run-length map is the upgrade path for large documents.
//!
//! # Examples
//!
//! ```
//! use tintcap::{StyleTag, apply_style, compact, reconcile};
//!
//! let styles = reconcile("AB", &[]);
//! let styles = apply_style(&styles, "AB", 0, 1, StyleTag::Red);
//! let segments = compact(&styles, "AB");
//! assert_eq!(segments[0].text, "A");
//! assert_eq!(segments[0].style, StyleTag::Red);
//! assert_eq!(segments[1].style, StyleTag::None);
//! ```

mod chars;
mod measure;
mod seed;
mod segment;

pub use chars::{CharStyle, apply_style, reconcile};
pub use measure::{TextMetrics, measure};
pub use seed::{SAMPLE_TEXT, sample_document};
pub use segment::{TextSegment, compact};
