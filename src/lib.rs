//! `tintcap` - Styled caption-text engine
//!
//! An in-memory document model for caption/thumbnail text styling: each
//! character of a free-form text carries one of a small set of tint tags,
//! and the model derives minimal contiguous runs for rendering. Font
//! resolution and preview drag/scale state live alongside the document so a
//! host UI only has to forward input events and read back segments.
//!
//! # Examples
//!
//! ```
//! use tintcap::{Editor, StyleTag};
//!
//! let mut editor = Editor::with_text("AB");
//! editor.set_selection(0, 1);
//! editor.apply_style(StyleTag::Red);
//!
//! let segments = editor.segments();
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].text, "A");
//! assert_eq!(segments[0].style, StyleTag::Red);
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_precision_loss)] // Intentional for scale math
#![allow(clippy::module_name_repetitions)] // Allow StyleTag in style etc
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod document;
pub mod editor;
pub mod error;
pub mod event;
pub mod font;
pub mod style;
pub mod transform;

// Re-export core types at crate root
pub use document::{CharStyle, TextMetrics, TextSegment, apply_style, compact, reconcile};
pub use editor::{Editor, Selection};
pub use error::{Error, Result};
pub use event::{LogLevel, Notice, emit_log, emit_notice, set_log_callback, set_notice_callback};
pub use font::{DEFAULT_FAMILY, FontRegistry, SYSTEM_FONTS, SystemFont};
pub use style::StyleTag;
pub use transform::{GestureKind, Pointer, PreviewTransform, TransformController};
