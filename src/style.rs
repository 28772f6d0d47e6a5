//! Style tags for tinted caption text.
//!
//! A [`StyleTag`] is one of a fixed small set of tint categories applied per
//! character. The set is extensible in principle but fixed-cardinality in
//! this design: three tint colors plus [`StyleTag::None`].
//!
//! # Examples
//!
//! ```
//! use tintcap::StyleTag;
//!
//! let tag = StyleTag::from_str("yellow").unwrap();
//! assert_eq!(tag, StyleTag::Yellow);
//! assert_eq!(tag.css_class(), "text-effect-yellow has-drop-shadow");
//! assert_eq!(StyleTag::default(), StyleTag::None);
//! ```

use std::fmt;

/// A tint category applicable to a character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleTag {
    /// No tint; renders with the base text effect.
    #[default]
    None,
    Red,
    Yellow,
    Blue,
}

impl StyleTag {
    /// All tags in UI ordering: tints first, clear last.
    pub const ALL: [StyleTag; 4] = [Self::Yellow, Self::Red, Self::Blue, Self::None];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        }
    }

    /// Parse a tag from its name (case-insensitive). Returns `None` for
    /// unknown names.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "clear" => Some(Self::None),
            "red" => Some(Self::Red),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            _ => None,
        }
    }

    /// CSS class chain a host rendering layer attaches to a run with this
    /// tag. Tinted runs also carry the drop-shadow effect class.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::None => "text-effect-none",
            Self::Red => "text-effect-red has-drop-shadow",
            Self::Yellow => "text-effect-yellow has-drop-shadow",
            Self::Blue => "text-effect-blue has-drop-shadow",
        }
    }

    /// Human-readable button label for the four fixed style actions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Clear Style",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Blue => "Blue",
        }
    }

    /// Whether this tag applies a visible tint.
    #[must_use]
    pub const fn is_tinted(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
