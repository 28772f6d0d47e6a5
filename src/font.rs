//! Font selection and custom font registration.
//!
//! A [`FontRegistry`] is an explicit context object owned by the host (not
//! a process-wide singleton): it tracks the chosen system font stack and at
//! most one registered custom font, and resolves the effective font-family
//! chain for the preview. Resolution priority: explicit system selection,
//! then the custom font (with the default chain appended as fallback), then
//! the built-in default.
//!
//! # Examples
//!
//! ```
//! use tintcap::{DEFAULT_FAMILY, FontRegistry};
//!
//! let mut fonts = FontRegistry::new();
//! assert_eq!(fonts.resolve_family(), DEFAULT_FAMILY);
//!
//! fonts.register_custom_bytes("brand.woff2", vec![0, 1, 2, 3]).unwrap();
//! assert!(fonts.resolve_family().starts_with("\"UserUploadedFont\""));
//!
//! fonts.select_system("Georgia, serif");
//! assert_eq!(fonts.resolve_family(), "Georgia, serif");
//! ```

use crate::error::{Error, Result};
use crate::event::{LogLevel, Notice, emit_log, emit_notice};
use std::fs;
use std::path::Path;

/// A named system font stack offered in the closed selection list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemFont {
    /// Display name shown to the user.
    pub name: &'static str,
    /// CSS-style font-family fallback chain; empty means "use default".
    pub value: &'static str,
}

/// The closed list of selectable system font stacks.
pub const SYSTEM_FONTS: [SystemFont; 10] = [
    SystemFont {
        name: "Default Style",
        value: "",
    },
    SystemFont {
        name: "Arial",
        value: "Arial, Helvetica, sans-serif",
    },
    SystemFont {
        name: "Verdana",
        value: "Verdana, Geneva, sans-serif",
    },
    SystemFont {
        name: "Tahoma",
        value: "Tahoma, Geneva, sans-serif",
    },
    SystemFont {
        name: "Times New Roman",
        value: "'Times New Roman', Times, serif",
    },
    SystemFont {
        name: "Georgia",
        value: "Georgia, serif",
    },
    SystemFont {
        name: "Courier New",
        value: "'Courier New', Courier, monospace",
    },
    SystemFont {
        name: "Impact (App Default)",
        value: "'Impact', 'Arial Black', sans-serif",
    },
    SystemFont {
        name: "Trebuchet MS",
        value: "'Trebuchet MS', Helvetica, sans-serif",
    },
    SystemFont {
        name: "Lucida Console",
        value: "'Lucida Console', Monaco, monospace",
    },
];

/// Fallback chain used when nothing else is selected.
pub const DEFAULT_FAMILY: &str = "'Impact', 'Arial Black', sans-serif";

/// Fixed logical family name every registered custom font runs under.
pub const CUSTOM_FAMILY_NAME: &str = "UserUploadedFont";

const ALLOWED_EXTENSIONS: [&str; 4] = [".ttf", ".otf", ".woff", ".woff2"];

#[derive(Clone, Debug)]
struct CustomFont {
    file_name: String,
    data: Vec<u8>,
}

/// Font selection state and custom font slot.
#[derive(Clone, Debug, Default)]
pub struct FontRegistry {
    /// Selected system stack value; empty string selects the default chain.
    system: String,
    /// At most one custom font is registered at a time.
    custom: Option<CustomFont>,
}

impl FontRegistry {
    /// Create a registry with no selection and no custom font.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and register a custom font from a file.
    ///
    /// The extension is validated before the file is touched; only
    /// `.ttf`, `.otf`, `.woff`, and `.woff2` are accepted. On any error
    /// the registry is left unchanged.
    pub fn load_custom(&mut self, path: &Path) -> Result<()> {
        let file_name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        validate_extension(&file_name)?;
        let data = fs::read(path)?;
        self.install_custom(file_name, data);
        Ok(())
    }

    /// Register a custom font from bytes the host already holds (e.g. a
    /// browser-style file picker). Same validation as [`Self::load_custom`].
    pub fn register_custom_bytes(&mut self, file_name: &str, data: Vec<u8>) -> Result<()> {
        validate_extension(file_name)?;
        self.install_custom(file_name.to_string(), data);
        Ok(())
    }

    // Atomic swap: the previous registration is dropped in the same
    // assignment, so two custom fonts are never live at once.
    fn install_custom(&mut self, file_name: String, data: Vec<u8>) {
        self.custom = Some(CustomFont { file_name, data });
        // A fresh upload becomes active immediately.
        self.system.clear();
        emit_log(LogLevel::Info, "custom font registered");
        emit_notice(&Notice::FontRegistered {
            family: CUSTOM_FAMILY_NAME.to_string(),
        });
    }

    /// Select a system font stack by value (empty string = default chain,
    /// which still falls back to a registered custom font if present).
    pub fn select_system(&mut self, value: &str) {
        self.system = value.to_string();
        emit_notice(&Notice::SystemFontSelected {
            family: self.system.clone(),
        });
    }

    /// Drop the custom font and any system selection.
    pub fn revert_to_default(&mut self) {
        self.custom = None;
        self.system.clear();
    }

    /// Whether a custom font is currently registered.
    #[must_use]
    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// Raw bytes of the registered custom font, if any.
    #[must_use]
    pub fn custom_data(&self) -> Option<&[u8]> {
        self.custom.as_ref().map(|c| c.data.as_slice())
    }

    /// Original file name of the registered custom font, if any.
    #[must_use]
    pub fn custom_file_name(&self) -> Option<&str> {
        self.custom.as_ref().map(|c| c.file_name.as_str())
    }

    /// Currently selected system stack value (empty = none).
    #[must_use]
    pub fn system_value(&self) -> &str {
        &self.system
    }

    /// Resolve the effective font-family chain for the preview.
    #[must_use]
    pub fn resolve_family(&self) -> String {
        if !self.system.is_empty() {
            return self.system.clone();
        }
        if self.custom.is_some() {
            return format!("\"{CUSTOM_FAMILY_NAME}\", {DEFAULT_FAMILY}");
        }
        DEFAULT_FAMILY.to_string()
    }

    /// Case-insensitive substring filter over the named system fonts, for
    /// a quick-select search box.
    #[must_use]
    pub fn filter_fonts(query: &str) -> Vec<SystemFont> {
        let needle = query.to_lowercase();
        SYSTEM_FONTS
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .copied()
            .collect()
    }
}

fn validate_extension(file_name: &str) -> Result<()> {
    let extension = file_name
        .rfind('.')
        .map_or("", |dot| &file_name[dot..])
        .to_lowercase();
    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        emit_log(LogLevel::Warn, "rejected font file");
        emit_notice(&Notice::FontRejected {
            extension: extension.clone(),
        });
        Err(Error::InvalidFontFormat { extension })
    }
}
