//! Notice and log callback system.
//!
//! Hosts embedding tintcap register callbacks to observe state transitions
//! (for devtools, debug overlays, or bridging into a logging framework).
//! Both slots are process-wide and optional; emitting with no callback
//! registered is a no-op.

use crate::style::StyleTag;
use crate::transform::GestureKind;
use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// A typed state-transition notice emitted by the editor.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// The full text was replaced and the style sequence reconciled.
    TextReplaced { chars: usize },
    /// A style was applied to a non-empty selection.
    StyleApplied {
        tag: StyleTag,
        start: usize,
        end: usize,
    },
    /// A custom font was registered (replacing any previous one).
    FontRegistered { family: String },
    /// A font file was rejected before registration.
    FontRejected { extension: String },
    /// A system font stack was selected (empty = default).
    SystemFontSelected { family: String },
    /// A drag or resize gesture started owning the pointer.
    GestureStarted { kind: GestureKind },
    /// The active gesture ended (release or forced cancel).
    GestureEnded { kind: GestureKind },
    /// Layout-edit mode was toggled.
    EditModeChanged { active: bool },
}

type NoticeCallback = Box<dyn Fn(&Notice) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn notice_callback() -> &'static Mutex<Option<NoticeCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<NoticeCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global notice callback.
pub fn set_notice_callback<F>(callback: F)
where
    F: Fn(&Notice) + Send + Sync + 'static,
{
    let mut guard = notice_callback().lock().expect("notice callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a notice to the registered callback.
pub fn emit_notice(notice: &Notice) {
    if let Ok(guard) = notice_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(notice);
        }
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a log message.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}
