//! Styled terminal output helpers with runtime preferences.

use std::fmt;
use std::sync::{OnceLock, RwLock};

use colored::Colorize;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// Disables colors and icon decorations.
    pub plain_mode: bool,
    /// Suppresses purely decorative output (blank lines, separators).
    pub quiet_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

fn preferences_lock() -> &'static RwLock<OutputPreferences> {
    PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()))
}

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = preferences_lock().write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    preferences_lock()
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Success => format!("✔ {}", text),
        MessageKind::Warning => format!("⚠ {}", text),
        MessageKind::Error => format!("✖ {}", text),
        MessageKind::Info => text,
    };

    if prefs.plain_mode {
        return match kind {
            MessageKind::Success => format!("OK: {}", base.trim_start_matches("✔ ")),
            MessageKind::Warning => format!("WARNING: {}", base.trim_start_matches("⚠ ")),
            MessageKind::Error => format!("ERROR: {}", base.trim_start_matches("✖ ")),
            _ => base,
        };
    }

    match kind {
        MessageKind::Success => base.green().to_string(),
        MessageKind::Warning => base.yellow().to_string(),
        MessageKind::Error => base.red().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    let formatted = apply_style(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn blank_line() {
    if !current_preferences().quiet_mode {
        println!();
    }
}
