//! Fixed bill categories and their display colors.

use std::collections::HashMap;

use colored::Color;
use once_cell::sync::Lazy;

/// Categories offered by the add-bill form, in menu order.
pub const CATEGORIES: [&str; 10] = [
    "Alimentação",
    "Transporte",
    "Moradia",
    "Saúde",
    "Educação",
    "Lazer",
    "Serviços",
    "Impostos",
    "Seguros",
    "Outros",
];

/// Cosmetic color table, keyed by lowercased category name. Categories
/// without an entry fall back to [`DEFAULT_CATEGORY_COLOR`].
static CATEGORY_COLORS: Lazy<HashMap<&'static str, Color>> = Lazy::new(|| {
    HashMap::from([
        ("alimentação", Color::Green),
        ("transporte", Color::Blue),
        ("moradia", Color::Magenta),
        ("saúde", Color::Red),
        ("educação", Color::Yellow),
        ("lazer", Color::BrightMagenta),
        ("outros", Color::BrightBlack),
    ])
});

pub const DEFAULT_CATEGORY_COLOR: Color = Color::BrightBlack;

/// Looks up the display color for a category, case-insensitively.
pub fn category_color(category: &str) -> Color {
    CATEGORY_COLORS
        .get(category.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

/// Resolves user input to the canonical category spelling, if it matches.
pub fn canonical_category(name: &str) -> Option<&'static str> {
    let needle = name.to_lowercase();
    CATEGORIES
        .iter()
        .find(|category| category.to_lowercase() == needle)
        .copied()
}
