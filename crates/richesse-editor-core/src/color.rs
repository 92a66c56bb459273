//! Color utilities for the toolbar color menus.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub(crate) static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#(0x)?[0-9a-f]+$").unwrap());

pub(crate) static RGB_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
});

pub(crate) static RGBA_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*(?:\.\d+)?)\s*\)$")
        .unwrap()
});

/// A named color offered in a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub name: &'static str,
    pub value: &'static str,
}

/// Named palette shown next to the editor.
pub const EDITOR_COLORS: &[Swatch] = &[
    Swatch { name: "Noir", value: "#000000" },
    Swatch { name: "Gris", value: "#666666" },
    Swatch { name: "Rouge", value: "#FF0000" },
    Swatch { name: "Bleu", value: "#0000FF" },
    Swatch { name: "Vert", value: "#008000" },
    Swatch { name: "Orange", value: "#FFA500" },
    Swatch { name: "Violet", value: "#800080" },
    Swatch { name: "Rose", value: "#FFC0CB" },
    Swatch { name: "Jaune", value: "#FFFF00" },
    Swatch { name: "Cyan", value: "#00FFFF" },
];

/// Preset swatches of the color picker popover.
pub const PRESET_COLORS: &[&str] = &[
    "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF",
    "#C0C0C0", "#808080", "#800000", "#808000", "#008000", "#800080", "#008080", "#000080",
    "#FFA500", "#A52A2A", "#F5F5DC", "#FFC0CB",
];

/// Whether `value` is a color the sanitizer keeps: hex, `rgb()` or `rgba()`.
pub fn is_css_color(value: &str) -> bool {
    HEX_COLOR.is_match(value) || RGB_COLOR.is_match(value) || RGBA_COLOR.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_colors() {
        assert!(is_css_color("#FFA500"));
        assert!(is_css_color("#fff"));
        assert!(is_css_color("rgb(255, 0, 0)"));
        assert!(is_css_color("rgba(0, 255, 0, 0.5)"));
        assert!(!is_css_color("red"));
        assert!(!is_css_color("#zzz"));
        assert!(!is_css_color("rgb(1,2)"));
        assert!(!is_css_color("expression(alert(1))"));
    }

    #[test]
    fn test_palettes_are_valid() {
        assert!(EDITOR_COLORS.iter().all(|s| is_css_color(s.value)));
        assert!(PRESET_COLORS.iter().all(|c| is_css_color(c)));
    }
}
