//! Inline `style` filtering.
//!
//! A declaration survives only if its property is listed here and its value
//! matches one of that property's patterns. Everything else is dropped
//! without notice.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{HEX_COLOR, RGB_COLOR, RGBA_COLOR};

struct StyleRule {
    property: &'static str,
    values: Vec<Regex>,
}

fn patterns(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|source| Regex::new(source).unwrap())
        .collect()
}

fn colors() -> Vec<Regex> {
    vec![HEX_COLOR.clone(), RGB_COLOR.clone(), RGBA_COLOR.clone()]
}

const DIMENSION: &[&str] = &[r"^auto$", r"^[0-9]+px$", r"^[0-9]+%$"];

static RULES: LazyLock<Vec<StyleRule>> = LazyLock::new(|| {
    let rule = |property, values| StyleRule { property, values };
    vec![
        rule("color", colors()),
        rule("background-color", colors()),
        rule(
            "text-align",
            patterns(&[r"^left$", r"^right$", r"^center$", r"^justify$"]),
        ),
        rule("width", patterns(DIMENSION)),
        rule("height", patterns(DIMENSION)),
        rule("max-width", patterns(DIMENSION)),
        rule("max-height", patterns(DIMENSION)),
        rule("min-width", patterns(DIMENSION)),
        rule("min-height", patterns(DIMENSION)),
        rule("font-size", patterns(&[r"^\d+(?:px|em|rem|%)$"])),
        rule(
            "text-decoration",
            patterns(&[r"^none$", r"^underline$", r"^line-through$"]),
        ),
        rule(
            "display",
            patterns(&[r"^block$", r"^inline$", r"^inline-block$"]),
        ),
        rule("margin", patterns(&[r"^auto$", r"^\d+(?:px|em|rem|%)$"])),
        rule("padding", patterns(&[r"^\d+(?:px|em|rem|%)$"])),
        rule(
            "border",
            patterns(&[r"(?i)^(?:\d+(?:px|em|rem|%) )?(?:solid|dashed|dotted) #[0-9a-f]+$"]),
        ),
    ]
});

/// Whether `property: value` is an allowed declaration.
pub fn is_allowed_declaration(property: &str, value: &str) -> bool {
    RULES
        .iter()
        .find(|rule| rule.property == property)
        .is_some_and(|rule| rule.values.iter().any(|re| re.is_match(value)))
}

/// Filter a `style` attribute value down to its allowed declarations.
///
/// Returns `None` when nothing survives so the attribute can be dropped.
/// Output is normalised to `prop: value; prop: value`.
pub fn filter_style(style: &str) -> Option<String> {
    let kept: Vec<String> = style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim();
            is_allowed_declaration(&property, value).then(|| format!("{property}: {value}"))
        })
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_allowed_declarations() {
        assert_eq!(
            filter_style("color: #ff0000; text-align: center"),
            Some("color: #ff0000; text-align: center".to_string())
        );
    }

    #[test]
    fn test_drops_unknown_properties() {
        assert_eq!(
            filter_style("position: absolute; color: rgb(1, 2, 3)"),
            Some("color: rgb(1, 2, 3)".to_string())
        );
        assert_eq!(filter_style("position: fixed; z-index: 1000"), None);
    }

    #[test]
    fn test_drops_bad_values() {
        assert_eq!(filter_style("color: red"), None);
        assert_eq!(filter_style("width: calc(100% - 1px)"), None);
        assert_eq!(filter_style("margin: 10px 0"), None);
        assert_eq!(
            filter_style("background-color: url(javascript:alert(1))"),
            None
        );
    }

    #[test]
    fn test_normalises_spacing_and_case() {
        assert_eq!(
            filter_style("  COLOR:#fff ;;max-width:100%;"),
            Some("color: #fff; max-width: 100%".to_string())
        );
    }

    #[test]
    fn test_border_shorthand() {
        assert!(is_allowed_declaration("border", "1px solid #ccc"));
        assert!(is_allowed_declaration("border", "dashed #ABCDEF"));
        assert!(!is_allowed_declaration("border", "1px solid red"));
    }

    #[test]
    fn test_filter_is_stable() {
        let once = filter_style("padding: 8px; min-width: 50px; border: 1px solid #ccc").unwrap();
        assert_eq!(filter_style(&once), Some(once.clone()));
    }
}
