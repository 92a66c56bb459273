//! Allow-lists shared by both sanitizer passes.

use std::collections::{HashMap, HashSet};

/// Tags that survive sanitization. Anything else is unwrapped (children kept)
/// or, for [`CONTENT_STRIPPED_TAGS`], removed together with its content.
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "p", "a", "ul", "ol", "nl", "li", "b", "i",
    "strong", "em", "strike", "code", "hr", "br", "div", "table", "thead", "caption", "tbody",
    "tr", "th", "td", "pre", "img", "span", "u", "del", "sup", "sub", "button", "svg", "rect",
    "path",
];

/// Attributes allowed on every allowed tag.
pub const GENERIC_ATTRIBUTES: &[&str] = &["class", "style", "id", "data-language"];

/// Extra attributes allowed per tag.
pub const TAG_ATTRIBUTES: &[(&str, &[&str])] = &[
    ("a", &["href", "name", "target", "rel", "title"]),
    ("img", &["src", "alt", "title", "width", "height", "loading"]),
    ("button", &["type", "data-target"]),
    (
        "svg",
        &[
            "xmlns",
            "width",
            "height",
            "viewBox",
            "fill",
            "stroke",
            "stroke-width",
            "stroke-linecap",
            "stroke-linejoin",
        ],
    ),
    ("rect", &["x", "y", "width", "height", "rx", "ry"]),
    ("path", &["d"]),
];

/// Tags that are never emitted, whatever the allow-list says.
pub const FORBIDDEN_TAGS: &[&str] = &[
    "script", "iframe", "object", "embed", "form", "input", "textarea", "select", "option",
];

/// Tags removed along with everything inside them.
pub const CONTENT_STRIPPED_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "textarea", "select", "option", "noscript",
    "template",
];

/// URL schemes accepted in `href`/`src`. `data:` is narrowed to images by
/// the attribute filter.
pub const URL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel", "data"];

pub(crate) fn tag_set(exclude: &[&str]) -> HashSet<&'static str> {
    ALLOWED_TAGS
        .iter()
        .copied()
        .filter(|tag| !exclude.contains(tag))
        .collect()
}

pub(crate) fn tag_attribute_map() -> HashMap<&'static str, HashSet<&'static str>> {
    TAG_ATTRIBUTES
        .iter()
        .map(|(tag, attributes)| (*tag, attributes.iter().copied().collect()))
        .collect()
}

pub(crate) fn set_of(items: &[&'static str]) -> HashSet<&'static str> {
    items.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_tags_never_allowed() {
        for tag in FORBIDDEN_TAGS {
            assert!(!ALLOWED_TAGS.contains(tag), "{tag} is allow-listed");
        }
    }

    #[test]
    fn test_stripped_tags_disjoint_from_allowed() {
        for tag in CONTENT_STRIPPED_TAGS {
            assert!(!ALLOWED_TAGS.contains(tag), "{tag} is allow-listed");
        }
    }

    #[test]
    fn test_no_event_handlers_allowed() {
        let all = GENERIC_ATTRIBUTES
            .iter()
            .chain(TAG_ATTRIBUTES.iter().flat_map(|(_, attrs)| attrs.iter()));
        for attr in all {
            assert!(!attr.starts_with("on"), "{attr} looks like an event handler");
        }
    }
}
