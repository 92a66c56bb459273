//! Element-level rewrites applied between the two sanitizer passes.
//!
//! Runs on serializer output, where every attribute value is double-quoted
//! and a literal `<` in text or in attribute values is escaped as `&lt;`, so
//! every `<` starts a tag and start tags can be matched lexically.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static START_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(a|img)((?:\s+[^\s"'>/=]+(?:="[^"]*")?)*)\s*/?>"#).unwrap()
});

/// A `<pre>` start tag immediately followed by a line feed.
static PRE_LEADING_NEWLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<pre(?:\s+[^\s"'>/=]+(?:="[^"]*")?)*\s*>\n"#).unwrap()
});

static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([^\s"'>/=]+)(?:="([^"]*)")?"#).unwrap());

/// Image sources that are rendered as-is.
static TRUSTED_IMAGE_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://|/static/uploads/|data:image/)").unwrap());

/// Replacement for images with an untrusted source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePlaceholder {
    pub src: String,
    pub alt: String,
}

/// Attributes of one start tag, values kept in their escaped form.
struct StartTag<'h> {
    name: &'h str,
    attributes: Vec<(&'h str, Option<String>)>,
}

impl<'h> StartTag<'h> {
    fn parse(name: &'h str, attributes: &'h str) -> Self {
        let attributes = ATTRIBUTE
            .captures_iter(attributes)
            .filter_map(|caps| {
                let attr_name = caps.get(1)?.as_str();
                let value = caps.get(2).map(|v| v.as_str().to_string());
                Some((attr_name, value))
            })
            .collect();
        Self { name, attributes }
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| *attr == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Set an attribute, replacing it in place or appending it.
    fn set(&mut self, name: &'h str, value: String) {
        match self.attributes.iter_mut().find(|(attr, _)| *attr == name) {
            Some((_, existing)) => *existing = Some(value),
            None => self.attributes.push((name, Some(value))),
        }
    }

    fn render(&self) -> String {
        let mut out = format!("<{}", self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(value);
                out.push('"');
            }
        }
        out.push('>');
        out
    }
}

/// Force external links into a new tab without opener access, and replace
/// untrusted image sources with the placeholder.
pub fn rewrite_links_and_images(html: &str, placeholder: &ImagePlaceholder) -> String {
    START_TAG
        .replace_all(html, |caps: &Captures| {
            let mut tag = StartTag::parse(&caps[1], caps.get(2).map_or("", |m| m.as_str()));
            match tag.name {
                "a" => {
                    if tag.get("href").is_some_and(|href| href.starts_with("http")) {
                        tag.set("target", "_blank".to_string());
                        tag.set("rel", "noopener noreferrer".to_string());
                    }
                }
                _ => {
                    let trusted = tag
                        .get("src")
                        .is_some_and(|src| TRUSTED_IMAGE_SRC.is_match(src));
                    if !trusted {
                        tracing::debug!(src = ?tag.get("src"), "replacing untrusted image source");
                        tag.set("src", escape_attribute(&placeholder.src));
                        tag.set("alt", escape_attribute(&placeholder.alt));
                    }
                }
            }
            tag.render()
        })
        .into_owned()
}

/// Put back the line feed the parser strips right after `<pre>`.
///
/// The parser drops one leading newline of `<pre>` content and the
/// serializer doesn't write it back, so without this every pass would eat
/// one blank line at the top of a code block.
pub fn restore_pre_newlines(html: &str) -> Cow<'_, str> {
    PRE_LEADING_NEWLINE.replace_all(html, "${0}\n")
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
