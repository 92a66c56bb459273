//! HTML sanitization pipeline.
//!
//! Every piece of HTML that becomes editor state goes through
//! [`Sanitizer::sanitize`]:
//!
//! 1. An allow-list pass keeps known tags and per-tag attributes, filters
//!    inline styles and rejects unsafe URL schemes.
//! 2. External links are forced into a new tab and untrusted images are
//!    swapped for a placeholder.
//! 3. A strict purification pass drops event handlers and executable or
//!    embeddable elements no matter what the earlier passes produced.
//!
//! The pipeline never fails: unknown or malformed markup is repaired or
//! dropped, and the caller is not told.

mod policy;
mod rewrite;
mod style;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use ammonia::{Builder, UrlRelative};

use crate::config::EditorConfig;

pub use policy::{
    ALLOWED_TAGS, CONTENT_STRIPPED_TAGS, FORBIDDEN_TAGS, GENERIC_ATTRIBUTES, TAG_ATTRIBUTES,
    URL_SCHEMES,
};
pub use rewrite::{ImagePlaceholder, restore_pre_newlines, rewrite_links_and_images};
pub use style::{filter_style, is_allowed_declaration};

/// Two-pass HTML sanitizer.
pub struct Sanitizer {
    allow_list: Builder<'static>,
    purifier: Builder<'static>,
    placeholder: ImagePlaceholder,
}

impl Sanitizer {
    pub fn new(placeholder: ImagePlaceholder) -> Self {
        let mut allow_list = base_builder(&[]);
        allow_list.attribute_filter(filter_attribute);

        let mut purifier = base_builder(policy::FORBIDDEN_TAGS);
        purifier.attribute_filter(purify_attribute);

        Self {
            allow_list,
            purifier,
            placeholder,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(ImagePlaceholder {
            src: config.placeholder_image_src.clone(),
            alt: config.placeholder_image_alt.clone(),
        })
    }

    /// Reduce arbitrary HTML to the allowed subset.
    pub fn sanitize(&self, raw: &str) -> String {
        let allowed = self.allow_list.clean(raw).to_string();
        let rewritten =
            rewrite_links_and_images(&restore_pre_newlines(&allowed), &self.placeholder);
        let purified = self.purifier.clean(&rewritten).to_string();
        restore_pre_newlines(&purified).into_owned()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

fn base_builder(excluded_tags: &[&str]) -> Builder<'static> {
    let mut builder = Builder::default();
    builder
        .tags(policy::tag_set(excluded_tags))
        .clean_content_tags(policy::set_of(policy::CONTENT_STRIPPED_TAGS))
        .generic_attributes(policy::set_of(policy::GENERIC_ATTRIBUTES))
        .tag_attributes(policy::tag_attribute_map())
        .url_schemes(policy::set_of(policy::URL_SCHEMES))
        .url_relative(UrlRelative::PassThrough)
        .link_rel(None)
        .strip_comments(true);
    builder
}

fn is_event_handler(attribute: &str) -> bool {
    attribute
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
}

fn is_non_image_data_url(value: &str) -> bool {
    let value = value.trim_start().to_ascii_lowercase();
    value.starts_with("data:") && !value.starts_with("data:image/")
}

fn filter_attribute<'u>(_element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    match attribute {
        "style" => style::filter_style(value).map(Cow::Owned),
        "href" | "src" if is_non_image_data_url(value) => None,
        name if is_event_handler(name) => None,
        _ => Some(Cow::Borrowed(value)),
    }
}

fn purify_attribute<'u>(_element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    if is_event_handler(attribute) {
        return None;
    }
    Some(Cow::Borrowed(value))
}
