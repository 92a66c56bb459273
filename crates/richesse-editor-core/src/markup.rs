//! HTML fragments inserted by toolbar commands.
//!
//! Everything here is pure string generation. Fragments are inserted through
//! the native `insertHTML` command and sanitized on the following commit.

use std::fmt::Write;

/// CSS class of the placeholder shown in an empty editor.
pub const PLACEHOLDER_CLASS: &str = "text-gray-400";

/// Class of the span a user drags to resize an image.
pub const RESIZE_HANDLE_CLASS: &str = "resize-handle";

pub const CODE_BLOCK_CLASS: &str = "code-block-container";
pub const CODE_BLOCK_CONTENT_CLASS: &str = "code-block-content";
pub const COPY_BUTTON_CLASS: &str = "code-block-copy-btn";

/// Escape text content the way `innerHTML` serializes it.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape a value placed inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Markup seeded into an empty editor, removed on the first edit.
pub fn placeholder_markup(placeholder: &str) -> String {
    format!(
        r#"<div class="{PLACEHOLDER_CLASS}">{}</div>"#,
        escape_text(placeholder)
    )
}

/// A bordered table of `rows` x `cols` empty cells.
///
/// Callers validate the dimensions first, see [`parse_table_dimensions`].
pub fn create_table(rows: usize, cols: usize) -> String {
    let mut table =
        String::from(r#"<table style="border-collapse: collapse; width: 100%; margin: 10px 0;">"#);
    for _ in 0..rows {
        table.push_str("<tr>");
        for _ in 0..cols {
            table.push_str(
                r#"<td style="border: 1px solid #ccc; padding: 8px; min-width: 50px;">&nbsp;</td>"#,
            );
        }
        table.push_str("</tr>");
    }
    table.push_str("</table>");
    table
}

/// Parse user-entered table dimensions. Both must be integers in
/// `1..=max`.
pub fn parse_table_dimensions(rows: &str, cols: &str, max: usize) -> Option<(usize, usize)> {
    let in_range = |n: &usize| (1..=max).contains(n);
    let rows = rows.trim().parse::<usize>().ok().filter(in_range)?;
    let cols = cols.trim().parse::<usize>().ok().filter(in_range)?;
    Some((rows, cols))
}

/// A copyable code block.
///
/// The copy button carries `data-target` pointing at the container id; the
/// click is resolved by the editor instance's copy delegation, so the block
/// needs no inline script.
pub fn create_code_block(
    id: &str,
    language: &str,
    placeholder: &str,
    code_label: &str,
    copy_label: &str,
) -> String {
    let id = escape_attribute(id);
    let label = if language.is_empty() {
        code_label
    } else {
        language
    };

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="{CODE_BLOCK_CLASS}" data-language="{}" id="{id}">"#,
        escape_attribute(language)
    );
    html.push_str(r#"<div class="code-block-header">"#);
    let _ = write!(
        html,
        r#"<span class="code-block-language">{}</span>"#,
        escape_text(label)
    );
    let _ = write!(
        html,
        r#"<button class="{COPY_BUTTON_CLASS}" data-target="{id}" type="button">"#
    );
    html.push_str(concat!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
        r#"<rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect>"#,
        r#"<path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path>"#,
        "</svg>",
    ));
    let _ = write!(html, "<span>{}</span>", escape_text(copy_label));
    html.push_str("</button></div>");
    let _ = write!(
        html,
        r#"<pre class="{CODE_BLOCK_CONTENT_CLASS}" contenteditable="true">{}</pre>"#,
        escape_text(placeholder)
    );
    html.push_str("</div>");
    html
}

/// Responsive YouTube player for an already validated video id.
pub fn youtube_embed(video_id: &str) -> String {
    format!(
        concat!(
            r#"<div class="video-container" style="position: relative; padding-bottom: 56.25%; height: 0; overflow: hidden; max-width: 100%; margin: 15px 0;">"#,
            r#"<iframe style="position: absolute; top: 0; left: 0; width: 100%; height: 100%;" "#,
            r#"src="https://www.youtube.com/embed/{}" title="YouTube video player" frameborder="0" "#,
            r#"allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen>"#,
            "</iframe></div>",
        ),
        escape_attribute(video_id)
    )
}

/// Image inserted from the toolbar dropzone.
pub fn image_markup(url: &str, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="resizable-image" style="max-width: 100%;" />"#,
        escape_attribute(url),
        escape_attribute(alt)
    )
}

/// Image dropped onto the editor, wrapped with a resize handle.
pub fn resizable_image_markup(url: &str, alt: &str) -> String {
    format!(
        r#"<span class="resizable-image" contenteditable="false"><img src="{}" alt="{}" style="max-width: 100%;" /><span class="{RESIZE_HANDLE_CLASS}"></span></span>"#,
        escape_attribute(url),
        escape_attribute(alt)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_shape() {
        let table = create_table(2, 3);
        assert_eq!(table.matches("<tr>").count(), 2);
        assert_eq!(table.matches("<td ").count(), 6);
        for row in table.split("<tr>").skip(1) {
            assert_eq!(row.matches("<td ").count(), 3);
        }
    }

    #[test]
    fn test_create_table_markup() {
        insta::assert_snapshot!(
            create_table(1, 1),
            @r#"<table style="border-collapse: collapse; width: 100%; margin: 10px 0;"><tr><td style="border: 1px solid #ccc; padding: 8px; min-width: 50px;">&nbsp;</td></tr></table>"#
        );
    }

    #[test]
    fn test_parse_table_dimensions() {
        assert_eq!(parse_table_dimensions("2", " 3 ", 50), Some((2, 3)));
        assert_eq!(parse_table_dimensions("0", "3", 50), None);
        assert_eq!(parse_table_dimensions("-1", "3", 50), None);
        assert_eq!(parse_table_dimensions("two", "3", 50), None);
        assert_eq!(parse_table_dimensions("2", "", 50), None);
    }

    #[test]
    fn test_table_dimensions_capped() {
        assert_eq!(parse_table_dimensions("50", "50", 50), Some((50, 50)));
        assert_eq!(parse_table_dimensions("51", "2", 50), None);
        assert_eq!(parse_table_dimensions("2", "100000", 50), None);
        assert_eq!(parse_table_dimensions("100000", "100000", 50), None);
    }

    #[test]
    fn test_code_block_structure() {
        let html = create_code_block("code-block-1", "python", "print()", "Code", "Copy");
        assert!(html.starts_with(
            r#"<div class="code-block-container" data-language="python" id="code-block-1">"#
        ));
        assert!(html.contains(r#"<span class="code-block-language">python</span>"#));
        assert!(html.contains(r#"data-target="code-block-1""#));
        assert!(html.contains("<span>Copy</span>"));
        assert!(html.contains(">print()</pre>"));
    }

    #[test]
    fn test_code_block_without_language_uses_default_label() {
        let html = create_code_block("code-block-1", "", "", "Code", "Copy");
        assert!(html.contains(r#"<span class="code-block-language">Code</span>"#));
        assert!(html.contains(r#"data-language="""#));
    }

    #[test]
    fn test_code_block_escapes_language() {
        let html = create_code_block("id", r#""><script>"#, "<b>", "Code", "Copy");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;b&gt;</pre>"));
    }

    #[test]
    fn test_placeholder_markup() {
        assert_eq!(
            placeholder_markup("Write <here>"),
            r#"<div class="text-gray-400">Write &lt;here&gt;</div>"#
        );
    }

    #[test]
    fn test_image_markup_escapes() {
        let html = image_markup(r#"/static/uploads/a".png"#, "a&b");
        assert!(html.contains(r#"src="/static/uploads/a&quot;.png""#));
        assert!(html.contains(r#"alt="a&amp;b""#));
    }

    #[test]
    fn test_resizable_image_has_handle() {
        let html = resizable_image_markup("/static/uploads/a.png", "a.png");
        assert!(html.contains(r#"<span class="resize-handle"></span>"#));
    }
}
