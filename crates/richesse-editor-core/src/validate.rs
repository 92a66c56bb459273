//! Validation of user-supplied URLs for links and embeds.

use url::Url;

/// Validate a user-supplied link target.
///
/// Accepts site-relative paths, `data:image/` URIs and absolute `http(s)`
/// URLs. Returns the accepted URL unchanged.
pub fn validate_url(url: &str) -> Option<&str> {
    if url.starts_with('/') || url.starts_with("data:image/") {
        return Some(url);
    }

    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Some(url),
        Ok(parsed) => {
            tracing::warn!(scheme = parsed.scheme(), "rejected URL scheme");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejected malformed URL");
            None
        }
    }
}

/// Extract a YouTube video id from a watch URL or a `youtu.be` short link.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.trim_start_matches("www.").trim_start_matches("m.");

    let id = match host {
        "youtu.be" => parsed.path_segments()?.next()?.to_string(),
        "youtube.com" if parsed.path() == "/watch" => parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())?,
        _ => return None,
    };

    is_video_id(&id).then_some(id)
}

fn is_video_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
