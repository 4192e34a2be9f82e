//! Normalization from raw retrieved records to canonical posts.

use pulsewatch_core::Post;

use crate::types::RawPost;

/// Sentinel for absent `id`/`date` fields.
const ABSENT: &str = "N/A";

/// Platform tag used when the source omitted one.
const UNKNOWN_PLATFORM: &str = "unknown";

/// Convert raw records into well-formed posts.
///
/// Records whose `text` is missing or blank after trimming are dropped —
/// they cannot be scored or clustered. Survivors keep their relative order.
/// Absent or blank optional fields coerce to defaults: `id`/`date` →
/// `"N/A"`, `platform` → `"unknown"`.
#[must_use]
pub fn normalize_posts(raw: Vec<RawPost>) -> Vec<Post> {
    raw.into_iter().filter_map(normalize_post).collect()
}

fn normalize_post(raw: RawPost) -> Option<Post> {
    let RawPost {
        platform,
        id,
        text,
        date,
        url,
    } = raw;

    let text = text
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())?;

    Some(Post {
        platform: non_blank(platform).unwrap_or_else(|| UNKNOWN_PLATFORM.to_string()),
        id: non_blank(id).unwrap_or_else(|| ABSENT.to_string()),
        text,
        date: non_blank(date).unwrap_or_else(|| ABSENT.to_string()),
        url: non_blank(url),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
