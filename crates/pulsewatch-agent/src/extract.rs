//! Post extraction from free-form model output.
//!
//! The structured path finds the outermost `[...]` span and parses it as a
//! JSON array of records. When that fails, a second-chance numbered-list
//! parser recovers best-effort partial records. Neither path errors:
//! unusable content yields an empty vec and the cycle proceeds with zero
//! posts.

use regex::Regex;

use crate::types::RawPost;

/// Extract post records from a model answer.
#[must_use]
pub fn extract_posts(content: &str) -> Vec<RawPost> {
    let array_re = Regex::new(r"(?s)\[.*\]").expect("valid array regex");
    if let Some(span) = array_re.find(content) {
        match serde_json::from_str::<Vec<RawPost>>(span.as_str()) {
            Ok(posts) => return posts,
            Err(e) => {
                tracing::debug!(error = %e, "JSON array extraction failed; falling back to text parsing");
            }
        }
    }
    parse_numbered_list(content)
}

/// Parse a numbered-list answer into partial records.
///
/// A line starting `N.` opens a record; its text is whatever follows the
/// first `: ` (or the rest of the line when there is no label). Subsequent
/// `Platform:` / `ID:` / `Date:` / `URL:` lines fill the open record.
/// Lines fitting no pattern are skipped.
fn parse_numbered_list(content: &str) -> Vec<RawPost> {
    let item_re = Regex::new(r"^(\d{1,3})\.\s+(.*)$").expect("valid item regex");

    let mut posts = Vec::new();
    let mut current: Option<RawPost> = None;

    for line in content.lines() {
        let line = line.trim();
        if let Some(caps) = item_re.captures(line) {
            if let Some(post) = current.take() {
                posts.push(post);
            }
            let body = caps.get(2).map_or("", |m| m.as_str());
            let text = match body.split_once(": ") {
                Some((_, rest)) => rest,
                None => body,
            };
            let text = text.trim().trim_matches('"');
            current = Some(RawPost {
                text: (!text.is_empty()).then(|| text.to_string()),
                ..RawPost::default()
            });
        } else if let Some(post) = current.as_mut() {
            if let Some(value) = line.strip_prefix("Platform:") {
                post.platform = Some(value.trim().to_string());
            } else if let Some(value) = line.strip_prefix("ID:") {
                post.id = Some(value.trim().to_string());
            } else if let Some(value) = line.strip_prefix("Date:") {
                post.date = Some(value.trim().to_string());
            } else if let Some(value) = line.strip_prefix("URL:") {
                post.url = Some(value.trim().to_string());
            }
        }
    }
    if let Some(post) = current {
        posts.push(post);
    }
    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_json_array() {
        let content = r#"[{"platform": "twitter", "id": "1", "text": "Shelling reported", "date": "2024-05-01", "url": null}]"#;
        let posts = extract_posts(content);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].platform.as_deref(), Some("twitter"));
        assert_eq!(posts[0].text.as_deref(), Some("Shelling reported"));
    }

    #[test]
    fn parses_json_array_embedded_in_prose() {
        let content = r#"Here are the posts you asked for:

[
  {"platform": "telegram", "text": "Convoy arrived"},
  {"platform": "rss", "text": "Talks resume Monday"}
]

Let me know if you need more."#;
        let posts = extract_posts(content);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].platform.as_deref(), Some("rss"));
    }

    #[test]
    fn falls_back_to_numbered_list() {
        let content = r#"I could not produce JSON, but here is what I found:
1. Tweet: "Aid convoy crossed at dawn"
   Platform: twitter
   ID: 555
   Date: 2024-05-01
   URL: https://example.com/555
2. Post: "Shelling continues in the east"
   Platform: telegram
   Date: 2024-05-02"#;
        let posts = extract_posts(content);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].text.as_deref(), Some("Aid convoy crossed at dawn"));
        assert_eq!(posts[0].platform.as_deref(), Some("twitter"));
        assert_eq!(posts[0].id.as_deref(), Some("555"));
        assert_eq!(posts[0].url.as_deref(), Some("https://example.com/555"));
        assert_eq!(posts[1].date.as_deref(), Some("2024-05-02"));
        assert!(posts[1].id.is_none());
    }

    #[test]
    fn numbered_lines_without_labels_keep_whole_body() {
        let content = "1. Situation calm overnight\n2. Border crossing reopened";
        let posts = extract_posts(content);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].text.as_deref(), Some("Situation calm overnight"));
        assert_eq!(posts[1].text.as_deref(), Some("Border crossing reopened"));
    }

    #[test]
    fn malformed_array_falls_back_then_yields_nothing() {
        let content = "[this is not json at all";
        assert!(extract_posts(content).is_empty());
    }

    #[test]
    fn empty_content_yields_nothing() {
        assert!(extract_posts("").is_empty());
        assert!(extract_posts("No recent posts were found.").is_empty());
    }

    #[test]
    fn empty_json_array_yields_nothing() {
        assert!(extract_posts("[]").is_empty());
    }
}
