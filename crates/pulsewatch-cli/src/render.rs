//! Console rendering of cycle reports.

use std::fmt::Write as _;

use pulsewatch_core::Report;

/// Posts shown in the text summary.
const SAMPLE_POSTS: usize = 5;

/// Characters of post text shown per sample line.
const SAMPLE_TEXT_CHARS: usize = 100;

/// Print a report to stdout, as pretty JSON or a text summary.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub(crate) fn emit_report(query: &str, report: &Report, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_text(query, report));
    }
    Ok(())
}

/// Build the text summary: totals, sentiment tallies, topics, and a sample
/// of the first posts.
fn render_text(query: &str, report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Report for query: '{query}'");
    let _ = writeln!(out, "Generated: {}", chrono::Utc::now().to_rfc3339());
    let _ = writeln!(out, "Total posts: {}", report.total_posts);
    let _ = writeln!(
        out,
        "Sentiment summary: Positive={} Neutral={} Negative={}",
        report.sentiment_summary.positive,
        report.sentiment_summary.neutral,
        report.sentiment_summary.negative
    );

    if report.top_topics.is_empty() {
        let _ = writeln!(out, "Top topics: (none)");
    } else {
        let _ = writeln!(out, "Top topics:");
        for (idx, topic) in report.top_topics.iter().enumerate() {
            let _ = writeln!(out, "  {}. {topic}", idx + 1);
        }
    }

    if !report.posts.is_empty() {
        let _ = writeln!(out, "Sample posts:");
        for post in report.posts.iter().take(SAMPLE_POSTS) {
            let _ = writeln!(
                out,
                "  [{}] {}",
                post.platform,
                truncate(&post.text, SAMPLE_TEXT_CHARS)
            );
        }
    }

    out
}

/// Char-boundary-safe truncation with an ellipsis marker.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut shortened: String = text.chars().take(max_chars).collect();
        shortened.push_str("...");
        shortened
    }
}
