//! Report aggregation for one analysis batch.

use pulsewatch_core::{Post, Report, SentimentSummary};

use crate::sentiment::analyze_sentiment;
use crate::topics::extract_topics;

/// Build the cycle report for a normalized post batch.
///
/// Scores each post's text exactly once, tallies labels, runs topic
/// extraction over the full batch, and packages everything with the posts
/// in retrieval order. Counts always satisfy
/// `sentiment_summary.total() == total_posts == posts.len()`.
#[must_use]
pub fn generate_report(posts: Vec<Post>, topic_count: usize) -> Report {
    let mut sentiment_summary = SentimentSummary::default();
    for post in &posts {
        sentiment_summary.record(analyze_sentiment(&post.text));
    }

    let texts: Vec<String> = posts.iter().map(|p| p.text.clone()).collect();
    let top_topics = extract_topics(&texts, topic_count);

    Report {
        total_posts: posts.len(),
        sentiment_summary,
        top_topics,
        posts,
    }
}
