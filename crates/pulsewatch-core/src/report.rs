//! Report shape for one analysis cycle.
//!
//! A [`Report`] is constructed fresh each monitoring cycle and never merged
//! with prior reports. The serialized form matches the report surface
//! consumed by downstream sinks: `total_posts`, `sentiment_summary` (keyed
//! `Positive`/`Neutral`/`Negative`), `top_topics`, `posts`.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::post::Post;

/// Compound-score magnitude below which (inclusive) a post is Neutral.
const SENTIMENT_THRESHOLD: f32 = 0.05;

/// Categorical sentiment of one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Map a compound polarity score in `[-1.0, 1.0]` to a label.
    ///
    /// Strict inequalities on both sides: a score of exactly `0.05` or
    /// `-0.05` is Neutral.
    #[must_use]
    pub fn from_compound(score: f32) -> Self {
        if score > SENTIMENT_THRESHOLD {
            SentimentLabel::Positive
        } else if score < -SENTIMENT_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
            SentimentLabel::Negative => write!(f, "Negative"),
        }
    }
}

/// Per-label post counts for one analysis batch.
///
/// Counts always sum to the batch's `total_posts`; the aggregator records
/// exactly one label per surviving post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
}

impl SentimentSummary {
    /// Record one labelled post.
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    /// Total posts tallied across all labels.
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Representative terms for one discovered topic, ordered by descending
/// weight within the topic.
///
/// Topics are unordered among themselves; serializes and displays as the
/// comma-joined term list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSummary {
    pub terms: Vec<String>,
}

impl fmt::Display for TopicSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.terms.join(", "))
    }
}

impl Serialize for TopicSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Aggregate analysis of one retrieval batch.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Count of posts that survived normalization.
    pub total_posts: usize,
    /// Label tallies; sums to `total_posts`.
    pub sentiment_summary: SentimentSummary,
    /// Discovered topics, empty when the batch was too small or sparse to
    /// fit a model.
    pub top_topics: Vec<TopicSummary>,
    /// The full normalized batch, retrieval order preserved.
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_scores_map_to_neutral() {
        assert_eq!(SentimentLabel::from_compound(0.05), SentimentLabel::Neutral);
        assert_eq!(
            SentimentLabel::from_compound(-0.05),
            SentimentLabel::Neutral
        );
        assert_eq!(SentimentLabel::from_compound(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn scores_past_threshold_map_to_polar_labels() {
        assert_eq!(
            SentimentLabel::from_compound(0.051),
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentLabel::from_compound(-0.051),
            SentimentLabel::Negative
        );
        assert_eq!(SentimentLabel::from_compound(1.0), SentimentLabel::Positive);
        assert_eq!(
            SentimentLabel::from_compound(-1.0),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn summary_total_sums_all_labels() {
        let mut summary = SentimentSummary::default();
        summary.record(SentimentLabel::Positive);
        summary.record(SentimentLabel::Positive);
        summary.record(SentimentLabel::Neutral);
        summary.record(SentimentLabel::Negative);
        assert_eq!(summary.positive, 2);
        assert_eq!(summary.neutral, 1);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn topic_summary_displays_joined_terms() {
        let topic = TopicSummary {
            terms: vec!["ceasefire".to_string(), "talks".to_string()],
        };
        assert_eq!(topic.to_string(), "ceasefire, talks");
    }

    #[test]
    fn report_serializes_with_exact_field_names() {
        let report = Report {
            total_posts: 1,
            sentiment_summary: SentimentSummary {
                positive: 1,
                neutral: 0,
                negative: 0,
            },
            top_topics: vec![TopicSummary {
                terms: vec!["aid".to_string(), "convoy".to_string()],
            }],
            posts: vec![Post {
                platform: "twitter".to_string(),
                id: "42".to_string(),
                text: "Aid convoy arrived safely".to_string(),
                date: "2024-05-01T12:00:00Z".to_string(),
                url: None,
            }],
        };

        let value = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(value["total_posts"], 1);
        assert_eq!(value["sentiment_summary"]["Positive"], 1);
        assert_eq!(value["sentiment_summary"]["Neutral"], 0);
        assert_eq!(value["sentiment_summary"]["Negative"], 0);
        assert_eq!(value["top_topics"][0], "aid, convoy");
        assert_eq!(value["posts"][0]["platform"], "twitter");
        assert_eq!(value["posts"][0]["id"], "42");
        assert_eq!(value["posts"][0]["date"], "2024-05-01T12:00:00Z");
        assert!(value["posts"][0]["url"].is_null());
    }
}
