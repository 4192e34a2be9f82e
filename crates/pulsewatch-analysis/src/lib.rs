//! Analysis pipeline for pulsewatch.
//!
//! Turns a normalized post batch into a [`pulsewatch_core::Report`]:
//! lexicon-based sentiment per post, TF-IDF + LDA topic discovery over the
//! batch, and aggregation into the report shape. Everything here is
//! deterministic for a given input batch — the topic model runs with a
//! fixed random seed and the lexicon is compiled in.

pub mod error;
pub mod report;
pub mod sentiment;
pub mod topics;

pub use error::TopicModelError;
pub use report::generate_report;
pub use sentiment::{analyze_sentiment, compound_score};
pub use topics::extract_topics;
