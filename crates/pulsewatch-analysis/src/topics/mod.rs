//! Unsupervised topic discovery over a post batch.
//!
//! Pipeline: tokenize → TF-IDF vectorize with document-frequency filtering
//! → seeded LDA → top terms per topic. Degenerate batches (too few
//! documents, or a vocabulary emptied by the frequency filters) yield an
//! empty topic list instead of an error; the standard `min_df`/`max_df`
//! thresholds only make sense for batches of several documents, so the
//! guards are explicit.

mod lda;
mod tokenizer;
mod vectorizer;

use pulsewatch_core::TopicSummary;

use lda::LdaModel;
use tokenizer::tokenize;
use vectorizer::TfIdfVectorizer;

/// Fixed seed: identical batches produce identical topics across runs.
const RANDOM_SEED: u64 = 42;

/// Representative terms kept per topic.
const TERMS_PER_TOPIC: usize = 10;

/// Batches smaller than this cannot support the frequency thresholds.
const MIN_DOCUMENTS: usize = 2;

/// Terms must appear in at least this many documents.
const MIN_DOCUMENT_FREQUENCY: usize = 2;

/// Terms in more than this share of documents are too common to keep.
const MAX_DOCUMENT_FREQUENCY_RATIO: f64 = 0.95;

/// Discover up to `topic_count` topics across a batch of texts.
///
/// Returns an empty vec for degenerate batches and logs (rather than
/// propagates) unexpected model failures — a bad batch costs one cycle's
/// topics, never the process.
#[must_use]
pub fn extract_topics(texts: &[String], topic_count: usize) -> Vec<TopicSummary> {
    if topic_count == 0 {
        return Vec::new();
    }
    if texts.len() < MIN_DOCUMENTS {
        tracing::debug!(
            documents = texts.len(),
            "batch too small for topic modeling; emitting no topics"
        );
        return Vec::new();
    }

    let docs: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t)).collect();
    let vectorizer = TfIdfVectorizer::new(MIN_DOCUMENT_FREQUENCY, MAX_DOCUMENT_FREQUENCY_RATIO);
    let Some(dtm) = vectorizer.fit_transform(&docs) else {
        tracing::debug!(
            documents = texts.len(),
            "vocabulary empty after frequency filtering; emitting no topics"
        );
        return Vec::new();
    };

    let fitted = match LdaModel::new(topic_count, RANDOM_SEED).fit(&dtm.matrix) {
        Ok(fitted) => fitted,
        Err(e) => {
            tracing::warn!(error = %e, "topic model fit failed; emitting no topics");
            return Vec::new();
        }
    };

    fitted
        .top_terms(&dtm.terms, TERMS_PER_TOPIC)
        .into_iter()
        .map(|terms| TopicSummary { terms })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| (*s).to_string()).collect()
    }

    /// Five documents over two clearly distinct vocabularies, every
    /// content word appearing in at least two documents.
    fn mixed_batch() -> Vec<String> {
        batch(&[
            "Ceasefire talks continue as aid convoy reaches the border",
            "Aid convoy delivers water and medicine across the border",
            "Ceasefire talks stall while shelling hits the frontline",
            "Shelling reported near the frontline despite ceasefire talks",
            "Water and medicine shortages grow as the convoy waits",
        ])
    }

    #[test]
    fn empty_batch_yields_no_topics() {
        assert!(extract_topics(&[], 3).is_empty());
    }

    #[test]
    fn single_document_yields_no_topics() {
        let texts = batch(&["One lonely post about a ceasefire"]);
        assert!(extract_topics(&texts, 3).is_empty());
    }

    #[test]
    fn all_unique_vocabulary_yields_no_topics() {
        // Every content word appears exactly once, so min_df = 2 empties
        // the vocabulary.
        let texts = batch(&["alpha bravo", "charlie delta", "echo foxtrot"]);
        assert!(extract_topics(&texts, 3).is_empty());
    }

    #[test]
    fn zero_topic_count_yields_no_topics() {
        assert!(extract_topics(&mixed_batch(), 0).is_empty());
    }

    #[test]
    fn mixed_batch_produces_requested_topic_count() {
        let topics = extract_topics(&mixed_batch(), 2);
        assert_eq!(topics.len(), 2);
        for topic in &topics {
            assert!(!topic.terms.is_empty());
            assert!(topic.terms.len() <= 10);
        }
    }

    #[test]
    fn extraction_is_deterministic_across_runs() {
        let first = extract_topics(&mixed_batch(), 3);
        let second = extract_topics(&mixed_batch(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn topic_terms_come_from_the_batch() {
        let topics = extract_topics(&mixed_batch(), 2);
        let corpus: Vec<String> = mixed_batch()
            .iter()
            .flat_map(|t| super::tokenize(t))
            .collect();
        for topic in topics {
            for term in &topic.terms {
                assert!(corpus.contains(term), "term {term:?} not in corpus");
            }
        }
    }
}
