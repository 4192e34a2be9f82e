//! Latent Dirichlet Allocation fitted with collapsed Gibbs sampling.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::TopicModelError;

/// Document-topic prior (alpha).
const DOC_TOPIC_PRIOR: f64 = 0.1;

/// Topic-word prior (beta).
const TOPIC_WORD_PRIOR: f64 = 0.01;

/// Gibbs sweeps over the corpus. Post batches are small (tens of short
/// documents), so a fixed sweep count converges well within budget.
const N_ITERATIONS: usize = 200;

/// LDA configuration: topic count plus the seed that fixes the sampling
/// trajectory.
pub(crate) struct LdaModel {
    n_topics: usize,
    seed: u64,
}

/// Sufficient statistics of a fitted model.
pub(crate) struct FittedLda {
    /// `n_topics × n_words` assignment counts.
    topic_word_counts: Array2<f64>,
    /// Per-topic totals (sum over words).
    topic_counts: Array1<f64>,
}

impl LdaModel {
    pub(crate) fn new(n_topics: usize, seed: u64) -> Self {
        Self { n_topics, seed }
    }

    /// Fit the model over a document-term matrix.
    ///
    /// Matrix weights are rounded to integer pseudo-counts for sampling.
    /// Identical matrices and seeds produce identical fits; topic indices
    /// carry no stable identity across differing inputs.
    ///
    /// # Errors
    ///
    /// Returns [`TopicModelError::InvalidTopicCount`] for zero topics and
    /// [`TopicModelError::EmptyMatrix`] for an empty matrix.
    pub(crate) fn fit(&self, dtm: &Array2<f64>) -> Result<FittedLda, TopicModelError> {
        if self.n_topics == 0 {
            return Err(TopicModelError::InvalidTopicCount);
        }
        let n_docs = dtm.nrows();
        let n_words = dtm.ncols();
        if n_docs == 0 || n_words == 0 {
            return Err(TopicModelError::EmptyMatrix);
        }

        let mut rng = StdRng::seed_from_u64(self.seed);

        // Expand the matrix into per-document word occurrence lists.
        let mut doc_words: Vec<Vec<usize>> = Vec::with_capacity(n_docs);
        for doc_idx in 0..n_docs {
            let mut words = Vec::new();
            for word_idx in 0..n_words {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let count = dtm[[doc_idx, word_idx]].round() as usize;
                for _ in 0..count {
                    words.push(word_idx);
                }
            }
            doc_words.push(words);
        }

        // Random initial topic assignment per occurrence.
        let mut topic_word_counts: Array2<f64> = Array2::zeros((self.n_topics, n_words));
        let mut doc_topic_counts: Array2<f64> = Array2::zeros((n_docs, self.n_topics));
        let mut topic_counts: Array1<f64> = Array1::zeros(self.n_topics);
        let mut assignments: Vec<Vec<usize>> = Vec::with_capacity(n_docs);

        for (doc_idx, words) in doc_words.iter().enumerate() {
            let mut doc_assignments = Vec::with_capacity(words.len());
            for &word_idx in words {
                let topic = rng.random_range(0..self.n_topics);
                doc_assignments.push(topic);
                topic_word_counts[[topic, word_idx]] += 1.0;
                doc_topic_counts[[doc_idx, topic]] += 1.0;
                topic_counts[topic] += 1.0;
            }
            assignments.push(doc_assignments);
        }

        #[allow(clippy::cast_precision_loss)]
        let beta_sum = TOPIC_WORD_PRIOR * n_words as f64;

        for _ in 0..N_ITERATIONS {
            for (doc_idx, words) in doc_words.iter().enumerate() {
                for (pos, &word_idx) in words.iter().enumerate() {
                    let old_topic = assignments[doc_idx][pos];
                    topic_word_counts[[old_topic, word_idx]] -= 1.0;
                    doc_topic_counts[[doc_idx, old_topic]] -= 1.0;
                    topic_counts[old_topic] -= 1.0;

                    let new_topic = sample_topic(
                        self.n_topics,
                        word_idx,
                        doc_idx,
                        &topic_word_counts,
                        &doc_topic_counts,
                        &topic_counts,
                        beta_sum,
                        &mut rng,
                    );

                    topic_word_counts[[new_topic, word_idx]] += 1.0;
                    doc_topic_counts[[doc_idx, new_topic]] += 1.0;
                    topic_counts[new_topic] += 1.0;
                    assignments[doc_idx][pos] = new_topic;
                }
            }
        }

        Ok(FittedLda {
            topic_word_counts,
            topic_counts,
        })
    }
}

/// Draw a topic for one word occurrence from the collapsed conditional
/// `p(t) ∝ (n_dt + α) · (n_tw + β) / (n_t + Vβ)`.
#[allow(clippy::too_many_arguments)]
fn sample_topic(
    n_topics: usize,
    word_idx: usize,
    doc_idx: usize,
    topic_word_counts: &Array2<f64>,
    doc_topic_counts: &Array2<f64>,
    topic_counts: &Array1<f64>,
    beta_sum: f64,
    rng: &mut StdRng,
) -> usize {
    let mut weights = Vec::with_capacity(n_topics);
    let mut total = 0.0;
    for topic in 0..n_topics {
        let doc_part = doc_topic_counts[[doc_idx, topic]] + DOC_TOPIC_PRIOR;
        let word_part =
            (topic_word_counts[[topic, word_idx]] + TOPIC_WORD_PRIOR) / (topic_counts[topic] + beta_sum);
        let weight = doc_part * word_part;
        total += weight;
        weights.push(weight);
    }

    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (topic, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative >= threshold {
            return topic;
        }
    }
    n_topics - 1
}

impl FittedLda {
    /// Top `n` terms per topic, ordered by descending topic-word weight.
    ///
    /// `terms` maps matrix columns to vocabulary strings; ties break on the
    /// original (alphabetical) column order, keeping the output stable.
    pub(crate) fn top_terms(&self, terms: &[String], n: usize) -> Vec<Vec<String>> {
        let n_topics = self.topic_word_counts.nrows();
        let n_words = self.topic_word_counts.ncols();
        #[allow(clippy::cast_precision_loss)]
        let beta_sum = TOPIC_WORD_PRIOR * n_words as f64;

        let mut topics = Vec::with_capacity(n_topics);
        for topic in 0..n_topics {
            let denom = self.topic_counts[topic] + beta_sum;
            let mut weighted: Vec<(usize, f64)> = (0..n_words)
                .map(|word_idx| {
                    let weight =
                        (self.topic_word_counts[[topic, word_idx]] + TOPIC_WORD_PRIOR) / denom;
                    (word_idx, weight)
                })
                .collect();
            weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
            weighted.truncate(n);

            let top: Vec<String> = weighted
                .into_iter()
                .filter_map(|(idx, _)| terms.get(idx).cloned())
                .collect();
            topics.push(top);
        }
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two clearly separated word blocks: docs 0-2 use words 0-2, docs 3-5
    /// use words 3-5.
    fn block_matrix() -> (Array2<f64>, Vec<String>) {
        let matrix = Array2::from_shape_vec(
            (6, 6),
            vec![
                3.0, 2.0, 2.0, 0.0, 0.0, 0.0, //
                2.0, 3.0, 1.0, 0.0, 0.0, 0.0, //
                1.0, 2.0, 3.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0, 3.0, 2.0, 2.0, //
                0.0, 0.0, 0.0, 2.0, 3.0, 1.0, //
                0.0, 0.0, 0.0, 1.0, 2.0, 3.0, //
            ],
        )
        .expect("shape matches data");
        let terms = ["strike", "shelling", "frontline", "aid", "convoy", "relief"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        (matrix, terms)
    }

    #[test]
    fn zero_topics_is_an_error() {
        let (matrix, _) = block_matrix();
        let result = LdaModel::new(0, 42).fit(&matrix);
        assert!(matches!(result, Err(TopicModelError::InvalidTopicCount)));
    }

    #[test]
    fn empty_matrix_is_an_error() {
        let empty: Array2<f64> = Array2::zeros((0, 0));
        let result = LdaModel::new(2, 42).fit(&empty);
        assert!(matches!(result, Err(TopicModelError::EmptyMatrix)));
    }

    #[test]
    fn fit_separates_block_topics() {
        let (matrix, terms) = block_matrix();
        let fitted = LdaModel::new(2, 42).fit(&matrix).expect("fit succeeds");
        let topics = fitted.top_terms(&terms, 3);
        assert_eq!(topics.len(), 2);

        // Each block's words should dominate one topic.
        let military = ["strike", "shelling", "frontline"];
        let humanitarian = ["aid", "convoy", "relief"];
        let topic_is_block = |topic: &[String], block: &[&str]| {
            topic.iter().filter(|t| block.contains(&t.as_str())).count() >= 2
        };
        let military_topics = topics
            .iter()
            .filter(|t| topic_is_block(t, &military))
            .count();
        let humanitarian_topics = topics
            .iter()
            .filter(|t| topic_is_block(t, &humanitarian))
            .count();
        assert_eq!(military_topics, 1, "topics: {topics:?}");
        assert_eq!(humanitarian_topics, 1, "topics: {topics:?}");
    }

    #[test]
    fn same_seed_reproduces_identical_topics() {
        let (matrix, terms) = block_matrix();
        let first = LdaModel::new(2, 42).fit(&matrix).expect("fit succeeds");
        let second = LdaModel::new(2, 42).fit(&matrix).expect("fit succeeds");
        assert_eq!(first.top_terms(&terms, 6), second.top_terms(&terms, 6));
    }

    #[test]
    fn top_terms_caps_at_vocabulary_size() {
        let (matrix, terms) = block_matrix();
        let fitted = LdaModel::new(2, 42).fit(&matrix).expect("fit succeeds");
        let topics = fitted.top_terms(&terms, 10);
        assert!(topics.iter().all(|t| t.len() == terms.len()));
    }
}
