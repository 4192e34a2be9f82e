//! TF-IDF vectorization of a tokenized batch.

use std::collections::{HashMap, HashSet};

use ndarray::Array2;

/// A fitted document-term matrix with its term ordering.
///
/// Terms are sorted alphabetically so the matrix layout (and everything
/// downstream, including the seeded topic model) is deterministic for a
/// given batch.
pub(crate) struct DocumentTermMatrix {
    /// `n_documents × n_terms`, TF-IDF weighted.
    pub(crate) matrix: Array2<f64>,
    /// Column index → term.
    pub(crate) terms: Vec<String>,
}

/// Batch TF-IDF vectorizer with document-frequency filtering.
pub(crate) struct TfIdfVectorizer {
    /// Minimum absolute document frequency for a term to enter the
    /// vocabulary.
    min_df: usize,
    /// Maximum document-frequency ratio; terms above it are too common to
    /// discriminate.
    max_df_ratio: f64,
}

impl TfIdfVectorizer {
    pub(crate) fn new(min_df: usize, max_df_ratio: f64) -> Self {
        Self {
            min_df,
            max_df_ratio,
        }
    }

    /// Build the TF-IDF matrix for a tokenized batch.
    ///
    /// Returns `None` when no term survives the frequency filters — the
    /// caller treats that as a degenerate batch rather than an error.
    pub(crate) fn fit_transform(&self, docs: &[Vec<String>]) -> Option<DocumentTermMatrix> {
        let n_docs = docs.len();
        if n_docs == 0 {
            return None;
        }

        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in docs {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let max_df = (n_docs as f64 * self.max_df_ratio) as usize;

        let mut terms: Vec<String> = doc_freq
            .iter()
            .filter(|(_, df)| **df >= self.min_df && **df <= max_df)
            .map(|(term, _)| (*term).to_string())
            .collect();
        if terms.is_empty() {
            return None;
        }
        terms.sort();

        let index: HashMap<&str, usize> = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.as_str(), idx))
            .collect();

        // Smooth IDF; strictly positive for every retained term.
        #[allow(clippy::cast_precision_loss)]
        let idf: Vec<f64> = terms
            .iter()
            .map(|term| {
                let df = doc_freq[term.as_str()];
                (n_docs as f64 / (1.0 + df as f64)).ln() + 1.0
            })
            .collect();

        let mut matrix: Array2<f64> = Array2::zeros((n_docs, terms.len()));
        for (doc_idx, doc) in docs.iter().enumerate() {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for token in doc {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
            for (token, count) in counts {
                if let Some(&term_idx) = index.get(token) {
                    #[allow(clippy::cast_precision_loss)]
                    let tf = count as f64;
                    matrix[[doc_idx, term_idx]] = tf * idf[term_idx];
                }
            }
        }

        Some(DocumentTermMatrix { matrix, terms })
    }
}
