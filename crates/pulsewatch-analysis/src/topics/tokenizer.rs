//! Tokenization for topic modeling.
//!
//! Lowercases, drops URLs, splits on non-alphanumeric runs, and filters
//! short tokens, purely numeric tokens, and English stop words. The stop
//! word list is sorted so membership checks binary-search.

/// Minimum token length kept for the vocabulary.
const MIN_TOKEN_LEN: usize = 2;

/// Fixed English stop words, sorted.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each",
    "either", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "may", "me", "might", "more", "most", "must", "my", "myself", "neither",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "ought", "our",
    "ours", "ourselves", "out", "over", "own", "same", "shall", "she", "should", "so", "some",
    "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
    "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

fn flush_token(tokens: &mut Vec<String>, current: &mut String) {
    if current.len() >= MIN_TOKEN_LEN
        && !current.chars().all(|c| c.is_ascii_digit())
        && !is_stop_word(current)
    {
        tokens.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Tokenize one document.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for raw in text.split_whitespace() {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            continue;
        }
        let mut current = String::new();
        for ch in raw.chars() {
            if ch.is_alphanumeric() {
                current.extend(ch.to_lowercase());
            } else {
                flush_token(&mut tokens, &mut current);
            }
        }
        flush_token(&mut tokens, &mut current);
    }
    tokens
}
