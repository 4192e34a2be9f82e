//! Lexicon-and-rules sentiment scoring.
//!
//! `compound_score` is a pure function of the input text and the compiled-in
//! lexicon: the same text always produces the same score. The lexicon tables
//! are read-only statics, safe for concurrent use.

mod lexicon;

use pulsewatch_core::SentimentLabel;

use lexicon::{is_booster, is_negation, valence};

/// Scale applied to a valence hit preceded by a booster adverb.
const BOOST_FACTOR: f32 = 1.5;

/// Scale applied to a valence hit with a negation in the two preceding
/// tokens: flips the sign and halves the magnitude.
const NEGATION_FACTOR: f32 = -0.5;

/// Compound polarity of a text in `[-1.0, 1.0]`.
///
/// Scores the text as a whole: splits into lowercase tokens (stripping
/// non-alphabetic edges, so contractions survive), sums lexicon hits with
/// booster and negation adjustments, and clamps. Unknown text scores `0.0`.
#[must_use]
pub fn compound_score(text: &str) -> f32 {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect();

    let mut score = 0.0_f32;
    for (i, token) in tokens.iter().enumerate() {
        let Some(weight) = valence(token) else {
            continue;
        };
        let mut hit = weight;
        if i >= 1 && is_booster(&tokens[i - 1]) {
            hit *= BOOST_FACTOR;
        }
        let negated = tokens[i.saturating_sub(2)..i]
            .iter()
            .any(|t| is_negation(t));
        if negated {
            hit *= NEGATION_FACTOR;
        }
        score += hit;
    }
    score.clamp(-1.0, 1.0)
}

/// Label a text by its compound score.
///
/// Strict thresholds at ±0.05; boundary scores are Neutral.
#[must_use]
pub fn analyze_sentiment(text: &str) -> SentimentLabel {
    SentimentLabel::from_compound(compound_score(text))
}
