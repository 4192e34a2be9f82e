//! Compiled-in valence lexicon for sentiment scoring.
//!
//! All three tables are sorted by word so lookups can binary-search.
//! Weights in `(0.0, 1.0]` are positive, in `[-1.0, 0.0)` negative; the
//! scorer sums matched weights and clamps the total to `[-1.0, 1.0]`.

/// Word valences. Keys are lowercase; contractions keep their apostrophe
/// (the scorer's token cleaning only strips non-alphabetic edges).
pub(crate) const LEXICON: &[(&str, f32)] = &[
    ("amazing", 0.6),
    ("angry", -0.5),
    ("approved", 0.45),
    ("awesome", 0.6),
    ("awful", -0.6),
    ("bad", -0.5),
    ("beautiful", 0.55),
    ("best", 0.65),
    ("blocked", -0.3),
    ("brilliant", 0.6),
    ("broken", -0.45),
    ("calm", 0.3),
    ("catastrophe", -0.8),
    ("chaos", -0.55),
    ("collapse", -0.6),
    ("crisis", -0.6),
    ("danger", -0.55),
    ("dangerous", -0.6),
    ("dead", -0.7),
    ("deadly", -0.75),
    ("death", -0.7),
    ("defeat", -0.5),
    ("delicious", 0.5),
    ("destroyed", -0.7),
    ("devastating", -0.75),
    ("disaster", -0.7),
    ("dreadful", -0.65),
    ("excellent", 0.65),
    ("exciting", 0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.55),
    ("fantastic", 0.6),
    ("fear", -0.5),
    ("fine", 0.3),
    ("free", 0.35),
    ("fun", 0.45),
    ("glad", 0.4),
    ("good", 0.45),
    ("great", 0.55),
    ("happy", 0.55),
    ("hate", -0.65),
    ("hero", 0.5),
    ("hope", 0.4),
    ("hopeful", 0.45),
    ("horrible", -0.65),
    ("hurt", -0.45),
    ("improved", 0.4),
    ("improvement", 0.4),
    ("inspiring", 0.5),
    ("joy", 0.55),
    ("kill", -0.75),
    ("killed", -0.75),
    ("love", 0.6),
    ("loved", 0.6),
    ("lovely", 0.55),
    ("meh", -0.05),
    ("misery", -0.6),
    ("nice", 0.45),
    ("ok", 0.05),
    ("peace", 0.5),
    ("peaceful", 0.5),
    ("perfect", 0.65),
    ("poor", -0.4),
    ("positive", 0.4),
    ("problem", -0.35),
    ("progress", 0.4),
    ("promising", 0.45),
    ("relief", 0.45),
    ("rescue", 0.4),
    ("risk", -0.35),
    ("sad", -0.5),
    ("safe", 0.45),
    ("scared", -0.5),
    ("success", 0.55),
    ("successful", 0.55),
    ("support", 0.35),
    ("terrible", -0.65),
    ("terror", -0.7),
    ("threat", -0.55),
    ("tragedy", -0.7),
    ("tragic", -0.7),
    ("trouble", -0.4),
    ("ugly", -0.5),
    ("victory", 0.55),
    ("violence", -0.65),
    ("violent", -0.65),
    ("war", -0.55),
    ("warning", -0.35),
    ("welcome", 0.35),
    ("win", 0.5),
    ("won", 0.5),
    ("wonderful", 0.6),
    ("worst", -0.7),
    ("wounded", -0.6),
    ("wrong", -0.4),
];

/// Tokens that flip and dampen a valence hit within the two preceding
/// positions.
pub(crate) const NEGATIONS: &[&str] = &[
    "aren't", "arent", "barely", "can't", "cant", "didn't", "didnt", "doesn't", "doesnt", "don't",
    "dont", "hardly", "isn't", "isnt", "never", "no", "nor", "not", "nothing", "wasn't", "wasnt",
    "without", "won't", "wont",
];

/// Tokens that intensify the valence of the immediately following word.
pub(crate) const BOOSTERS: &[&str] = &[
    "absolutely",
    "extremely",
    "incredibly",
    "really",
    "so",
    "totally",
    "truly",
    "very",
];

/// Valence for a cleaned lowercase token, if it is in the lexicon.
pub(crate) fn valence(word: &str) -> Option<f32> {
    LEXICON
        .binary_search_by(|(w, _)| (*w).cmp(word))
        .ok()
        .map(|idx| LEXICON[idx].1)
}

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.binary_search(&word).is_ok()
}

pub(crate) fn is_booster(word: &str) -> bool {
    BOOSTERS.binary_search(&word).is_ok()
}
