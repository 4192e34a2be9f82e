use serde::{Deserialize, Serialize};

/// A single normalized social-media post.
///
/// Produced by the agent-side normalizer from loosely-typed retrieved
/// records; immutable once constructed. `date` is carried as the
/// platform-native string and never parsed into a structured time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Source platform tag: `twitter`, `telegram`, `rss`, or `unknown`.
    /// Open set — new platforms pass through untouched.
    pub platform: String,
    /// Identifier unique within its platform, `N/A` when the source
    /// omitted it.
    pub id: String,
    /// Post body. Non-empty after trimming; the normalizer drops records
    /// that violate this.
    pub text: String,
    /// Timestamp string as reported by the platform, `N/A` when absent.
    pub date: String,
    /// Canonical link, when the source provided one.
    pub url: Option<String>,
}
