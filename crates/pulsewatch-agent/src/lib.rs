//! LLM-backed retrieval collaborator for pulsewatch.
//!
//! Asks an OpenAI-compatible chat endpoint to search social platforms for
//! recent posts about a query, extracts post records from the free-form
//! answer (structured JSON first, a numbered-list fallback second), and
//! normalizes the loosely-typed records into canonical
//! [`pulsewatch_core::Post`] values. The retrieval contract is weak by
//! design: zero, partial, or malformed results all degrade to an empty or
//! shortened batch, never an abort.

pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod types;

use std::future::Future;

pub use client::SearchAgent;
pub use error::AgentError;
pub use extract::extract_posts;
pub use normalize::normalize_posts;
pub use types::RawPost;

/// Retrieval seam for the monitor loop.
///
/// The loop is generic over this trait so tests can substitute a fake
/// collaborator for the live [`SearchAgent`].
pub trait Retriever {
    /// Fetch up to `max_results` recent posts about `query`.
    ///
    /// Implementations may return fewer or more records than requested.
    fn retrieve(
        &self,
        query: &str,
        max_results: usize,
    ) -> impl Future<Output = Result<Vec<RawPost>, AgentError>> + Send;
}
