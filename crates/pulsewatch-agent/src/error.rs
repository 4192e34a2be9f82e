use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search API error: {0}")]
    Api(String),

    #[error("malformed search response: {0}")]
    MalformedResponse(String),
}
