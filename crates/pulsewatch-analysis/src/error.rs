use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopicModelError {
    #[error("topic count must be positive")]
    InvalidTopicCount,

    #[error("empty document-term matrix")]
    EmptyMatrix,
}
