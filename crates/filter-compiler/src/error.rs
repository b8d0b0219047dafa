use model::ClassificationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Failed to classify filter value: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Failed to encode filter document: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
