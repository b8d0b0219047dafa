use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassificationError {
    #[error("empty array value for filter on '{path}'")]
    EmptyArray { path: String },

    #[error("unsupported value for filter on '{path}': {reason}")]
    UnsupportedValue { path: String, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("filter path must contain at least one segment")]
    Empty,

    #[error("filter path segment {index} is empty")]
    EmptySegment { index: usize },
}
