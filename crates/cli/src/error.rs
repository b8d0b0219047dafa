use filter_compiler::FilterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the filter file: {0}")]
    FilterFileRead(#[from] std::io::Error),

    #[error("Failed to deserialize the filter file as a filter tree: {0}")]
    FilterDeserialize(#[from] serde_json::Error),

    #[error("Failed to compile the filter tree: {0}")]
    Compile(#[from] FilterError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Invalid output format provided: {0}")]
    InvalidOutputFormat(String),

    #[error("Invalid classification policy provided: {0}")]
    InvalidPolicy(String),
}
