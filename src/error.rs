use thiserror::Error;

/// Result type alias for vocabulary export operations
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors that can occur while converting a vocabulary list
#[derive(Error, Debug)]
pub enum VocabError {
    /// I/O error on the input or output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input parsed but the top-level value is not an array
    #[error("expected a top-level JSON array, got {0}")]
    NotAnArray(&'static str),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<csv::Error> for VocabError {
    fn from(err: csv::Error) -> Self {
        VocabError::Csv(err.to_string())
    }
}
