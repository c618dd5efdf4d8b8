#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read vocabulary file: {0}")]
    FileRead(std::io::Error),
    #[error("unsupported vocabulary format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("translation error: {0}")]
    Translation(String),
}

pub type VocabularyResult<T> = std::result::Result<T, VocabularyError>;
