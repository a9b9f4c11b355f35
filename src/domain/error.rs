use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Scan error: {0}")]
    Scan(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    Store(String),

    #[error("Batch upload failed: {0}")]
    IngestionBatch(String),

    #[error("Upload failed for {key}: {message}")]
    IngestionItem { key: String, message: String },

    #[error("Search error: {0}")]
    Search(String),

    #[error("Dataset artifact error: {0}")]
    Artifact(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
