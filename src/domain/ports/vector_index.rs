use crate::domain::entities::vector_record::{SearchHit, VectorRecord};
use crate::domain::error::DomainError;

#[async_trait::async_trait]
pub trait VectorIndex: Send + Sync {
    /// Create the store's bucket and index if missing. "Already exists" is
    /// success, not failure.
    async fn ensure_container(&self) -> Result<(), DomainError>;

    /// Bulk upsert; a key already present is overwritten by the store.
    async fn put_vectors(&self, vectors: &[VectorRecord]) -> Result<(), DomainError>;

    /// Top-K similarity query, most similar first, with metadata and
    /// distance included.
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<SearchHit>, DomainError>;
}
