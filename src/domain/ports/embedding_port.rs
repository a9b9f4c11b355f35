use crate::domain::error::DomainError;
use crate::domain::values::embedding_input::{EmbeddingInput, EmbeddingRole};

#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed one input into a fixed-dimension vector. Exactly one outbound
    /// call; retry is the caller's concern.
    async fn embed(
        &self,
        input: &EmbeddingInput,
        role: EmbeddingRole,
    ) -> Result<Vec<f32>, DomainError>;

    fn dimension(&self) -> usize;
}
