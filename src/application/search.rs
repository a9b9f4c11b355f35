use crate::domain::entities::vector_record::SearchResponse;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_index::VectorIndex;
use crate::domain::values::embedding_input::{EmbeddingInput, EmbeddingRole};
use std::sync::Arc;
use std::time::Instant;

pub struct SearchUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
}

impl SearchUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, index: Arc<dyn VectorIndex>) -> Self {
        Self { embedder, index }
    }

    /// Embed the query with role=query and return the store's top-K, in
    /// store order. Timing covers the store query only, not the embedding.
    pub async fn execute(
        &self,
        query: EmbeddingInput,
        k: usize,
    ) -> Result<SearchResponse, DomainError> {
        if k == 0 {
            return Err(DomainError::InvalidInput(
                "result count must be at least 1".into(),
            ));
        }

        let vector = self
            .embedder
            .embed(&query, EmbeddingRole::Query)
            .await
            .map_err(|e| DomainError::Search(format!("query embedding failed: {e}")))?;

        let started = Instant::now();
        let hits = self.index.query(&vector, k).await?;
        let query_millis = started.elapsed().as_secs_f64() * 1000.0;

        Ok(SearchResponse { hits, query_millis })
    }
}
