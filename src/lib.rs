pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::embed_dataset::{EmbedDatasetUseCase, ProgressFn};
use crate::application::ingest::IngestUseCase;
use crate::application::scan;
use crate::application::search::SearchUseCase;
use crate::config::Config;
use crate::domain::entities::image_record::{EmbeddedRecord, ImageRecord};
use crate::domain::entities::vector_record::{IngestReport, SearchResponse};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::vector_index::VectorIndex;
use crate::domain::values::embedding_input::{EmbeddingInput, ImageRef};
use crate::infrastructure::embeddings::cohere::CohereProvider;
use crate::infrastructure::store::s3vectors::S3VectorsClient;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub struct RoomSearch {
    config: Config,
    embed_uc: EmbedDatasetUseCase,
    ingest_uc: IngestUseCase,
    search_uc: SearchUseCase,
}

impl RoomSearch {
    pub fn new(config: Config) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::InvalidInput(format!("failed to build HTTP client: {e}")))?;

        let embedder: Arc<dyn EmbeddingProvider> =
            Arc::new(CohereProvider::new(client.clone(), &config));
        let index: Arc<dyn VectorIndex> = Arc::new(S3VectorsClient::new(client, &config));

        Ok(Self::with_providers(config, embedder, index))
    }

    pub fn with_providers(
        config: Config,
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
    ) -> Self {
        Self {
            embed_uc: EmbedDatasetUseCase::new(Arc::clone(&embedder)),
            ingest_uc: IngestUseCase::new(Arc::clone(&index), config.status_every),
            search_uc: SearchUseCase::new(embedder, index),
            config,
        }
    }

    pub fn scan_dataset(
        &self,
        root: &Path,
        categories: &[String],
    ) -> Result<Vec<ImageRecord>, DomainError> {
        scan::scan_dataset(root, categories)
    }

    /// Embed every scanned record, bounded by the configured worker count.
    /// Failed records come back with an absent embedding; the run never
    /// fails as a whole.
    pub async fn embed_dataset(
        &self,
        records: &[ImageRecord],
        on_progress: Option<ProgressFn<'_>>,
    ) -> Vec<EmbeddedRecord> {
        self.embed_uc
            .embed_all(records, self.config.max_workers, on_progress)
            .await
    }

    pub async fn ingest(
        &self,
        records: &[EmbeddedRecord],
        batch_size: usize,
    ) -> Result<IngestReport, DomainError> {
        self.ingest_uc.execute(records, batch_size).await
    }

    pub async fn search_text(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<SearchResponse, DomainError> {
        self.search_uc
            .execute(EmbeddingInput::Text(query.to_string()), limit)
            .await
    }

    pub async fn search_image(
        &self,
        image: &str,
        limit: usize,
    ) -> Result<SearchResponse, DomainError> {
        self.search_uc
            .execute(EmbeddingInput::Image(ImageRef::parse(image)), limit)
            .await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
