use crate::domain::entities::image_record::{EmbeddedRecord, ImageRecord};
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::values::embedding_input::{EmbeddingInput, EmbeddingRole, ImageRef};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Called with (completed, total) after each task finishes, in completion
/// order. The completed count only ever grows.
pub type ProgressFn<'a> = &'a (dyn Fn(usize, usize) + Send + Sync);

pub struct EmbedDatasetUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
}

impl EmbedDatasetUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { embedder }
    }

    /// Embed every record through a bounded pool of concurrent tasks.
    ///
    /// The output always has the same length and order as the input: each
    /// task writes its result into the slot for its original index, so
    /// completion order never matters. A failed embedding leaves `None` in
    /// its slot and never aborts sibling tasks or the run.
    pub async fn embed_all(
        &self,
        records: &[ImageRecord],
        concurrency: usize,
        on_progress: Option<ProgressFn<'_>>,
    ) -> Vec<EmbeddedRecord> {
        let total = records.len();
        let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
        let mut join_set = JoinSet::new();

        for (idx, record) in records.iter().enumerate() {
            let embedder = Arc::clone(&self.embedder);
            let semaphore = Arc::clone(&semaphore);
            let input = EmbeddingInput::Image(ImageRef::parse(&record.img_full_path));
            join_set.spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        return (idx, Err(DomainError::Embedding("worker pool closed".into())))
                    }
                };
                let result = embedder.embed(&input, EmbeddingRole::Document).await;
                (idx, result)
            });
        }

        // Slots are pre-filled with the absent marker and written at each
        // task's original index, not in completion order.
        let mut slots: Vec<Option<Vec<f32>>> = vec![None; total];
        let mut completed = 0usize;
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((idx, Ok(vector))) => slots[idx] = Some(vector),
                Ok((idx, Err(e))) => {
                    log::warn!(
                        "embedding failed for record {idx} ({}): {e}",
                        records[idx].img_full_path
                    );
                }
                Err(e) => log::error!("embedding task aborted: {e}"),
            }
            completed += 1;
            if let Some(progress) = on_progress {
                progress(completed, total);
            }
        }

        records
            .iter()
            .cloned()
            .zip(slots)
            .map(|(record, embedding)| EmbeddedRecord::new(record, embedding))
            .collect()
    }
}
