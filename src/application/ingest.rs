use crate::domain::entities::image_record::EmbeddedRecord;
use crate::domain::entities::vector_record::{IngestReport, VectorRecord};
use crate::domain::error::DomainError;
use crate::domain::ports::vector_index::VectorIndex;
use std::sync::Arc;
use std::time::Instant;

pub struct IngestUseCase {
    index: Arc<dyn VectorIndex>,
    status_every: usize,
}

impl IngestUseCase {
    pub fn new(index: Arc<dyn VectorIndex>, status_every: usize) -> Self {
        Self {
            index,
            status_every: status_every.max(1),
        }
    }

    /// Upload all embedded records in fixed-size batches, in input order.
    ///
    /// Records without an embedding are skipped and counted, never uploaded.
    /// A failed batch is retried item by item so one bad record cannot sink
    /// the rest of its batch; per-item failures land in `failed_keys` and
    /// are never raised. Re-running over the same keys overwrites, courtesy
    /// of the store's upsert semantics.
    pub async fn execute(
        &self,
        records: &[EmbeddedRecord],
        batch_size: usize,
    ) -> Result<IngestReport, DomainError> {
        if batch_size == 0 {
            return Err(DomainError::InvalidInput(
                "batch size must be at least 1".into(),
            ));
        }
        self.index.ensure_container().await?;

        let started = Instant::now();
        let total = records.len();
        let mut report = IngestReport::default();
        let mut batch: Vec<VectorRecord> = Vec::with_capacity(batch_size);

        for record in records {
            match record.vector_record() {
                Some(vector) => batch.push(vector),
                None => {
                    report.skipped += 1;
                    log::info!("skipping {}: no embedding", record.record.id);
                }
            }
            if batch.len() >= batch_size {
                self.flush(&mut batch, &mut report, total, &started).await;
            }
        }
        if !batch.is_empty() {
            self.flush(&mut batch, &mut report, total, &started).await;
        }

        Ok(report)
    }

    /// Submit the accumulated batch, falling back to per-item uploads when
    /// the whole batch is rejected. Failures are contained here.
    async fn flush(
        &self,
        batch: &mut Vec<VectorRecord>,
        report: &mut IngestReport,
        total: usize,
        started: &Instant,
    ) {
        let size = batch.len();
        match self.index.put_vectors(batch).await {
            Ok(()) => report.ingested += size,
            Err(e) => {
                log::warn!("batch of {size} failed: {e}; retrying items individually");
                for vector in batch.iter() {
                    match self.index.put_vectors(std::slice::from_ref(vector)).await {
                        Ok(()) => report.ingested += 1,
                        Err(e) => {
                            log::warn!("{e}");
                            report.failed_keys.push(vector.key.clone());
                        }
                    }
                }
            }
        }
        batch.clear();

        if report.ingested % self.status_every < size {
            let elapsed_minutes = started.elapsed().as_secs_f64() / 60.0;
            let percent = report.ingested as f64 / total.max(1) as f64 * 100.0;
            log::info!(
                "progress: {} vectors ({percent:.2}%) in {elapsed_minutes:.2} minutes",
                report.ingested
            );
        }
    }
}
