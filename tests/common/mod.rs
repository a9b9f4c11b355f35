//! Shared test fakes.
#![allow(dead_code)]

use roomsearch::config::Config;
use roomsearch::domain::entities::image_record::ImageRecord;
use roomsearch::domain::entities::vector_record::{SearchHit, VectorRecord};
use roomsearch::domain::error::DomainError;
use roomsearch::domain::ports::embedding_port::EmbeddingProvider;
use roomsearch::domain::ports::vector_index::VectorIndex;
use roomsearch::domain::values::embedding_input::{EmbeddingInput, EmbeddingRole};
use roomsearch::RoomSearch;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn setup(embedder: Arc<dyn EmbeddingProvider>, index: Arc<dyn VectorIndex>) -> RoomSearch {
    RoomSearch::with_providers(Config::from_env(), embedder, index)
}

pub fn image_record(id: &str, room_type: &str) -> ImageRecord {
    ImageRecord {
        id: id.to_string(),
        room_type: room_type.to_string(),
        filename: format!("{id}.jpg"),
        img_full_path: format!("/data/{room_type}/{id}.jpg"),
    }
}

/// Deterministic vector for a seed string, so a record embedded as a
/// document and the same reference embedded as a query agree exactly.
pub fn embedding_for(seed: &str, dimension: usize) -> Vec<f32> {
    let mut acc: u32 = 2166136261;
    for byte in seed.bytes() {
        acc ^= byte as u32;
        acc = acc.wrapping_mul(16777619);
    }
    (0..dimension)
        .map(|i| ((acc.wrapping_add(i as u32) % 1000) as f32 + 1.0) / 1000.0)
        .collect()
}

/// Embedder fake: derives the vector from the input text or image path,
/// optionally failing on chosen inputs and staggering completion so later
/// submissions finish first.
pub struct StubEmbedder {
    pub dimension: usize,
    pub fail_inputs: HashSet<String>,
    pub shuffle_delays: bool,
    pub calls: AtomicUsize,
}

impl StubEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            fail_inputs: HashSet::new(),
            shuffle_delays: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(mut self, inputs: &[&str]) -> Self {
        self.fail_inputs = inputs.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_shuffled_delays(mut self) -> Self {
        self.shuffle_delays = true;
        self
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for StubEmbedder {
    async fn embed(
        &self,
        input: &EmbeddingInput,
        _role: EmbeddingRole,
    ) -> Result<Vec<f32>, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let seed = match input {
            EmbeddingInput::Text(text) => text.clone(),
            EmbeddingInput::Image(image) => image.to_string(),
        };
        if self.shuffle_delays {
            // Later submissions sleep less, forcing out-of-order completion
            let millis = (32 - (call % 32)) as u64;
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
        if self.fail_inputs.contains(&seed) {
            return Err(DomainError::Embedding(format!(
                "injected failure for {seed}"
            )));
        }
        Ok(embedding_for(&seed, self.dimension))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// In-memory vector index with cosine ranking, call counting, and scripted
/// failures: any put containing a poisoned key is rejected whole.
#[derive(Default)]
pub struct MemoryVectorIndex {
    pub vectors: Mutex<HashMap<String, (Vec<f32>, HashMap<String, String>)>>,
    pub put_calls: AtomicUsize,
    pub ensure_calls: AtomicUsize,
    pub fail_keys: HashSet<String>,
}

impl MemoryVectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_keys(mut self, keys: &[&str]) -> Self {
        self.fail_keys = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn stored_len(&self) -> usize {
        self.vectors.lock().unwrap().len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vectors.lock().unwrap().contains_key(key)
    }

    fn cosine(a: &[f32], b: &[f32]) -> f64 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }
        let mut dot = 0.0_f64;
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        for (x, y) in a.iter().zip(b.iter()) {
            let x = *x as f64;
            let y = *y as f64;
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom == 0.0 {
            0.0
        } else {
            dot / denom
        }
    }
}

#[async_trait::async_trait]
impl VectorIndex for MemoryVectorIndex {
    async fn ensure_container(&self) -> Result<(), DomainError> {
        self.ensure_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn put_vectors(&self, vectors: &[VectorRecord]) -> Result<(), DomainError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(bad) = vectors.iter().find(|v| self.fail_keys.contains(&v.key)) {
            return Err(if vectors.len() == 1 {
                DomainError::IngestionItem {
                    key: bad.key.clone(),
                    message: "injected failure".into(),
                }
            } else {
                DomainError::IngestionBatch(format!(
                    "injected failure for batch containing {}",
                    bad.key
                ))
            });
        }
        let mut stored = self.vectors.lock().unwrap();
        for vector in vectors {
            stored.insert(
                vector.key.clone(),
                (vector.vector.clone(), vector.metadata.clone()),
            );
        }
        Ok(())
    }

    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<SearchHit>, DomainError> {
        let stored = self.vectors.lock().unwrap();
        let mut hits: Vec<SearchHit> = stored
            .iter()
            .map(|(key, (candidate, metadata))| SearchHit {
                key: key.clone(),
                score: Self::cosine(vector, candidate),
                metadata: metadata.clone(),
            })
            .collect();
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(top_k);
        Ok(hits)
    }
}

/// Index whose query path always fails, for surfacing store outages.
pub struct UnreachableIndex;

#[async_trait::async_trait]
impl VectorIndex for UnreachableIndex {
    async fn ensure_container(&self) -> Result<(), DomainError> {
        Err(DomainError::Store("store unreachable".into()))
    }

    async fn put_vectors(&self, vectors: &[VectorRecord]) -> Result<(), DomainError> {
        Err(DomainError::IngestionBatch(format!(
            "store unreachable ({} vectors)",
            vectors.len()
        )))
    }

    async fn query(&self, _vector: &[f32], _top_k: usize) -> Result<Vec<SearchHit>, DomainError> {
        Err(DomainError::Search("store unreachable".into()))
    }
}
