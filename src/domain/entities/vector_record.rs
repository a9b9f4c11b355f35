use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keyed vector plus its display metadata, ready for upsert into the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorRecord {
    pub key: String,
    pub vector: Vec<f32>,
    pub metadata: HashMap<String, String>,
}

/// A single ranked result from the vector store, most similar first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub key: String,
    pub score: f64,
    pub metadata: HashMap<String, String>,
}

/// Ranked hits plus the wall-clock duration of the store query alone
/// (the query embedding step is excluded).
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub hits: Vec<SearchHit>,
    pub query_millis: f64,
}

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    pub ingested: usize,
    pub skipped: usize,
    pub failed_keys: Vec<String>,
}
