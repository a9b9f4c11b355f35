use std::env;
use std::str::FromStr;

/// Runtime configuration, read from the environment. Every knob has a
/// documented default so the binary runs with nothing set but the API keys.
#[derive(Debug, Clone)]
pub struct Config {
    /// ROOMSEARCH_VECTOR_BUCKET (default "house-rooms-bucket")
    pub vector_bucket: String,
    /// ROOMSEARCH_VECTOR_INDEX (default "house-rooms-index")
    pub vector_index: String,
    /// ROOMSEARCH_DIMENSION (default 1024)
    pub dimension: usize,
    /// ROOMSEARCH_DISTANCE_METRIC (default "cosine")
    pub distance_metric: String,
    /// ROOMSEARCH_MAX_WORKERS (default 50), embedding pipeline concurrency
    pub max_workers: usize,
    /// ROOMSEARCH_BATCH_SIZE (default 100), vectors per upload call
    pub batch_size: usize,
    /// ROOMSEARCH_STATUS_EVERY (default 200), ingestion progress cadence
    pub status_every: usize,
    /// ROOMSEARCH_TIMEOUT_SECS (default 60), per-call HTTP timeout
    pub timeout_secs: u64,
    /// ROOMSEARCH_EMBEDDING_URL, embedding service base URL
    pub embedding_url: String,
    /// ROOMSEARCH_EMBEDDING_MODEL (default "embed-multilingual-v3")
    pub embedding_model: String,
    /// ROOMSEARCH_EMBEDDING_API_KEY
    pub embedding_api_key: String,
    /// ROOMSEARCH_VECTOR_URL, vector store base URL
    pub vector_url: String,
    /// ROOMSEARCH_VECTOR_API_KEY
    pub vector_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            vector_bucket: env_or("ROOMSEARCH_VECTOR_BUCKET", "house-rooms-bucket"),
            vector_index: env_or("ROOMSEARCH_VECTOR_INDEX", "house-rooms-index"),
            dimension: env_parse("ROOMSEARCH_DIMENSION", 1024),
            distance_metric: env_or("ROOMSEARCH_DISTANCE_METRIC", "cosine"),
            max_workers: env_parse("ROOMSEARCH_MAX_WORKERS", 50),
            batch_size: env_parse("ROOMSEARCH_BATCH_SIZE", 100),
            status_every: env_parse("ROOMSEARCH_STATUS_EVERY", 200),
            timeout_secs: env_parse("ROOMSEARCH_TIMEOUT_SECS", 60),
            embedding_url: env_or(
                "ROOMSEARCH_EMBEDDING_URL",
                "https://bedrock-runtime.us-east-1.amazonaws.com",
            ),
            embedding_model: env_or("ROOMSEARCH_EMBEDDING_MODEL", "embed-multilingual-v3"),
            embedding_api_key: env::var("ROOMSEARCH_EMBEDDING_API_KEY").unwrap_or_default(),
            vector_url: env_or("ROOMSEARCH_VECTOR_URL", "https://s3vectors.us-east-1.api.aws"),
            vector_api_key: env::var("ROOMSEARCH_VECTOR_API_KEY").unwrap_or_default(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr + Copy>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
