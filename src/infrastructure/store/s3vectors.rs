use crate::config::Config;
use crate::domain::entities::vector_record::{SearchHit, VectorRecord};
use crate::domain::error::DomainError;
use crate::domain::ports::vector_index::VectorIndex;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// JSON-over-HTTP client for an s3vectors-style index service: one bucket,
/// one index, float32 vectors, bulk upsert and top-K queries.
pub struct S3VectorsClient {
    client: Client,
    base_url: String,
    api_key: String,
    bucket: String,
    index: String,
    dimension: usize,
    distance_metric: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBucketRequest<'a> {
    vector_bucket_name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateIndexRequest<'a> {
    vector_bucket_name: &'a str,
    index_name: &'a str,
    data_type: &'a str,
    dimension: usize,
    distance_metric: &'a str,
}

#[derive(Serialize)]
struct VectorData {
    float32: Vec<f32>,
}

#[derive(Serialize)]
struct WireVector<'a> {
    key: &'a str,
    data: VectorData,
    metadata: &'a HashMap<String, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PutVectorsRequest<'a> {
    vector_bucket_name: &'a str,
    index_name: &'a str,
    vectors: Vec<WireVector<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryVectorsRequest<'a> {
    vector_bucket_name: &'a str,
    index_name: &'a str,
    query_vector: VectorData,
    top_k: usize,
    return_metadata: bool,
    return_distance: bool,
}

#[derive(Deserialize)]
struct QueryVectorsResponse {
    vectors: Vec<WireHit>,
}

#[derive(Deserialize)]
struct WireHit {
    key: String,
    #[serde(default)]
    distance: Option<f64>,
    #[serde(default)]
    metadata: HashMap<String, String>,
}

impl S3VectorsClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.vector_url.clone(),
            api_key: config.vector_api_key.clone(),
            bucket: config.vector_bucket.clone(),
            index: config.vector_index.clone(),
            dimension: config.dimension,
            distance_metric: config.distance_metric.clone(),
        }
    }

    async fn post<T: Serialize>(
        &self,
        operation: &str,
        body: &T,
    ) -> Result<reqwest::Response, String> {
        self.client
            .post(format!("{}/{operation}", self.base_url))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("{operation} request failed: {e}"))
    }

    /// Issue a create call, treating HTTP 409 ("already exists") as success.
    async fn create<T: Serialize>(&self, operation: &str, body: &T) -> Result<(), DomainError> {
        let resp = self.post(operation, body).await.map_err(DomainError::Store)?;
        if resp.status().is_success() || resp.status() == StatusCode::CONFLICT {
            return Ok(());
        }
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        Err(DomainError::Store(format!("{operation} {status}: {text}")))
    }
}

#[async_trait::async_trait]
impl VectorIndex for S3VectorsClient {
    async fn ensure_container(&self) -> Result<(), DomainError> {
        self.create(
            "CreateVectorBucket",
            &CreateBucketRequest {
                vector_bucket_name: &self.bucket,
            },
        )
        .await?;
        self.create(
            "CreateIndex",
            &CreateIndexRequest {
                vector_bucket_name: &self.bucket,
                index_name: &self.index,
                data_type: "float32",
                dimension: self.dimension,
                distance_metric: &self.distance_metric,
            },
        )
        .await
    }

    async fn put_vectors(&self, vectors: &[VectorRecord]) -> Result<(), DomainError> {
        let request = PutVectorsRequest {
            vector_bucket_name: &self.bucket,
            index_name: &self.index,
            vectors: vectors
                .iter()
                .map(|v| WireVector {
                    key: &v.key,
                    data: VectorData {
                        float32: v.vector.clone(),
                    },
                    metadata: &v.metadata,
                })
                .collect(),
        };
        let resp = self
            .post("PutVectors", &request)
            .await
            .map_err(|message| put_error(vectors, message))?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(put_error(vectors, format!("PutVectors {status}: {text}")));
        }
        Ok(())
    }

    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<SearchHit>, DomainError> {
        let request = QueryVectorsRequest {
            vector_bucket_name: &self.bucket,
            index_name: &self.index,
            query_vector: VectorData {
                float32: vector.to_vec(),
            },
            top_k,
            return_metadata: true,
            return_distance: true,
        };
        let resp = self
            .post("QueryVectors", &request)
            .await
            .map_err(DomainError::Search)?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(DomainError::Search(format!("QueryVectors {status}: {text}")));
        }
        let result: QueryVectorsResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("invalid query response: {e}")))?;
        Ok(result
            .vectors
            .into_iter()
            .map(|hit| SearchHit {
                key: hit.key,
                score: hit.distance.unwrap_or_default(),
                metadata: hit.metadata,
            })
            .collect())
    }
}

fn put_error(vectors: &[VectorRecord], message: String) -> DomainError {
    if vectors.len() == 1 {
        DomainError::IngestionItem {
            key: vectors[0].key.clone(),
            message,
        }
    } else {
        DomainError::IngestionBatch(message)
    }
}
