use super::payload;
use crate::config::Config;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::values::embedding_input::{EmbeddingInput, EmbeddingRole};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Client for a Cohere-style multimodal embedding endpoint. Text and images
/// land in the same vector space; image payloads always go up as data URIs
/// under input_type "image", text under the role's wire value.
pub struct CohereProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    dimension: usize,
}

#[derive(Serialize)]
struct InvokeRequest {
    input_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    texts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    images: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct InvokeResponse {
    embeddings: Vec<Vec<f32>>,
}

impl CohereProvider {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.embedding_url.clone(),
            api_key: config.embedding_api_key.clone(),
            model: config.embedding_model.clone(),
            dimension: config.dimension,
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for CohereProvider {
    async fn embed(
        &self,
        input: &EmbeddingInput,
        role: EmbeddingRole,
    ) -> Result<Vec<f32>, DomainError> {
        let request = match input {
            EmbeddingInput::Text(text) => InvokeRequest {
                input_type: role.as_wire().to_string(),
                texts: Some(vec![text.clone()]),
                images: None,
            },
            EmbeddingInput::Image(image) => InvokeRequest {
                input_type: "image".to_string(),
                texts: None,
                images: Some(vec![payload::image_data_uri(&self.client, image).await?]),
            },
        };

        let url = format!("{}/model/{}/invoke", self.base_url, self.model);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Embedding(format!("embedding API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Embedding(format!(
                "embedding API {status}: {body}"
            )));
        }

        let result: InvokeResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Parse(format!("invalid embedding response: {e}")))?;
        result
            .embeddings
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Parse("embedding API returned no embeddings".into()))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
