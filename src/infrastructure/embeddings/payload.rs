use crate::domain::error::DomainError;
use crate::domain::values::embedding_input::ImageRef;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;

/// Normalize any image reference into a transportable `data:` URI: read or
/// fetch the bytes, base64-encode them, and tag the detected MIME type.
pub async fn image_data_uri(client: &Client, image: &ImageRef) -> Result<String, DomainError> {
    let bytes = match image {
        ImageRef::Local(path) => tokio::fs::read(path).await.map_err(|e| {
            DomainError::Embedding(format!("failed to read {}: {e}", path.display()))
        })?,
        ImageRef::Url(url) => fetch_bytes(client, url).await?,
        ImageRef::ObjectStore(locator) => {
            let url = object_store_url(locator)?;
            fetch_bytes(client, &url).await?
        }
    };
    let encoded = STANDARD.encode(&bytes);
    Ok(format!(
        "data:{};base64,{encoded}",
        mime_type(&image.to_string())
    ))
}

async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, DomainError> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| DomainError::Embedding(format!("failed to fetch {url}: {e}")))?;
    if !resp.status().is_success() {
        return Err(DomainError::Embedding(format!(
            "failed to fetch {url}: HTTP {}",
            resp.status()
        )));
    }
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| DomainError::Embedding(format!("failed to fetch {url}: {e}")))?;
    Ok(bytes.to_vec())
}

/// `s3://bucket/key` mapped to its virtual-hosted HTTPS form, so object
/// store images fetch through the same HTTP client as everything else.
fn object_store_url(locator: &str) -> Result<String, DomainError> {
    let trimmed = locator.trim_start_matches("s3://");
    match trimmed.split_once('/') {
        Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => {
            Ok(format!("https://{bucket}.s3.amazonaws.com/{key}"))
        }
        _ => Err(DomainError::InvalidInput(format!(
            "malformed object store locator: {locator}"
        ))),
    }
}

fn mime_type(reference: &str) -> &'static str {
    if reference.to_ascii_lowercase().ends_with(".png") {
        "image/png"
    } else {
        "image/jpeg"
    }
}
