use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::Embedder;

/// Client for an external sentence-embedding model server.
///
/// Expects a JSON endpoint taking `{"text": ...}` and returning
/// `{"embedding": [...]}`. The model behind it is out of scope; this is the
/// whole contract.
#[derive(Clone)]
pub struct RemoteEmbedder {
    http_client: HttpClient,
    url: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

impl RemoteEmbedder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl Embedder for RemoteEmbedder {
    async fn embed(&self, text: &str) -> AppResult<Vec<f32>> {
        let response = self
            .http_client
            .post(&self.url)
            .json(&EmbedRequest { text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Embedding(format!(
                "model server returned {}",
                response.status()
            )));
        }

        let body: EmbedResponse = response.json().await?;
        if body.embedding.is_empty() {
            return Err(AppError::Embedding(
                "model server returned an empty vector".to_string(),
            ));
        }

        Ok(body.embedding)
    }
}
