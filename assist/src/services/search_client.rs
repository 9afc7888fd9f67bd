use reqwest::Client;
use serde_json::Value;

use crate::errors::AssistError;

/// Client for the search backend's metadata and sampling operations.
pub struct SearchClient {
    base_url: String,
    client: Client,
}

impl SearchClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Fetches the field mappings for an index.
    pub async fn get_mapping(&self, index: &str) -> Result<Value, AssistError> {
        self.get_json(format!("{}/{}/_mapping", self.base_url, index))
            .await
    }

    /// Fetches a single sample document from an index.
    pub async fn sample_document(&self, index: &str) -> Result<Value, AssistError> {
        self.get_json(format!("{}/{}/_search?size=1", self.base_url, index))
            .await
    }

    async fn get_json(&self, url: String) -> Result<Value, AssistError> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(AssistError::transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(AssistError::Downstream {
                status: Some(status),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AssistError::Downstream {
                status: None,
                message: format!("Invalid search response: {}", e),
            })
    }
}
