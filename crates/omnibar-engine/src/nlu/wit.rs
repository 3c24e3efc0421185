use super::{NluClient, NluError};
use crate::config::NluConfig;
use async_trait::async_trait;
use omnibar_common::annotation::AnnotationTree;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the Wit.ai `message` endpoint.
pub struct WitClient {
    http: Client,
    endpoint: String,
    api_version: String,
    token: String,
}

impl WitClient {
    pub fn new(config: &NluConfig, token: impl Into<String>) -> Result<Self, NluError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| NluError::Http(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_version: config.api_version.clone(),
            token: token.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NluClient for WitClient {
    async fn classify(&self, sentence: &str) -> Result<AnnotationTree, NluError> {
        let response = self
            .http
            .get(&self.endpoint)
            .bearer_auth(&self.token)
            .query(&[("v", self.api_version.as_str()), ("q", sentence)])
            .send()
            .await
            .map_err(|e| NluError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NluError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(NluError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let tree: AnnotationTree = serde_json::from_str(&body)?;
        debug!(entities = ?tree.entities.kinds().collect::<Vec<_>>(), "classified sentence");
        Ok(tree)
    }
}
