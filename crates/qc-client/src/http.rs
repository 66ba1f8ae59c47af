//! Reqwest-backed transport for a live vrtrack REST service.

use async_trait::async_trait;
use serde_json::Value;

use crate::{QcRest, QcRestError};

/// POSTs `args` as JSON to `{base_url}/rest/{domain}/{method}` and decodes
/// the JSON body.
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl QcRest for HttpClient {
    async fn call(&self, domain: &str, method: &str, args: &Value) -> Result<Value, QcRestError> {
        let url = format!("{}/rest/{}/{}", self.base_url, domain, method);
        tracing::debug!(%url, "rest call");

        let response = self
            .client
            .post(&url)
            .json(args)
            .send()
            .await
            .map_err(|e| QcRestError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QcRestError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| QcRestError::Decode(e.to_string()))
    }
}
