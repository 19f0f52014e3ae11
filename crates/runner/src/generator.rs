//! Task generation client.
//!
//! Asks the task service for a work item. A failure here ends the run;
//! this call is never retried.

use std::time::Duration;

use followgraph_core::{GenerateRequest, TaskDescriptor};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generate endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid task descriptor: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of task descriptors.
#[async_trait::async_trait]
pub trait TaskSource: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<TaskDescriptor, GenerateError>;
}

/// Fetches descriptors with `POST {base_url}/generateWebhook`.
pub struct HttpTaskSource {
    url: String,
    http: reqwest::Client,
}

impl HttpTaskSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, GenerateError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            http,
        })
    }
}

#[async_trait::async_trait]
impl TaskSource for HttpTaskSource {
    async fn generate(&self, request: &GenerateRequest) -> Result<TaskDescriptor, GenerateError> {
        info!(url = %self.url, reg_no = %request.reg_no, "requesting task");

        let resp = self.http.post(&self.url).json(request).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let descriptor: TaskDescriptor = serde_json::from_str(&text)?;
        debug!(data = %descriptor.data, "task payload");
        info!(webhook = %descriptor.webhook, "task received");
        Ok(descriptor)
    }
}
