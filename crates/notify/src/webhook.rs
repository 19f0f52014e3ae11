//! HTTP transport for posting outcomes to a task webhook.

use std::time::Duration;

use crate::traits::{Submission, SubmissionTransport, SubmitError};

/// Posts JSON bodies with the task's access token in `Authorization`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Shared HTTP client (connection pooling).
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl SubmissionTransport for HttpTransport {
    async fn post(&self, submission: &Submission) -> Result<u16, SubmitError> {
        let response = self
            .client
            .post(&submission.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::AUTHORIZATION, submission.access_token.as_str())
            .body(submission.body.clone())
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(
                url = %submission.url,
                %status,
                body = %body_text,
                "webhook returned non-2xx status"
            );
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body: body_text,
            });
        }

        tracing::debug!(url = %submission.url, %status, "webhook accepted submission");
        Ok(status.as_u16())
    }

    fn channel_name(&self) -> &str {
        "http"
    }
}
