//! Transport trait definition and shared error types.

/// Errors from a single submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// One request to deliver: target, credential and JSON body.
#[derive(Clone)]
pub struct Submission {
    pub url: String,
    pub access_token: String,
    pub body: String,
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("url", &self.url)
            .field("access_token", &"<redacted>")
            .field("body", &self.body)
            .finish()
    }
}

/// Performs exactly one POST per call.
#[async_trait::async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Send the submission. Returns the status code on success; any
    /// non-success status is an error.
    async fn post(&self, submission: &Submission) -> Result<u16, SubmitError>;

    /// Human-readable name for this transport (e.g., "http").
    fn channel_name(&self) -> &str;
}
