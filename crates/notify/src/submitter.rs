//! Delivers a task outcome to its webhook under a fixed retry policy.
//!
//! Delivery is at-least-once: if the endpoint accepts a request but the
//! response is lost, the next attempt posts the same body again. The
//! receiving endpoint is expected to tolerate duplicates.

use chrono::{DateTime, Utc};
use followgraph_core::TaskOutcome;
use tracing::{error, info};

use crate::retry::{retry_fixed, RetryPolicy};
use crate::traits::{Submission, SubmissionTransport, SubmitError};

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("failed to serialize outcome")]
    Serialize(#[from] serde_json::Error),

    #[error("delivery to {url} failed after {attempts} attempt(s)")]
    Exhausted {
        url: String,
        attempts: u32,
        #[source]
        last: SubmitError,
    },
}

/// What a successful delivery looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub attempts: u32,
    pub status: u16,
    pub delivered_at: DateTime<Utc>,
}

pub struct ResilientSubmitter {
    transport: Box<dyn SubmissionTransport>,
    policy: RetryPolicy,
}

impl ResilientSubmitter {
    pub fn new(transport: Box<dyn SubmissionTransport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Serialize `outcome` and post it to `url`, retrying any failure.
    pub async fn submit(
        &self,
        url: &str,
        access_token: &str,
        outcome: &TaskOutcome,
    ) -> Result<DeliveryReport, DeliveryError> {
        let submission = Submission {
            url: url.to_string(),
            access_token: access_token.to_string(),
            body: serde_json::to_string(outcome)?,
        };

        info!(
            url,
            channel = self.transport.channel_name(),
            max_attempts = self.policy.max_attempts,
            "submitting outcome"
        );

        let result = retry_fixed(self.policy, |attempt| {
            let submission = &submission;
            async move {
                tracing::debug!(attempt, "posting outcome");
                self.transport.post(submission).await
            }
        })
        .await;

        match result {
            Ok((status, attempts)) => {
                info!(url, status, attempts, "outcome delivered");
                Ok(DeliveryReport {
                    attempts,
                    status,
                    delivered_at: Utc::now(),
                })
            }
            Err(exhausted) => {
                error!(
                    url,
                    attempts = exhausted.attempts,
                    error = %exhausted.last,
                    "giving up on outcome delivery"
                );
                Err(DeliveryError::Exhausted {
                    url: url.to_string(),
                    attempts: exhausted.attempts,
                    last: exhausted.last,
                })
            }
        }
    }
}
