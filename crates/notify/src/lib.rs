//! Result delivery for solved tasks.
//!
//! This crate provides:
//! - `SubmissionTransport` trait for the HTTP POST to a task's webhook
//! - `HttpTransport`, the reqwest implementation
//! - `retry_fixed`, a fixed-delay retry combinator
//! - `ResilientSubmitter`, which serializes an outcome and delivers it under a retry policy

pub mod retry;
pub mod submitter;
pub mod traits;
pub mod webhook;

pub use retry::{retry_fixed, RetryExhausted, RetryPolicy};
pub use submitter::{DeliveryError, DeliveryReport, ResilientSubmitter};
pub use traits::{SubmissionTransport, SubmitError, Submission};
pub use webhook::HttpTransport;
