use followgraph_graph::MalformedInputError;
use followgraph_notify::DeliveryError;
use thiserror::Error;

use crate::generator::GenerateError;
use crate::selector::SelectorError;

/// Selecting or running a solver failed. Never retried.
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("cannot select a problem")]
    Selector(#[from] SelectorError),

    #[error("malformed task payload")]
    MalformedInput(#[from] MalformedInputError),
}

/// Terminal failure of a run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("task generation failed")]
    Generation(#[source] GenerateError),

    #[error("task processing failed")]
    Processing(#[from] ProcessingError),

    #[error("result delivery failed")]
    Delivery(#[from] DeliveryError),
}
