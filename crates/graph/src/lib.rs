//! Canonical user/follows graph built from task payloads.

pub mod error;
pub mod payload;
pub mod store;

pub use error::MalformedInputError;
pub use payload::TaskPayload;
pub use store::{Graph, GraphStats, User};
