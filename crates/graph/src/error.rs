use followgraph_core::UserId;
use thiserror::Error;

/// The task payload does not describe a usable follows graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    #[error("task payload is not a JSON object")]
    NotAnObject,

    #[error("task payload has no `users` collection")]
    MissingUsers,

    #[error("unsupported `users` shape: {0}")]
    UnsupportedShape(String),

    #[error("user #{index}: {reason}")]
    InvalidUser { index: usize, reason: String },

    #[error("duplicate user id {0}")]
    DuplicateUser(UserId),

    #[error("missing or non-integer query field `{0}`")]
    InvalidQueryField(&'static str),
}
