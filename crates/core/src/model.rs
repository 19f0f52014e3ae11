use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type UserId = i64;

/// Body sent to the task generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub name: String,
    pub reg_no: String,
    pub email: String,
}

/// Work item handed out by the task generation endpoint.
///
/// `data` stays untyped here; the graph crate owns decoding it.
/// Unknown response fields are ignored.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptor {
    pub webhook: String,
    pub access_token: String,
    #[serde(default)]
    pub data: Value,
}

impl std::fmt::Debug for TaskDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskDescriptor")
            .field("webhook", &self.webhook)
            .field("access_token", &"<redacted>")
            .field("data", &self.data)
            .finish()
    }
}

/// Which of the two graph queries a run answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Problem {
    MutualFollowers,
    NthLevelFollowers,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::MutualFollowers => write!(f, "MutualFollowers"),
            Problem::NthLevelFollowers => write!(f, "NthLevelFollowers"),
        }
    }
}

/// Two users that follow each other, stored with the smaller id first.
///
/// Serializes as a two-element array `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MutualPair(pub UserId, pub UserId);

impl MutualPair {
    /// Build a pair from two ids in any order.
    pub fn new(a: UserId, b: UserId) -> Self {
        Self(a.min(b), a.max(b))
    }
}

/// Parameters of a nth-level follower query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelQuery {
    /// Exact hop count to report. Negative values match nothing.
    pub n: i64,
    #[serde(rename = "findId")]
    pub start_id: UserId,
}

/// Solver result as it goes over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    MutualPairs(Vec<MutualPair>),
    NthLevel(Vec<UserId>),
}

impl Outcome {
    pub fn len(&self) -> usize {
        match self {
            Outcome::MutualPairs(pairs) => pairs.len(),
            Outcome::NthLevel(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The payload posted back to the task's webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutcome {
    pub reg_no: String,
    pub outcome: Outcome,
}
