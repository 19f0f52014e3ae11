//! Decode task payloads into a [`Graph`].
//!
//! The task service is not consistent about where it puts the users list.
//! Both of these are accepted:
//!
//! - flat: `{ "users": [ ... ], "n": 2, "findId": 1 }`
//! - nested: `{ "users": { "users": [ ... ], "n": 2, "findId": 1 } }`
//!
//! For the nested shape, `n` and `findId` are looked up next to the inner
//! list first and then at the top level.

use followgraph_core::{LevelQuery, UserId};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::MalformedInputError;
use crate::store::{Graph, User};

type Object = Map<String, Value>;

/// Where the users list was found.
#[derive(Debug, Clone, Copy)]
enum PayloadShape<'a> {
    Flat {
        root: &'a Object,
        users: &'a [Value],
    },
    Nested {
        root: &'a Object,
        inner: &'a Object,
        users: &'a [Value],
    },
}

/// A task payload whose users collection has been located.
#[derive(Debug, Clone, Copy)]
pub struct TaskPayload<'a> {
    shape: PayloadShape<'a>,
}

impl<'a> TaskPayload<'a> {
    /// Locate the users list. Fails when the payload matches neither shape.
    pub fn parse(data: &'a Value) -> Result<Self, MalformedInputError> {
        let root = data.as_object().ok_or(MalformedInputError::NotAnObject)?;

        let shape = match root.get("users") {
            None | Some(Value::Null) => return Err(MalformedInputError::MissingUsers),
            Some(Value::Array(users)) => PayloadShape::Flat { root, users },
            Some(Value::Object(inner)) => match inner.get("users") {
                Some(Value::Array(users)) => PayloadShape::Nested { root, inner, users },
                Some(other) => {
                    return Err(MalformedInputError::UnsupportedShape(format!(
                        "users.users is {}, expected an array",
                        json_type(other)
                    )))
                }
                None => {
                    return Err(MalformedInputError::UnsupportedShape(
                        "users object without a nested users array".to_string(),
                    ))
                }
            },
            Some(other) => {
                return Err(MalformedInputError::UnsupportedShape(format!(
                    "users is {}, expected an array or object",
                    json_type(other)
                )))
            }
        };

        let payload = Self { shape };
        debug!(
            shape = payload.shape_name(),
            users = payload.entries().len(),
            "task payload located"
        );
        Ok(payload)
    }

    pub fn shape_name(&self) -> &'static str {
        match self.shape {
            PayloadShape::Flat { .. } => "flat",
            PayloadShape::Nested { .. } => "nested",
        }
    }

    /// Decode every user entry and build the graph.
    pub fn build_graph(&self) -> Result<Graph, MalformedInputError> {
        let users = self
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| decode_user(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        Graph::from_users(users)
    }

    fn entries(&self) -> &'a [Value] {
        match self.shape {
            PayloadShape::Flat { users, .. } | PayloadShape::Nested { users, .. } => users,
        }
    }

    /// Read the `n` / `findId` pair for a nth-level query.
    pub fn level_query(&self) -> Result<LevelQuery, MalformedInputError> {
        Ok(LevelQuery {
            n: self.query_field("n")?,
            start_id: self.query_field("findId")?,
        })
    }

    fn query_field(&self, key: &'static str) -> Result<i64, MalformedInputError> {
        let value = match self.shape {
            PayloadShape::Flat { root, .. } => root.get(key),
            PayloadShape::Nested { root, inner, .. } => inner.get(key).or_else(|| root.get(key)),
        };
        value
            .and_then(Value::as_i64)
            .ok_or(MalformedInputError::InvalidQueryField(key))
    }
}

fn decode_user(index: usize, entry: &Value) -> Result<User, MalformedInputError> {
    let invalid = |reason: String| MalformedInputError::InvalidUser { index, reason };

    let obj = entry
        .as_object()
        .ok_or_else(|| invalid(format!("expected an object, got {}", json_type(entry))))?;

    let id = match obj.get("id") {
        Some(v) => v
            .as_i64()
            .ok_or_else(|| invalid(format!("`id` is {}, expected an integer", json_type(v))))?,
        None => return Err(invalid("missing `id`".to_string())),
    };

    let follows = match obj.get("follows") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| v.as_i64())
            .collect::<Option<Vec<UserId>>>()
            .ok_or_else(|| invalid(format!("user {id}: `follows` must contain only integers")))?,
        Some(other) => {
            return Err(invalid(format!(
                "user {id}: `follows` is {}, expected an array",
                json_type(other)
            )))
        }
    };

    let name = obj.get("name").and_then(Value::as_str).map(str::to_string);

    Ok(User { id, name, follows })
}

fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
