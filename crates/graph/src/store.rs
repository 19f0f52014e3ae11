use std::collections::hash_map::Entry;
use std::collections::HashMap;

use followgraph_core::UserId;
use serde::Serialize;

use crate::error::MalformedInputError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    /// Ids this user follows, in payload order. May reference unknown users.
    pub follows: Vec<UserId>,
}

impl User {
    pub fn new(id: UserId, follows: Vec<UserId>) -> Self {
        Self {
            id,
            name: None,
            follows,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub user_count: usize,
    pub edge_count: usize,
    /// Follow entries that point at ids missing from the graph.
    pub dangling_follows: usize,
}

/// Canonical user/follows graph for one task. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    users: HashMap<UserId, User>,
}

impl Graph {
    /// Build a graph, rejecting payloads that repeat a user id.
    pub fn from_users(users: Vec<User>) -> Result<Self, MalformedInputError> {
        let mut map = HashMap::with_capacity(users.len());
        for user in users {
            match map.entry(user.id) {
                Entry::Occupied(_) => return Err(MalformedInputError::DuplicateUser(user.id)),
                Entry::Vacant(slot) => {
                    slot.insert(user);
                }
            }
        }
        Ok(Self { users: map })
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    /// Outgoing edges of `id`; empty for unknown users.
    pub fn follows(&self, id: UserId) -> &[UserId] {
        self.users.get(&id).map_or(&[], |u| u.follows.as_slice())
    }

    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn stats(&self) -> GraphStats {
        let mut edge_count = 0;
        let mut dangling_follows = 0;
        for user in self.users.values() {
            edge_count += user.follows.len();
            dangling_follows += user
                .follows
                .iter()
                .filter(|id| !self.users.contains_key(id))
                .count();
        }

        GraphStats {
            user_count: self.users.len(),
            edge_count,
            dangling_follows,
        }
    }
}
