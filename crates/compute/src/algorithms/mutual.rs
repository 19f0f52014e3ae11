use std::collections::{HashMap, HashSet};

use followgraph_core::{MutualPair, UserId};
use followgraph_graph::Graph;

/// Find every pair of users that follow each other.
///
/// Pairs are reported once with the smaller id first, sorted ascending by
/// `(first, second)`. Follows that point outside the graph and self-follows
/// never produce a pair.
pub fn mutual_followers(graph: &Graph) -> Vec<MutualPair> {
    let follow_sets: HashMap<UserId, HashSet<UserId>> = graph
        .users()
        .map(|u| (u.id, u.follows.iter().copied().collect()))
        .collect();

    let mut pairs = HashSet::new();
    for user in graph.users() {
        for &followed in &user.follows {
            if followed == user.id {
                continue;
            }
            let follows_back = follow_sets
                .get(&followed)
                .is_some_and(|back| back.contains(&user.id));
            if follows_back {
                pairs.insert(MutualPair::new(user.id, followed));
            }
        }
    }

    let mut result: Vec<MutualPair> = pairs.into_iter().collect();
    result.sort_unstable();
    result
}
