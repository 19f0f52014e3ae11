use std::collections::{HashMap, VecDeque};

use followgraph_core::{LevelQuery, UserId};
use followgraph_graph::Graph;

/// Users exactly `query.n` follow-hops away from `query.start_id`.
///
/// Plain BFS along follows edges. A node's level is its shortest distance
/// from the start; nodes at level `n` or deeper are not expanded. Ids with
/// no entry in the graph can be reached but have no outgoing edges.
/// Result is sorted ascending.
pub fn nth_level_followers(graph: &Graph, query: LevelQuery) -> Vec<UserId> {
    let levels = bfs_levels(graph, query);

    let mut result: Vec<UserId> = levels
        .into_iter()
        .filter(|&(_, level)| level == query.n)
        .map(|(id, _)| id)
        .collect();
    result.sort_unstable();
    result
}

/// Shortest level of every node reached before the cutoff.
fn bfs_levels(graph: &Graph, query: LevelQuery) -> HashMap<UserId, i64> {
    let mut levels = HashMap::new();
    let mut queue = VecDeque::new();

    levels.insert(query.start_id, 0);
    queue.push_back((query.start_id, 0));

    while let Some((current, level)) = queue.pop_front() {
        if level >= query.n {
            continue;
        }

        for &next in graph.follows(current) {
            if !levels.contains_key(&next) {
                levels.insert(next, level + 1);
                queue.push_back((next, level + 1));
            }
        }
    }

    levels
}
