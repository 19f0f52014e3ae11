use std::collections::{BTreeMap, HashMap};

use followgraph_compute::{mutual_followers, nth_level_followers, ComputeEngine};
use followgraph_core::{LevelQuery, MutualPair, Outcome, Problem, UserId};
use followgraph_graph::{Graph, User};
use proptest::prelude::*;
use serde_json::json;

/// Ids a generated follows list may point at. Wider than the id range so
/// some follows dangle.
const ID_SPACE: UserId = 16;

fn follows_map() -> impl Strategy<Value = BTreeMap<UserId, Vec<UserId>>> {
    prop::collection::btree_map(0..12i64, prop::collection::vec(0..ID_SPACE, 0..6), 0..12)
}

fn build(users: &BTreeMap<UserId, Vec<UserId>>) -> Graph {
    Graph::from_users(
        users
            .iter()
            .map(|(&id, follows)| User::new(id, follows.clone()))
            .collect(),
    )
    .unwrap()
}

/// Shortest hop count from `start`, found by relaxing every edge until
/// nothing changes.
fn reference_distances(users: &BTreeMap<UserId, Vec<UserId>>, start: UserId) -> HashMap<UserId, i64> {
    let mut dist = HashMap::from([(start, 0i64)]);
    loop {
        let mut changed = false;
        for (&from, follows) in users {
            let Some(&d) = dist.get(&from) else { continue };
            for &to in follows {
                if dist.get(&to).map_or(true, |&cur| d + 1 < cur) {
                    dist.insert(to, d + 1);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

proptest! {
    #[test]
    fn pair_reported_iff_both_follow(users in follows_map()) {
        let graph = build(&users);
        let pairs = mutual_followers(&graph);

        for a in 0..ID_SPACE {
            for b in (a + 1)..ID_SPACE {
                let both = graph.follows(a).contains(&b) && graph.follows(b).contains(&a);
                prop_assert_eq!(pairs.contains(&MutualPair(a, b)), both, "pair ({}, {})", a, b);
            }
        }
    }

    #[test]
    fn pairs_strictly_ascending(users in follows_map()) {
        let pairs = mutual_followers(&build(&users));
        prop_assert!(pairs.iter().all(|p| p.0 < p.1));
        prop_assert!(pairs.windows(2).all(|w| w[0] < w[1]), "not strictly sorted: {:?}", pairs);
    }

    #[test]
    fn nth_level_matches_shortest_distance(
        users in follows_map(),
        n in 0..5i64,
        start_id in 0..ID_SPACE,
    ) {
        let graph = build(&users);
        let mut expected: Vec<UserId> = reference_distances(&users, start_id)
            .into_iter()
            .filter(|&(_, d)| d == n)
            .map(|(id, _)| id)
            .collect();
        expected.sort_unstable();

        prop_assert_eq!(nth_level_followers(&graph, LevelQuery { n, start_id }), expected);
    }

    #[test]
    fn levels_are_disjoint(users in follows_map(), start_id in 0..ID_SPACE) {
        let graph = build(&users);
        let mut seen = HashMap::new();
        for n in 0..6i64 {
            for id in nth_level_followers(&graph, LevelQuery { n, start_id }) {
                if let Some(prev) = seen.insert(id, n) {
                    prop_assert!(false, "{} reported at levels {} and {}", id, prev, n);
                }
            }
        }
    }

    #[test]
    fn negative_level_is_always_empty(
        users in follows_map(),
        n in -5..0i64,
        start_id in 0..ID_SPACE,
    ) {
        let query = LevelQuery { n, start_id };
        prop_assert!(nth_level_followers(&build(&users), query).is_empty());
    }

    #[test]
    fn solvers_are_idempotent(users in follows_map(), n in 0..5i64, start_id in 0..ID_SPACE) {
        let graph = build(&users);
        let query = LevelQuery { n, start_id };
        prop_assert_eq!(mutual_followers(&graph), mutual_followers(&graph));
        prop_assert_eq!(nth_level_followers(&graph, query), nth_level_followers(&graph, query));
    }

    #[test]
    fn flat_and_nested_payloads_agree(users in follows_map(), n in 0..5i64, start_id in 0..ID_SPACE) {
        let entries: Vec<_> = users
            .iter()
            .map(|(id, follows)| json!({ "id": id, "name": format!("user-{id}"), "follows": follows }))
            .collect();
        let flat = json!({ "users": entries, "n": n, "findId": start_id });
        let nested = json!({ "users": { "users": entries, "n": n, "findId": start_id } });

        for problem in [Problem::MutualFollowers, Problem::NthLevelFollowers] {
            let from_flat = ComputeEngine::solve(problem, &flat).unwrap();
            let from_nested = ComputeEngine::solve(problem, &nested).unwrap();
            prop_assert_eq!(&from_flat, &from_nested);
        }

        let graph = build(&users);
        prop_assert_eq!(
            ComputeEngine::solve(Problem::MutualFollowers, &flat).unwrap(),
            Outcome::MutualPairs(mutual_followers(&graph))
        );
    }
}
