use followgraph_core::{Outcome, Problem};
use followgraph_graph::{MalformedInputError, TaskPayload};
use serde_json::Value;
use tracing::{debug, info};

use crate::algorithms::{mutual, nth_level};

/// Decodes a task payload and runs the requested query against it.
pub struct ComputeEngine;

impl ComputeEngine {
    /// Build the graph for `data` and answer `problem`.
    ///
    /// The graph lives only for the duration of this call.
    pub fn solve(problem: Problem, data: &Value) -> Result<Outcome, MalformedInputError> {
        let start = std::time::Instant::now();

        let payload = TaskPayload::parse(data)?;
        let graph = payload.build_graph()?;
        let stats = graph.stats();
        debug!(
            shape = payload.shape_name(),
            users = stats.user_count,
            edges = stats.edge_count,
            dangling = stats.dangling_follows,
            "graph built"
        );

        let outcome = match problem {
            Problem::MutualFollowers => Outcome::MutualPairs(mutual::mutual_followers(&graph)),
            Problem::NthLevelFollowers => {
                let query = payload.level_query()?;
                debug!(n = query.n, start_id = query.start_id, "nth-level query");
                Outcome::NthLevel(nth_level::nth_level_followers(&graph, query))
            }
        };

        info!(
            %problem,
            results = outcome.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "problem solved"
        );
        Ok(outcome)
    }
}
