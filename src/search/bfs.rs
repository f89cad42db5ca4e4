//! Breadth-first graph search.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::{
    error::Result,
    search::{
        node::NodeArena,
        problem::{path_cost, SearchProblem},
        stats::{SearchOutcome, SearchStats},
    },
};

/// Breadth-first graph search over `problem`.
///
/// Returns the shortest path by *edge count* (not cost) to any goal state,
/// or an outcome with `path: None` if the reachable space contains no goal.
/// The frontier is a FIFO queue; a state already explored or already waiting
/// in the frontier is never re-enqueued, so each state is expanded at most
/// once. The cost of the returned path is the sum of edge costs along it,
/// reported even though BFS does not optimize for it.
pub fn bfs<P: SearchProblem>(problem: &P) -> Result<SearchOutcome<P::State, P::Action>> {
    let mut stats = SearchStats::default();
    let mut arena = NodeArena::new();

    let start = problem.start();
    let root = arena.push(start.clone(), None, None, 0);

    let mut frontier = VecDeque::from([root]);
    let mut in_frontier: HashSet<P::State> = HashSet::from([start]);
    let mut explored: HashSet<P::State> = HashSet::new();
    stats.max_frontier_size = stats.max_frontier_size.max(frontier.len());

    while let Some(node_id) = frontier.pop_front() {
        let state = arena.get(node_id).state.clone();
        let depth = arena.get(node_id).depth;
        // Graph-search semantics: the popped state joins the explored set
        // right after the pop, not when it was generated.
        in_frontier.remove(&state);
        explored.insert(state.clone());

        if problem.is_goal(&state) {
            let path = arena.path_to_root(node_id);
            stats.solution_depth = Some(path.len() - 1);
            stats.solution_cost = Some(path_cost(problem, &path));
            debug!(depth = path.len() - 1, "bfs reached a goal");
            return Ok(SearchOutcome {
                path: Some(path),
                stats,
            });
        }
        stats.nodes_expanded += 1;

        for action in problem.actions(&state) {
            let child = problem.transition(&state, &action)?;
            stats.nodes_generated += 1;
            if !problem.is_valid(&child) {
                continue;
            }
            if explored.contains(&child) || in_frontier.contains(&child) {
                continue;
            }
            in_frontier.insert(child.clone());
            let child_id = arena.push(child, Some(action), Some(node_id), depth + 1);
            frontier.push_back(child_id);
            stats.max_frontier_size = stats.max_frontier_size.max(frontier.len());
        }
    }

    debug!(
        expanded = stats.nodes_expanded,
        "bfs exhausted the space without reaching a goal"
    );
    Ok(SearchOutcome { path: None, stats })
}
