//! Depth-limited and iterative-deepening search.

use tracing::debug;

use crate::{
    error::Result,
    search::{
        node::NodeArena,
        problem::{path_cost, SearchProblem},
        stats::{SearchOutcome, SearchStats},
    },
};

/// Depth-first search that does not expand nodes at or beyond `limit`.
///
/// No explored set is kept within one pass: states may be revisited along
/// different branches, which classical iterative deepening accepts as the
/// price of its bounded memory. Children are pushed in reverse so the first
/// action listed by the problem is explored first.
pub fn depth_limited<P: SearchProblem>(
    problem: &P,
    limit: usize,
) -> Result<SearchOutcome<P::State, P::Action>> {
    let mut stats = SearchStats::default();
    let mut arena = NodeArena::new();

    let root = arena.push(problem.start(), None, None, 0);
    let mut stack = vec![root];
    stats.nodes_generated = 1;
    stats.max_frontier_size = stats.max_frontier_size.max(stack.len());

    while let Some(node_id) = stack.pop() {
        let state = arena.get(node_id).state.clone();
        let depth = arena.get(node_id).depth;
        stats.nodes_expanded += 1;

        if problem.is_goal(&state) {
            let path = arena.path_to_root(node_id);
            stats.solution_depth = Some(path.len() - 1);
            stats.solution_cost = Some(path_cost(problem, &path));
            return Ok(SearchOutcome {
                path: Some(path),
                stats,
            });
        }

        if depth >= limit {
            continue;
        }

        let mut children = Vec::new();
        for action in problem.actions(&state) {
            let child = problem.transition(&state, &action)?;
            stats.nodes_generated += 1;
            if !problem.is_valid(&child) {
                continue;
            }
            children.push(arena.push(child, Some(action), Some(node_id), depth + 1));
        }
        for child_id in children.into_iter().rev() {
            stack.push(child_id);
        }
        stats.max_frontier_size = stats.max_frontier_size.max(stack.len());
    }

    Ok(SearchOutcome { path: None, stats })
}

/// Iterative-deepening search: repeated depth-limited passes with cutoffs
/// `0, 1, 2, ..., max_limit`.
///
/// The first solution found is of minimum depth, matching BFS's answer with
/// a different space/time tradeoff. Statistics accumulate additively across
/// all passes; re-running the shallow levels is part of the algorithm and
/// its cost is counted. Returns `path: None` with the accumulated counters
/// if no goal is reached within `max_limit`.
pub fn ids<P: SearchProblem>(
    problem: &P,
    max_limit: usize,
) -> Result<SearchOutcome<P::State, P::Action>> {
    let mut accumulated = SearchStats::default();

    for limit in 0..=max_limit {
        let outcome = depth_limited(problem, limit)?;
        accumulated.absorb(&outcome.stats);
        debug!(
            limit,
            generated = outcome.stats.nodes_generated,
            solved = outcome.path.is_some(),
            "depth-limited pass finished"
        );
        if outcome.path.is_some() {
            accumulated.solution_depth = outcome.stats.solution_depth;
            accumulated.solution_cost = outcome.stats.solution_cost;
            return Ok(SearchOutcome {
                path: outcome.path,
                stats: accumulated,
            });
        }
    }

    Ok(SearchOutcome {
        path: None,
        stats: accumulated,
    })
}
