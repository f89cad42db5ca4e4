//! Statistics collected by every search engine.

use std::time::Duration;

use serde::Serialize;

/// Counters describing one search call.
///
/// `nodes_generated` increments once per successor produced, even for
/// successors that are immediately discarded as invalid or duplicate.
/// `nodes_expanded` increments once per node popped from the frontier and
/// considered for expansion. `max_frontier_size` is the high-water mark of
/// the frontier over the whole call.
///
/// The depth and cost fields stay `None` when no solution was found.
/// `runtime` and `heuristic_name` are populated by the best-first engine
/// only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    pub nodes_generated: u64,
    pub nodes_expanded: u64,
    pub max_frontier_size: usize,
    pub solution_depth: Option<usize>,
    pub solution_cost: Option<f64>,
    pub runtime: Option<Duration>,
    pub heuristic_name: Option<String>,
}

impl SearchStats {
    /// Folds the counters of one iteration into an accumulator, as IDS does
    /// across its depth-limited passes. Depth and cost are not merged; the
    /// caller takes them from the successful iteration.
    pub fn absorb(&mut self, other: &SearchStats) {
        self.nodes_generated += other.nodes_generated;
        self.nodes_expanded += other.nodes_expanded;
        self.max_frontier_size = self.max_frontier_size.max(other.max_frontier_size);
    }
}

/// The outcome of one search call: the reconstructed path if a goal was
/// reached (`None` on exhaustion, not an error), plus the statistics either
/// way.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S, A> {
    pub path: Option<crate::search::problem::Path<S, A>>,
    pub stats: SearchStats,
}

impl<S, A> SearchOutcome<S, A> {
    pub fn solved(&self) -> bool {
        self.path.is_some()
    }
}
