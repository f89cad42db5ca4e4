//! The contract every searchable domain must satisfy.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;

/// A search problem over an explicitly enumerable, finite state space.
///
/// Implementors describe one domain (river crossing, water jugs, sliding
/// tiles, ...) purely declaratively: which moves are legal, what they do,
/// what counts as a goal, and what each move costs. All algorithmic content
/// lives in the engines, which treat the problem as read-only.
///
/// States must compare and hash *structurally*: the engines use them as
/// set and map keys to detect repetition, so two states describing the same
/// configuration must be equal.
pub trait SearchProblem {
    /// One immutable configuration of the domain.
    type State: Clone + Eq + Hash + Debug;
    /// An opaque label for one legal move. Carries no behavior itself.
    type Action: Clone + Eq + Hash + Debug;

    /// The state every search starts from.
    fn start(&self) -> Self::State;

    /// All moves legal from `state`. Must be finite; the order affects
    /// tie-breaking among equally good solutions, never correctness.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The deterministic successor of `state` under `action`.
    ///
    /// Fails with [`SearchError::InvalidAction`] if `action` is not currently
    /// legal. Engines draw actions from [`SearchProblem::actions`] before
    /// applying them, so they never hit this case.
    ///
    /// [`SearchError::InvalidAction`]: crate::error::SearchError::InvalidAction
    fn transition(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// The non-negative cost of one edge. Defaults to unit cost. Cost
    /// functions are total: they must never fail, even on degenerate input.
    fn cost(&self, _state: &Self::State, _action: &Self::Action, _next: &Self::State) -> f64 {
        1.0
    }

    /// Structural validity filter. Engines call this on every generated
    /// successor and silently discard invalid ones before enqueuing.
    fn is_valid(&self, _state: &Self::State) -> bool {
        true
    }

    /// Presentation-only rendering of a state. Never consumed by the
    /// engines. May span multiple lines; the report layer compacts it.
    fn format_state(&self, state: &Self::State) -> String {
        format!("{state:?}")
    }
}

/// One step of a solution path: the state reached, and the action that
/// reached it (`None` for the start state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep<S, A> {
    pub state: S,
    pub action: Option<A>,
}

/// An ordered solution path from start (action = `None`) to goal.
pub type Path<S, A> = Vec<PathStep<S, A>>;

/// Sums the edge costs along `path` using the problem's cost function.
///
/// BFS and IDS do not optimize for cost, but still report it for the path
/// they return.
pub fn path_cost<P: SearchProblem>(problem: &P, path: &Path<P::State, P::Action>) -> f64 {
    let mut total = 0.0;
    for pair in path.windows(2) {
        if let Some(action) = &pair[1].action {
            total += problem.cost(&pair[0].state, action, &pair[1].state);
        }
    }
    total
}
