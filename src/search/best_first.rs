//! Best-first search: A* and its uniform-cost specialization.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use tracing::debug;

use crate::{
    error::Result,
    search::{
        problem::{Path, PathStep, SearchProblem},
        stats::{SearchOutcome, SearchStats},
    },
};

/// A frontier entry ordered by `(f, g, insertion sequence)`.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop
/// the lowest `f` first. The insertion sequence is a monotonically
/// increasing counter that breaks ties between equal-`f` entries
/// deterministically: first inserted wins. Costs are compared with
/// `f64::total_cmp`, which gives a total order.
#[derive(Debug)]
struct FrontierEntry<S> {
    f: f64,
    g: f64,
    seq: u64,
    state: S,
}

impl<S> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl<S> Eq for FrontierEntry<S> {}

impl<S> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.g.total_cmp(&other.g))
            .then(self.seq.cmp(&other.seq))
    }
}

/// A* graph search from `start` to any state satisfying `goal_test`.
///
/// `successors` enumerates `(next_state, action, step_cost)` triples and
/// `h` estimates the remaining cost from a state. With an admissible `h`
/// (never overestimating), the returned path is of minimum total cost.
///
/// A state may be pushed onto the frontier multiple times as cheaper routes
/// to it are discovered (reopening); stale entries (a popped `g` worse than
/// the best known, or a state already closed) are discarded unexpanded, so
/// every state is expanded at most once, at its lowest known `g`.
///
/// Returns a populated path on success, or `path: None` with the
/// accumulated counters if the frontier empties first. Wall-clock runtime
/// and `heuristic_name` are recorded in the statistics either way.
pub fn astar<S, A, G, N, H>(
    start: S,
    goal_test: G,
    successors: N,
    h: H,
    heuristic_name: &str,
) -> Result<SearchOutcome<S, A>>
where
    S: Clone + Eq + Hash + Debug,
    A: Clone,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Result<Vec<(S, A, f64)>>,
    H: Fn(&S) -> f64,
{
    let started = Instant::now();
    let mut stats = SearchStats {
        heuristic_name: Some(heuristic_name.to_owned()),
        ..SearchStats::default()
    };

    let mut frontier: BinaryHeap<Reverse<FrontierEntry<S>>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry {
        f: h(&start),
        g: 0.0,
        seq: 0,
        state: start.clone(),
    }));

    // Lowest g at which each state has been enqueued, and the edge that
    // achieved it. Reopening overwrites both.
    let mut best_g: HashMap<S, f64> = HashMap::from([(start.clone(), 0.0)]);
    let mut parent: HashMap<S, Option<(S, A)>> = HashMap::from([(start, None)]);
    let mut closed: HashSet<S> = HashSet::new();
    let mut seq: u64 = 1;
    stats.nodes_generated = 1;

    loop {
        stats.max_frontier_size = stats.max_frontier_size.max(frontier.len());
        let Some(Reverse(entry)) = frontier.pop() else {
            break;
        };

        // Stale entries: a cheaper route to this state has been enqueued
        // since, or the state was already expanded.
        if best_g.get(&entry.state).is_some_and(|&best| entry.g > best) {
            continue;
        }
        if closed.contains(&entry.state) {
            continue;
        }

        closed.insert(entry.state.clone());
        stats.nodes_expanded += 1;

        if goal_test(&entry.state) {
            let path = reconstruct(&parent, &entry.state);
            stats.solution_depth = Some(path.len() - 1);
            stats.solution_cost = Some(entry.g);
            stats.runtime = Some(started.elapsed());
            debug!(
                cost = entry.g,
                expanded = stats.nodes_expanded,
                "best-first search reached a goal"
            );
            return Ok(SearchOutcome {
                path: Some(path),
                stats,
            });
        }

        for (next, action, step_cost) in successors(&entry.state)? {
            stats.nodes_generated += 1;
            let g2 = entry.g + step_cost;
            let improves = best_g.get(&next).map_or(true, |&best| g2 < best);
            if improves {
                best_g.insert(next.clone(), g2);
                parent.insert(next.clone(), Some((entry.state.clone(), action)));
                let f2 = g2 + h(&next);
                frontier.push(Reverse(FrontierEntry {
                    f: f2,
                    g: g2,
                    seq,
                    state: next,
                }));
                seq += 1;
            }
        }
    }

    stats.runtime = Some(started.elapsed());
    Ok(SearchOutcome { path: None, stats })
}

/// Uniform-cost search: A* with the zero heuristic.
pub fn ucs<S, A, G, N>(start: S, goal_test: G, successors: N) -> Result<SearchOutcome<S, A>>
where
    S: Clone + Eq + Hash + Debug,
    A: Clone,
    G: Fn(&S) -> bool,
    N: Fn(&S) -> Result<Vec<(S, A, f64)>>,
{
    astar(start, goal_test, successors, |_| 0.0, "ucs")
}

/// Runs A* against a [`SearchProblem`], deriving the successor generator
/// from its actions, transitions, validity filter and cost function.
pub fn astar_problem<P, H>(
    problem: &P,
    h: H,
    heuristic_name: &str,
) -> Result<SearchOutcome<P::State, P::Action>>
where
    P: SearchProblem,
    H: Fn(&P::State) -> f64,
{
    astar(
        problem.start(),
        |state| problem.is_goal(state),
        |state| problem_successors(problem, state),
        h,
        heuristic_name,
    )
}

/// Runs uniform-cost search against a [`SearchProblem`].
pub fn ucs_problem<P: SearchProblem>(problem: &P) -> Result<SearchOutcome<P::State, P::Action>> {
    astar_problem(problem, |_| 0.0, "ucs")
}

fn problem_successors<P: SearchProblem>(
    problem: &P,
    state: &P::State,
) -> Result<Vec<(P::State, P::Action, f64)>> {
    let mut out = Vec::new();
    for action in problem.actions(state) {
        let next = problem.transition(state, &action)?;
        if !problem.is_valid(&next) {
            continue;
        }
        let step_cost = problem.cost(state, &action, &next);
        out.push((next, action, step_cost));
    }
    Ok(out)
}

/// Follows the parent map backwards from `goal` and reverses.
fn reconstruct<S, A>(parent: &HashMap<S, Option<(S, A)>>, goal: &S) -> Path<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone,
{
    let mut path = Vec::new();
    let mut cursor = Some(goal.clone());
    while let Some(state) = cursor {
        let link = parent.get(&state).cloned().flatten();
        match link {
            Some((prev, action)) => {
                path.push(PathStep {
                    state,
                    action: Some(action),
                });
                cursor = Some(prev);
            }
            None => {
                path.push(PathStep {
                    state,
                    action: None,
                });
                cursor = None;
            }
        }
    }
    path.reverse();
    path
}
