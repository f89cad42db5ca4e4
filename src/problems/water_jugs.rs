//! The water-jug pouring puzzle, generalized to any number of jugs.

use std::fmt;

use crate::{
    error::{Result, SearchError},
    search::problem::SearchProblem,
};

/// Current volume of every jug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JugState {
    pub volumes: Vec<u32>,
}

impl JugState {
    pub fn new(volumes: Vec<u32>) -> Self {
        Self { volumes }
    }
}

/// One pouring move, indexed by jug position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JugAction {
    /// Fill jug `i` to its capacity from the tap.
    Fill(usize),
    /// Empty jug `i` onto the ground.
    Empty(usize),
    /// Pour from one jug into another until the source empties or the
    /// destination fills.
    Pour { from: usize, to: usize },
}

impl fmt::Display for JugAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JugAction::Fill(i) => write!(f, "Fill jug {i}"),
            JugAction::Empty(i) => write!(f, "Empty jug {i}"),
            JugAction::Pour { from, to } => write!(f, "Pour jug {from} into jug {to}"),
        }
    }
}

/// Jugs of fixed capacities; the goal is any jug holding exactly `target`.
///
/// Fills and empties cost 1; pours cost the volume transferred, which makes
/// the domain a natural exercise for cost-sensitive search.
#[derive(Debug, Clone)]
pub struct WaterJugs {
    capacities: Vec<u32>,
    target: u32,
    start: JugState,
}

impl WaterJugs {
    /// All jugs start empty. Fails if there are no jugs or the target
    /// exceeds every capacity.
    pub fn new(capacities: Vec<u32>, target: u32) -> Result<Self> {
        let start = JugState::new(vec![0; capacities.len()]);
        Self::with_start(capacities, target, start)
    }

    pub fn with_start(capacities: Vec<u32>, target: u32, start: JugState) -> Result<Self> {
        if capacities.is_empty() {
            return Err(SearchError::MalformedInput("no jug capacities given".into()).into());
        }
        if capacities.iter().all(|&cap| cap < target) {
            return Err(SearchError::MalformedInput(format!(
                "target {target} exceeds every jug capacity"
            ))
            .into());
        }
        if start.volumes.len() != capacities.len() {
            return Err(SearchError::MalformedInput(format!(
                "start has {} volumes for {} jugs",
                start.volumes.len(),
                capacities.len()
            ))
            .into());
        }
        Ok(Self {
            capacities,
            target,
            start,
        })
    }

    pub fn capacities(&self) -> &[u32] {
        &self.capacities
    }

    fn transferable(&self, state: &JugState, from: usize, to: usize) -> u32 {
        state.volumes[from].min(self.capacities[to] - state.volumes[to])
    }
}

impl SearchProblem for WaterJugs {
    type State = JugState;
    type Action = JugAction;

    fn start(&self) -> JugState {
        self.start.clone()
    }

    fn actions(&self, state: &JugState) -> Vec<JugAction> {
        let n = self.capacities.len();
        let mut actions = Vec::new();
        for i in 0..n {
            if state.volumes[i] < self.capacities[i] {
                actions.push(JugAction::Fill(i));
            }
        }
        for i in 0..n {
            if state.volumes[i] > 0 {
                actions.push(JugAction::Empty(i));
            }
        }
        for from in 0..n {
            for to in 0..n {
                if from == to {
                    continue;
                }
                if state.volumes[from] > 0 && state.volumes[to] < self.capacities[to] {
                    actions.push(JugAction::Pour { from, to });
                }
            }
        }
        actions
    }

    fn transition(&self, state: &JugState, action: &JugAction) -> Result<JugState> {
        let bounds_ok = match *action {
            JugAction::Fill(i) | JugAction::Empty(i) => i < self.capacities.len(),
            JugAction::Pour { from, to } => {
                from < self.capacities.len() && to < self.capacities.len() && from != to
            }
        };
        if !bounds_ok {
            return Err(SearchError::InvalidAction {
                state: self.format_state(state),
                action: action.to_string(),
            }
            .into());
        }

        let mut volumes = state.volumes.clone();
        match *action {
            JugAction::Fill(i) => volumes[i] = self.capacities[i],
            JugAction::Empty(i) => volumes[i] = 0,
            JugAction::Pour { from, to } => {
                let amount = self.transferable(state, from, to);
                volumes[from] -= amount;
                volumes[to] += amount;
            }
        }
        Ok(JugState::new(volumes))
    }

    fn is_goal(&self, state: &JugState) -> bool {
        state.volumes.iter().any(|&v| v == self.target)
    }

    fn cost(&self, state: &JugState, action: &JugAction, _next: &JugState) -> f64 {
        match *action {
            // A pour costs the amount of water moved.
            JugAction::Pour { from, to } => f64::from(self.transferable(state, from, to)),
            _ => 1.0,
        }
    }

    fn is_valid(&self, state: &JugState) -> bool {
        state.volumes.len() == self.capacities.len()
            && state
                .volumes
                .iter()
                .zip(&self.capacities)
                .all(|(&volume, &cap)| volume <= cap)
    }

    fn format_state(&self, state: &JugState) -> String {
        let caps: Vec<String> = self.capacities.iter().map(u32::to_string).collect();
        let vols: Vec<String> = state.volumes.iter().map(u32::to_string).collect();
        format!(
            "capacities=({}) volumes=({})",
            caps.join(","),
            vols.join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{JugAction, JugState, WaterJugs};
    use crate::search::bfs::bfs;
    use crate::search::best_first::ucs_problem;
    use crate::search::problem::SearchProblem;

    #[test]
    fn classic_three_five_reaches_four() {
        let problem = WaterJugs::new(vec![3, 5], 4).unwrap();
        let outcome = bfs(&problem).unwrap();
        let path = outcome.path.expect("(3,5)->4 is solvable");
        let last = &path.last().unwrap().state;
        assert!(last.volumes.contains(&4));
    }

    #[test]
    fn three_jugs_also_solve() {
        let problem = WaterJugs::new(vec![8, 5, 3], 4).unwrap();
        let outcome = bfs(&problem).unwrap();
        assert!(outcome.solved());
    }

    #[test]
    fn pour_cost_equals_transferred_volume() {
        let problem = WaterJugs::new(vec![3, 5], 4).unwrap();
        let full = JugState::new(vec![3, 0]);
        let action = JugAction::Pour { from: 0, to: 1 };
        let next = problem.transition(&full, &action).unwrap();
        assert_eq!(next.volumes, vec![0, 3]);
        assert_eq!(problem.cost(&full, &action, &next), 3.0);
    }

    #[test]
    fn ucs_minimizes_poured_volume_not_move_count() {
        let problem = WaterJugs::new(vec![3, 5], 4).unwrap();
        let outcome = ucs_problem(&problem).unwrap();
        let path = outcome.path.expect("solvable");
        assert!(path.last().unwrap().state.volumes.contains(&4));
        // The reported cost must equal the replayed edge-cost sum.
        let replayed = crate::search::problem::path_cost(&problem, &path);
        assert_eq!(outcome.stats.solution_cost, Some(replayed));
    }

    #[test]
    fn unreachable_target_is_rejected_at_construction() {
        assert!(WaterJugs::new(vec![3, 5], 9).is_err());
        assert!(WaterJugs::new(vec![], 1).is_err());
    }

    #[test]
    fn out_of_range_jug_index_is_an_invalid_action() {
        let problem = WaterJugs::new(vec![3, 5], 4).unwrap();
        let state = problem.start();
        assert!(problem.transition(&state, &JugAction::Fill(7)).is_err());
    }
}
