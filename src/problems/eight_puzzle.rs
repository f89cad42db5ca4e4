//! The 3x3 sliding-tile (eight) puzzle.

use std::fmt;

use crate::{
    error::{Result, SearchError},
    search::problem::SearchProblem,
};

/// The standard goal layout, blank in the bottom-right corner.
pub const GOAL_TILES: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// A board configuration in row-major order; `0` is the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileState {
    pub tiles: [u8; 9],
}

impl TileState {
    /// Fails unless `tiles` is a permutation of `0..=8`.
    pub fn new(tiles: [u8; 9]) -> Result<Self> {
        let mut seen = [false; 9];
        for &tile in &tiles {
            if tile > 8 || seen[tile as usize] {
                return Err(SearchError::MalformedInput(format!(
                    "tiles must be a permutation of 0-8, got {tiles:?}"
                ))
                .into());
            }
            seen[tile as usize] = true;
        }
        Ok(Self { tiles })
    }

    /// Parses a 9-digit row-major string such as `"123456780"`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let digits: Option<Vec<u8>> = text
            .chars()
            .map(|ch| ch.to_digit(10).map(|d| d as u8))
            .collect();
        let digits = digits.ok_or_else(|| {
            SearchError::MalformedInput(format!("tile layout must be digits only, got {text:?}"))
        })?;
        let tiles: [u8; 9] = digits.try_into().map_err(|_| {
            SearchError::MalformedInput("tile layout must be exactly 9 digits".to_string())
        })?;
        Self::new(tiles)
    }

    fn blank(&self) -> usize {
        self.tiles
            .iter()
            .position(|&tile| tile == 0)
            .unwrap_or_default()
    }
}

/// A move of the blank square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideAction {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for SlideAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SlideAction::Up => "Move Up",
            SlideAction::Down => "Move Down",
            SlideAction::Left => "Move Left",
            SlideAction::Right => "Move Right",
        };
        f.write_str(label)
    }
}

/// The eight-puzzle domain with a configurable goal layout. Every slide
/// costs 1.
#[derive(Debug, Clone)]
pub struct EightPuzzle {
    start: TileState,
    goal: [u8; 9],
}

impl EightPuzzle {
    pub fn new(start: TileState) -> Self {
        Self {
            start,
            goal: GOAL_TILES,
        }
    }

    pub fn with_goal(start: TileState, goal: [u8; 9]) -> Self {
        Self { start, goal }
    }

    pub fn goal_tiles(&self) -> [u8; 9] {
        self.goal
    }
}

impl SearchProblem for EightPuzzle {
    type State = TileState;
    type Action = SlideAction;

    fn start(&self) -> TileState {
        self.start
    }

    fn actions(&self, state: &TileState) -> Vec<SlideAction> {
        let blank = state.blank();
        let (row, col) = (blank / 3, blank % 3);
        let mut actions = Vec::with_capacity(4);
        if row > 0 {
            actions.push(SlideAction::Up);
        }
        if row < 2 {
            actions.push(SlideAction::Down);
        }
        if col > 0 {
            actions.push(SlideAction::Left);
        }
        if col < 2 {
            actions.push(SlideAction::Right);
        }
        actions
    }

    fn transition(&self, state: &TileState, action: &SlideAction) -> Result<TileState> {
        let blank = state.blank();
        let (row, col) = (blank / 3, blank % 3);
        let target = match action {
            SlideAction::Up if row > 0 => Some(blank - 3),
            SlideAction::Down if row < 2 => Some(blank + 3),
            SlideAction::Left if col > 0 => Some(blank - 1),
            SlideAction::Right if col < 2 => Some(blank + 1),
            _ => None,
        };
        let Some(target) = target else {
            return Err(SearchError::InvalidAction {
                state: self.format_state(state),
                action: action.to_string(),
            }
            .into());
        };
        let mut tiles = state.tiles;
        tiles.swap(blank, target);
        Ok(TileState { tiles })
    }

    fn is_goal(&self, state: &TileState) -> bool {
        state.tiles == self.goal
    }

    fn format_state(&self, state: &TileState) -> String {
        let rows: Vec<String> = state
            .tiles
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        rows.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::{EightPuzzle, SlideAction, TileState, GOAL_TILES};
    use crate::search::problem::SearchProblem;

    #[test]
    fn one_move_start_slides_into_the_goal() {
        let start = TileState::new([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let problem = EightPuzzle::new(start);
        let next = problem.transition(&start, &SlideAction::Right).unwrap();
        assert!(problem.is_goal(&next));
    }

    #[test]
    fn corner_blank_offers_two_moves() {
        let goal = TileState::new(GOAL_TILES).unwrap();
        let problem = EightPuzzle::new(goal);
        let actions = problem.actions(&goal);
        assert_eq!(actions, vec![SlideAction::Up, SlideAction::Left]);
    }

    #[test]
    fn sliding_off_the_board_is_an_invalid_action() {
        let goal = TileState::new(GOAL_TILES).unwrap();
        let problem = EightPuzzle::new(goal);
        // Blank is bottom-right; Down and Right leave the board.
        assert!(problem.transition(&goal, &SlideAction::Down).is_err());
        assert!(problem.transition(&goal, &SlideAction::Right).is_err());
    }

    #[test]
    fn parse_rejects_non_permutations() {
        assert!(TileState::parse("123456780").is_ok());
        assert!(TileState::parse("123456788").is_err());
        assert!(TileState::parse("12345678").is_err());
        assert!(TileState::parse("12345678x").is_err());
        assert!(TileState::new([1, 2, 3, 4, 5, 6, 7, 8, 9]).is_err());
    }

    #[test]
    fn slides_are_reversible() {
        let start = TileState::new([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        let problem = EightPuzzle::new(start);
        let up = problem.transition(&start, &SlideAction::Up).unwrap();
        let back = problem.transition(&up, &SlideAction::Down).unwrap();
        assert_eq!(back, start);
    }

    mod scramble_properties {
        use proptest::prelude::*;

        use super::{EightPuzzle, TileState, GOAL_TILES};
        use crate::heuristics::manhattan;
        use crate::search::best_first::{astar_problem, ucs_problem};
        use crate::search::problem::SearchProblem;

        /// Walks a bounded random path away from the goal; every state
        /// produced this way is solvable in at most `moves.len()` slides.
        fn scramble(moves: &[usize]) -> TileState {
            let goal = TileState::new(GOAL_TILES).expect("goal is a permutation");
            let problem = EightPuzzle::new(goal);
            let mut state = goal;
            for &pick in moves {
                let actions = problem.actions(&state);
                let action = actions[pick % actions.len()];
                state = problem
                    .transition(&state, &action)
                    .expect("actions() only yields legal moves");
            }
            state
        }

        proptest! {
            #[test]
            fn astar_matches_ucs_and_never_exceeds_the_scramble(
                moves in proptest::collection::vec(0..4usize, 0..=6)
            ) {
                let start = scramble(&moves);
                let problem = EightPuzzle::new(start);

                let by_ucs = ucs_problem(&problem).unwrap();
                let by_astar =
                    astar_problem(&problem, |s| manhattan(s, &GOAL_TILES), "h1").unwrap();

                let ucs_cost = by_ucs.stats.solution_cost.expect("scrambles are solvable");
                let astar_cost = by_astar.stats.solution_cost.expect("scrambles are solvable");
                prop_assert_eq!(astar_cost, ucs_cost);
                prop_assert!(astar_cost <= moves.len() as f64);

                // The path must replay through the domain's transitions.
                let path = by_astar.path.unwrap();
                prop_assert_eq!(path[0].state, start);
                prop_assert!(problem.is_goal(&path.last().unwrap().state));
                for pair in path.windows(2) {
                    let action = pair[1].action.as_ref().unwrap();
                    prop_assert!(problem.actions(&pair[0].state).contains(action));
                    let replayed = problem.transition(&pair[0].state, action).unwrap();
                    prop_assert_eq!(replayed, pair[1].state);
                }
            }
        }
    }
}
