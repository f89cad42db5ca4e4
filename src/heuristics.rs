//! Named heuristic functions and the registry that looks them up.
//!
//! A heuristic estimates the remaining cost from a state to a goal and must
//! never be negative. For A* optimality it must also be *admissible*: never
//! overestimate the true remaining cost.

use std::collections::HashMap;
use std::sync::Arc;

use crate::problems::eight_puzzle::{TileState, GOAL_TILES};

/// A shared heuristic function `state -> estimated remaining cost (>= 0)`.
pub type Heuristic<S> = Arc<dyn Fn(&S) -> f64 + Send + Sync>;

/// An explicitly constructed name-to-heuristic table with a fallback entry.
///
/// Lookup by an unknown name resolves to the fallback rather than failing,
/// a leniency callers must be aware of when wiring heuristic names through
/// from user input.
pub struct HeuristicRegistry<S> {
    table: HashMap<String, Heuristic<S>>,
    fallback: Heuristic<S>,
}

impl<S> HeuristicRegistry<S> {
    pub fn new(fallback: Heuristic<S>) -> Self {
        Self {
            table: HashMap::new(),
            fallback,
        }
    }

    pub fn register(&mut self, name: impl Into<String>, heuristic: Heuristic<S>) {
        self.table.insert(name.into(), heuristic);
    }

    /// Resolves `name`, falling back to the default entry when unknown.
    pub fn get(&self, name: &str) -> Heuristic<S> {
        self.table
            .get(name)
            .unwrap_or(&self.fallback)
            .clone()
    }

    /// The registered names, sorted for stable display.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.table.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// The zero heuristic. Reduces A* to uniform-cost search.
pub fn zero<S>(_state: &S) -> f64 {
    0.0
}

/// Counts tiles that are not on their goal square, ignoring the blank.
/// Admissible: every misplaced tile needs at least one move.
pub fn misplaced(state: &TileState, goal: &[u8; 9]) -> f64 {
    state
        .tiles
        .iter()
        .enumerate()
        .filter(|&(idx, &tile)| tile != 0 && tile != goal[idx])
        .count() as f64
}

/// Sum over all tiles of the row plus column displacement from the tile's
/// goal square, ignoring the blank. Admissible for unit-cost slides.
pub fn manhattan(state: &TileState, goal: &[u8; 9]) -> f64 {
    let positions = goal_positions(goal);
    let mut total = 0u32;
    for (idx, &tile) in state.tiles.iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let goal_idx = positions[tile as usize];
        let (r1, c1) = (idx / 3, idx % 3);
        let (r2, c2) = (goal_idx / 3, goal_idx % 3);
        total += (r1.abs_diff(r2) + c1.abs_diff(c2)) as u32;
    }
    f64::from(total)
}

/// Manhattan distance plus a penalty of 2 for every pair of tiles in the
/// same row or column that are both in their goal row/column but in
/// reversed relative order. Each such pair forces at least one extra move
/// to resolve, so the penalty stays admissible. Dominates [`manhattan`].
pub fn linear_conflict(state: &TileState, goal: &[u8; 9]) -> f64 {
    let positions = goal_positions(goal);
    let mut conflicts = 0u32;

    for row in 0..3 {
        // (current column, goal column) of tiles that belong in this row.
        let mut in_row: Vec<(usize, usize)> = Vec::new();
        for col in 0..3 {
            let tile = state.tiles[row * 3 + col];
            if tile == 0 {
                continue;
            }
            let goal_idx = positions[tile as usize];
            if goal_idx / 3 == row {
                in_row.push((col, goal_idx % 3));
            }
        }
        conflicts += reversed_pairs(&in_row);
    }

    for col in 0..3 {
        let mut in_col: Vec<(usize, usize)> = Vec::new();
        for row in 0..3 {
            let tile = state.tiles[row * 3 + col];
            if tile == 0 {
                continue;
            }
            let goal_idx = positions[tile as usize];
            if goal_idx % 3 == col {
                in_col.push((row, goal_idx / 3));
            }
        }
        conflicts += reversed_pairs(&in_col);
    }

    manhattan(state, goal) + f64::from(conflicts * 2)
}

/// Counts pairs whose current order contradicts their goal order along one
/// line.
fn reversed_pairs(placed: &[(usize, usize)]) -> u32 {
    let mut count = 0;
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            let (pos_a, goal_a) = placed[i];
            let (pos_b, goal_b) = placed[j];
            if (pos_a < pos_b && goal_a > goal_b) || (pos_a > pos_b && goal_a < goal_b) {
                count += 1;
            }
        }
    }
    count
}

/// Index of every tile value in the goal layout.
fn goal_positions(goal: &[u8; 9]) -> [usize; 9] {
    let mut positions = [0usize; 9];
    for (idx, &tile) in goal.iter().enumerate() {
        positions[tile as usize] = idx;
    }
    positions
}

/// The standard registry for the sliding-tile domain: `h0` (zero), `h1`
/// (Manhattan), `h2` (linear conflict) and `misplaced`, with Manhattan as
/// the fallback for unknown names.
pub fn tile_registry(goal: [u8; 9]) -> HeuristicRegistry<TileState> {
    let mut registry = HeuristicRegistry::new(Arc::new(move |s: &TileState| manhattan(s, &goal)));
    registry.register("h0", Arc::new(zero::<TileState>));
    registry.register("h1", Arc::new(move |s: &TileState| manhattan(s, &goal)));
    registry.register(
        "h2",
        Arc::new(move |s: &TileState| linear_conflict(s, &goal)),
    );
    registry.register("misplaced", Arc::new(move |s: &TileState| misplaced(s, &goal)));
    registry
}

/// [`tile_registry`] for the standard goal layout.
pub fn standard_tile_registry() -> HeuristicRegistry<TileState> {
    tile_registry(GOAL_TILES)
}
