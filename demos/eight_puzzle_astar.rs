//! Solves a scrambled eight-puzzle with A* under each registered heuristic
//! and compares the work done.

use waypoint::heuristics::standard_tile_registry;
use waypoint::problems::eight_puzzle::{EightPuzzle, TileState};
use waypoint::report::{render_path, render_stats_table};
use waypoint::search::best_first::astar_problem;

fn main() {
    let start = TileState::parse("103425786").expect("a valid permutation");
    let problem = EightPuzzle::new(start);
    let registry = standard_tile_registry();

    for name in registry.names() {
        let h = registry.get(name);
        let outcome = astar_problem(&problem, |s| h(s), name).expect("transitions never fail");
        println!("{}", render_stats_table("tiles", "A*", &outcome.stats));
        if let Some(path) = &outcome.path {
            println!("Path:\n{}", render_path(&problem, path));
        }
    }
}
