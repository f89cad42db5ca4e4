//! Colour four touching regions with three colours so that no two
//! neighbours match, the smallest possible CSP workout.

use std::collections::HashMap;

use waypoint::csp::backtracking::{Assignment, BacktrackingSolver, DomainMap};

fn main() {
    let variables = vec!["A", "B", "C", "D"];
    let colours = vec!["Red", "Green", "Blue"];

    // Who touches whom (undirected edges).
    let neighbours: HashMap<&str, Vec<&str>> = HashMap::from([
        ("A", vec!["B", "C"]),
        ("B", vec!["A", "C", "D"]),
        ("C", vec!["A", "B", "D"]),
        ("D", vec!["B", "C"]),
    ]);

    let domains: DomainMap<&str, &str> = variables
        .iter()
        .map(|&region| (region, colours.clone()))
        .collect();

    let consistent = |region: &&str, colour: &&str, assignment: &Assignment<&str, &str>| {
        neighbours[region]
            .iter()
            .all(|peer| assignment.get(peer) != Some(colour))
    };
    let legal = |region: &&str, assignment: &Assignment<&str, &str>| {
        domains[region]
            .iter()
            .filter(|colour| consistent(region, colour, assignment))
            .copied()
            .collect::<Vec<_>>()
    };

    let solver = BacktrackingSolver::mrv();
    let (solution, stats) = solver
        .solve(&variables, &domains, &consistent, &legal)
        .expect("domains cover every region");

    match solution {
        Some(assignment) => {
            for region in &variables {
                println!("{region}: {}", assignment[region]);
            }
            println!(
                "({} assignments tried, {} backtracks)",
                stats.assignments_tried, stats.backtracks
            );
        }
        None => println!("No colouring exists."),
    }
}
