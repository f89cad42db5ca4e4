//! Presentation of search outcomes: statistics tables and path listings.
//!
//! Everything here is display-only and must never influence engine
//! behavior.

use std::fmt::Display;

use prettytable::{Cell, Row, Table};

use crate::search::{
    problem::{Path, SearchProblem},
    stats::SearchStats,
};

/// Renders one statistics record as a two-column table.
pub fn render_stats_table(domain: &str, algorithm: &str, stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Domain"), Cell::new(domain)]));
    table.add_row(Row::new(vec![Cell::new("Algorithm"), Cell::new(algorithm)]));
    if let Some(name) = &stats.heuristic_name {
        table.add_row(Row::new(vec![Cell::new("Heuristic"), Cell::new(name)]));
    }
    table.add_row(Row::new(vec![
        Cell::new("Nodes generated"),
        Cell::new(&stats.nodes_generated.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes expanded"),
        Cell::new(&stats.nodes_expanded.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Max frontier"),
        Cell::new(&stats.max_frontier_size.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Solution depth"),
        Cell::new(&option_field(stats.solution_depth)),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Solution cost"),
        Cell::new(&option_field(stats.solution_cost)),
    ]));
    if let Some(runtime) = stats.runtime {
        table.add_row(Row::new(vec![
            Cell::new("Runtime"),
            Cell::new(&format!("{:.3} ms", runtime.as_secs_f64() * 1000.0)),
        ]));
    }
    table.to_string()
}

fn option_field<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Renders a solution path as numbered `action: before -> after` lines.
/// Multi-line state renderings are compacted onto one line.
pub fn render_path<P>(problem: &P, path: &Path<P::State, P::Action>) -> String
where
    P: SearchProblem,
    P::Action: Display,
{
    let mut out = String::new();
    for (index, pair) in path.windows(2).enumerate() {
        let action = pair[1]
            .action
            .as_ref()
            .map_or_else(String::new, ToString::to_string);
        let before = compact(&problem.format_state(&pair[0].state));
        let after = compact(&problem.format_state(&pair[1].state));
        out.push_str(&format!(
            "  {}) {:<15} {} -> {}\n",
            index + 1,
            action,
            before,
            after
        ));
    }
    out
}

/// Collapses a multi-line rendering into one line with ` | ` separators.
fn compact(rendered: &str) -> String {
    if !rendered.contains('\n') {
        return rendered.to_string();
    }
    rendered
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::{compact, render_path, render_stats_table};
    use crate::problems::river_crossing::RiverCrossing;
    use crate::search::bfs::bfs;

    #[test]
    fn path_listing_numbers_every_move() {
        let problem = RiverCrossing::classic();
        let outcome = bfs(&problem).unwrap();
        let listing = render_path(&problem, &outcome.path.unwrap());
        assert_eq!(listing.lines().count(), 7);
        assert!(listing.contains("Move Goat"));
        assert!(listing.contains("(L,L,L,L)"));
    }

    #[test]
    fn stats_table_lists_the_core_counters() {
        let problem = RiverCrossing::classic();
        let outcome = bfs(&problem).unwrap();
        let table = render_stats_table("river", "bfs", &outcome.stats);
        assert!(table.contains("Nodes generated"));
        assert!(table.contains("Solution depth"));
        assert!(table.contains('7'));
    }

    #[test]
    fn multiline_states_are_compacted() {
        assert_eq!(compact("1 2 3\n4 5 6\n7 8 0"), "1 2 3 | 4 5 6 | 7 8 0");
        assert_eq!(compact("(L,L,L,L)"), "(L,L,L,L)");
    }
}
