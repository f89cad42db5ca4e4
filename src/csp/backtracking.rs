//! Chronological backtracking search over finite-domain variables.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;
use tracing::debug;

use crate::{
    csp::variable::{MinimumRemainingValues, VariableSelection},
    error::{Result, SearchError},
};

/// A partial (growing) mapping from variables to chosen values.
pub type Assignment<V, T> = HashMap<V, T>;

/// The candidate values of every variable, in the order they will be tried.
/// A pre-fixed ("given") variable carries a singleton domain.
pub type DomainMap<V, T> = HashMap<V, Vec<T>>;

/// Counters describing one backtracking solve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CspStats {
    /// Variable-value extensions attempted, consistent ones only.
    pub assignments_tried: u64,
    /// Retractions after a recursive branch failed.
    pub backtracks: u64,
}

/// Recursive backtracking solver with pluggable variable selection.
///
/// The assignment is mutated in place and restored on backtrack; undo is a
/// single `O(1)` key removal, and recursion depth is bounded by the number
/// of variables. Domains are never physically pruned; legality is
/// recomputed on demand through the caller's `legal_values` callback.
pub struct BacktrackingSolver<V, T> {
    variable_selection: Box<dyn VariableSelection<V, T>>,
}

impl<V, T> BacktrackingSolver<V, T>
where
    V: Clone + Eq + Hash + Debug,
    T: Clone + Eq,
{
    pub fn new(variable_selection: Box<dyn VariableSelection<V, T>>) -> Self {
        Self { variable_selection }
    }

    /// A solver using minimum-remaining-values ordering, the standard
    /// configuration.
    pub fn mrv() -> Self {
        Self::new(Box::new(MinimumRemainingValues))
    }

    /// Searches for a complete assignment satisfying all constraints.
    ///
    /// `consistent` decides whether extending the assignment with one
    /// variable-value pair violates any constraint against already-assigned
    /// variables; `legal_values` lists the values of a variable's domain
    /// consistent with the current assignment (driving MRV ordering).
    ///
    /// Returns `Ok(None)` when the space is exhausted without a solution;
    /// unsatisfiability is an ordinary outcome, not an error. Fails with
    /// [`SearchError::MalformedInput`] before searching if any variable
    /// lacks a domain entry.
    pub fn solve<C, L>(
        &self,
        variables: &[V],
        domains: &DomainMap<V, T>,
        consistent: &C,
        legal_values: &L,
    ) -> Result<(Option<Assignment<V, T>>, CspStats)>
    where
        C: Fn(&V, &T, &Assignment<V, T>) -> bool,
        L: Fn(&V, &Assignment<V, T>) -> Vec<T>,
    {
        for var in variables {
            if !domains.contains_key(var) {
                return Err(SearchError::MalformedInput(format!(
                    "variable {var:?} has no domain"
                ))
                .into());
            }
        }

        let mut assignment = Assignment::new();
        let mut stats = CspStats::default();
        let solved = self.backtrack(
            variables,
            domains,
            consistent,
            legal_values,
            &mut assignment,
            &mut stats,
        );
        debug!(
            solved,
            tried = stats.assignments_tried,
            backtracks = stats.backtracks,
            "backtracking search finished"
        );
        Ok((solved.then_some(assignment), stats))
    }

    fn backtrack<C, L>(
        &self,
        variables: &[V],
        domains: &DomainMap<V, T>,
        consistent: &C,
        legal_values: &L,
        assignment: &mut Assignment<V, T>,
        stats: &mut CspStats,
    ) -> bool
    where
        C: Fn(&V, &T, &Assignment<V, T>) -> bool,
        L: Fn(&V, &Assignment<V, T>) -> Vec<T>,
    {
        if assignment.len() == variables.len() {
            return true;
        }

        let snapshot: &Assignment<V, T> = assignment;
        let Some(var) = self
            .variable_selection
            .select(variables, snapshot, &|v| legal_values(v, snapshot))
        else {
            // Unreachable while the assignment is incomplete; treated as
            // solved for safety.
            return true;
        };

        // Candidate values in domain input order; no value-ordering
        // heuristic, deliberately.
        for value in &domains[&var] {
            if !consistent(&var, value, assignment) {
                continue;
            }
            assignment.insert(var.clone(), value.clone());
            stats.assignments_tried += 1;
            if self.backtrack(variables, domains, consistent, legal_values, assignment, stats) {
                return true;
            }
            assignment.remove(&var);
            stats.backtracks += 1;
        }

        false
    }
}

/// The default legality check: a value is legal if `consistent` accepts it
/// against the current assignment. Suits problems whose constraints are all
/// pairwise difference checks.
pub fn legal_by_consistency<'a, V, T, C>(
    domains: &'a DomainMap<V, T>,
    consistent: &'a C,
) -> impl Fn(&V, &Assignment<V, T>) -> Vec<T> + 'a
where
    V: Clone + Eq + Hash,
    T: Clone + Eq,
    C: Fn(&V, &T, &Assignment<V, T>) -> bool,
{
    move |var, assignment| {
        domains
            .get(var)
            .map(|candidates| {
                candidates
                    .iter()
                    .filter(|value| consistent(var, value, assignment))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{legal_by_consistency, Assignment, BacktrackingSolver, DomainMap};

    // Four regions, three colours, adjacency as an undirected edge list.
    fn neighbours() -> HashMap<&'static str, Vec<&'static str>> {
        HashMap::from([
            ("A", vec!["B", "C"]),
            ("B", vec!["A", "C", "D"]),
            ("C", vec!["A", "B", "D"]),
            ("D", vec!["B", "C"]),
        ])
    }

    fn consistent(
        neighbours: &HashMap<&'static str, Vec<&'static str>>,
        var: &&'static str,
        value: &&'static str,
        assignment: &Assignment<&'static str, &'static str>,
    ) -> bool {
        neighbours[var]
            .iter()
            .all(|peer| assignment.get(peer) != Some(value))
    }

    #[test]
    fn colours_the_map_without_adjacent_repeats() {
        let variables = vec!["A", "B", "C", "D"];
        let colours = vec!["Red", "Green", "Blue"];
        let domains: DomainMap<&str, &str> = variables
            .iter()
            .map(|&var| (var, colours.clone()))
            .collect();
        let adjacency = neighbours();
        let consistent_fn = |var: &&'static str,
                             value: &&'static str,
                             assignment: &Assignment<&'static str, &'static str>| {
            consistent(&adjacency, var, value, assignment)
        };
        let legal = legal_by_consistency(&domains, &consistent_fn);

        let solver = BacktrackingSolver::mrv();
        let (solution, stats) = solver
            .solve(&variables, &domains, &consistent_fn, &legal)
            .unwrap();
        let solution = solution.expect("three colours suffice for this map");

        assert_eq!(solution.len(), 4);
        for (var, peers) in neighbours() {
            for peer in peers {
                assert_ne!(solution[var], solution[peer]);
            }
        }
        for value in solution.values() {
            assert!(colours.contains(value));
        }
        assert!(stats.assignments_tried >= 4);
    }

    #[test]
    fn two_regions_one_colour_is_unsatisfiable() {
        let variables = vec!["A", "B"];
        let domains: DomainMap<&str, &str> =
            variables.iter().map(|&var| (var, vec!["Red"])).collect();
        let consistent_fn = |_var: &&'static str,
                             value: &&'static str,
                             assignment: &Assignment<&'static str, &'static str>| {
            assignment.values().all(|assigned| assigned != value)
        };
        let legal = legal_by_consistency(&domains, &consistent_fn);

        let (solution, stats) = BacktrackingSolver::mrv()
            .solve(&variables, &domains, &consistent_fn, &legal)
            .unwrap();
        assert!(solution.is_none());
        assert!(stats.backtracks >= 1);
    }

    #[test]
    fn missing_domain_is_rejected_before_searching() {
        let variables = vec!["A", "B"];
        let domains: DomainMap<&str, &str> = HashMap::from([("A", vec!["Red"])]);
        let consistent_fn =
            |_: &&'static str, _: &&'static str, _: &Assignment<&'static str, &'static str>| true;
        let legal = legal_by_consistency(&domains, &consistent_fn);

        let result = BacktrackingSolver::mrv().solve(&variables, &domains, &consistent_fn, &legal);
        assert!(result.is_err());
    }
}
