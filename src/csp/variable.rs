//! Strategies for choosing which unassigned variable to branch on next.

use std::hash::Hash;

use crate::csp::backtracking::Assignment;

/// A variable-selection strategy for the backtracking solver.
///
/// A good strategy can dramatically shrink the search tree; all strategies
/// here are deterministic, breaking ties by the variable's position in the
/// input list.
pub trait VariableSelection<V, T> {
    /// Picks the next variable to assign, or `None` when every variable is
    /// already assigned.
    ///
    /// `legal_values` reports the values of a variable's domain that do not
    /// conflict with the current partial assignment; its length drives
    /// constrainedness-based strategies.
    fn select(
        &self,
        variables: &[V],
        assignment: &Assignment<V, T>,
        legal_values: &dyn Fn(&V) -> Vec<T>,
    ) -> Option<V>;
}

/// Picks the first unassigned variable in input order. Deterministic
/// baseline with no pruning power.
pub struct SelectFirst;

impl<V: Clone + Eq + Hash, T> VariableSelection<V, T> for SelectFirst {
    fn select(
        &self,
        variables: &[V],
        assignment: &Assignment<V, T>,
        _legal_values: &dyn Fn(&V) -> Vec<T>,
    ) -> Option<V> {
        variables
            .iter()
            .find(|var| !assignment.contains_key(var))
            .cloned()
    }
}

/// Minimum remaining values: picks the unassigned variable with the fewest
/// currently legal values.
///
/// A fail-first strategy: attacking the most constrained variable prunes
/// early. Variables whose domain is a pre-fixed singleton have exactly one
/// legal value, so givens are effectively assigned first without any
/// special-casing. Ties break by input order.
pub struct MinimumRemainingValues;

impl<V: Clone + Eq + Hash, T> VariableSelection<V, T> for MinimumRemainingValues {
    fn select(
        &self,
        variables: &[V],
        assignment: &Assignment<V, T>,
        legal_values: &dyn Fn(&V) -> Vec<T>,
    ) -> Option<V> {
        let mut best: Option<(usize, V)> = None;
        for var in variables {
            if assignment.contains_key(var) {
                continue;
            }
            let remaining = legal_values(var).len();
            // Strict inequality keeps the earliest variable on ties.
            if best.as_ref().map_or(true, |(count, _)| remaining < *count) {
                best = Some((remaining, var.clone()));
            }
        }
        best.map(|(_, var)| var)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{MinimumRemainingValues, SelectFirst, VariableSelection};

    #[test]
    fn mrv_prefers_the_most_constrained_variable() {
        let variables = vec!["a", "b", "c"];
        let assignment: HashMap<&str, i32> = HashMap::new();
        let legal = |var: &&str| -> Vec<i32> {
            match *var {
                "a" => vec![1, 2, 3],
                "b" => vec![1],
                _ => vec![1, 2],
            }
        };
        let picked = MinimumRemainingValues.select(&variables, &assignment, &legal);
        assert_eq!(picked, Some("b"));
    }

    #[test]
    fn mrv_breaks_ties_by_input_order() {
        let variables = vec!["a", "b"];
        let assignment: HashMap<&str, i32> = HashMap::new();
        let legal = |_: &&str| vec![1, 2];
        let picked = MinimumRemainingValues.select(&variables, &assignment, &legal);
        assert_eq!(picked, Some("a"));
    }

    #[test]
    fn all_assigned_yields_none() {
        let variables = vec!["a"];
        let assignment = HashMap::from([("a", 1)]);
        let legal = |_: &&str| vec![1];
        assert_eq!(
            MinimumRemainingValues.select(&variables, &assignment, &legal),
            None
        );
        assert_eq!(SelectFirst.select(&variables, &assignment, &legal), None);
    }
}
