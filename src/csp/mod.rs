//! Constraint satisfaction: backtracking search with pluggable variable
//! ordering.

pub mod backtracking;
pub mod variable;
