//! Waypoint is a small framework for formulating discrete search and
//! constraint-satisfaction problems and solving them with classical
//! algorithms: breadth-first search, iterative deepening, uniform-cost
//! search, A*, and MRV backtracking.
//!
//! The core idea is a two-layered architecture: generic, problem-agnostic
//! engines on one side, and thin domain adapters on the other. A domain
//! describes *what* its states, moves, goals and costs are; the engines
//! supply *how* the space is explored. Everything is exact and in-memory;
//! there is no concurrency, persistence or approximation.
//!
//! # Core Concepts
//!
//! - **[`SearchProblem`]**: the contract a domain implements to become
//!   searchable: legal actions, deterministic transitions, a goal test and
//!   edge costs.
//! - **Engines**: [`bfs`], [`ids`], [`ucs`] and [`astar`] each return the
//!   reconstructed solution path together with a [`SearchStats`] record
//!   (nodes generated/expanded, frontier high-water mark, depth, cost).
//! - **[`HeuristicRegistry`]**: explicitly constructed name-to-heuristic
//!   lookup for A*, with a documented Manhattan fallback for unknown names.
//! - **[`BacktrackingSolver`]**: recursive CSP search with pluggable
//!   variable ordering, minimum-remaining-values by default.
//!
//! # Example: the river-crossing puzzle
//!
//! ```
//! use waypoint::problems::river_crossing::RiverCrossing;
//! use waypoint::search::bfs::bfs;
//!
//! let problem = RiverCrossing::classic();
//! let outcome = bfs(&problem).unwrap();
//!
//! // The classical minimal solution takes exactly seven crossings.
//! let path = outcome.path.expect("the classic puzzle is solvable");
//! assert_eq!(path.len() - 1, 7);
//! assert_eq!(outcome.stats.solution_depth, Some(7));
//! ```
//!
//! [`SearchProblem`]: crate::search::problem::SearchProblem
//! [`bfs`]: crate::search::bfs::bfs
//! [`ids`]: crate::search::ids::ids
//! [`ucs`]: crate::search::best_first::ucs
//! [`astar`]: crate::search::best_first::astar
//! [`SearchStats`]: crate::search::stats::SearchStats
//! [`HeuristicRegistry`]: crate::heuristics::HeuristicRegistry
//! [`BacktrackingSolver`]: crate::csp::backtracking::BacktrackingSolver

pub mod csp;
pub mod error;
pub mod heuristics;
pub mod problems;
pub mod report;
pub mod search;
