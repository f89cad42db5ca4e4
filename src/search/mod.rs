//! The search engines and the problem contract they operate over.

pub mod best_first;
pub mod bfs;
pub mod ids;
pub(crate) mod node;
pub mod problem;
pub mod stats;
