//! The bundled puzzle domains: thin adapters over the search and CSP
//! engines, with no algorithmic content of their own.

pub mod eight_puzzle;
pub mod river_crossing;
pub mod sudoku;
pub mod water_jugs;
