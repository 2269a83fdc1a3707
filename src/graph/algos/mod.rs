//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first reachability
//! - `astar`: Heuristic lowest-cost route search

pub mod astar;
pub mod bfs;

pub use astar::{search, SearchOutcome};
pub use bfs::{bfs_reachable, reachable_edges};
