//! Waypath Core Library
//!
//! Weighted graphs and single-source pathfinding with breadth-first,
//! depth-first and Dijkstra strategies sharing one search-node model.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod path;
pub mod search;

pub use error::{Result, WaypathError};
pub use graph::{Cost, Graph, Vertex};
pub use path::Path;
pub use search::{Pathfinder, SearchOptions, Searchable, Strategy, TieBreak};
