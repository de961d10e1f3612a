use crate::config::SearchConfig;
use crate::error::WaypathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Traversal strategy used by a [`Pathfinder`](super::Pathfinder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// FIFO traversal; exact costs on unit-cost graphs only
    #[serde(rename = "bfs")]
    BreadthFirst,
    /// LIFO traversal; exact costs on trees only
    #[serde(rename = "dfs")]
    DepthFirst,
    /// Cost-ordered relaxation; exact for non-negative edge costs
    #[default]
    #[serde(rename = "dijkstra")]
    Dijkstra,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Dijkstra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::Dijkstra => "dijkstra",
        }
    }

    /// Whether the strategy needs a vertex ordering to be constructed
    pub fn requires_ordering(&self) -> bool {
        matches!(self, Strategy::Dijkstra)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = WaypathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "dijkstra" => Ok(Strategy::Dijkstra),
            other => Err(WaypathError::invalid_argument(
                "strategy (expected: bfs, dfs, dijkstra)",
                other,
            )),
        }
    }
}

/// Secondary key used when two queued entries have the same tentative cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Entries pushed earlier are popped first
    #[default]
    #[serde(rename = "insertion")]
    InsertionOrder,
    /// Smaller vertices (by the resolved ordering) are popped first
    Vertex,
}

/// Options for a single search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub strategy: Strategy,
    pub tie_break: TieBreak,
}

impl SearchOptions {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            tie_break: TieBreak::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl From<Strategy> for SearchOptions {
    fn from(strategy: Strategy) -> Self {
        SearchOptions::new(strategy)
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        SearchOptions {
            strategy: config.strategy,
            tie_break: config.tie_break,
        }
    }
}

/// Counters recorded during one search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes whose neighbors were examined
    pub expanded: usize,
    /// Cost/parent updates, excluding the source initialisation
    pub relaxed: usize,
    /// Frontier entries discarded because they were already processed
    pub stale_skipped: usize,
    /// The run stopped because its target was reached
    pub reached_target: bool,
}
