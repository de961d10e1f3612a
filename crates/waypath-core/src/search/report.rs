//! Per-vertex listing of search results
//!
//! A debugging and demo aid: one entry per graph vertex with its recorded
//! cost and reconstructed path. Serializable for JSON output and rendered as
//! a text table by `Display`.

use crate::path::Path;
use crate::search::types::{SearchStats, Strategy};
use serde::Serialize;
use std::fmt;

/// Result row for one vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry<V> {
    pub vertex: V,
    /// Recorded cost, `None` when no route was found
    pub cost: Option<u64>,
    pub visited: bool,
    pub path: Path<V>,
}

/// Complete search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport<V> {
    pub strategy: Strategy,
    pub source: Option<V>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<V>,
    pub stats: Option<SearchStats>,
    pub entries: Vec<ReportEntry<V>>,
}

impl<V> SearchReport<V> {
    /// Entry for `vertex`, if it was part of the graph
    pub fn entry(&self, vertex: &V) -> Option<&ReportEntry<V>>
    where
        V: PartialEq,
    {
        self.entries.iter().find(|e| &e.vertex == vertex)
    }

    /// Number of vertices with a route from the source
    pub fn reachable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.cost.is_some()).count()
    }
}

const VERTEX_WIDTH: usize = 10;
const COST_WIDTH: usize = 12;

impl<V: fmt::Display> fmt::Display for SearchReport<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "STRATEGY: {}", self.strategy)?;
        match &self.source {
            Some(source) => writeln!(f, "SOURCE: {}", source)?,
            None => writeln!(f, "SOURCE: (not searched)")?,
        }
        if let Some(target) = &self.target {
            writeln!(f, "TARGET: {}", target)?;
        }
        writeln!(
            f,
            "{:<vw$}{:<cw$}PATH",
            "VERTEX",
            "COST",
            vw = VERTEX_WIDTH,
            cw = COST_WIDTH
        )?;

        for entry in &self.entries {
            let cost = entry
                .cost
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unreachable".to_string());
            let path = if entry.path.is_empty() {
                "-".to_string()
            } else {
                entry.path.to_string()
            };
            writeln!(
                f,
                "{:<vw$}{:<cw$}{}",
                entry.vertex.to_string(),
                cost,
                path,
                vw = VERTEX_WIDTH,
                cw = COST_WIDTH
            )?;
        }
        Ok(())
    }
}
