//! Reconstructed routes through a graph

use crate::error::{Result, WaypathError};
use serde::Serialize;
use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt;

/// Ordered sequence of vertices from a search source to a destination
///
/// Paths are built back to front while walking parent references, so
/// [`Path::prepend`] is the primary way to grow one. An empty path means no
/// route was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path<V> {
    steps: VecDeque<V>,
}

impl<V> Default for Path<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Path<V> {
    /// Create an empty path
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }

    /// Add a step in front of the current first step
    pub fn prepend(&mut self, step: V) {
        self.steps.push_front(step);
    }

    /// Get a step by position, `0` being the source
    pub fn get(&self, index: usize) -> Result<&V> {
        self.steps.get(index).ok_or(WaypathError::IndexOutOfRange {
            index,
            len: self.steps.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// First step of the path, the search source
    pub fn source(&self) -> Option<&V> {
        self.steps.front()
    }

    /// Last step of the path
    pub fn destination(&self) -> Option<&V> {
        self.steps.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, V> {
        self.steps.iter()
    }

    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.steps.iter().cloned().collect()
    }
}

impl<V> FromIterator<V> for Path<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<V> IntoIterator for Path<V> {
    type Item = V;
    type IntoIter = vec_deque::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Path<V> {
    type Item = &'a V;
    type IntoIter = vec_deque::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
