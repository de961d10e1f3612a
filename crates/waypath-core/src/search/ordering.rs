//! Vertex ordering capability
//!
//! The priority strategy needs a total order over vertices. It comes either
//! from the vertex type's own `Ord` or from a caller-supplied comparator, and
//! is resolved once when the pathfinder is built.

use std::cmp::Ordering;
use std::fmt;

/// A total order over vertices of type `V`
pub struct VertexOrdering<'a, V> {
    compare: Box<dyn Fn(&V, &V) -> Ordering + 'a>,
    natural: bool,
}

impl<'a, V: Ord> VertexOrdering<'a, V> {
    /// The vertex type's own ordering
    pub fn natural() -> Self {
        Self {
            compare: Box::new(|a: &V, b: &V| a.cmp(b)),
            natural: true,
        }
    }
}

impl<'a, V> VertexOrdering<'a, V> {
    /// An ordering defined by a comparator
    pub fn from_fn<F>(compare: F) -> Self
    where
        F: Fn(&V, &V) -> Ordering + 'a,
    {
        Self {
            compare: Box::new(compare),
            natural: false,
        }
    }

    pub fn compare(&self, a: &V, b: &V) -> Ordering {
        (self.compare)(a, b)
    }

    /// Whether this is the vertex type's own `Ord`
    pub fn is_natural(&self) -> bool {
        self.natural
    }
}

impl<V> fmt::Debug for VertexOrdering<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexOrdering")
            .field("natural", &self.natural)
            .finish_non_exhaustive()
    }
}
