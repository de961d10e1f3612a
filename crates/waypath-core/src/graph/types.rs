use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative cost of traversing an edge, or the accumulated cost of a path
///
/// [`Cost::UNREACHABLE`] is the sentinel for "no route found". Addition
/// saturates at the sentinel so relaxing from an unreachable node can never
/// wrap around into a small cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const UNREACHABLE: Cost = Cost(u64::MAX);

    pub const fn new(cost: u64) -> Self {
        Cost(cost)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    pub fn is_unreachable(&self) -> bool {
        *self == Cost::UNREACHABLE
    }

    /// The cost as an option, `None` for the unreachable sentinel
    pub fn reachable(self) -> Option<u64> {
        if self.is_unreachable() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::UNREACHABLE
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0.saturating_add(other.0))
    }
}

impl From<u64> for Cost {
    fn from(cost: u64) -> Self {
        Cost(cost)
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(u64::from(cost))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unreachable() {
            write!(f, "unreachable")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
