//! Modifier pools.
//!
//! A pool maps each contributing status to its accumulated contribution.
//! Pools are rebuilt from scratch; nothing is ever patched incrementally.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::status::StatusId;

/// Per-source contributions to one derived quantity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifierPool<T> {
    contributions: Vec<(StatusId, T)>,
}

impl<T> ModifierPool<T>
where
    T: Copy + Default + AddAssign,
{
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contributions: Vec::new(),
        }
    }

    /// Add a contribution from `source`, merging with any earlier one.
    pub fn add(&mut self, source: &StatusId, value: T) {
        match self.contributions.iter_mut().find(|(s, _)| s == source) {
            Some((_, v)) => *v += value,
            None => self.contributions.push((source.clone(), value)),
        }
    }

    /// Signed sum of every contribution.
    #[must_use]
    pub fn net(&self) -> T {
        let mut total = T::default();
        for (_, v) in &self.contributions {
            total += *v;
        }
        total
    }

    /// Contribution from a single source (default if absent).
    #[must_use]
    pub fn contribution(&self, source: &StatusId) -> T {
        self.contributions
            .iter()
            .find(|(s, _)| s == source)
            .map_or_else(T::default, |(_, v)| *v)
    }

    /// Drop every contribution.
    pub fn clear(&mut self) {
        self.contributions.clear();
    }

    /// Check if the pool has no contributions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    /// Iterate over `(source, contribution)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&StatusId, T)> {
        self.contributions.iter().map(|(s, v)| (s, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_sums_sources() {
        let mut pool: ModifierPool<i32> = ModifierPool::new();
        pool.add(&StatusId::new("HASTE"), 2);
        pool.add(&StatusId::new("SLOW"), -3);
        assert_eq!(pool.net(), -1);
    }

    #[test]
    fn test_same_source_merges() {
        let mut pool: ModifierPool<f64> = ModifierPool::new();
        let source = StatusId::new("WEAKNESS_FIRE");
        pool.add(&source, 0.25);
        pool.add(&source, 0.25);
        assert_eq!(pool.iter().count(), 1);
        assert!((pool.contribution(&source) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_clear() {
        let mut pool: ModifierPool<i32> = ModifierPool::new();
        pool.add(&StatusId::new("HASTE"), 1);
        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.net(), 0);
    }
}
