//! Stats Module
//!
//! Aggregate statistics over the item collection, cached against the
//! backing file's modification time.

use std::collections::BTreeMap;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::models::Item;

// == Price Range ==
/// Minimum and maximum price across the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

// == Stats Snapshot ==
/// Aggregates for `GET /stats`. Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Number of items in the collection
    pub total: usize,
    /// Mean price, 0 for an empty collection
    pub average_price: f64,
    /// Item count per category
    pub categories: BTreeMap<String, usize>,
    /// Min/max price, both 0 for an empty collection
    pub price_range: PriceRange,
}

// == Calculate Stats ==
/// Computes the full snapshot in one pass over the collection.
pub fn calculate_stats(items: &[Item]) -> StatsSnapshot {
    let total = items.len();

    let average_price = if total > 0 {
        items.iter().map(|item| item.price).sum::<f64>() / total as f64
    } else {
        0.0
    };

    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    for item in items {
        *categories.entry(item.category.clone()).or_insert(0) += 1;
    }

    let price_range = if total > 0 {
        PriceRange {
            min: items.iter().map(|item| item.price).fold(f64::INFINITY, f64::min),
            max: items
                .iter()
                .map(|item| item.price)
                .fold(f64::NEG_INFINITY, f64::max),
        }
    } else {
        PriceRange { min: 0.0, max: 0.0 }
    };

    StatsSnapshot {
        total,
        average_price,
        categories,
        price_range,
    }
}

// == Stats Cache ==
/// Caches the last snapshot together with the backing file's modification
/// time it was computed from. The snapshot is valid only while the file's
/// mtime is unchanged.
#[derive(Debug, Default)]
pub struct StatsCache {
    cached: Option<(StatsSnapshot, SystemTime)>,
}

impl StatsCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached snapshot if it was computed from a file with the
    /// given modification time.
    pub fn lookup(&self, modified: SystemTime) -> Option<StatsSnapshot> {
        match &self.cached {
            Some((snapshot, cached_mtime)) if *cached_mtime == modified => Some(snapshot.clone()),
            _ => None,
        }
    }

    /// Replaces the cached snapshot.
    pub fn store(&mut self, snapshot: StatsSnapshot, modified: SystemTime) {
        self.cached = Some((snapshot, modified));
    }

    /// Drops the cached snapshot. Exposed for tests.
    pub fn clear(&mut self) {
        self.cached = None;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample_items() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                name: "Laptop Pro".to_string(),
                category: "Electronics".to_string(),
                price: 2499.0,
            },
            Item {
                id: 2,
                name: "Headphones".to_string(),
                category: "Electronics".to_string(),
                price: 399.0,
            },
            Item {
                id: 3,
                name: "Standing Desk".to_string(),
                category: "Furniture".to_string(),
                price: 1199.0,
            },
        ]
    }

    #[test]
    fn test_calculate_stats() {
        let stats = calculate_stats(&sample_items());

        assert_eq!(stats.total, 3);
        assert!((stats.average_price - 1365.666_666_666_666_7).abs() < 1e-9);
        assert_eq!(stats.categories["Electronics"], 2);
        assert_eq!(stats.categories["Furniture"], 1);
        assert_eq!(stats.price_range, PriceRange { min: 399.0, max: 2499.0 });
    }

    #[test]
    fn test_category_counts_sum_to_total() {
        let stats = calculate_stats(&sample_items());
        let counted: usize = stats.categories.values().sum();
        assert_eq!(counted, stats.total);
    }

    #[test]
    fn test_empty_collection_stats_are_zero() {
        let stats = calculate_stats(&[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_price, 0.0);
        assert!(stats.categories.is_empty());
        assert_eq!(stats.price_range, PriceRange { min: 0.0, max: 0.0 });
    }

    #[test]
    fn test_snapshot_wire_names_are_camel_case() {
        let json = serde_json::to_value(calculate_stats(&sample_items())).unwrap();
        assert!(json.get("averagePrice").is_some());
        assert!(json.get("priceRange").is_some());
    }

    #[test]
    fn test_stats_cache_hits_on_same_mtime() {
        let mut cache = StatsCache::new();
        let mtime = SystemTime::now();
        cache.store(calculate_stats(&sample_items()), mtime);

        assert!(cache.lookup(mtime).is_some());
    }

    #[test]
    fn test_stats_cache_misses_on_changed_mtime() {
        let mut cache = StatsCache::new();
        let mtime = SystemTime::now();
        cache.store(calculate_stats(&sample_items()), mtime);

        let later = mtime + Duration::from_secs(1);
        assert!(cache.lookup(later).is_none());
    }

    #[test]
    fn test_stats_cache_clear() {
        let mut cache = StatsCache::new();
        let mtime = SystemTime::now();
        cache.store(calculate_stats(&sample_items()), mtime);

        cache.clear();
        assert!(cache.lookup(mtime).is_none());
    }
}
