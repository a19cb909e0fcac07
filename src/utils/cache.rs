//! Symbol cache for repeated badge text
//!
//! Badge runs often re-encode the same names (reprints, duplicated rows in a
//! roster). Encoding is deterministic, so a finished symbol can be reused.

use crate::models::QrSymbol;
use std::collections::HashMap;

/// Bounded map from payload bytes to finished symbols
pub struct SymbolCache {
    entries: HashMap<Vec<u8>, QrSymbol>,
    max_entries: usize,
    stats: CacheStats,
}

impl SymbolCache {
    /// Create a cache with default capacity (1024 symbols)
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a cache holding at most `max_entries` symbols
    pub fn with_capacity(max_entries: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: HashMap::with_capacity(max_entries.min(1024)),
            max_entries,
            stats: CacheStats::default(),
        }
    }

    /// Return the cached symbol for `key`, or build and store it
    pub fn get_or_insert_with<F>(&mut self, key: &[u8], build: F) -> QrSymbol
    where
        F: FnOnce() -> QrSymbol,
    {
        if let Some(symbol) = self.entries.get(key) {
            self.stats.hits += 1;
            return symbol.clone();
        }

        self.stats.misses += 1;
        if self.entries.len() >= self.max_entries {
            // No recency tracking; start over once full
            self.stats.evictions += self.entries.len();
            self.entries.clear();
        }
        let symbol = build();
        self.entries.insert(key.to_vec(), symbol.clone());
        symbol
    }

    /// Number of cached symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hit/miss counters since creation
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Drop all cached symbols (counters are kept)
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for SymbolCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics for monitoring cache effectiveness
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from the cache
    pub hits: usize,
    /// Lookups that had to encode
    pub misses: usize,
    /// Symbols dropped when the cache filled up
    pub evictions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit_and_miss() {
        let mut cache = SymbolCache::new();
        let first = cache.get_or_insert_with(b"Lena", || crate::encode("Lena"));
        let second = cache.get_or_insert_with(b"Lena", || panic!("should be cached"));
        assert_eq!(first, second);
        assert_eq!(
            *cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                evictions: 0
            }
        );
    }

    #[test]
    fn test_cache_bounded() {
        let mut cache = SymbolCache::with_capacity(2);
        for name in ["A", "B", "C"] {
            cache.get_or_insert_with(name.as_bytes(), || crate::encode(name));
        }
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().evictions, 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
