//! Cache statistics tracking

use std::fmt;

/// Counters for cache activity
///
/// Every counter only ever grows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    puts: u64,
    creations: u64,
    evictions: u64,
    hits: u64,
    misses: u64,
}

impl CacheStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_put(&mut self) {
        self.puts += 1;
    }

    pub(crate) fn record_creation(&mut self) {
        self.creations += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Get total puts
    pub fn puts(&self) -> u64 {
        self.puts
    }

    /// Get total values produced by the creation hook
    pub fn creations(&self) -> u64 {
        self.creations
    }

    /// Get total evictions
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Get total hits
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Get total misses
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Hit rate as a truncated percentage (0 when there were no reads)
    pub fn hit_rate(&self) -> u64 {
        let accesses = self.hits + self.misses;
        if accesses == 0 {
            0
        } else {
            100 * self.hits / accesses
        }
    }

    /// Calculate hit ratio (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "puts={},creations={},evictions={},hits={},misses={}",
            self.puts, self.creations, self.evictions, self.hits, self.misses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let mut stats = CacheStats::new();

        stats.record_hit();
        stats.record_hit();
        stats.record_miss();

        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 1);
        assert_eq!(stats.hit_ratio(), 2.0 / 3.0);
        assert_eq!(stats.hit_rate(), 66);
    }

    #[test]
    fn test_stats_empty() {
        let stats = CacheStats::new();

        assert_eq!(stats.hit_rate(), 0);
        assert_eq!(stats.hit_ratio(), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let mut stats = CacheStats::new();

        stats.record_put();
        stats.record_creation();
        stats.record_eviction();
        stats.record_eviction();

        assert_eq!(
            stats.to_string(),
            "puts=1,creations=1,evictions=2,hits=0,misses=0"
        );
    }
}
