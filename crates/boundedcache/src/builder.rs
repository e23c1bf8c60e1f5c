//! Builder for closure-configured caches
//!
//! ```
//! use boundedcache::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new(64)
//!     .size_of(|_key: &String, value: &Vec<u8>| value.len() as i64)
//!     .build();
//!
//! cache.put("blob".to_string(), vec![0u8; 48]);
//! assert_eq!(cache.size(), 48);
//! ```

use std::hash::Hash;

use crate::cache::BoundedCache;
use crate::policy::Hooks;

/// Collects a budget and hooks, then builds a [`BoundedCache`]
#[derive(Debug)]
pub struct CacheBuilder<K, V> {
    max_size: u64,
    hooks: Hooks<K, V>,
}

impl<K, V> CacheBuilder<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Start a builder with the given cost budget
    pub fn new(max_size: u64) -> Self {
        Self {
            max_size,
            hooks: Hooks::new(),
        }
    }

    /// Value factory consulted on a miss
    pub fn create<F>(mut self, f: F) -> Self
    where
        F: FnMut(&K) -> Option<V> + 'static,
    {
        self.hooks = self.hooks.with_create(f);
        self
    }

    /// Cost of an entry; negative costs panic at use
    pub fn size_of<F>(mut self, f: F) -> Self
    where
        F: Fn(&K, &V) -> i64 + 'static,
    {
        self.hooks = self.hooks.with_size_of(f);
        self
    }

    /// Callback for entries dropped by trimming
    pub fn on_evicted<F>(mut self, f: F) -> Self
    where
        F: FnMut(K, V) + 'static,
    {
        self.hooks = self.hooks.with_on_evicted(f);
        self
    }

    /// Build the cache
    pub fn build(self) -> BoundedCache<K, V, Hooks<K, V>> {
        BoundedCache::with_policy(self.max_size, self.hooks)
    }
}
