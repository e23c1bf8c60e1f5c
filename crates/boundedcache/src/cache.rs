//! BoundedCache: cost-bounded LRU cache over an access-order OrderedMap

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use ahash::RandomState;
use orderedmap::{Iter, OrderedMap};
use tracing::{debug, trace};

use crate::policy::{CachePolicy, DefaultPolicy};
use crate::stats::CacheStats;

/// LRU cache bounded by the total cost of its entries
///
/// Each entry is charged [`CachePolicy::size_of`]; once the total exceeds
/// `max_size`, least-recently-used entries are evicted until it fits again.
#[derive(Debug)]
pub struct BoundedCache<K, V, P = DefaultPolicy> {
    /// Access-order map; the eldest entry is the next victim
    map: OrderedMap<K, V>,

    /// Sum of entry costs
    size: u64,

    /// Cost budget
    max_size: u64,

    /// Cache statistics
    stats: CacheStats,

    /// Creation, sizing and eviction hooks
    policy: P,
}

impl<K, V> BoundedCache<K, V, DefaultPolicy>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a cache where every entry costs 1
    pub fn new(max_size: u64) -> Self {
        Self::with_policy(max_size, DefaultPolicy)
    }
}

impl<K, V, P> BoundedCache<K, V, P>
where
    K: Hash + Eq + Clone,
    V: Clone,
    P: CachePolicy<K, V>,
{
    /// Create a cache driven by the given policy
    ///
    /// # Arguments
    /// * `max_size` - Cost budget, in the units `size_of` returns
    /// * `policy` - Creation, sizing and eviction hooks
    ///
    /// A budget of 0 only keeps entries that cost nothing.
    pub fn with_policy(max_size: u64, policy: P) -> Self {
        Self {
            map: OrderedMap::with_access_order(true),
            size: 0,
            max_size,
            stats: CacheStats::new(),
            policy,
        }
    }

    /// Get a value, creating it on a miss if the policy can
    ///
    /// A hit promotes the entry to most recently used. A created value is
    /// inserted and the cache trimmed; it is still returned even if it was too
    /// expensive to stay.
    pub fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        if let Some(value) = self.map.get(key) {
            self.stats.record_hit();
            return Some(value.clone());
        }

        self.stats.record_miss();
        let key = key.to_owned();
        let value = self.policy.create(&key)?;

        self.stats.record_creation();
        let cost = self.safe_size_of(&key, &value);
        self.charge(cost);
        self.map.insert(key, value.clone());
        self.trim(Some(self.max_size));

        Some(value)
    }

    /// Store a value, making it the most recently used entry
    ///
    /// # Returns
    /// * `Option<V>` - The value previously stored under `key`
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.stats.record_put();
        let previous_cost = self
            .map
            .peek(&key)
            .map(|previous| self.safe_size_of(&key, previous));
        if let Some(cost) = previous_cost {
            self.size = self.size.saturating_sub(cost);
        }

        let cost = self.safe_size_of(&key, &value);
        self.charge(cost);

        let previous = self.map.insert(key, value);
        self.trim(Some(self.max_size));

        previous
    }

    /// Remove a value without notifying the eviction hook
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (key, previous) = self.map.remove_entry(key)?;
        self.size = self.size.saturating_sub(self.safe_size_of(&key, &previous));
        Some(previous)
    }

    /// Evict every entry, calling the eviction hook for each
    pub fn evict_all(&mut self) {
        if !self.map.is_empty() {
            debug!(entries = self.map.len(), size = self.size, "evicting all entries");
        }
        self.trim(None);
    }

    /// Evict least-recently-used entries until the total cost is at most `max_size`
    ///
    /// The configured budget is left unchanged.
    pub fn trim_to_size(&mut self, max_size: u64) {
        self.trim(Some(max_size));
    }

    /// Change the budget, evicting as needed
    pub fn resize(&mut self, max_size: u64) {
        debug!(from = self.max_size, to = max_size, "resizing cache");
        self.max_size = max_size;
        self.trim(Some(max_size));
    }

    /// Look up a value without promoting it or touching the statistics
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.peek(key)
    }

    /// Check for a key without promoting it or touching the statistics
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Copy of every live entry, in no particular order
    pub fn snapshot(&self) -> HashMap<K, V, RandomState> {
        self.map
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Iterate from least to most recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.map.iter()
    }

    /// Total cost of the live entries
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Cost budget
    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// The policy in use
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Mutable access to the policy
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Pop eldest entries while the cost is over `max_size`; `None` drains
    fn trim(&mut self, max_size: Option<u64>) {
        while max_size.map_or(true, |max| self.size > max) {
            let Some((key, value)) = self.map.pop_eldest() else {
                break;
            };

            let cost = self.safe_size_of(&key, &value);
            self.size = self.size.saturating_sub(cost);
            self.stats.record_eviction();
            trace!(cost, size = self.size, "evicted eldest entry");

            self.policy.on_evicted(key, value);
        }
    }

    /// Add a cost to the running total; overflowing it is fatal
    fn charge(&mut self, cost: u64) {
        self.size = self
            .size
            .checked_add(cost)
            .unwrap_or_else(|| panic!("Invalid cost: total cost overflowed adding {}", cost));
    }

    fn safe_size_of(&self, key: &K, value: &V) -> u64 {
        let cost = self.policy.size_of(key, value);
        u64::try_from(cost).unwrap_or_else(|_| invalid_cost(cost))
    }
}

/// Negative costs abort the operation that asked for them
#[cold]
fn invalid_cost(cost: i64) -> ! {
    panic!("Invalid cost: size_of returned {} (must be non-negative)", cost)
}

impl<K, V, P> fmt::Display for BoundedCache<K, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundedCache[maxSize={},hits={},misses={},hitRate={}%]",
            self.max_size,
            self.stats.hits(),
            self.stats.misses(),
            self.stats.hit_rate()
        )
    }
}
