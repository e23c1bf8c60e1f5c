//! Pluggable cache policy
//!
//! A policy decides three things: how to produce a value on a miss, what an
//! entry costs, and what happens to an entry once it is evicted.

use std::fmt;

/// Hooks consulted by [`BoundedCache`](crate::BoundedCache)
///
/// Every method has a default, so an empty `impl` gives a plain LRU cache that
/// counts entries.
pub trait CachePolicy<K, V> {
    /// Produce a value for a key that missed; `None` leaves the cache untouched
    fn create(&mut self, _key: &K) -> Option<V> {
        None
    }

    /// Cost charged against the budget; must never be negative
    fn size_of(&self, _key: &K, _value: &V) -> i64 {
        1
    }

    /// Called once per entry dropped by trimming, after its cost was released
    fn on_evicted(&mut self, _key: K, _value: V) {}
}

/// No creation, unit cost, no eviction callback
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultPolicy;

impl<K, V> CachePolicy<K, V> for DefaultPolicy {}

type CreateFn<K, V> = Box<dyn FnMut(&K) -> Option<V>>;
type SizeOfFn<K, V> = Box<dyn Fn(&K, &V) -> i64>;
type EvictedFn<K, V> = Box<dyn FnMut(K, V)>;

/// Policy assembled from closures
///
/// Each hook is optional; unset hooks behave like [`DefaultPolicy`].
///
/// ```
/// use boundedcache::{BoundedCache, Hooks};
///
/// let hooks = Hooks::new()
///     .with_create(|key: &u32| Some(key * 2))
///     .with_size_of(|_key: &u32, value: &u32| i64::from(*value));
/// let mut cache = BoundedCache::with_policy(100, hooks);
///
/// assert_eq!(cache.get(&21), Some(42));
/// assert_eq!(cache.size(), 42);
/// ```
pub struct Hooks<K, V> {
    create: Option<CreateFn<K, V>>,
    size_of: Option<SizeOfFn<K, V>>,
    on_evicted: Option<EvictedFn<K, V>>,
}

impl<K, V> Hooks<K, V> {
    /// Create a bundle with every hook unset
    pub fn new() -> Self {
        Self {
            create: None,
            size_of: None,
            on_evicted: None,
        }
    }

    /// Set the creation hook
    pub fn with_create<F>(mut self, f: F) -> Self
    where
        F: FnMut(&K) -> Option<V> + 'static,
    {
        self.create = Some(Box::new(f));
        self
    }

    /// Set the size-of-entry function
    pub fn with_size_of<F>(mut self, f: F) -> Self
    where
        F: Fn(&K, &V) -> i64 + 'static,
    {
        self.size_of = Some(Box::new(f));
        self
    }

    /// Set the eviction callback
    pub fn with_on_evicted<F>(mut self, f: F) -> Self
    where
        F: FnMut(K, V) + 'static,
    {
        self.on_evicted = Some(Box::new(f));
        self
    }
}

impl<K, V> Default for Hooks<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CachePolicy<K, V> for Hooks<K, V> {
    fn create(&mut self, key: &K) -> Option<V> {
        self.create.as_mut().and_then(|f| f(key))
    }

    fn size_of(&self, key: &K, value: &V) -> i64 {
        self.size_of.as_ref().map_or(1, |f| f(key, value))
    }

    fn on_evicted(&mut self, key: K, value: V) {
        if let Some(f) = self.on_evicted.as_mut() {
            f(key, value);
        }
    }
}

impl<K, V> fmt::Debug for Hooks<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("create", &self.create.is_some())
            .field("size_of", &self.size_of.is_some())
            .field("on_evicted", &self.on_evicted.is_some())
            .finish()
    }
}
