//! # boundedcache
//!
//! Cost-bounded LRU cache on top of [`orderedmap`].
//!
//! ## Architecture
//! - **OrderedMap**: access-order map; its eldest entry is the LRU victim
//! - **Cost accounting**: running total of `size_of` over live entries
//! - **Policy**: pluggable `create` / `size_of` / `on_evicted` hooks
//! - **Trimming**: evicts eldest entries until the total fits the budget
//!
//! ```
//! use boundedcache::BoundedCache;
//!
//! let mut cache = BoundedCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3);
//!
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.get(&"a"), Some(1));
//! ```

#![warn(missing_docs)]

mod builder;
mod cache;
mod policy;
mod stats;

pub use builder::CacheBuilder;
pub use cache::BoundedCache;
pub use policy::{CachePolicy, DefaultPolicy, Hooks};
pub use stats::CacheStats;

pub use orderedmap;
