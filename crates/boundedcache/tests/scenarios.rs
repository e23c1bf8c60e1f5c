// ==============================================
// END-TO-END SCENARIOS (integration)
// ==============================================
//
// Behaviour that spans the cache and the ordered map underneath it.

use boundedcache::orderedmap::{Error as MapError, OrderedMap};
use boundedcache::{BoundedCache, CacheBuilder};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn promoted_key_survives_eviction() {
    init_tracing();
    let mut cache = BoundedCache::new(3);

    cache.put("hoge", "fuga");
    cache.put("foo", "bar");
    cache.put("buzz", "piyo");

    assert_eq!(cache.get(&"foo"), Some("bar"));

    cache.put("nyaga", "mogya");

    assert_eq!(cache.get(&"hoge"), None);
    assert_eq!(cache.get(&"nyaga"), Some("mogya"));
    assert_eq!(cache.get(&"foo"), Some("bar"));
    assert_eq!(cache.get(&"buzz"), Some("piyo"));
    assert_eq!(cache.stats().evictions(), 1);
}

#[test]
fn eviction_follows_read_order() {
    init_tracing();
    let evicted = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&evicted);
    let mut cache = CacheBuilder::new(3)
        .on_evicted(move |key: char, _: u32| sink.borrow_mut().push(key))
        .build();

    for (i, key) in ['A', 'B', 'C'].into_iter().enumerate() {
        cache.put(key, i as u32);
    }
    cache.get(&'B');
    cache.put('D', 3);

    assert_eq!(*evicted.borrow(), vec!['A']);
    assert!(cache.contains_key(&'B'));
    assert!(cache.contains_key(&'C'));
    assert!(cache.contains_key(&'D'));

    cache.put('E', 4);
    assert_eq!(*evicted.borrow(), vec!['A', 'C']);
}

#[test]
fn access_order_map_iterates_by_recency() {
    let mut map = OrderedMap::with_access_order(true);
    map.assign("foo".to_string(), Some("buzz")).unwrap();
    map.assign("bar".to_string(), Some("hoge")).unwrap();
    map.assign("fuga".to_string(), Some("fizz")).unwrap();

    assert_eq!(map.fetch("bar"), Ok(&"hoge"));

    let values: Vec<_> = map.values().copied().collect();
    assert_eq!(values, vec!["buzz", "fizz", "hoge"]);
    assert!(map.access_order());
}

#[test]
fn insertion_order_map_ignores_reads() {
    let mut map = OrderedMap::new();
    map.assign("foo".to_string(), Some("buzz")).unwrap();
    map.assign("bar".to_string(), Some("hoge")).unwrap();
    map.assign("fuga".to_string(), Some("fizz")).unwrap();

    assert_eq!(map.fetch("bar"), Ok(&"hoge"));

    let values: Vec<_> = map.values().copied().collect();
    assert_eq!(values, vec!["buzz", "hoge", "fizz"]);
    assert_eq!(map.eldest(), Some((&"foo".to_string(), &"buzz")));
}

#[test]
fn null_and_missing_key_errors() {
    let mut map: OrderedMap<String, u32> = OrderedMap::new();
    map.insert("present".to_string(), 1);

    assert_eq!(map.fetch(""), Err(MapError::NullKey));
    assert_eq!(map.assign(String::new(), Some(2)), Err(MapError::NullKey));
    assert_eq!(map.fetch("absent"), Err(MapError::KeyNotFound));
    assert_eq!(map.get("absent"), None);
    assert_eq!(map.len(), 1);
}

#[test]
fn evict_all_is_idempotent() {
    init_tracing();
    let mut cache = BoundedCache::new(5);
    for i in 0..5u32 {
        cache.put(i, i * i);
    }

    cache.evict_all();
    let after_first = cache.stats().clone();
    assert!(cache.is_empty());
    assert_eq!(cache.size(), 0);
    assert_eq!(after_first.evictions(), 5);

    cache.evict_all();
    assert!(cache.is_empty());
    assert_eq!(cache.stats(), &after_first);
}

#[test]
fn summary_reports_truncated_hit_rate() {
    let mut cache = BoundedCache::new(8);
    cache.put(1u8, ());
    cache.get(&1);
    cache.get(&2);
    cache.get(&3);

    assert_eq!(
        cache.to_string(),
        "BoundedCache[maxSize=8,hits=1,misses=2,hitRate=33%]"
    );
}
