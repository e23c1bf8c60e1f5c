use boundedcache::{BoundedCache, CacheBuilder};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_cached", |b| {
        let mut cache = BoundedCache::new(1000);
        let data = vec![b'x'; 1024];

        // Pre-populate
        for id in 0..100u64 {
            cache.put(id, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let mut cache = BoundedCache::new(1000);
        let data = vec![b'x'; 1024];

        for id in 0..100u64 {
            cache.put(id, data.clone());
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 100)));
            } else {
                black_box(cache.put(counter, data.clone()));
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_weighted_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_weighted_full_cache", |b| {
        // 64 KiB budget, entries of 1..4 KiB
        let mut cache = CacheBuilder::new(64 * 1024)
            .size_of(|_: &u64, value: &Vec<u8>| value.len() as i64)
            .build();
        let blobs: Vec<Vec<u8>> = (1..=4).map(|kb| vec![0u8; kb * 1024]).collect();

        let mut counter = 0u64;
        b.iter(|| {
            let blob = &blobs[(counter % 4) as usize];
            black_box(cache.put(counter, blob.clone()));
            counter += 1;
        });
    });

    group.bench_function("miss_with_create", |b| {
        let mut cache = CacheBuilder::new(10)
            .create(|key: &u64| Some(key.wrapping_mul(31)))
            .build();

        let mut counter = 0u64;
        b.iter(|| {
            // Access pattern that guarantees misses
            black_box(cache.get(&counter));
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_get,
    bench_mixed_50_50,
    bench_weighted_eviction
);
criterion_main!(benches);
