use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use orderedmap::OrderedMap;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("insert_fresh_keys", |b| {
        let mut map = OrderedMap::with_capacity(10_000, false);
        let mut counter = 0u64;
        b.iter(|| {
            map.insert(counter % 10_000, counter);
            counter += 1;
        });
    });

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    for access_order in [false, true] {
        let name = if access_order {
            "get_access_order"
        } else {
            "get_insertion_order"
        };

        group.bench_function(name, |b| {
            let mut map: OrderedMap<u64, u64> = OrderedMap::with_access_order(access_order);
            for i in 0..1000 {
                map.insert(i, i);
            }

            let mut counter = 0u64;
            b.iter(|| {
                black_box(map.get(&(counter % 1000)));
                counter += 1;
            });
        });
    }

    group.finish();
}

fn bench_pop_eldest(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_eldest");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("pop_then_reinsert", |b| {
        let mut map: OrderedMap<u64, u64> = (0..1000).map(|i| (i, i)).collect();
        b.iter(|| {
            if let Some((key, value)) = map.pop_eldest() {
                map.insert(key, black_box(value));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_get, bench_pop_eldest);
criterion_main!(benches);
